pub mod calculator;
pub mod config;
pub mod demo;
pub mod logger;

#[cfg(test)]
mod calculator_tests;

pub use calculator::Calculator;
pub use config::{Mode, OperandSource};

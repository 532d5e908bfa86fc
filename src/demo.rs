use std::fmt;
use std::io::Write;

use anyhow::Result;

use crate::calculator::Calculator;
use crate::config::{Mode, OperandSource};

pub const EIGHT: i32 = 8;
pub const SEVEN: i32 = 7;

pub const BANNER: &str = "Hi, if you can read this, you successfully compiled the example app!";
pub const BANNER_FOLLOWUP: &str = "Let's check out the advanced calculator program.";

// 名前付き定数でも表示は数値そのもの
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    pub value: i32,
    pub name: Option<&'static str>,
}

impl Operand {
    pub const fn literal(value: i32) -> Self {
        Self { value, name: None }
    }

    pub const fn named(name: &'static str, value: i32) -> Self {
        Self {
            value,
            name: Some(name),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

pub fn operands(source: OperandSource) -> (Operand, Operand) {
    match source {
        OperandSource::Literal => (Operand::literal(8), Operand::literal(7)),
        OperandSource::Named => (
            Operand::named("EIGHT", EIGHT),
            Operand::named("SEVEN", SEVEN),
        ),
    }
}

pub fn render<W: Write>(mode: Mode, source: OperandSource, out: &mut W) -> Result<()> {
    match mode {
        Mode::Hello => {
            writeln!(out, "HELLO")?;
            return Ok(());
        }
        Mode::Bye => {
            writeln!(out, "BYE")?;
            return Ok(());
        }
        Mode::Default => {}
    }

    writeln!(out, "{}", BANNER)?;
    writeln!(out, "{}\n", BANNER_FOLLOWUP)?;

    let (lhs, rhs) = operands(source);
    tracing::debug!(?lhs, ?rhs, "computing demo results");

    writeln!(out, "{} + {} = {}", lhs, rhs, Calculator::add(lhs.value, rhs.value))?;
    writeln!(out, "{} * {} = {}", lhs, rhs, Calculator::mult(lhs.value, rhs.value))?;
    writeln!(out, "{} - {} = {}", lhs, rhs, Calculator::sub(lhs.value, rhs.value))?;

    Ok(())
}

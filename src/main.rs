use std::io::Write;

use anyhow::Result;
use calc_demo::{demo, logger, Mode, OperandSource};

fn write_output(mode: Mode, source: OperandSource) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo::render(mode, source, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    logger::init_logger();

    let mode = Mode::from_build();
    let source = OperandSource::from_build();
    tracing::debug!(?mode, ?source, "starting calc-demo");

    // stdout が閉じられていても終了コードは常に 0
    if let Err(e) = write_output(mode, source) {
        tracing::warn!("failed to write output: {:#}", e);
    }

    Ok(())
}

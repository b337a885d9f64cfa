use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use crate::ui::display::{self, OutputFormat};

#[derive(Args)]
pub struct LogArgs {
    /// Text to print
    pub message: String,

    /// Log type: info, success, warning or error
    #[arg(long = "type", short = 't', default_value = "info")]
    pub category: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Ansi, env = "STYLOG_FORMAT")]
    pub format: OutputFormat,
}

pub fn run(args: LogArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    display::write_styled(&mut out, &args.message, &args.category, args.format)?;
    out.flush()?;
    Ok(())
}

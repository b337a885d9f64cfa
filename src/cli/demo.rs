use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use crate::style::Category;
use crate::ui::display::{self, OutputFormat};

const SAMPLE: &str = "Text Message";

#[derive(Args)]
pub struct DemoArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Ansi, env = "STYLOG_FORMAT")]
    pub format: OutputFormat,
}

pub fn run(args: DemoArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for category in Category::ALL {
        display::write_styled(&mut out, SAMPLE, category.tag(), args.format)?;
    }
    out.flush()?;
    Ok(())
}

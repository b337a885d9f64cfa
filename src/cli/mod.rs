pub mod demo;
pub mod log;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "stylog", about = "Category-colored console messages for developers")]
#[command(version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Show debug output on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Only report errors on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// When to emit terminal colors
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto, env = "STYLOG_COLOR")]
    pub color: ColorChoice,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print a message styled for a log type
    Log(log::LogArgs),

    /// Print a sample message for every log type
    Demo(demo::DemoArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Apply the choice to `console`'s global color switch.
    pub fn apply(self) {
        match self {
            // console already honors NO_COLOR, CLICOLOR_FORCE and TTY detection
            ColorChoice::Auto => {}
            ColorChoice::Always => console::set_colors_enabled(true),
            ColorChoice::Never => console::set_colors_enabled(false),
        }
    }
}

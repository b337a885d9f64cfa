use anyhow::Result;
use clap::Parser;

use stylog::cli;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else if args.quiet {
        tracing::Level::ERROR
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    args.color.apply();

    match args.command {
        cli::Command::Log(args) => cli::log::run(args),
        cli::Command::Demo(args) => cli::demo::run(args),
        cli::Command::Completions { shell } => {
            let mut cmd = <cli::Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "stylog", &mut std::io::stdout());
            Ok(())
        }
    }
}

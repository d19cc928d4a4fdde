mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, args, diff, scan};
use terminal::{logging, print};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging()?;

    let cfg = commands.config();

    let result = match &commands.command {
        Commands::Args(scan_args) => args::args(scan_args, &cfg),
        Commands::Scan(scan_args) => {
            print::header("starting scanner", cfg.quiet);
            scan::scan(scan_args, &cfg).await
        }
        Commands::Diff { scan, interval } => {
            print::header("starting diff", cfg.quiet);
            diff::diff(scan, *interval, &cfg).await
        }
    };

    print::end_of_program();
    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            error!("{err:#}");
            Ok(ExitCode::FAILURE)
        }
    }
}

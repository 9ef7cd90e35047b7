mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, list, wake};
use terminal::logging;
use tracing::error;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    match run(commands) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(commands: CommandLine) -> anyhow::Result<()> {
    if commands.list_interfaces {
        list::list();
        return Ok(());
    }

    match commands.target.clone() {
        Some(target) => wake::wake(target, &commands),
        None => anyhow::bail!("no target MAC address given"),
    }
}

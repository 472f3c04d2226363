use anyhow::Result;

mod args;
mod exit_status;

pub use args::{Arguments, Command, CommonArgs, ExtractArgs};
pub use exit_status::ExitStatus;

use crate::commands;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Extract(cmd)) => commands::extract::run(cmd),
        Some(Command::Init) => commands::init::run(),
        None => Ok(ExitStatus::Success),
    }
}

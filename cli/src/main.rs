mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, FAILURE_EXIT_CODE, classify};
use sortr_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose, commands.quiet)?;

    let cfg = Config {
        explain: commands.explain,
        quiet: commands.quiet,
    };

    match classify::classify(&commands.values, &cfg) {
        Ok(category) => {
            println!("{category}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ classify::ArgsError::WrongCount(_)) => {
            print::usage(&err);
            Ok(ExitCode::from(FAILURE_EXIT_CODE))
        }
        Err(err) => {
            print::error(&err);
            Ok(ExitCode::from(FAILURE_EXIT_CODE))
        }
    }
}

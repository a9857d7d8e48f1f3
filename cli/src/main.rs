mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, menu, ritual};
use lazarus_common::config::Session;
use lazarus_core::rituals::Rituals;
use terminal::{logging, print};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let config = commands.config();
    let mut session = Session::new(commands.log, &config.log_dir);
    let rituals = Rituals::for_host(config);

    match commands.command {
        None => {
            menu::run(&rituals, &mut session).await?;
            Ok(ExitCode::SUCCESS)
        }
        Some(command) => {
            print::banner();
            print::status_line(&rituals, &session);
            let outcome = ritual::perform(&rituals, command.ritual(), &session).await;
            print::end_of_program();
            match outcome.is_success() {
                true => Ok(ExitCode::SUCCESS),
                false => Ok(ExitCode::FAILURE),
            }
        }
    }
}

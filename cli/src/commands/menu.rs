use colored::*;
use console::Term;
use lazarus_common::config::Session;
use lazarus_core::rituals::{Ritual, Rituals};
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};

use crate::commands::ritual;
use crate::terminal::{colors, print};

const ENTRIES: [(MenuChoice, &str); 6] = [
    (MenuChoice::Ritual(Ritual::DhcpResurrection), "Auto-DHCP Resurrector"),
    (MenuChoice::Ritual(Ritual::ArpGhostbuster), "ARP Ghostbuster"),
    (MenuChoice::Ritual(Ritual::CableCheck), "Cable Poltergeist Detector"),
    (MenuChoice::Ritual(Ritual::PacketCapture), "Offline Packet Sniffer"),
    (MenuChoice::ToggleLogging, "Toggle Séance Mode (Logging)"),
    (MenuChoice::Exit, "Exit"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Ritual(Ritual),
    ToggleLogging,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        let index: usize = input.trim().parse().ok()?;
        ENTRIES
            .get(index.checked_sub(1)?)
            .map(|(choice, _)| *choice)
    }
}

/// The interactive loop. Returns when the user picks Exit or stdin closes.
pub async fn run(rituals: &Rituals, session: &mut Session) -> anyhow::Result<()> {
    let term = Term::stdout();
    let mut stdin = BufReader::new(tokio::io::stdin());

    loop {
        term.clear_screen()?;
        print::banner();
        print::host_line();
        print::status_line(rituals, session);
        print_entries();

        let Some(input) = prompt(&term, &mut stdin, "\nChoose your ritual (1-6): ").await? else {
            break;
        };

        match MenuChoice::parse(&input) {
            Some(MenuChoice::Ritual(chosen)) => {
                ritual::perform(rituals, chosen, session).await;
            }
            Some(MenuChoice::ToggleLogging) => {
                let state: &str = match session.toggle_logging() {
                    true => "enabled",
                    false => "disabled",
                };
                print::print(&format!("{}", format!("Séance Mode {state}").purple().bold()));
            }
            Some(MenuChoice::Exit) => break,
            None => print::print_status(format!(
                "'{}' is not a ritual, pick a number from 1 to {}",
                input.trim(),
                ENTRIES.len()
            )),
        }

        if prompt(&term, &mut stdin, "\nPress Enter to continue...").await?.is_none() {
            break;
        }
    }

    print::farewell();
    Ok(())
}

fn print_entries() {
    for (idx, (_, label)) in ENTRIES.iter().enumerate() {
        let number: String = format!("[{}]", (idx + 1).to_string().color(colors::ACCENT));
        print::print(&format!(
            "{} {}",
            number.color(colors::SEPARATOR),
            label.color(colors::PRIMARY)
        ));
    }
}

/// Reads one line. `None` once stdin is closed.
async fn prompt(
    term: &Term,
    stdin: &mut BufReader<Stdin>,
    question: &str,
) -> anyhow::Result<Option<String>> {
    term.write_str(question)?;
    term.flush()?;

    let mut line = String::new();
    match stdin.read_line(&mut line).await? {
        0 => Ok(None),
        _ => Ok(Some(line)),
    }
}

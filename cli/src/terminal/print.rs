use std::fmt::Display;

use crate::terminal::{banner, colors};
use colored::*;
use lazarus_common::config::Session;
use lazarus_common::diagnostic::{DiagnosticOutcome, OutcomeStatus};
use lazarus_core::rituals::Rituals;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 72;

/// Tracing target whose events the formatter writes out verbatim.
pub const RAW_TARGET: &str = "lazarus::print";

pub fn print(msg: &str) {
    info!(target: RAW_TARGET, raw_msg = msg);
}

pub fn banner() {
    let text_content: String = format!("⟦ LAN LAZARUS v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();
    print(&format!("{}{}{}", sep, text, sep));
    banner::show();
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

/// One line describing the machine, or nothing if the host refuses to say.
pub fn host_line() {
    let Ok(hostname) = sys_info::hostname() else {
        return;
    };
    let os: String = match (sys_info::os_type(), sys_info::os_release()) {
        (Ok(name), Ok(release)) => format!("{name} {release}"),
        (Ok(name), Err(_)) => name,
        _ => String::from("unknown OS"),
    };
    aligned_line("Host", format!("{hostname} ({os})"));
}

pub fn status_line(rituals: &Rituals, session: &Session) {
    let privileges: ColoredString = match rituals.is_elevated() {
        true => "elevated".green(),
        false => "unprivileged, rituals will refuse to run".yellow(),
    };
    let logging: ColoredString = match session.logging {
        true => format!("on, {}", session.log_path.display()).purple(),
        false => "off".normal(),
    };
    aligned_line("Toolset", rituals.family().to_string().color(colors::ACCENT));
    aligned_line("Privileges", privileges);
    aligned_line("Séance", logging);
}

pub fn aligned_line<V: Display>(key: &str, value: V) {
    const KEY_WIDTH: usize = 10;
    let dots: String = ".".repeat(KEY_WIDTH.saturating_sub(UnicodeWidthStr::width(key)));
    print_status(format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    ));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

/// Renders an outcome as a verdict line followed by its details as a tree.
pub fn outcome(outcome: &DiagnosticOutcome) {
    let (symbol, color) = match outcome.status() {
        OutcomeStatus::Success => ("✔", colors::SUCCESS),
        OutcomeStatus::Failure => ("✘", colors::FAILURE),
        OutcomeStatus::PermissionDenied => ("⚠", colors::DENIED),
    };
    let stamp: String = outcome.timestamp().format("%H:%M:%S").to_string();

    print("");
    print(&format!(
        "{} {} {}",
        symbol.color(color).bold(),
        outcome.message().color(color).bold(),
        format!("[{stamp}]").color(colors::SEPARATOR)
    ));
    as_tree_one_level(outcome.details());
}

pub fn as_tree_one_level(lines: &[String]) {
    for (i, line) in lines.iter().enumerate() {
        let last: bool = i + 1 == lines.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        print(&format!(" {} {}", branch, line.color(colors::TEXT_DEFAULT)));
    }
}

pub fn centerln(msg: &str) {
    let space: String = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}

pub fn farewell() {
    print("");
    print(&format!(
        "{}",
        "Exiting LAN Lazarus... May your network rest in peace ⚰️"
            .bright_green()
            .bold()
    ));
}

pub fn end_of_program() {
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}

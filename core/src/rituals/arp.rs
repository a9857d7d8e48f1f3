use lazarus_common::diagnostic::{DiagnosticOutcome, OutcomeStatus};
use lazarus_common::network::arp::ConflictRecord;

use super::{Ritual, Rituals};
use crate::journal::Journal;
use crate::parser::{detect_conflicts, parse_arp_table};

impl Rituals {
    /// Reads the ARP cache once and reports every hardware address seen
    /// against more than one IP.
    pub(super) async fn bust_arp_ghosts(&self, journal: &Journal<'_>) -> DiagnosticOutcome {
        journal.info("Starting ARP conflict detection");
        let name: &str = Ritual::ArpGhostbuster.name();

        let output = match self.adapter.read_arp_table().await {
            Ok(output) => output,
            Err(err) => {
                journal.error(format!("ARP ghost busting error: {err}"));
                return DiagnosticOutcome::failure(name, format!("Could not read the ARP table: {err}"));
            }
        };
        if let Some(err) = output.failure() {
            journal.warn(format!("ARP table may be incomplete: {err}"));
        }

        let entries = parse_arp_table(&output.stdout, self.adapter.family());
        let conflicts: Vec<ConflictRecord> = detect_conflicts(&entries);

        if conflicts.is_empty() {
            journal.info("No IP conflicts found");
            return DiagnosticOutcome::new(
                name,
                OutcomeStatus::Success,
                "No IP conflicts detected",
                vec![format!("{} ARP entries inspected", entries.len())],
            );
        }

        let details: Vec<String> = conflicts.iter().map(ToString::to_string).collect();
        for conflict in &details {
            journal.warn(format!("IP conflict: {conflict}"));
        }
        let message: String = match conflicts.len() {
            1 => format!("IP conflict detected! {}", details[0]),
            n => format!("{n} IP conflicts detected! {}", details.join("; ")),
        };
        DiagnosticOutcome::new(name, OutcomeStatus::Failure, message, details)
    }
}

use lazarus_common::diagnostic::{DiagnosticOutcome, OutcomeStatus};
use lazarus_common::error::RitualError;

use super::{Ritual, Rituals};
use crate::journal::Journal;
use crate::parser::parse_lease_status;
use crate::platform::StepReport;
use crate::runner::{CommandError, CommandOutput};

impl Rituals {
    /// Restarts the lease service, cycles every lease and checks that a
    /// dynamic address came back.
    pub(super) async fn resurrect_dhcp(&self, journal: &Journal<'_>) -> DiagnosticOutcome {
        journal.info("Starting DHCP resurrection");

        let interfaces = self.enumerate_interfaces(journal).await;
        let reports: Vec<StepReport> = self
            .adapter
            .cycle_dhcp_lease(&interfaces, self.config.lease_pause)
            .await;

        let total: usize = reports.len();
        let mut failed: usize = 0;
        let mut details: Vec<String> = Vec::with_capacity(total + 1);
        for report in reports {
            match step_error(report.result) {
                None => details.push(format!("{}: ok", report.label)),
                Some(err) => {
                    failed += 1;
                    journal.warn(format!("{} ({}) failed: {err}", report.label, report.command));
                    details.push(format!("{}: {err}", report.label));
                }
            }
        }

        tokio::time::sleep(self.config.settle_delay).await;

        let leased: bool = match self.adapter.query_addresses().await {
            Ok(output) => parse_lease_status(&output.stdout),
            Err(err) => {
                journal.error(format!("Could not read address state: {err}"));
                false
            }
        };

        let name: &str = Ritual::DhcpResurrection.name();
        let summary: String = if failed == 0 {
            String::new()
        } else {
            format!(" ({failed} of {total} steps failed)")
        };

        if leased {
            journal.info("DHCP resurrection successful");
            details.push("Address state: dynamic lease present".to_string());
            DiagnosticOutcome::new(
                name,
                OutcomeStatus::Success,
                format!("DHCP service successfully resurrected!{summary}"),
                details,
            )
        } else {
            journal.error("DHCP resurrection failed");
            details.push("Address state: no dynamic lease".to_string());
            DiagnosticOutcome::new(
                name,
                OutcomeStatus::Failure,
                format!("DHCP resurrection failed{summary}"),
                details,
            )
        }
    }
}

fn step_error(result: Result<CommandOutput, CommandError>) -> Option<RitualError> {
    match result {
        Ok(output) => output.failure(),
        Err(err) => Some(err.into()),
    }
}

use lazarus_common::diagnostic::{DiagnosticOutcome, OutcomeStatus};

use super::{Ritual, Rituals};
use crate::capture::{CaptureProgress, CaptureSupervisor};
use crate::journal::Journal;

impl Rituals {
    pub(super) async fn sniff_packets(
        &self,
        journal: &Journal<'_>,
        progress: &dyn CaptureProgress,
    ) -> DiagnosticOutcome {
        let name: &str = Ritual::PacketCapture.name();
        let path = self.capture_path();
        let duration: u64 = self.config.capture_seconds;
        journal.info(format!(
            "Starting packet capture to {} for {duration}s",
            path.display()
        ));

        let supervisor = CaptureSupervisor::new(&self.adapter, self.config.capture_tick, journal);
        match supervisor.run(&path, duration, progress).await {
            Ok(session) => DiagnosticOutcome::new(
                name,
                OutcomeStatus::Success,
                format!(
                    "Packet capture complete! Saved to {} (Size: {:.2} KB)",
                    path.display(),
                    session.size_kib().unwrap_or_default()
                ),
                vec![format!(
                    "Captured for {}/{} seconds",
                    session.elapsed_seconds, session.requested_duration_seconds
                )],
            ),
            Err(failure) => DiagnosticOutcome::new(
                name,
                OutcomeStatus::Failure,
                format!("Packet capture failed: {}", failure.error),
                vec![format!(
                    "Captured for {}/{} seconds",
                    failure.session.elapsed_seconds, failure.session.requested_duration_seconds
                )],
            ),
        }
    }
}

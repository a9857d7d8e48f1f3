use lazarus_common::config::Session;
use lazarus_common::diagnostic::DiagnosticOutcome;
use lazarus_core::capture::NoProgress;
use lazarus_core::rituals::{Ritual, Rituals};

use crate::terminal::{print, progress::CaptureBar};

/// Runs one ritual under a header and renders its outcome.
pub async fn perform(rituals: &Rituals, ritual: Ritual, session: &Session) -> DiagnosticOutcome {
    print::header(ritual.name());

    let outcome: DiagnosticOutcome = match ritual {
        Ritual::PacketCapture => {
            print::print_status(format!(
                "Capturing to {} for {}s",
                rituals.capture_path().display(),
                rituals.config().capture_seconds
            ));
            let bar = CaptureBar::new();
            rituals.perform(ritual, session, &bar).await
        }
        _ => rituals.perform(ritual, session, &NoProgress).await,
    };

    print::outcome(&outcome);
    outcome
}

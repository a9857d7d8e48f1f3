use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Everything that can go wrong inside a ritual.
///
/// Only [`RitualError::PermissionDenied`] aborts a ritual. The other variants are
/// recorded at the step that produced them and the ritual moves on.
#[derive(Error, Debug)]
pub enum RitualError {
    #[error("requires administrative privileges")]
    PermissionDenied,

    #[error("failed to launch '{program}': {source}")]
    CommandExecution {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with status {code}")]
    NonZeroExit { program: String, code: i32 },

    #[error("'{program}' was terminated by a signal")]
    Signalled { program: String },

    #[error("'{program}' did not report '{expected}'")]
    Unconfirmed {
        program: String,
        expected: &'static str,
    },

    #[error("expected artifact {0:?} was not created")]
    ArtifactMissing(PathBuf),

    #[error("'{program}' did not finish within {after:?}")]
    Timeout { program: String, after: Duration },

    #[error("could not remove previous capture {path:?}: {source}")]
    StaleArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

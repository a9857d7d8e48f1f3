use std::fmt;

use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    Success,
    Failure,
    /// The ritual needs an elevated shell and did not run any step.
    PermissionDenied,
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeStatus::Success => write!(f, "success"),
            OutcomeStatus::Failure => write!(f, "failure"),
            OutcomeStatus::PermissionDenied => write!(f, "permission denied"),
        }
    }
}

/// The immutable verdict a ritual hands back to its caller.
#[derive(Debug, Clone)]
pub struct DiagnosticOutcome {
    ritual_name: String,
    status: OutcomeStatus,
    message: String,
    details: Vec<String>,
    timestamp: DateTime<Local>,
}

impl DiagnosticOutcome {
    pub fn new(
        ritual_name: impl Into<String>,
        status: OutcomeStatus,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            ritual_name: ritual_name.into(),
            status,
            message: message.into(),
            details,
            timestamp: Local::now(),
        }
    }

    pub fn failure(ritual_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ritual_name, OutcomeStatus::Failure, message, Vec::new())
    }

    pub fn permission_denied(ritual_name: impl Into<String>) -> Self {
        Self::new(
            ritual_name,
            OutcomeStatus::PermissionDenied,
            "This feature requires administrative privileges!",
            Vec::new(),
        )
    }

    pub fn ritual_name(&self) -> &str {
        &self.ritual_name
    }

    pub fn status(&self) -> OutcomeStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }
}

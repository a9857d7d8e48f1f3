use std::path::PathBuf;

/// Lifecycle of a timed packet capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    NotStarted,
    Running,
    Stopped,
    /// The artifact exists on disk and its size was recorded.
    Verified,
    Failed,
}

#[derive(Debug, Clone)]
pub struct CaptureSession {
    pub file_path: PathBuf,
    pub requested_duration_seconds: u64,
    pub elapsed_seconds: u64,
    pub size_bytes: Option<u64>,
    pub state: CaptureState,
}

impl CaptureSession {
    pub fn new(file_path: impl Into<PathBuf>, requested_duration_seconds: u64) -> Self {
        Self {
            file_path: file_path.into(),
            requested_duration_seconds,
            elapsed_seconds: 0,
            size_bytes: None,
            state: CaptureState::NotStarted,
        }
    }

    pub fn size_kib(&self) -> Option<f64> {
        self.size_bytes.map(|bytes| bytes as f64 / 1024.0)
    }
}

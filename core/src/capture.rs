//! Lifecycle of a timed packet capture.
//!
//! The supervisor walks a [`CaptureSession`] through
//! `NotStarted -> Running -> Stopped -> Verified | Failed`: it clears any stale
//! artifact, starts the family's capture tool, ticks once per elapsed second,
//! stops the tool and finally checks that the artifact landed on disk.

use std::io;
use std::path::Path;
use std::time::Duration;

use lazarus_common::capture::{CaptureSession, CaptureState};
use lazarus_common::error::RitualError;
use thiserror::Error;

use crate::journal::Journal;
use crate::platform::{CaptureHandle, PlatformAdapter};
use crate::runner::BackgroundProcess;

/// Receives the capture's progress. Every method defaults to doing nothing.
pub trait CaptureProgress {
    fn started(&self, _total_secs: u64) {}
    fn tick(&self, _elapsed_secs: u64, _total_secs: u64) {}
    fn finished(&self) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl CaptureProgress for NoProgress {}

/// A capture that ended in [`CaptureState::Failed`], with the step that failed it.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct CaptureFailure {
    pub session: CaptureSession,
    #[source]
    pub error: RitualError,
}

impl CaptureFailure {
    fn new(mut session: CaptureSession, error: RitualError) -> Self {
        session.state = CaptureState::Failed;
        Self { session, error }
    }
}

pub struct CaptureSupervisor<'a> {
    adapter: &'a PlatformAdapter,
    tick: Duration,
    journal: &'a Journal<'a>,
}

impl<'a> CaptureSupervisor<'a> {
    pub fn new(adapter: &'a PlatformAdapter, tick: Duration, journal: &'a Journal<'a>) -> Self {
        Self {
            adapter,
            tick,
            journal,
        }
    }

    pub async fn run(
        &self,
        path: &Path,
        duration_secs: u64,
        progress: &dyn CaptureProgress,
    ) -> Result<CaptureSession, CaptureFailure> {
        let mut session = CaptureSession::new(path, duration_secs);

        if let Err(error) = self.remove_stale(path).await {
            return Err(CaptureFailure::new(session, error));
        }

        let mut background: Option<Box<dyn BackgroundProcess>> =
            match self.adapter.start_capture(path, duration_secs).await {
                Ok((CaptureHandle::Background(process), _)) => Some(process),
                Ok((CaptureHandle::Foreground(output), confirmation)) => {
                    let expected: &'static str = confirmation.unwrap_or("started");
                    if !output.reports(expected) {
                        self.journal.error("Failed to start packet capture!");
                        let error = output.failure().unwrap_or(RitualError::Unconfirmed {
                            program: output.program.clone(),
                            expected,
                        });
                        return Err(CaptureFailure::new(session, error));
                    }
                    None
                }
                Err(err) => {
                    self.journal.error(format!("Failed to start packet capture: {err}"));
                    return Err(CaptureFailure::new(session, err.into()));
                }
            };

        session.state = CaptureState::Running;
        self.tick_until_done(&mut session, background.as_deref_mut(), progress)
            .await;

        self.stop(background).await;
        session.state = CaptureState::Stopped;

        match tokio::fs::metadata(path).await {
            Ok(metadata) => {
                session.size_bytes = Some(metadata.len());
                session.state = CaptureState::Verified;
                self.journal.info(format!(
                    "Packet capture completed and saved to {} (Size: {} bytes)",
                    path.display(),
                    metadata.len()
                ));
                Ok(session)
            }
            Err(_) => {
                self.journal.error("Capture file was not created!");
                Err(CaptureFailure::new(
                    session,
                    RitualError::ArtifactMissing(path.to_path_buf()),
                ))
            }
        }
    }

    async fn remove_stale(&self, path: &Path) -> Result<(), RitualError> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => {
                self.journal
                    .info(format!("Removed previous capture file: {}", path.display()));
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => {
                self.journal.error(format!(
                    "Could not remove previous capture file {}: {source}",
                    path.display()
                ));
                Err(RitualError::StaleArtifact {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    async fn tick_until_done(
        &self,
        session: &mut CaptureSession,
        mut background: Option<&mut (dyn BackgroundProcess + 'static)>,
        progress: &dyn CaptureProgress,
    ) {
        let total: u64 = session.requested_duration_seconds;
        progress.started(total);

        for second in 1..=total {
            tokio::time::sleep(self.tick).await;
            session.elapsed_seconds = second;
            progress.tick(second, total);

            if let Some(process) = background.as_deref_mut() {
                match process.has_exited() {
                    Ok(false) => {}
                    Ok(true) => {
                        if second < total {
                            self.journal.warn(format!(
                                "Capture tool exited after {second} of {total} seconds"
                            ));
                            break;
                        }
                    }
                    Err(err) => self.journal.warn(format!("Could not poll capture tool: {err}")),
                }
            }
        }

        progress.finished();
    }

    async fn stop(&self, background: Option<Box<dyn BackgroundProcess>>) {
        match background {
            Some(mut process) => {
                if matches!(process.has_exited(), Ok(true)) {
                    return;
                }
                if let Err(err) = process.terminate().await {
                    self.journal.warn(format!("Could not stop capture tool: {err}"));
                }
            }
            None => match self.adapter.stop_capture().await {
                Some((Ok(output), confirmation)) if !output.reports(confirmation) => {
                    self.journal
                        .warn("Packet capture may not have stopped properly");
                }
                Some((Err(err), _)) => {
                    self.journal
                        .warn(format!("Packet capture may not have stopped properly: {err}"));
                }
                _ => {}
            },
        }
    }
}

use std::sync::Arc;

use lazarus_common::config::Session;
use lazarus_common::platform::OsFamily;
use lazarus_core::capture::NoProgress;
use lazarus_core::rituals::Ritual;
use lazarus_core::testing::ScriptedRunner;
use lazarus_integration_tests::{ARP_N_SHARED_MAC, rituals, unprivileged};

#[tokio::test]
async fn seance_mode_persists_ritual_events() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let session = Session::new(true, dir.path());
    let runner = Arc::new(ScriptedRunner::new().respond("arp -n", ARP_N_SHARED_MAC));

    rituals(OsFamily::Posix, runner)
        .perform(Ritual::ArpGhostbuster, &session, &NoProgress)
        .await;

    let log = std::fs::read_to_string(&session.log_path)?;
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 2, "{log}");
    assert!(lines[0].ends_with(" - INFO - Starting ARP conflict detection"));
    assert!(lines[1].contains(" - WARN - IP conflict: MAC f4:92:bf:7a:01:c2"));
    Ok(())
}

#[tokio::test]
async fn nothing_is_written_outside_seance_mode() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let session = Session::new(false, dir.path());
    let runner = Arc::new(ScriptedRunner::new().respond("arp -n", ARP_N_SHARED_MAC));

    rituals(OsFamily::Posix, runner)
        .perform(Ritual::ArpGhostbuster, &session, &NoProgress)
        .await;

    assert!(!session.log_path.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    Ok(())
}

#[tokio::test]
async fn refusals_are_logged_too() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let session = Session::new(true, dir.path());

    unprivileged(OsFamily::Posix, Arc::new(ScriptedRunner::new()))
        .perform(Ritual::CableCheck, &session, &NoProgress)
        .await;

    let log = std::fs::read_to_string(&session.log_path)?;
    assert!(log.contains(" - ERROR - Cable Poltergeist Detector requires administrative privileges"));
    Ok(())
}

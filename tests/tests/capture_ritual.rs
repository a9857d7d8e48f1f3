use std::sync::Arc;

use lazarus_common::config::Config;
use lazarus_common::diagnostic::OutcomeStatus;
use lazarus_common::platform::OsFamily;
use lazarus_core::capture::NoProgress;
use lazarus_core::rituals::Ritual;
use lazarus_core::testing::ScriptedRunner;
use lazarus_integration_tests::{quiet_session, rituals_with};

fn capture_config(path: &std::path::Path, seconds: u64) -> Config {
    Config {
        capture_seconds: seconds,
        capture_path: Some(path.to_path_buf()),
        ..Config::instant()
    }
}

#[tokio::test]
async fn previous_capture_is_replaced() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("lan_lazarus_capture.pcap");
    std::fs::write(&path, vec![0u8; 10_000])?;

    let line = format!("tcpdump -U -w {} -G 3 -W 1", path.display());
    let runner = Arc::new(ScriptedRunner::new().produces(&line, &path, &[1u8; 512]));

    let outcome = rituals_with(OsFamily::Posix, runner.clone(), capture_config(&path, 3))
        .perform(Ritual::PacketCapture, &quiet_session(), &NoProgress)
        .await;

    assert!(outcome.is_success(), "{}", outcome.message());
    assert!(outcome.message().ends_with("(Size: 0.50 KB)"));
    assert_eq!(runner.preexisting_artifacts(), vec![false]);
    assert_eq!(runner.terminations(), 1);
    Ok(())
}

#[tokio::test]
async fn tool_that_writes_nothing_fails_the_capture() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("lan_lazarus_capture.pcap");
    let runner = Arc::new(ScriptedRunner::new());

    let outcome = rituals_with(OsFamily::Posix, runner, capture_config(&path, 2))
        .perform(Ritual::PacketCapture, &quiet_session(), &NoProgress)
        .await;

    assert_eq!(outcome.status(), OutcomeStatus::Failure);
    assert!(outcome.message().contains("was not created"), "{}", outcome.message());
    assert_eq!(outcome.details(), ["Captured for 2/2 seconds"]);
    Ok(())
}

#[tokio::test]
async fn missing_tcpdump_fails_before_ticking() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("lan_lazarus_capture.pcap");
    let line = format!("tcpdump -U -w {} -G 5 -W 1", path.display());
    let runner = Arc::new(ScriptedRunner::new().fail_to_launch(&line));

    let outcome = rituals_with(OsFamily::Posix, runner, capture_config(&path, 5))
        .perform(Ritual::PacketCapture, &quiet_session(), &NoProgress)
        .await;

    assert_eq!(outcome.status(), OutcomeStatus::Failure);
    assert!(outcome.message().contains("failed to launch 'tcpdump'"), "{}", outcome.message());
    assert_eq!(outcome.details(), ["Captured for 0/5 seconds"]);
    Ok(())
}

#[tokio::test]
async fn windows_trace_is_started_and_stopped() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("lan_lazarus_capture.etl");
    let start = format!("netsh trace start capture=yes tracefile={}", path.display());
    let runner = Arc::new(
        ScriptedRunner::new()
            .respond(&start, "Trace configuration:\nStatus:             Running\nTrace File:         lan_lazarus_capture.etl\nTracing session was started.")
            .produces("netsh trace stop", &path, &[7u8; 4096])
            .respond("netsh trace stop", "Correlating traces ... done\nMerging traces ... done\nTracing session was successfully stopped."),
    );

    let outcome = rituals_with(OsFamily::Windows, runner.clone(), capture_config(&path, 2))
        .perform(Ritual::PacketCapture, &quiet_session(), &NoProgress)
        .await;

    assert!(outcome.is_success(), "{}", outcome.message());
    assert!(outcome.message().ends_with("(Size: 4.00 KB)"));
    assert_eq!(runner.invocations(), vec![start, "netsh trace stop".to_string()]);
    Ok(())
}

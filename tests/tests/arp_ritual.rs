use std::sync::Arc;

use lazarus_common::diagnostic::OutcomeStatus;
use lazarus_common::platform::OsFamily;
use lazarus_core::capture::NoProgress;
use lazarus_core::rituals::Ritual;
use lazarus_core::testing::ScriptedRunner;
use lazarus_integration_tests::{
    ARP_A, ARP_N_SHARED_MAC, ARP_N_UNIQUE, quiet_session, rituals,
};

#[tokio::test]
async fn shared_mac_is_a_conflict_naming_both_addresses() {
    let runner = Arc::new(ScriptedRunner::new().respond("arp -n", ARP_N_SHARED_MAC));

    let outcome = rituals(OsFamily::Posix, runner.clone())
        .perform(Ritual::ArpGhostbuster, &quiet_session(), &NoProgress)
        .await;

    assert_eq!(outcome.status(), OutcomeStatus::Failure);
    assert!(outcome.message().contains("192.168.1.99"), "{}", outcome.message());
    assert!(outcome.message().contains("192.168.1.1"), "{}", outcome.message());
    assert_eq!(
        outcome.details(),
        ["MAC f4:92:bf:7a:01:c2 is used by multiple IPs: 192.168.1.99, 192.168.1.1"]
    );
    assert_eq!(runner.invocations(), vec!["arp -n"]);
}

#[tokio::test]
async fn unique_macs_are_a_clean_bill() {
    let runner = Arc::new(ScriptedRunner::new().respond("arp -n", ARP_N_UNIQUE));

    let outcome = rituals(OsFamily::Posix, runner)
        .perform(Ritual::ArpGhostbuster, &quiet_session(), &NoProgress)
        .await;

    assert_eq!(outcome.status(), OutcomeStatus::Success);
    assert_eq!(outcome.message(), "No IP conflicts detected");
    assert_eq!(outcome.details(), ["2 ARP entries inspected"]);
}

#[tokio::test]
async fn windows_table_reads_the_second_column() {
    let runner = Arc::new(ScriptedRunner::new().respond("arp -a", ARP_A));

    let outcome = rituals(OsFamily::Windows, runner)
        .perform(Ritual::ArpGhostbuster, &quiet_session(), &NoProgress)
        .await;

    assert!(outcome.is_success());
    assert_eq!(outcome.details(), ["2 ARP entries inspected"]);
}

#[tokio::test]
async fn nonzero_exit_still_inspects_the_output() {
    let runner = Arc::new(ScriptedRunner::new().exit_code("arp -n", ARP_N_SHARED_MAC, 1));

    let outcome = rituals(OsFamily::Posix, runner)
        .perform(Ritual::ArpGhostbuster, &quiet_session(), &NoProgress)
        .await;

    assert_eq!(outcome.status(), OutcomeStatus::Failure);
    assert_eq!(outcome.details().len(), 1);
}

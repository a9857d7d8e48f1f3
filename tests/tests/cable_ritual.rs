use std::sync::Arc;

use lazarus_common::diagnostic::OutcomeStatus;
use lazarus_common::platform::OsFamily;
use lazarus_core::capture::NoProgress;
use lazarus_core::rituals::Ritual;
use lazarus_core::testing::ScriptedRunner;
use lazarus_integration_tests::{
    ENP9S0_UP, IP_LINK_SHOW, NETSH_SHOW_INTERFACE, WLAN0_DOWN, quiet_session, rituals,
};

#[tokio::test]
async fn up_and_reachable_interface_passes() {
    let runner = Arc::new(
        ScriptedRunner::new()
            .respond("ip link show", IP_LINK_SHOW)
            .respond("ip link show enp9s0", ENP9S0_UP)
            .respond("ip link show wlan0", WLAN0_DOWN),
    );

    let outcome = rituals(OsFamily::Posix, runner.clone())
        .perform(Ritual::CableCheck, &quiet_session(), &NoProgress)
        .await;

    assert_eq!(outcome.status(), OutcomeStatus::Success);
    assert_eq!(outcome.message(), "1 of 2 interfaces have connectivity");
    assert_eq!(
        outcome.details(),
        ["enp9s0: up, has connectivity", "wlan0: down"]
    );
    assert_eq!(
        runner.invocations(),
        vec![
            "ip link show",
            "ip link show enp9s0",
            "ping -c 1 -W 1 8.8.8.8",
            "ip link show wlan0",
        ]
    );
}

#[tokio::test]
async fn timed_out_ping_is_no_connectivity() {
    let runner = Arc::new(
        ScriptedRunner::new()
            .respond("ip link show", IP_LINK_SHOW)
            .respond("ip link show enp9s0", ENP9S0_UP)
            .respond_with(
                "ping -c 1 -W 1 8.8.8.8",
                lazarus_core::runner::CommandOutput::timed_out("ping", std::time::Duration::from_secs(3)),
            ),
    );

    let outcome = rituals(OsFamily::Posix, runner)
        .perform(Ritual::CableCheck, &quiet_session(), &NoProgress)
        .await;

    assert_eq!(outcome.status(), OutcomeStatus::Failure);
    assert_eq!(outcome.details()[0], "enp9s0: up, no connectivity");
}

#[tokio::test]
async fn windows_names_with_spaces_are_queried_whole() {
    let runner = Arc::new(
        ScriptedRunner::new()
            .respond("netsh interface show interface", NETSH_SHOW_INTERFACE)
            .respond(
                "netsh interface show interface Ethernet 2",
                "Ethernet 2\n   Type:                 Dedicated\n   Administrative state: Enabled\n   Connect state:        Connected\n",
            )
            .respond(
                "netsh interface show interface Wi-Fi",
                "Wi-Fi\n   Type:                 Dedicated\n   Administrative state: Disabled\n   Connect state:        Disconnected\n",
            ),
    );

    let outcome = rituals(OsFamily::Windows, runner.clone())
        .perform(Ritual::CableCheck, &quiet_session(), &NoProgress)
        .await;

    assert!(outcome.is_success());
    assert_eq!(outcome.details(), ["Ethernet 2: up, has connectivity", "Wi-Fi: down"]);
    assert!(runner
        .invocations()
        .contains(&"ping -n 1 -w 1000 8.8.8.8".to_string()));
}

#[tokio::test]
async fn failed_listing_finds_no_interfaces() {
    let runner = Arc::new(ScriptedRunner::new().fail_to_launch("ip link show"));

    let outcome = rituals(OsFamily::Posix, runner)
        .perform(Ritual::CableCheck, &quiet_session(), &NoProgress)
        .await;

    assert_eq!(outcome.status(), OutcomeStatus::Failure);
    assert_eq!(outcome.message(), "No network interfaces found!");
}

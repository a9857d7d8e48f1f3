use std::sync::Arc;

use lazarus_common::diagnostic::OutcomeStatus;
use lazarus_common::platform::OsFamily;
use lazarus_core::capture::NoProgress;
use lazarus_core::rituals::Ritual;
use lazarus_core::testing::ScriptedRunner;
use lazarus_integration_tests::{
    IP_ADDR_DYNAMIC, IP_ADDR_STATIC, IP_LINK_SHOW, IPCONFIG_ALL, NETSH_SHOW_INTERFACE,
    quiet_session, rituals, unprivileged,
};

#[tokio::test]
async fn posix_cycle_skips_virtual_interfaces() {
    let runner = Arc::new(
        ScriptedRunner::new()
            .respond("ip link show", IP_LINK_SHOW)
            .respond("ip addr", IP_ADDR_DYNAMIC),
    );

    let outcome = rituals(OsFamily::Posix, runner.clone())
        .perform(Ritual::DhcpResurrection, &quiet_session(), &NoProgress)
        .await;

    assert_eq!(outcome.status(), OutcomeStatus::Success);
    assert_eq!(outcome.message(), "DHCP service successfully resurrected!");
    assert_eq!(
        runner.invocations(),
        vec![
            "ip link show",
            "systemctl stop dhcpcd",
            "systemctl start dhcpcd",
            "dhclient -r enp9s0",
            "dhclient enp9s0",
            "dhclient -r wlan0",
            "dhclient wlan0",
            "ip addr",
        ]
    );
    assert_eq!(outcome.details()[0], "Stop dhcpcd: ok");
}

#[tokio::test]
async fn static_address_after_cycle_is_a_failure() {
    let runner = Arc::new(
        ScriptedRunner::new()
            .respond("ip link show", IP_LINK_SHOW)
            .respond("ip addr", IP_ADDR_STATIC),
    );

    let outcome = rituals(OsFamily::Posix, runner)
        .perform(Ritual::DhcpResurrection, &quiet_session(), &NoProgress)
        .await;

    assert_eq!(outcome.status(), OutcomeStatus::Failure);
    assert_eq!(
        outcome.details().last().map(String::as_str),
        Some("Address state: no dynamic lease")
    );
}

#[tokio::test]
async fn windows_cycle_runs_the_service_and_ipconfig_steps() {
    let runner = Arc::new(
        ScriptedRunner::new()
            .respond("netsh interface show interface", NETSH_SHOW_INTERFACE)
            .exit_code("net stop dhcp", "The DHCP Client service is not started.", 2)
            .respond("ipconfig /all", IPCONFIG_ALL),
    );

    let outcome = rituals(OsFamily::Windows, runner.clone())
        .perform(Ritual::DhcpResurrection, &quiet_session(), &NoProgress)
        .await;

    assert!(outcome.is_success());
    assert_eq!(
        outcome.message(),
        "DHCP service successfully resurrected! (1 of 4 steps failed)"
    );
    assert_eq!(
        runner.invocations(),
        vec![
            "netsh interface show interface",
            "net stop dhcp",
            "net start dhcp",
            "ipconfig /release",
            "ipconfig /renew",
            "ipconfig /all",
        ]
    );
}

#[tokio::test]
async fn missing_privileges_run_nothing() {
    let runner = Arc::new(ScriptedRunner::new());

    let outcome = unprivileged(OsFamily::Posix, runner.clone())
        .perform(Ritual::DhcpResurrection, &quiet_session(), &NoProgress)
        .await;

    assert_eq!(outcome.status(), OutcomeStatus::PermissionDenied);
    assert_eq!(outcome.message(), "This feature requires administrative privileges!");
    assert!(runner.invocations().is_empty());
}

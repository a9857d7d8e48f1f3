//! Canned host output and builders shared by the end-to-end ritual tests.

use std::path::Path;
use std::sync::Arc;

use lazarus_common::config::{Config, Session};
use lazarus_common::platform::OsFamily;
use lazarus_core::platform::PlatformAdapter;
use lazarus_core::rituals::Rituals;
use lazarus_core::system::AssumedElevation;
use lazarus_core::testing::ScriptedRunner;

/// Privileged rituals for `family` with every pause collapsed.
pub fn rituals(family: OsFamily, runner: Arc<ScriptedRunner>) -> Rituals {
    rituals_with(family, runner, Config::instant())
}

pub fn rituals_with(family: OsFamily, runner: Arc<ScriptedRunner>, config: Config) -> Rituals {
    Rituals::new(
        PlatformAdapter::for_family(family, runner),
        Arc::new(AssumedElevation(true)),
        config,
    )
}

pub fn unprivileged(family: OsFamily, runner: Arc<ScriptedRunner>) -> Rituals {
    Rituals::new(
        PlatformAdapter::for_family(family, runner),
        Arc::new(AssumedElevation(false)),
        Config::instant(),
    )
}

pub fn quiet_session() -> Session {
    Session::new(false, Path::new("."))
}

/*************************************************************
                     POSIX host output
**************************************************************/

pub const IP_LINK_SHOW: &str = "\
1: lo: <LOOPBACK,UP,LOWER_UP> mtu 65536 qdisc noqueue state UNKNOWN mode DEFAULT group default qlen 1000
    link/loopback 00:00:00:00:00:00 brd 00:00:00:00:00:00
2: enp9s0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP mode DEFAULT group default qlen 1000
    link/ether a8:a1:59:13:41:46 brd ff:ff:ff:ff:ff:ff
3: wlan0: <NO-CARRIER,BROADCAST,MULTICAST,UP> mtu 1500 qdisc noqueue state DOWN mode DORMANT group default qlen 1000
    link/ether 3c:58:c2:99:10:0e brd ff:ff:ff:ff:ff:ff
4: veth7f3a1b2@if3: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc noqueue master docker0 state UP mode DEFAULT group default
    link/ether 6e:1d:0c:8f:22:41 brd ff:ff:ff:ff:ff:ff link-netnsid 0
";

pub const ENP9S0_UP: &str = "\
2: enp9s0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP mode DEFAULT group default qlen 1000
    link/ether a8:a1:59:13:41:46 brd ff:ff:ff:ff:ff:ff
";

pub const WLAN0_DOWN: &str = "\
3: wlan0: <NO-CARRIER,BROADCAST,MULTICAST> mtu 1500 qdisc noqueue state DOWN mode DORMANT group default qlen 1000
    link/ether 3c:58:c2:99:10:0e brd ff:ff:ff:ff:ff:ff
";

pub const IP_ADDR_DYNAMIC: &str = "\
2: enp9s0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP group default qlen 1000
    link/ether a8:a1:59:13:41:46 brd ff:ff:ff:ff:ff:ff
    inet 192.168.1.42/24 brd 192.168.1.255 scope global dynamic noprefixroute enp9s0
       valid_lft 86012sec preferred_lft 86012sec
";

pub const IP_ADDR_STATIC: &str = "\
2: enp9s0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP group default qlen 1000
    inet 169.254.12.7/16 brd 169.254.255.255 scope link enp9s0
";

pub const ARP_N_UNIQUE: &str = "\
Address                  HWtype  HWaddress           Flags Mask            Iface
192.168.1.1              ether   f4:92:bf:7a:01:c2   C                     enp9s0
192.168.1.23             ether   b8:27:eb:44:10:9d   C                     enp9s0
192.168.1.77                     (incomplete)                              enp9s0
";

pub const ARP_N_SHARED_MAC: &str = "\
Address                  HWtype  HWaddress           Flags Mask            Iface
192.168.1.1              ether   f4:92:bf:7a:01:c2   C                     enp9s0
192.168.1.23             ether   b8:27:eb:44:10:9d   C                     enp9s0
192.168.1.99             ether   f4:92:bf:7a:01:c2   C                     enp9s0
";

/*************************************************************
                    Windows host output
**************************************************************/

pub const NETSH_SHOW_INTERFACE: &str = "
Admin State    State          Type             Interface Name
-------------------------------------------------------------------------
Enabled        Connected      Dedicated        Ethernet 2
Disabled       Disconnected   Dedicated        Wi-Fi
Enabled        Connected      Dedicated        vEthernet (WSL)
";

pub const ARP_A: &str = "
Interface: 192.168.1.42 --- 0x7
  Internet Address      Physical Address      Type
  192.168.1.1           f4-92-bf-7a-01-c2     dynamic
  192.168.1.23          b8-27-eb-44-10-9d     dynamic
  192.168.1.255         ff-ff-ff-ff-ff-ff     static
  224.0.0.22            01-00-5e-00-00-16     static
";

pub const IPCONFIG_ALL: &str = "
Ethernet adapter Ethernet 2:

   Connection-specific DNS Suffix  . : lan
   DHCP Enabled. . . . . . . . . . . : Yes
   IPv4 Address. . . . . . . . . . . : 192.168.1.42(Preferred)
";

use pnet::datalink::{MacAddr, NetworkInterface};
use rouse_common::network::interface::{self, InterfaceError, Unsuitability};
use rouse_integration_tests::util::{IFF_BROADCAST, IFF_LOOPBACK, IFF_UP, ni, v4, v6};

/*************************************************************
                 Tests for interface selection
**************************************************************/

#[test]
fn auto_selects_first_usable() {
    let interfaces: Vec<NetworkInterface> = vec![a_loopback(), b_down(), c_unaddressed(), d_usable()];
    assert_eq!(d_usable(), interface::select(None, &interfaces).unwrap());
}

#[test]
fn named_down_interface_is_unsuitable() {
    let interfaces: Vec<NetworkInterface> = vec![a_loopback(), b_down(), c_unaddressed(), d_usable()];
    assert_eq!(
        interface::select(Some("b0"), &interfaces),
        Err(InterfaceError::Unsuitable { name: "b0".into(), reason: Unsuitability::Down })
    );
}

#[test]
fn named_loopback_and_unaddressed_are_unsuitable() {
    let interfaces: Vec<NetworkInterface> = vec![a_loopback(), b_down(), c_unaddressed(), d_usable()];
    assert_eq!(
        interface::select(Some("lo"), &interfaces),
        Err(InterfaceError::Unsuitable { name: "lo".into(), reason: Unsuitability::Loopback })
    );
    assert_eq!(
        interface::select(Some("c0"), &interfaces),
        Err(InterfaceError::Unsuitable { name: "c0".into(), reason: Unsuitability::NoAddresses })
    );
}

#[test]
fn unknown_name_is_not_found() {
    let interfaces: Vec<NetworkInterface> = vec![a_loopback(), b_down(), c_unaddressed(), d_usable()];
    assert_eq!(
        interface::select(Some("wlan9"), &interfaces),
        Err(InterfaceError::NotFound("wlan9".into()))
    );
}

#[test]
fn nothing_usable_is_none_suitable() {
    let interfaces: Vec<NetworkInterface> = vec![a_loopback(), b_down(), c_unaddressed()];
    assert_eq!(interface::select(None, &interfaces), Err(InterfaceError::NoneSuitable));
}

#[test]
fn ipv6_only_counts_as_addressed() {
    let interfaces: Vec<NetworkInterface> = vec![c_unaddressed(), e_ipv6_only(), d_usable()];
    assert_eq!(e_ipv6_only(), interface::select(None, &interfaces).unwrap());
}

/*************************************************************
                  Mock interfaces for testing
**************************************************************/

fn a_loopback() -> NetworkInterface {
    ni(
        "lo",
        1,
        Some(MacAddr::new(0, 0, 0, 0, 0, 0)),
        &[v4(127, 0, 0, 1, 8), v6("::1", 128)],
        IFF_UP | IFF_LOOPBACK,
    )
}

fn b_down() -> NetworkInterface {
    ni(
        "b0",
        2,
        Some(MacAddr::new(0x52, 0x54, 0x00, 0x12, 0x34, 0x56)),
        &[v4(10, 0, 0, 15, 24)],
        IFF_BROADCAST,
    )
}

fn c_unaddressed() -> NetworkInterface {
    ni(
        "c0",
        3,
        Some(MacAddr::new(0x34, 0xcf, 0xf6, 0x9a, 0x11, 0x22)),
        &[],
        IFF_UP | IFF_BROADCAST,
    )
}

fn d_usable() -> NetworkInterface {
    ni(
        "d0",
        4,
        Some(MacAddr::new(0x11, 0x22, 0x33, 0x44, 0x55, 0x66)),
        &[v4(192, 168, 0, 32, 24)],
        IFF_UP | IFF_BROADCAST,
    )
}

fn e_ipv6_only() -> NetworkInterface {
    ni(
        "e0",
        5,
        Some(MacAddr::new(0x1a, 0x2b, 0x3c, 0x4d, 0x5e, 0x6f)),
        &[v6("fe80::1a2b:3cff:fe4d:5e6f", 64)],
        IFF_UP | IFF_BROADCAST,
    )
}

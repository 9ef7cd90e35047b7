use std::net::Ipv4Addr;

use pnet::datalink::{MacAddr, NetworkInterface};
use pnet::packet::Packet;
use pnet::packet::ethernet::{EtherTypes, EthernetPacket};
use pnet::packet::ip::IpNextHeaderProtocols;
use pnet::packet::ipv4::{self, Ipv4Packet};
use pnet::packet::udp::{self, UdpPacket};
use rouse_common::config::Config;
use rouse_common::network::interface;
use rouse_core::{WakeError, wake_with};
use rouse_integration_tests::util::{IFF_BROADCAST, IFF_LOOPBACK, IFF_UP, ni, recording_opener, v4};

const TARGET: MacAddr = MacAddr(0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF);

fn interfaces() -> Vec<NetworkInterface> {
    vec![
        ni("lo", 1, None, &[v4(127, 0, 0, 1, 8)], IFF_UP | IFF_LOOPBACK),
        ni(
            "d0",
            2,
            Some(MacAddr::new(0x11, 0x22, 0x33, 0x44, 0x55, 0x66)),
            &[v4(192, 168, 0, 32, 24)],
            IFF_UP | IFF_BROADCAST,
        ),
    ]
}

fn wake_on(cfg: &Config) -> (Result<rouse_core::WakeReport, WakeError>, Vec<Vec<u8>>) {
    let table = interfaces();
    let (opener, sent) = recording_opener();
    let result = wake_with(cfg, |name| interface::select(name, &table), opener);
    let frames = sent.lock().unwrap().clone();
    (result, frames)
}

#[test]
fn sends_one_well_formed_magic_frame() {
    let (result, frames) = wake_on(&Config::new("AA:BB:CC:DD:EE:FF"));
    let report = result.unwrap();
    assert!(report.sent);
    assert_eq!(report.interface, "d0");
    assert_eq!(frames.len(), 1);

    let frame = &frames[0];
    assert_eq!(frame.len(), 14 + 20 + 8 + 102);
    assert_eq!(report.frame_len, frame.len());
    assert_eq!(report.source, MacAddr::new(0x11, 0x22, 0x33, 0x44, 0x55, 0x66));

    let eth = EthernetPacket::new(frame).unwrap();
    assert_eq!(eth.get_source(), MacAddr::new(0x11, 0x22, 0x33, 0x44, 0x55, 0x66));
    assert_eq!(eth.get_destination(), MacAddr::broadcast());
    assert_eq!(eth.get_ethertype(), EtherTypes::Ipv4);

    let ip = Ipv4Packet::new(eth.payload()).unwrap();
    assert_eq!(ip.get_total_length() as usize, 20 + 8 + 102);
    assert_eq!(ip.get_ttl(), 64);
    assert_eq!(ip.get_next_level_protocol(), IpNextHeaderProtocols::Udp);
    assert_eq!(ip.get_source(), Ipv4Addr::UNSPECIFIED);
    assert_eq!(ip.get_destination(), Ipv4Addr::BROADCAST);
    assert_eq!(ip.get_checksum(), ipv4::checksum(&ip));

    let datagram = UdpPacket::new(ip.payload()).unwrap();
    assert_eq!(datagram.get_destination(), 9);
    assert_eq!(datagram.get_length() as usize, 8 + 102);
    assert_eq!(
        datagram.get_checksum(),
        udp::ipv4_checksum(&datagram, &Ipv4Addr::UNSPECIFIED, &Ipv4Addr::BROADCAST)
    );

    let payload = datagram.payload();
    assert_eq!(payload.len(), 102);
    assert_eq!(&payload[..6], &[0xFF; 6]);
    for copy in payload[6..].chunks(6) {
        assert_eq!(copy, &[0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
    }
    assert_eq!(payload[6..].chunks(6).count(), 16);
    assert_eq!(report.target.mac(), TARGET);
}

#[test]
fn malformed_targets_never_transmit() {
    for bad in ["AA:BB:CC:DD:EE", "AA:BB:CC:DD:EE:GG", "AA;BB;CC;DD;EE;FF", "AA:BB-CC:DD:EE:FF", ""] {
        let (result, frames) = wake_on(&Config::new(bad));
        assert!(
            matches!(result, Err(WakeError::InvalidTargetAddress(_))),
            "{bad:?} gave {result:?}"
        );
        assert!(frames.is_empty(), "{bad:?} was transmitted");
    }
}

#[test]
fn named_loopback_is_refused_without_sending() {
    let mut cfg = Config::new("AA:BB:CC:DD:EE:FF");
    cfg.interface = Some("lo".into());
    let (result, frames) = wake_on(&cfg);
    assert!(matches!(result, Err(WakeError::InterfaceUnsuitable { .. })));
    assert!(frames.is_empty());
}

#[test]
fn unknown_interface_is_not_found() {
    let mut cfg = Config::new("AA:BB:CC:DD:EE:FF");
    cfg.interface = Some("eth42".into());
    let (result, _) = wake_on(&cfg);
    assert!(matches!(result, Err(WakeError::InterfaceNotFound(ref n)) if n == "eth42"));
}

#[test]
fn custom_port_is_used() {
    let mut cfg = Config::new("aabb.ccdd.eeff");
    cfg.port = 7;
    let (result, frames) = wake_on(&cfg);
    assert!(result.is_ok());
    let eth = EthernetPacket::new(&frames[0]).unwrap();
    let ip = Ipv4Packet::new(eth.payload()).unwrap();
    assert_eq!(UdpPacket::new(ip.payload()).unwrap().get_destination(), 7);
}

#[test]
fn every_send_builds_a_fresh_frame() {
    let (first, a) = wake_on(&Config::new("AA:BB:CC:DD:EE:FF"));
    let (second, b) = wake_on(&Config::new("AA:BB:CC:DD:EE:FF"));
    assert!(first.is_ok() && second.is_ok());
    // identification may differ, everything past the IPv4 header may not
    assert_eq!(a[0][34..], b[0][34..]);
}

use std::net::Ipv4Addr;

use pnet::packet::ethernet::EtherTypes;
use pnet::packet::ip::IpNextHeaderProtocols;
use pnet::util::MacAddr;
use tracing::debug;

use crate::magic::{MAGIC_PACKET_LEN, MagicPacket};
use crate::{ETH_HDR_LEN, IP_V4_HDR_LEN, PacketError, UDP_HDR_LEN, ethernet, ipv4, udp};

pub const MAGIC_FRAME_LEN: usize = ETH_HDR_LEN + IP_V4_HDR_LEN + UDP_HDR_LEN + MAGIC_PACKET_LEN;

const SRC_PORT: u16 = 0;

/// Serializes `Ethernet / IPv4 / UDP / magic` into one buffer, ready for a
/// raw link-layer write.
///
/// The frame is broadcast at both layers: `ff:ff:ff:ff:ff:ff` and
/// `0.0.0.0 -> 255.255.255.255`, so no ARP or routing is involved.
pub fn build_magic_frame(
    src_mac: MacAddr,
    magic: &MagicPacket,
    dst_port: u16,
) -> Result<Vec<u8>, PacketError> {
    let (src_addr, dst_addr) = (Ipv4Addr::UNSPECIFIED, Ipv4Addr::BROADCAST);
    let mut buffer: Vec<u8> = vec![0u8; MAGIC_FRAME_LEN];

    ethernet::make_header(&mut buffer, src_mac, MacAddr::broadcast(), EtherTypes::Ipv4)?;

    let udp_len = udp::make_datagram(
        &mut buffer[ETH_HDR_LEN + IP_V4_HDR_LEN..],
        SRC_PORT,
        dst_port,
        magic.as_bytes(),
        src_addr,
        dst_addr,
    )?;

    ipv4::make_header(
        &mut buffer[ETH_HDR_LEN..],
        udp_len,
        IpNextHeaderProtocols::Udp,
        src_addr,
        dst_addr,
    )?;

    debug!(
        "Built {} byte frame {} -> {} for {} on port {}",
        buffer.len(),
        src_mac,
        MacAddr::broadcast(),
        magic.target(),
        dst_port
    );
    Ok(buffer)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

use std::net::Ipv4Addr;

use pnet::packet::udp::{MutableUdpPacket, ipv4_checksum};

use crate::{PacketError, UDP_HDR_LEN};

/// Writes a UDP header followed by `payload` at the start of `buf` and
/// returns the number of bytes written.
///
/// The checksum covers the IPv4 pseudo-header built from `src_addr` and
/// `dst_addr`, so those must match the enclosing IPv4 header.
pub fn make_datagram(
    buf: &mut [u8],
    src_port: u16,
    dst_port: u16,
    payload: &[u8],
    src_addr: Ipv4Addr,
    dst_addr: Ipv4Addr,
) -> Result<usize, PacketError> {
    let total_len: usize = UDP_HDR_LEN + payload.len();
    let length: u16 = total_len
        .try_into()
        .map_err(|_| PacketError::LengthOverflow { layer: "UDP", len: total_len })?;

    let datagram = buf.get_mut(..total_len).ok_or(PacketError::UdpBuffer(total_len))?;
    let mut udp = MutableUdpPacket::new(datagram).ok_or(PacketError::UdpBuffer(total_len))?;
    udp.set_source(src_port);
    udp.set_destination(dst_port);
    udp.set_length(length);
    udp.set_payload(payload);

    udp.set_checksum(0);
    let csm = match ipv4_checksum(&udp.to_immutable(), &src_addr, &dst_addr) {
        // zero on the wire means "no checksum"
        0 => 0xFFFF,
        csm => csm,
    };
    udp.set_checksum(csm);
    Ok(total_len)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

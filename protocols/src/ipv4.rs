use std::net::Ipv4Addr;

use pnet::packet::ip::IpNextHeaderProtocol;
use pnet::packet::ipv4::{MutableIpv4Packet, checksum};

use crate::{IP_V4_HDR_LEN, PacketError};

const DEFAULT_TTL: u8 = 64;

/// Writes a 20-byte IPv4 header at the start of `buf`.
///
/// `payload_len` is the serialized size of everything the header encapsulates;
/// the total-length field is derived from it. The checksum is computed last,
/// over the header bytes as written.
pub fn make_header(
    buf: &mut [u8],
    payload_len: usize,
    nxt_ptc: IpNextHeaderProtocol,
    src_addr: Ipv4Addr,
    dst_addr: Ipv4Addr,
) -> Result<(), PacketError> {
    let total_length = IP_V4_HDR_LEN + payload_len;
    let total_length: u16 = total_length
        .try_into()
        .map_err(|_| PacketError::LengthOverflow { layer: "IPv4", len: total_length })?;

    let header = buf.get_mut(..IP_V4_HDR_LEN).ok_or(PacketError::Ipv4Buffer)?;
    let mut ipv4 = MutableIpv4Packet::new(header).ok_or(PacketError::Ipv4Buffer)?;
    ipv4.set_version(4);
    ipv4.set_header_length((IP_V4_HDR_LEN / 4) as u8);
    ipv4.set_dscp(0);
    ipv4.set_ecn(0);
    ipv4.set_total_length(total_length);
    ipv4.set_identification(rand::random());
    ipv4.set_flags(0);
    ipv4.set_fragment_offset(0);
    ipv4.set_ttl(DEFAULT_TTL);
    ipv4.set_next_level_protocol(nxt_ptc);
    ipv4.set_source(src_addr);
    ipv4.set_destination(dst_addr);

    ipv4.set_checksum(0);
    let csm = checksum(&ipv4.to_immutable());
    ipv4.set_checksum(csm);
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

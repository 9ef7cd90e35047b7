//! Wire-level builders for the Wake-on-LAN frame.
//!
//! Each layer writes itself into a caller-provided slice. [`frame`] stitches
//! them together into one contiguous buffer that can be handed to a
//! link-layer sender as-is.

pub mod ethernet;
pub mod frame;
pub mod ipv4;
pub mod magic;
pub mod udp;

use thiserror::Error;

pub const ETH_HDR_LEN: usize = 14;
pub const IP_V4_HDR_LEN: usize = 20;
pub const UDP_HDR_LEN: usize = 8;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PacketError {
    #[error("buffer too small for Ethernet header")]
    EthernetBuffer,

    #[error("buffer too small for IPv4 header")]
    Ipv4Buffer,

    #[error("buffer too small for UDP datagram of {0} bytes")]
    UdpBuffer(usize),

    /// The encapsulated data does not fit the 16-bit length field.
    #[error("{layer} length {len} exceeds 65535")]
    LengthOverflow { layer: &'static str, len: usize },
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

//! The Wake-on-LAN "magic packet" payload.
//!
//! Six `0xFF` bytes followed by sixteen copies of the target's hardware
//! address. Network cards with WoL enabled scan incoming frames for this
//! pattern regardless of the surrounding headers.

use std::fmt;

use pnet::util::MacAddr;

pub const SYNC_STREAM: [u8; 6] = [0xFF; 6];
pub const MAC_REPETITIONS: usize = 16;
pub const MAGIC_PACKET_LEN: usize = SYNC_STREAM.len() + MAC_REPETITIONS * 6;

#[derive(Clone, PartialEq, Eq)]
pub struct MagicPacket([u8; MAGIC_PACKET_LEN]);

impl MagicPacket {
    pub fn new(target: MacAddr) -> Self {
        let mut packet = [0xFFu8; MAGIC_PACKET_LEN];
        let octets: [u8; 6] = target.octets();
        for chunk in packet[SYNC_STREAM.len()..].chunks_exact_mut(octets.len()) {
            chunk.copy_from_slice(&octets);
        }
        Self(packet)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The hardware address repeated in the packet body.
    pub fn target(&self) -> MacAddr {
        let o = &self.0[SYNC_STREAM.len()..SYNC_STREAM.len() + 6];
        MacAddr::new(o[0], o[1], o[2], o[3], o[4], o[5])
    }
}

impl fmt::Debug for MagicPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MagicPacket").field(&self.target()).finish()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

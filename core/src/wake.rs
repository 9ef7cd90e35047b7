//! The single use case: wake one machine.
//!
//! Parses the target, picks an interface, then builds and transmits the
//! frame. Each step either fully succeeds or returns its error untouched.

use std::io;

use pnet::datalink::{self, Channel, Config as LinkConfig, NetworkInterface};
use pnet::util::MacAddr;
use rouse_common::config::Config;
use rouse_common::network::interface::{self, InterfaceError};
use rouse_common::network::mac::TargetAddress;
use rouse_protocols::frame;
use rouse_protocols::magic::MagicPacket;
use tracing::{debug, info};

use crate::error::WakeError;
use crate::network::channel;

/// What was (or, for a dry run, would have been) sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WakeReport {
    pub interface: String,
    pub source: MacAddr,
    pub target: TargetAddress,
    pub port: u16,
    pub frame_len: usize,
    pub sent: bool,
}

pub fn wake(cfg: &Config) -> Result<WakeReport, WakeError> {
    wake_with(cfg, interface::select_interface, datalink::channel)
}

pub fn wake_with<S, F>(cfg: &Config, selector: S, channel_opener: F) -> Result<WakeReport, WakeError>
where
    S: FnOnce(Option<&str>) -> Result<NetworkInterface, InterfaceError>,
    F: FnOnce(&NetworkInterface, LinkConfig) -> io::Result<Channel>,
{
    let target: TargetAddress = cfg.target.parse()?;
    let intf: NetworkInterface = selector(cfg.interface.as_deref())?;
    debug!("Selected interface {} for {}", intf.name, target);

    let source: MacAddr = channel::source_mac(&intf);
    let (frame_len, sent) = if cfg.dry_run {
        let frame = frame::build_magic_frame(source, &MagicPacket::new(target.mac()), cfg.port)?;
        info!("Dry run: {} byte frame for {} built on {}, nothing sent", frame.len(), target, intf.name);
        (frame.len(), false)
    } else {
        let len = channel::send_magic_packet_from(&intf, source, target, cfg.port, channel_opener)?;
        (len, true)
    };

    Ok(WakeReport {
        interface: intf.name,
        source,
        target,
        port: cfg.port,
        frame_len,
        sent,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

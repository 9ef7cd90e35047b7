use std::io;

use pnet::datalink::{self, Channel, Config, DataLinkReceiver, DataLinkSender, NetworkInterface};
use pnet::util::MacAddr;
use rouse_common::network::mac::TargetAddress;
use rouse_protocols::frame;
use rouse_protocols::magic::MagicPacket;
use tracing::{debug, info, warn};

use crate::error::WakeError;

/// An open link-layer channel on one interface.
///
/// The socket lives exactly as long as this value; dropping it closes the
/// handle, whichever way the caller leaves.
pub struct EthernetHandle {
    interface: String,
    tx: Box<dyn DataLinkSender>,
    _rx: Box<dyn DataLinkReceiver>,
}

impl EthernetHandle {
    pub fn open<F>(intf: &NetworkInterface, channel_opener: F) -> Result<Self, WakeError>
    where
        F: FnOnce(&NetworkInterface, Config) -> io::Result<Channel>,
    {
        let (tx, rx) = open_eth_channel(intf, &get_config(), channel_opener)?;
        Ok(Self { interface: intf.name.clone(), tx, _rx: rx })
    }

    /// Writes one raw frame.
    pub fn send(&mut self, frame: &[u8]) -> Result<(), WakeError> {
        match self.tx.send_to(frame, None) {
            Some(Ok(())) => Ok(()),
            Some(Err(source)) => Err(WakeError::Transmit { interface: self.interface.clone(), source }),
            None => Err(WakeError::Transmit {
                interface: self.interface.clone(),
                source: io::Error::other("link-layer sender returned no result"),
            }),
        }
    }
}

impl Drop for EthernetHandle {
    fn drop(&mut self) {
        debug!("Closing link-layer handle on {}", self.interface);
    }
}

/// Sends one magic packet for `target` out of `intf`, returning the frame length.
pub fn send_magic_packet(
    intf: &NetworkInterface,
    target: TargetAddress,
    port: u16,
) -> Result<usize, WakeError> {
    send_magic_packet_with(intf, target, port, datalink::channel)
}

/// Like [`send_magic_packet`], with the link-layer opener supplied by the caller.
pub fn send_magic_packet_with<F>(
    intf: &NetworkInterface,
    target: TargetAddress,
    port: u16,
    channel_opener: F,
) -> Result<usize, WakeError>
where
    F: FnOnce(&NetworkInterface, Config) -> io::Result<Channel>,
{
    send_magic_packet_from(intf, source_mac(intf), target, port, channel_opener)
}

/// Sends from an already resolved source address.
pub(crate) fn send_magic_packet_from<F>(
    intf: &NetworkInterface,
    source: MacAddr,
    target: TargetAddress,
    port: u16,
    channel_opener: F,
) -> Result<usize, WakeError>
where
    F: FnOnce(&NetworkInterface, Config) -> io::Result<Channel>,
{
    let mut handle = EthernetHandle::open(intf, channel_opener)?;
    let frame = frame::build_magic_frame(source, &MagicPacket::new(target.mac()), port)?;
    handle.send(&frame)?;
    info!("Magic packet for {} sent on {} ({} bytes)", target, intf.name, frame.len());
    Ok(frame.len())
}

/// The interface's hardware address, or all zeroes when it reports none.
pub fn source_mac(intf: &NetworkInterface) -> MacAddr {
    intf.mac.unwrap_or_else(|| {
        warn!("{} has no hardware address, sending from {}", intf.name, MacAddr::zero());
        MacAddr::zero()
    })
}

fn open_eth_channel<F>(
    intf: &NetworkInterface,
    cfg: &Config,
    channel_opener: F,
) -> Result<(Box<dyn DataLinkSender>, Box<dyn DataLinkReceiver>), WakeError>
where
    F: FnOnce(&NetworkInterface, Config) -> io::Result<Channel>,
{
    let ch: Channel = channel_opener(intf, *cfg)
        .map_err(|source| WakeError::TransmitHandle { interface: intf.name.clone(), source })?;
    match ch {
        Channel::Ethernet(tx, rx) => {
            debug!("Link-layer handle opened on {}", intf.name);
            Ok((tx, rx))
        }
        _ => Err(WakeError::TransmitHandle {
            interface: intf.name.clone(),
            source: io::Error::other(format!("non-ethernet channel for {}", intf.name)),
        }),
    }
}

/// Nothing is ever read, so reads block forever.
fn get_config() -> Config {
    Config {
        read_timeout: None,
        promiscuous: true,
        ..Default::default()
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

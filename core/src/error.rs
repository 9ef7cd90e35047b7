use std::io;

use rouse_common::network::interface::{InterfaceError, Unsuitability};
use rouse_common::network::mac::MacParseError;
use rouse_protocols::PacketError;
use thiserror::Error;

/// Everything that can stop a wake-up. None of these are retried.
#[derive(Error, Debug)]
pub enum WakeError {
    #[error("cannot parse MAC address: {0}")]
    InvalidTargetAddress(#[from] MacParseError),

    #[error("cannot get interface {0:?}: no such interface")]
    InterfaceNotFound(String),

    #[error("interface {name:?} {reason}")]
    InterfaceUnsuitable { name: String, reason: Unsuitability },

    #[error("cannot find suitable interface")]
    NoSuitableInterface,

    #[error("cannot open link-layer handle on {interface}: {source}")]
    TransmitHandle {
        interface: String,
        #[source]
        source: io::Error,
    },

    /// Building the frame failed; with a valid target this is a bug.
    #[error("cannot serialize magic packet: {0}")]
    Serialization(#[from] PacketError),

    #[error("cannot send a packet on {interface}: {source}")]
    Transmit {
        interface: String,
        #[source]
        source: io::Error,
    },
}

impl From<InterfaceError> for WakeError {
    fn from(err: InterfaceError) -> Self {
        match err {
            InterfaceError::NotFound(name) => Self::InterfaceNotFound(name),
            InterfaceError::Unsuitable { name, reason } => Self::InterfaceUnsuitable { name, reason },
            InterfaceError::NoneSuitable => Self::NoSuitableInterface,
        }
    }
}

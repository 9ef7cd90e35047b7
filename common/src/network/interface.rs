use pnet::datalink::{self, NetworkInterface};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Unsuitability {
    /// The interface only reaches this host.
    #[error("is a loopback")]
    Loopback,
    /// The interface is administratively down.
    #[error("is down")]
    Down,
    /// No IPv4 or IPv6 address is assigned, so it is most likely unplugged
    /// or unconfigured.
    #[error("does not have any addresses")]
    NoAddresses,
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum InterfaceError {
    #[error("cannot find interface {0:?}")]
    NotFound(String),

    #[error("interface {name:?} {reason}")]
    Unsuitable { name: String, reason: Unsuitability },

    #[error("cannot find suitable interface")]
    NoneSuitable,
}

/// Picks the interface to send from, reading the OS interface table.
///
/// See [`select`] for the rules.
pub fn select_interface(requested: Option<&str>) -> Result<NetworkInterface, InterfaceError> {
    let interfaces: Vec<NetworkInterface> = datalink::interfaces();
    debug!("Identified {} network interface(s)", interfaces.len());
    select(requested, &interfaces)
}

/// Picks an interface out of `interfaces`.
///
/// A requested name must exist and pass [`check_interface`]; there is no
/// fallback when it does not. Without a name (or with an empty one) the first
/// passing interface in the given order wins.
pub fn select(
    requested: Option<&str>,
    interfaces: &[NetworkInterface],
) -> Result<NetworkInterface, InterfaceError> {
    if let Some(name) = requested.filter(|name| !name.is_empty()) {
        let interface = interfaces
            .iter()
            .find(|interface| interface.name == name)
            .ok_or_else(|| InterfaceError::NotFound(name.to_string()))?;

        return check_interface(interface)
            .map(|()| interface.clone())
            .map_err(|reason| InterfaceError::Unsuitable { name: name.to_string(), reason });
    }

    interfaces
        .iter()
        .find(|&interface| match check_interface(interface) {
            Ok(()) => true,
            Err(reason) => {
                debug!("Skipping {}: {}", interface.name, reason);
                false
            }
        })
        .cloned()
        .ok_or(InterfaceError::NoneSuitable)
}

/// Every interface the OS reports, paired with its verdict.
pub fn list_interfaces() -> Vec<(NetworkInterface, Result<(), Unsuitability>)> {
    datalink::interfaces()
        .into_iter()
        .map(|interface| {
            let verdict = check_interface(&interface);
            (interface, verdict)
        })
        .collect()
}

pub fn check_interface(interface: &NetworkInterface) -> Result<(), Unsuitability> {
    if interface.is_loopback() {
        return Err(Unsuitability::Loopback);
    }
    if !interface.is_up() {
        return Err(Unsuitability::Down);
    }
    if interface.ips.is_empty() {
        return Err(Unsuitability::NoAddresses);
    }

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

//! Hardware address of the machine to wake.
//!
//! Accepts the three notations people actually paste: colon separated
//! (`aa:bb:cc:dd:ee:ff`), hyphen separated (`AA-BB-CC-DD-EE-FF`) and the
//! dotted Cisco form (`aabb.ccdd.eeff`). Anything else is rejected with a
//! reason rather than guessed at.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use mac_oui::Oui;
use pnet::util::MacAddr;
use thiserror::Error;

static OUI_DB: OnceLock<Option<Oui>> = OnceLock::new();

#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("invalid MAC address {input:?}: {reason}")]
pub struct MacParseError {
    pub input: String,
    #[source]
    pub reason: MacFormatError,
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum MacFormatError {
    #[error("address is empty")]
    Empty,

    #[error("expected 6 octets, found {0}")]
    OctetCount(usize),

    #[error("expected 3 dot-separated groups, found {0}")]
    GroupCount(usize),

    #[error("{0:?} is not a valid hexadecimal group")]
    InvalidOctet(String),

    #[error("unsupported separator {0:?}")]
    Separator(char),

    #[error("separators must not be mixed")]
    MixedSeparators,
}

/// A parsed, always-valid 6-octet hardware address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetAddress(MacAddr);

impl TargetAddress {
    pub fn mac(&self) -> MacAddr {
        self.0
    }

    /// Looks up the manufacturer registered for this address's OUI, if any.
    pub fn vendor(&self) -> Option<String> {
        get_vendor(self.0)
    }
}

impl From<MacAddr> for TargetAddress {
    fn from(mac: MacAddr) -> Self {
        Self(mac)
    }
}

impl fmt::Display for TargetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TargetAddress {
    type Err = MacParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = if s.is_empty() {
            Err(MacFormatError::Empty)
        } else if s.contains('.') {
            parse_dotted(s)
        } else {
            parse_separated(s)
        };

        parsed
            .map(|o| Self(MacAddr::new(o[0], o[1], o[2], o[3], o[4], o[5])))
            .map_err(|reason| MacParseError { input: s.to_string(), reason })
    }
}

fn parse_separated(input: &str) -> Result<[u8; 6], MacFormatError> {
    let Some(sep) = input.chars().find(|c| !c.is_ascii_alphanumeric()) else {
        return Err(MacFormatError::OctetCount(1));
    };
    if sep != ':' && sep != '-' {
        return Err(MacFormatError::Separator(sep));
    }
    if let Some(other) = input.chars().find(|&c| !c.is_ascii_alphanumeric() && c != sep) {
        return Err(match other {
            ':' | '-' => MacFormatError::MixedSeparators,
            c => MacFormatError::Separator(c),
        });
    }

    let parts: Vec<&str> = input.split(sep).collect();
    if parts.len() != 6 {
        return Err(MacFormatError::OctetCount(parts.len()));
    }

    let mut octets = [0u8; 6];
    for (octet, part) in octets.iter_mut().zip(parts) {
        if part.len() != 2 {
            return Err(MacFormatError::InvalidOctet(part.to_string()));
        }
        *octet = u8::from_str_radix(part, 16)
            .map_err(|_| MacFormatError::InvalidOctet(part.to_string()))?;
    }
    Ok(octets)
}

fn parse_dotted(input: &str) -> Result<[u8; 6], MacFormatError> {
    if input.contains([':', '-']) {
        return Err(MacFormatError::MixedSeparators);
    }

    let groups: Vec<&str> = input.split('.').collect();
    if groups.len() != 3 {
        return Err(MacFormatError::GroupCount(groups.len()));
    }

    let mut octets = [0u8; 6];
    for (pair, group) in octets.chunks_exact_mut(2).zip(groups) {
        if group.len() != 4 || !group.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(MacFormatError::InvalidOctet(group.to_string()));
        }
        let word = u16::from_str_radix(group, 16)
            .map_err(|_| MacFormatError::InvalidOctet(group.to_string()))?;
        pair.copy_from_slice(&word.to_be_bytes());
    }
    Ok(octets)
}

/// Retrieves or initializes the **Organizationally unique identifier** database.
fn get_oui_db() -> Option<&'static Oui> {
    OUI_DB.get_or_init(|| Oui::default().ok()).as_ref()
}

/// Identify the vendor of a MAC address.
pub fn get_vendor(mac: MacAddr) -> Option<String> {
    let db = get_oui_db()?;
    match db.lookup_by_mac(&mac.to_string()) {
        Ok(Some(entry)) => Some(entry.company_name.clone()),
        _ => None,
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

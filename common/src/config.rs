/// UDP "discard" port, the customary destination for magic packets.
pub const DEFAULT_PORT: u16 = 9;

/// Everything one wake-up needs, collected by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Forces the outbound interface instead of picking one.
    pub interface: Option<String>,
    /// Hardware address of the machine to wake, as typed by the user.
    pub target: String,
    /// UDP destination port of the magic packet.
    pub port: u16,
    /// Builds the frame without opening a link-layer handle.
    pub dry_run: bool,
}

impl Config {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            interface: None,
            target: target.into(),
            port: DEFAULT_PORT,
            dry_run: false,
        }
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

pub mod list;
pub mod wake;

use clap::{ArgAction, Parser};
use rouse_common::config::DEFAULT_PORT;

#[derive(Parser)]
#[command(name = "rouse", version)]
#[command(about = "Wake a machine on the local network with a magic packet.")]
pub struct CommandLine {
    /// Hardware address of the machine to wake, e.g. AA:BB:CC:DD:EE:FF
    #[arg(required_unless_present = "list_interfaces")]
    pub target: Option<String>,

    /// Send from this interface instead of picking one
    #[arg(short, long, value_name = "NAME")]
    pub interface: Option<String>,

    /// UDP destination port of the magic packet
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Build the frame but do not send it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Show every network interface and whether it can be used
    #[arg(short, long)]
    pub list_interfaces: bool,

    /// More output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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

use colored::*;
use pnet::datalink::NetworkInterface;
use pnet::util::MacAddr;
use rouse_common::network::interface::{self, Unsuitability};

pub fn list() {
    for (intf, verdict) in interface::list_interfaces() {
        println!("{}", format_interface(&intf, verdict));
    }
}

fn format_interface(intf: &NetworkInterface, verdict: Result<(), Unsuitability>) -> String {
    let mac: String = intf.mac.unwrap_or_else(MacAddr::zero).to_string();
    let ips: Vec<String> = intf.ips.iter().map(|ip| ip.to_string()).collect();
    let ips = if ips.is_empty() { "-".to_string() } else { ips.join(", ") };
    let status: ColoredString = match verdict {
        Ok(()) => format!("{:<28}", "usable").green().bold(),
        Err(reason) => format!("{:<28}", reason.to_string()).red(),
    };
    let name: ColoredString = format!("{:<16}", intf.name).bold();
    format!("{} {} {} {}", name, mac.dimmed(), status, ips)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

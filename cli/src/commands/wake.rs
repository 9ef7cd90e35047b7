use anyhow::Context;
use colored::*;
use rouse_common::config::Config;
use rouse_common::network::mac::TargetAddress;
use rouse_core::WakeReport;
use tracing::{Level, debug, warn};

use crate::commands::CommandLine;

pub fn wake(target: String, cli: &CommandLine) -> anyhow::Result<()> {
    let cfg = Config {
        interface: cli.interface.clone(),
        target,
        port: cli.port,
        dry_run: cli.dry_run,
    };

    if !cfg.dry_run && !is_root::is_root() {
        warn!("Not running as root, opening a link-layer handle will likely fail");
    }

    let report: WakeReport = rouse_core::wake(&cfg).context("cannot wake host")?;
    log_vendor(&report.target, TargetAddress::vendor);

    if !report.sent {
        println!(
            "{} {} byte frame {} -> {} on {} port {} {}",
            "[dry run]".yellow().bold(),
            report.frame_len,
            report.source,
            report.target.to_string().bold(),
            report.interface.green(),
            report.port,
            "(not sent)".dimmed()
        );
    }
    Ok(())
}

/// The OUI table is only loaded when the line would actually be printed.
fn log_vendor<L>(target: &TargetAddress, lookup: L)
where
    L: FnOnce(&TargetAddress) -> Option<String>,
{
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }
    match lookup(target) {
        Some(vendor) => debug!("Target {} belongs to {}", target, vendor),
        None => debug!("No vendor registered for {}", target),
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

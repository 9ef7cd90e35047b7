//! Wake-on-LAN sender.
//!
//! [`wake`] is the entry point: it takes a [`Config`](rouse_common::config::Config),
//! selects an interface and injects one magic packet at the link layer.

pub mod error;
pub mod network;
pub mod wake;

pub use error::WakeError;
pub use wake::{WakeReport, wake, wake_with};

//! Shared fixtures for the integration tests: synthetic interfaces and a
//! link-layer sender that records instead of transmitting.

pub mod util;

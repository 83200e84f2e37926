/**
 * tiny websocket smoke test:
 * connect, say hello once, print everything the server says back.
 * any fault (a clean close too) ends it with one "Connection failed" line
 */
pub mod config;
pub mod error;
pub mod probe;

pub use config::{ProbeConfig, DEFAULT_ENDPOINT, DEFAULT_GREETING};
pub use error::{ProbeError, Result};
pub use probe::{Probe, ProbeState};

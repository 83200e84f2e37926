/**
 * where we dial and what we say once we get there.
 * the binary never changes these, tests point them at a local server
 */
pub const DEFAULT_ENDPOINT: &str = "ws://localhost:3000/ws";

// sent exactly once, right after the handshake
pub const DEFAULT_GREETING: &str = "Hello from Python client";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub endpoint: String,
    pub greeting: String,
}

impl ProbeConfig {
    pub fn new(endpoint: impl Into<String>, greeting: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            greeting: greeting.into(),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_GREETING)
    }
}

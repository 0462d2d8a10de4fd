//! Configuration Module
//!
//! Fixed server configuration. Nothing is read from the environment or the
//! command line; the values below are the whole configuration surface.

use crate::store::DEFAULT_CAPACITY;

/// Port the server listens on for the lifetime of the process
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the store can hold
    pub capacity: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Returns a copy of this config with a different store capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            server_port: DEFAULT_PORT,
        }
    }
}

//! Error types for lanprowl

use thiserror::Error;

/// Result type alias for lanprowl operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// Gateway resolution failure, reported per lookup stage so callers can
/// tell which table let them down.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// No default (0.0.0.0) entry in the routing table
    #[error("no default route in routing table")]
    NoDefaultRoute,

    /// Gateway address found but absent from the neighbor table
    #[error("no neighbor entry for default gateway")]
    NoNeighborEntry,
}

/// Main error type for lanprowl sessions
#[derive(Error, Debug)]
pub enum SessionError {
    /// I/O error while reading OS network-state tables
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CIDR, MAC, or IP text; aborts only the requested operation
    #[error("address parse error: {0}")]
    AddressParse(String),

    /// Capture or send device failure; fatal to the session
    #[error("device error: {0}")]
    Device(String),

    /// Gateway discovery failure; fatal to spoofing, passive decode can continue
    #[error("gateway resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    /// Interface not found
    #[error("interface '{0}' not found")]
    InterfaceNotFound(String),

    /// Interface exists but carries no usable IPv4 address
    #[error("interface '{0}' has no IPv4 address")]
    NoAddress(String),
}

impl SessionError {
    /// Create an address parse error with a custom message
    pub fn address<S: Into<String>>(msg: S) -> Self {
        SessionError::AddressParse(msg.into())
    }

    /// Create a device error with a custom message
    pub fn device<S: Into<String>>(msg: S) -> Self {
        SessionError::Device(msg.into())
    }
}

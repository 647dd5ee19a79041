//! lanprowl core library
//!
//! Fundamental value types and error handling shared by every lanprowl
//! crate: addresses, link identity, spoof intents, raw frames, and the
//! session error taxonomy.

pub mod error;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use error::{ResolveError, Result, SessionError};
pub use session::{FrameSender, LinkContext, RawFrame, SpoofIntent};
pub use types::{ArpOperation, MacAddr};

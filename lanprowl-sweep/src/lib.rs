//! Active side of lanprowl: CIDR sweeps and spoofed-ARP drivers
//!
//! [`range`] turns a CIDR string into an inclusive address span;
//! [`sweeper`] walks that span emitting probes through any
//! [`FrameSender`](lanprowl_core::FrameSender), and paces poison/rearp
//! frames at a target. Cancellation is cooperative, checked between
//! sends.

pub mod range;
pub mod sweeper;

pub use range::scan_range;
pub use sweeper::{Spoofer, Sweeper};

//! Capture, injection and OS network-state access for lanprowl
//!
//! This crate owns every seam to the outside world:
//!
//! - [`capture`] - pcap capture handle frames are pulled from
//! - [`sink`] - raw Ethernet injection through the datalink layer
//! - [`filters`] - BPF filter builders
//! - [`interface`] - interface enumeration and MAC/IP identity lookup
//! - [`gateway`] - default-gateway resolution from kernel tables
//!
//! Everything above this crate works on plain byte buffers and value
//! types; a test can stand in for the wire with an in-memory
//! [`FrameSender`](lanprowl_core::FrameSender) or canned table text.

pub mod capture;
pub mod filters;
pub mod gateway;
pub mod interface;
pub mod sink;

pub use capture::{CaptureConfig, CaptureStats, FrameCapture};
pub use gateway::{resolve_gateway, resolve_gateway_from, GatewayInfo};
pub use interface::{get_interface, interface_identity, list_interfaces, InterfaceInfo};
pub use sink::FrameSink;

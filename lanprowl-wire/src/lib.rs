//! Wire-format library for lanprowl
//!
//! Parsing and construction for the frames a LAN prowler cares about:
//!
//! - **Ethernet II** headers and the ARP/IPv4 ethertypes
//! - **ARP** messages, both observed and forged
//! - **IPv4/UDP** just deep enough to reach DHCP and DNS payloads
//! - **DHCP** client requests and their option list
//! - **DNS** query names, best-effort textual form
//!
//! # Architecture
//!
//! - [`decoder`] - one captured frame in, one [`DecodedEvent`] out
//! - [`builder`] - probe and spoof frame construction
//! - [`ethernet`], [`arp`], [`ipv4`], [`udp`] - bounded header readers
//! - [`dhcp`] - boot-request validation and option scanning
//! - [`dns`] - query-name extraction
//!
//! Decoding never fails loudly. Truncated, hostile or uninteresting
//! input yields [`DecodedEvent::NoSignal`]; every read is bounds-checked
//! against both the captured bytes and the capture-reported length.
//!
//! # Quick Start
//!
//! ```rust
//! use std::net::Ipv4Addr;
//!
//! use lanprowl_core::{LinkContext, MacAddr};
//! use lanprowl_wire::{build_probe, decode, DecodedEvent};
//!
//! let link = LinkContext::new(
//!     MacAddr::new([0x02, 0x42, 0xac, 0x11, 0x00, 0x02]),
//!     Ipv4Addr::new(192, 168, 1, 100),
//!     MacAddr::new([0xd8, 0x47, 0x32, 0x01, 0x02, 0x03]),
//!     Ipv4Addr::new(192, 168, 1, 1),
//! );
//!
//! let frame = build_probe(&link, Ipv4Addr::new(192, 168, 1, 7));
//! assert_eq!(frame.len(), 42);
//!
//! match decode(&frame, frame.len()) {
//!     DecodedEvent::ArpObserved { sender_ip, .. } => assert_eq!(sender_ip, link.our_ip),
//!     other => panic!("unexpected event: {:?}", other),
//! }
//! ```

pub mod arp;
pub mod builder;
pub mod decoder;
pub mod dhcp;
pub mod dns;
pub mod ethernet;
pub mod ipv4;
pub mod udp;

// Re-export commonly used types for convenience
pub use arp::ArpMessage;
pub use builder::{build_arp, build_probe, build_spoof, FRAME_LEN};
pub use decoder::{decode, decode_frame, DecodedEvent};
pub use dhcp::{scan_options, DhcpOptionSummary};
pub use ethernet::EthernetHeader;
pub use ipv4::Ipv4Header;
pub use udp::UdpHeader;

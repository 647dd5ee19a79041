//! Session-scoped values: link identity, spoof intents, raw frames

use std::fmt;
use std::net::Ipv4Addr;
use std::time::SystemTime;

use crate::types::{ArpOperation, MacAddr};
use crate::Result;

/// The local identities frames are crafted from: this host's MAC/IP and
/// the resolved default gateway's MAC/IP.
///
/// Built once at session start and passed by immutable reference into
/// every build call; refreshing it means re-running resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkContext {
    /// This host's MAC address on the capture interface
    pub our_mac: MacAddr,
    /// This host's IPv4 address on the capture interface
    pub our_ip: Ipv4Addr,
    /// The default gateway's real MAC address
    pub gateway_mac: MacAddr,
    /// The default gateway's IPv4 address
    pub gateway_ip: Ipv4Addr,
}

impl LinkContext {
    pub fn new(
        our_mac: MacAddr,
        our_ip: Ipv4Addr,
        gateway_mac: MacAddr,
        gateway_ip: Ipv4Addr,
    ) -> Self {
        Self {
            our_mac,
            our_ip,
            gateway_mac,
            gateway_ip,
        }
    }
}

impl fmt::Display for LinkContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "host {} ({}), gateway {} ({})",
            self.our_ip, self.our_mac, self.gateway_ip, self.gateway_mac
        )
    }
}

/// A single spoofed-ARP send: who to hit and which sender identity to claim.
///
/// With `poison` set the frame claims the gateway's IP from this host's
/// MAC, binding gateway-IP to attacker-MAC in the target's cache. With it
/// clear the frame carries the gateway's real MAC/IP, restoring the true
/// mapping (rearp).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpoofIntent {
    /// Target's MAC address (Ethernet destination and ARP target)
    pub target_mac: MacAddr,
    /// Target's IPv4 address
    pub target_ip: Ipv4Addr,
    /// ARP operation to claim
    pub operation: ArpOperation,
    /// Poison (claim our MAC) or rearp (claim the gateway's real MAC)
    pub poison: bool,
}

impl SpoofIntent {
    /// Intent that poisons the target's gateway mapping
    pub fn poison(target_mac: MacAddr, target_ip: Ipv4Addr) -> Self {
        Self {
            target_mac,
            target_ip,
            operation: ArpOperation::Reply,
            poison: true,
        }
    }

    /// Intent that restores the target's true gateway mapping
    pub fn rearp(target_mac: MacAddr, target_ip: Ipv4Addr) -> Self {
        Self {
            target_mac,
            target_ip,
            operation: ArpOperation::Reply,
            poison: false,
        }
    }
}

/// A captured raw frame
#[derive(Debug, Clone)]
pub struct RawFrame {
    /// When the frame was captured
    pub timestamp: SystemTime,
    /// Captured bytes, possibly truncated at the snapshot length
    pub data: Vec<u8>,
    /// On-wire length as reported by the capture; may exceed `data.len()`
    pub declared_len: usize,
}

impl RawFrame {
    /// Create a frame whose declared length matches the captured bytes
    pub fn new(data: Vec<u8>) -> Self {
        let declared_len = data.len();
        Self {
            timestamp: SystemTime::now(),
            data,
            declared_len,
        }
    }

    /// Create a frame with an explicit capture-reported length
    pub fn with_declared_len(data: Vec<u8>, declared_len: usize) -> Self {
        Self {
            timestamp: SystemTime::now(),
            data,
            declared_len,
        }
    }

    /// Captured bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Whether the snapshot length cut the frame short
    pub fn is_truncated(&self) -> bool {
        self.declared_len > self.data.len()
    }
}

/// Seam over raw Ethernet injection so probe and spoof drivers can run
/// against an in-memory sink in tests.
pub trait FrameSender {
    /// Inject one raw Ethernet frame
    fn send(&mut self, frame: &[u8]) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spoof_intent_constructors() {
        let mac = MacAddr::new([2, 2, 2, 2, 2, 2]);
        let ip = Ipv4Addr::new(192, 168, 1, 50);

        let poison = SpoofIntent::poison(mac, ip);
        assert!(poison.poison);
        assert_eq!(poison.operation, ArpOperation::Reply);

        let rearp = SpoofIntent::rearp(mac, ip);
        assert!(!rearp.poison);
        assert_eq!(rearp.target_ip, ip);
    }

    #[test]
    fn test_raw_frame_truncation() {
        let full = RawFrame::new(vec![0u8; 60]);
        assert!(!full.is_truncated());
        assert_eq!(full.declared_len, 60);

        let cut = RawFrame::with_declared_len(vec![0u8; 60], 1514);
        assert!(cut.is_truncated());
    }

    #[test]
    fn test_link_context_display() {
        let link = LinkContext::new(
            MacAddr::new([0xaa, 0, 0, 0, 0, 1]),
            Ipv4Addr::new(10, 0, 0, 2),
            MacAddr::new([0xbb, 0, 0, 0, 0, 1]),
            Ipv4Addr::new(10, 0, 0, 1),
        );
        let text = link.to_string();
        assert!(text.contains("10.0.0.2"));
        assert!(text.contains("BB:00:00:00:00:01"));
    }
}

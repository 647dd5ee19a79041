//! IPv4 header parsing

use std::net::Ipv4Addr;

/// Minimum IPv4 header size (no options)
pub const MIN_HEADER_LEN: usize = 20;

/// Parsed IPv4 header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Header {
    /// Header length in bytes (IHL * 4), at least 20
    pub header_len: usize,
    /// Payload protocol number
    pub protocol: u8,
    /// Source address
    pub source: Ipv4Addr,
    /// Destination address
    pub destination: Ipv4Addr,
}

impl Ipv4Header {
    /// Parse an IPv4 header from the start of `data`.
    ///
    /// Returns `None` unless at least 20 bytes are present, the IHL-derived
    /// header length fits within `data`, and the version field is 4.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < MIN_HEADER_LEN {
            return None;
        }

        let version = data[0] >> 4;
        let header_len = usize::from(data[0] & 0x0f) * 4;
        if header_len < MIN_HEADER_LEN || data.len() < header_len {
            return None;
        }
        if version != 4 {
            return None;
        }

        let protocol = data[9];
        let source = Ipv4Addr::new(data[12], data[13], data[14], data[15]);
        let destination = Ipv4Addr::new(data[16], data[17], data[18], data[19]);

        Some(Self {
            header_len,
            protocol,
            source,
            destination,
        })
    }
}

//! UDP header parsing

/// UDP header size in bytes
pub const HEADER_LEN: usize = 8;

/// Parsed UDP header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UdpHeader {
    /// Source port
    pub source_port: u16,
    /// Destination port
    pub dest_port: u16,
    /// Declared datagram length including this header; not required to
    /// match the bytes actually present
    pub length: u16,
}

impl UdpHeader {
    /// Parse a UDP header from the start of `data`.
    ///
    /// Returns `None` when fewer than 8 bytes are present. The checksum
    /// is not verified.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < HEADER_LEN {
            return None;
        }

        Some(Self {
            source_port: u16::from_be_bytes([data[0], data[1]]),
            dest_port: u16::from_be_bytes([data[2], data[3]]),
            length: u16::from_be_bytes([data[4], data[5]]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lanprowl_core::types::ports;

    #[test]
    fn test_parse_header() {
        let data = [0x00, 0x44, 0x00, 0x43, 0x01, 0x20, 0xab, 0xcd];
        let hdr = UdpHeader::parse(&data).unwrap();
        assert_eq!(hdr.source_port, ports::DHCP_CLIENT);
        assert_eq!(hdr.dest_port, ports::DHCP_SERVER);
        assert_eq!(hdr.length, 0x0120);
    }

    #[test]
    fn test_parse_rejects_short_input() {
        for len in 0..HEADER_LEN {
            assert!(UdpHeader::parse(&vec![0u8; len]).is_none());
        }
    }
}

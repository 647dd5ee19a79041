//! Ethernet header parsing

use lanprowl_core::MacAddr;

/// Ethernet header size in bytes
pub const HEADER_LEN: usize = 14;

/// Parsed Ethernet header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthernetHeader {
    /// Destination MAC
    pub destination: MacAddr,
    /// Source MAC
    pub source: MacAddr,
    /// EtherType (network order on the wire)
    pub ethertype: u16,
}

impl EthernetHeader {
    /// Parse an Ethernet header from the start of `data`.
    ///
    /// Returns `None` when fewer than 14 bytes are present.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < HEADER_LEN {
            return None;
        }

        let mut destination = [0u8; 6];
        destination.copy_from_slice(&data[0..6]);

        let mut source = [0u8; 6];
        source.copy_from_slice(&data[6..12]);

        let ethertype = u16::from_be_bytes([data[12], data[13]]);

        Some(Self {
            destination: MacAddr(destination),
            source: MacAddr(source),
            ethertype,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lanprowl_core::types::ethertypes;

    #[test]
    fn test_parse_header() {
        let mut data = Vec::new();
        data.extend_from_slice(&[0xff; 6]);
        data.extend_from_slice(&[0x11, 0x22, 0x33, 0x44, 0x55, 0x66]);
        data.extend_from_slice(&[0x08, 0x06]);

        let hdr = EthernetHeader::parse(&data).unwrap();
        assert!(hdr.destination.is_broadcast());
        assert_eq!(hdr.source, MacAddr::new([0x11, 0x22, 0x33, 0x44, 0x55, 0x66]));
        assert_eq!(hdr.ethertype, ethertypes::ARP);
    }

    #[test]
    fn test_parse_rejects_short_input() {
        for len in 0..HEADER_LEN {
            assert!(EthernetHeader::parse(&vec![0u8; len]).is_none());
        }
    }

    #[test]
    fn test_parse_ignores_trailing_bytes() {
        let mut data = vec![0u8; 14];
        data[12] = 0x08;
        data[13] = 0x00;
        data.extend_from_slice(&[0xaa; 40]);

        let hdr = EthernetHeader::parse(&data).unwrap();
        assert_eq!(hdr.ethertype, ethertypes::IPV4);
    }
}

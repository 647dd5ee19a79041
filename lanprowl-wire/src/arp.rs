//! ARP message parsing and serialization

use bytes::{BufMut, BytesMut};
use lanprowl_core::{ArpOperation, MacAddr};
use std::net::Ipv4Addr;

/// ARP payload size for Ethernet/IPv4 (bytes)
pub const MESSAGE_LEN: usize = 28;

/// Hardware type: Ethernet
pub const HTYPE_ETHERNET: u16 = 1;

/// Protocol type: IPv4
pub const PTYPE_IPV4: u16 = 0x0800;

/// An Ethernet/IPv4 ARP message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArpMessage {
    /// Hardware type (1 for Ethernet)
    pub htype: u16,
    /// Protocol type (0x0800 for IPv4)
    pub ptype: u16,
    /// Hardware address length (6 for MAC)
    pub hlen: u8,
    /// Protocol address length (4 for IPv4)
    pub plen: u8,
    /// Operation
    pub operation: ArpOperation,
    /// Sender hardware address
    pub sender_mac: MacAddr,
    /// Sender protocol address
    pub sender_ip: Ipv4Addr,
    /// Target hardware address
    pub target_mac: MacAddr,
    /// Target protocol address
    pub target_ip: Ipv4Addr,
}

impl ArpMessage {
    /// Create a new ARP request. The target hardware address is zero,
    /// as on the wire for a who-has probe.
    pub fn new_request(sender_mac: MacAddr, sender_ip: Ipv4Addr, target_ip: Ipv4Addr) -> Self {
        Self {
            htype: HTYPE_ETHERNET,
            ptype: PTYPE_IPV4,
            hlen: 6,
            plen: 4,
            operation: ArpOperation::Request,
            sender_mac,
            sender_ip,
            target_mac: MacAddr::zero(),
            target_ip,
        }
    }

    /// Create a new ARP reply
    pub fn new_reply(
        sender_mac: MacAddr,
        sender_ip: Ipv4Addr,
        target_mac: MacAddr,
        target_ip: Ipv4Addr,
    ) -> Self {
        Self {
            htype: HTYPE_ETHERNET,
            ptype: PTYPE_IPV4,
            hlen: 6,
            plen: 4,
            operation: ArpOperation::Reply,
            sender_mac,
            sender_ip,
            target_mac,
            target_ip,
        }
    }

    /// Parse an ARP message from bytes.
    ///
    /// Returns `None` when fewer than 28 bytes are present or the
    /// operation field is neither request nor reply. Hardware and
    /// protocol types are carried through raw; callers decide what to
    /// accept.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < MESSAGE_LEN {
            return None;
        }

        let htype = u16::from_be_bytes([data[0], data[1]]);
        let ptype = u16::from_be_bytes([data[2], data[3]]);
        let hlen = data[4];
        let plen = data[5];
        let operation = ArpOperation::from_u16(u16::from_be_bytes([data[6], data[7]]))?;

        let mut sender_mac = [0u8; 6];
        sender_mac.copy_from_slice(&data[8..14]);
        let sender_ip = Ipv4Addr::new(data[14], data[15], data[16], data[17]);

        let mut target_mac = [0u8; 6];
        target_mac.copy_from_slice(&data[18..24]);
        let target_ip = Ipv4Addr::new(data[24], data[25], data[26], data[27]);

        Some(Self {
            htype,
            ptype,
            hlen,
            plen,
            operation,
            sender_mac: MacAddr(sender_mac),
            sender_ip,
            target_mac: MacAddr(target_mac),
            target_ip,
        })
    }

    /// Check that hardware and protocol types are Ethernet/IPv4
    pub fn is_ethernet_ipv4(&self) -> bool {
        self.htype == HTYPE_ETHERNET && self.ptype == PTYPE_IPV4
    }

    /// Serialize to the 28-byte wire form
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = BytesMut::with_capacity(MESSAGE_LEN);

        buf.put_u16(self.htype);
        buf.put_u16(self.ptype);
        buf.put_u8(self.hlen);
        buf.put_u8(self.plen);
        buf.put_u16(self.operation.to_u16());
        buf.put_slice(self.sender_mac.as_bytes());
        buf.put_slice(&self.sender_ip.octets());
        buf.put_slice(self.target_mac.as_bytes());
        buf.put_slice(&self.target_ip.octets());

        buf.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_has_zero_target_mac() {
        let msg = ArpMessage::new_request(
            MacAddr::new([0x11, 0x22, 0x33, 0x44, 0x55, 0x66]),
            Ipv4Addr::new(192, 168, 1, 1),
            Ipv4Addr::new(192, 168, 1, 2),
        );

        assert_eq!(msg.operation, ArpOperation::Request);
        assert!(msg.target_mac.is_zero());
        assert!(msg.is_ethernet_ipv4());
    }

    #[test]
    fn test_serialize_parse_roundtrip() {
        let msg = ArpMessage::new_reply(
            MacAddr::new([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]),
            Ipv4Addr::new(10, 0, 0, 1),
            MacAddr::new([0x11, 0x22, 0x33, 0x44, 0x55, 0x66]),
            Ipv4Addr::new(10, 0, 0, 2),
        );

        let bytes = msg.serialize();
        assert_eq!(bytes.len(), MESSAGE_LEN);

        let parsed = ArpMessage::parse(&bytes).unwrap();
        assert_eq!(parsed, msg);
    }

    #[test]
    fn test_parse_rejects_short_input() {
        let msg = ArpMessage::new_request(
            MacAddr::zero(),
            Ipv4Addr::UNSPECIFIED,
            Ipv4Addr::new(10, 0, 0, 9),
        );
        let bytes = msg.serialize();

        for len in 0..MESSAGE_LEN {
            assert!(ArpMessage::parse(&bytes[..len]).is_none());
        }
    }

    #[test]
    fn test_parse_rejects_unknown_operation() {
        let mut bytes = ArpMessage::new_request(
            MacAddr::zero(),
            Ipv4Addr::UNSPECIFIED,
            Ipv4Addr::new(10, 0, 0, 9),
        )
        .serialize();

        // RARP request opcode
        bytes[6] = 0;
        bytes[7] = 3;
        assert!(ArpMessage::parse(&bytes).is_none());

        bytes[7] = 0;
        assert!(ArpMessage::parse(&bytes).is_none());
    }

    #[test]
    fn test_non_ethernet_hardware_type_carried_raw() {
        let mut bytes = ArpMessage::new_request(
            MacAddr::zero(),
            Ipv4Addr::UNSPECIFIED,
            Ipv4Addr::new(10, 0, 0, 9),
        )
        .serialize();

        // Token Ring hardware type
        bytes[1] = 6;
        let parsed = ArpMessage::parse(&bytes).unwrap();
        assert!(!parsed.is_ethernet_ipv4());
    }
}

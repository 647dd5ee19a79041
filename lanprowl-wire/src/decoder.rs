//! Frame decoding: raw captured bytes to observed facts
//!
//! One pass over a captured Ethernet frame, walking ARP or
//! IPv4/UDP/DHCP/DNS headers with every read bounded. Hostile and
//! truncated input is expected; nothing here errors or panics, a frame
//! that fails any structural check simply carries no signal.

use std::fmt;
use std::net::Ipv4Addr;

use lanprowl_core::types::{ethertypes, ip_protocols, ports};
use lanprowl_core::{ArpOperation, MacAddr, RawFrame};

use crate::arp::ArpMessage;
use crate::ethernet::{self, EthernetHeader};
use crate::ipv4::Ipv4Header;
use crate::udp::{self, UdpHeader};
use crate::{dhcp, dns};

/// What one captured frame told us
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedEvent {
    /// An ARP request or reply naming its sender
    ArpObserved {
        sender_ip: Ipv4Addr,
        sender_mac: MacAddr,
        operation: ArpOperation,
    },
    /// A bare IPv4 sighting with no deeper payload decoded
    IpObserved {
        source_ip: Ipv4Addr,
        source_mac: MacAddr,
    },
    /// A DHCP client asking for an address
    DhcpRequest {
        requested_ip: Ipv4Addr,
        server_ip: Option<Ipv4Addr>,
        client_mac: MacAddr,
        client_hostname: Option<String>,
    },
    /// A DNS query and its loosely rendered name
    DnsQuery {
        source_ip: Ipv4Addr,
        source_mac: MacAddr,
        query_text: String,
    },
    /// Frame carried nothing of interest, or was absent or truncated
    NoSignal,
}

impl fmt::Display for DecodedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedEvent::ArpObserved {
                sender_ip,
                sender_mac,
                operation,
            } => write!(f, "arp {} from {} ({})", operation, sender_ip, sender_mac),
            DecodedEvent::IpObserved {
                source_ip,
                source_mac,
            } => write!(f, "ip {} ({})", source_ip, source_mac),
            DecodedEvent::DhcpRequest {
                requested_ip,
                client_mac,
                client_hostname,
                ..
            } => write!(
                f,
                "dhcp request for {} by {} [name={}]",
                requested_ip,
                client_mac,
                client_hostname.as_deref().unwrap_or("")
            ),
            DecodedEvent::DnsQuery {
                source_ip,
                query_text,
                ..
            } => write!(f, "dns query from {} [{}]", source_ip, query_text),
            DecodedEvent::NoSignal => write!(f, "no signal"),
        }
    }
}

/// Decode one raw frame.
///
/// `declared_len` is the capture-reported on-wire length; it may exceed
/// `raw.len()` when the snapshot length truncated the frame, and all
/// bounds use the smaller of the two. Total over arbitrary input.
pub fn decode(raw: &[u8], declared_len: usize) -> DecodedEvent {
    let frame = &raw[..raw.len().min(declared_len)];

    let Some(eth) = EthernetHeader::parse(frame) else {
        return DecodedEvent::NoSignal;
    };
    let rest = &frame[ethernet::HEADER_LEN..];

    match eth.ethertype {
        ethertypes::ARP => decode_arp(rest),
        ethertypes::IPV4 => decode_ipv4(&eth, rest),
        _ => DecodedEvent::NoSignal,
    }
}

/// Decode a captured frame, honoring its capture-reported length
pub fn decode_frame(frame: &RawFrame) -> DecodedEvent {
    decode(frame.data(), frame.declared_len)
}

fn decode_arp(data: &[u8]) -> DecodedEvent {
    match ArpMessage::parse(data) {
        Some(arp) if arp.is_ethernet_ipv4() => DecodedEvent::ArpObserved {
            sender_ip: arp.sender_ip,
            sender_mac: arp.sender_mac,
            operation: arp.operation,
        },
        _ => DecodedEvent::NoSignal,
    }
}

fn decode_ipv4(eth: &EthernetHeader, data: &[u8]) -> DecodedEvent {
    let Some(ip) = Ipv4Header::parse(data) else {
        return DecodedEvent::NoSignal;
    };

    // The fallback when nothing deeper matches.
    let baseline = DecodedEvent::IpObserved {
        source_ip: ip.source,
        source_mac: eth.source,
    };

    if ip.protocol != ip_protocols::UDP {
        return baseline;
    }
    let udp_region = &data[ip.header_len..];
    let Some(head) = UdpHeader::parse(udp_region) else {
        return baseline;
    };

    // The declared datagram must fit inside what was captured, else the
    // frame is only a bare sighting.
    let udp_total = usize::from(head.length);
    if udp_total < udp::HEADER_LEN || udp_region.len() < udp_total {
        return baseline;
    }
    let payload = &udp_region[udp::HEADER_LEN..udp_total];

    if head.source_port == ports::DHCP_CLIENT
        && head.dest_port == ports::DHCP_SERVER
        && payload.len() >= dhcp::OPTIONS_OFFSET
    {
        // A matched-but-incomplete DHCP exchange is not reported as a
        // bare IP sighting.
        return decode_dhcp(eth, payload);
    }

    if head.dest_port == ports::DNS {
        if let Some(query_text) = dns::extract_query(payload) {
            return DecodedEvent::DnsQuery {
                source_ip: ip.source,
                source_mac: eth.source,
                query_text,
            };
        }
    }

    baseline
}

fn decode_dhcp(eth: &EthernetHeader, payload: &[u8]) -> DecodedEvent {
    if !dhcp::is_client_boot_request(payload) {
        return DecodedEvent::NoSignal;
    }

    let summary = dhcp::scan_options(&payload[dhcp::OPTIONS_OFFSET..]);
    match (summary.message_subtype, summary.requested_ip) {
        (Some(dhcp::MESSAGE_TYPE_REQUEST), Some(requested_ip))
            if !requested_ip.is_unspecified() =>
        {
            DecodedEvent::DhcpRequest {
                requested_ip,
                server_ip: summary.server_ip,
                client_mac: eth.source,
                client_hostname: summary.client_hostname,
            }
        }
        _ => DecodedEvent::NoSignal,
    }
}

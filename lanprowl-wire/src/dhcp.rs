//! DHCP boot-request validation and option scanning
//!
//! Only the client-to-server half of the protocol is understood: enough
//! of the fixed BOOTP header to gate on, and a bounded walk over the
//! variable options region.

use lanprowl_core::MacAddr;
use std::net::Ipv4Addr;

/// DHCP magic cookie value
pub const DHCP_MAGIC_COOKIE: u32 = 0x63825363;

/// BOOTREQUEST opcode
pub const BOOTREQUEST: u8 = 1;

/// Ethernet hardware address length
pub const HLEN_ETHERNET: u8 = 6;

/// Ethernet hardware type in a client-identifier option
pub const HTYPE_ETHERNET: u8 = 1;

/// Size of the fixed BOOTP header preceding the magic cookie
pub const FIXED_HEADER_LEN: usize = 236;

/// Offset of the first option: fixed header plus the 4-byte cookie
pub const OPTIONS_OFFSET: usize = 240;

/// DHCPREQUEST message subtype
pub const MESSAGE_TYPE_REQUEST: u8 = 3;

/// Longest host name recorded from option 12
pub const HOSTNAME_MAX: usize = 63;

/// DHCP option codes (RFC 2132)
pub mod options {
    pub const PAD: u8 = 0;
    pub const HOSTNAME: u8 = 12;
    pub const REQUESTED_IP: u8 = 50;
    pub const MESSAGE_TYPE: u8 = 53;
    pub const SERVER_ID: u8 = 54;
    pub const CLIENT_ID: u8 = 61;
    pub const END: u8 = 255;
}

/// Facts collected from one walk over a DHCP options region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DhcpOptionSummary {
    /// DHCP message subtype from option 53
    pub message_subtype: Option<u8>,
    /// Host name from option 12, truncated to [`HOSTNAME_MAX`] bytes
    pub client_hostname: Option<String>,
    /// Requested address from option 50
    pub requested_ip: Option<Ipv4Addr>,
    /// Server identifier from option 54
    pub server_ip: Option<Ipv4Addr>,
    /// Client hardware address from a well-formed option 61
    pub client_id: Option<MacAddr>,
}

/// Check the fixed-header invariants of a client boot request: the magic
/// cookie must be present and correct, the opcode BOOTREQUEST, and the
/// hardware address length Ethernet's.
pub fn is_client_boot_request(payload: &[u8]) -> bool {
    if payload.len() < OPTIONS_OFFSET {
        return false;
    }

    let magic = u32::from_be_bytes([
        payload[FIXED_HEADER_LEN],
        payload[FIXED_HEADER_LEN + 1],
        payload[FIXED_HEADER_LEN + 2],
        payload[FIXED_HEADER_LEN + 3],
    ]);

    magic == DHCP_MAGIC_COOKIE && payload[0] == BOOTREQUEST && payload[2] == HLEN_ETHERNET
}

/// Walk a DHCP options region of `(type, length, value)` triples.
///
/// The walk stops at an end option, at a truncated option header, or at
/// an option whose declared length would run past the buffer; whatever
/// was collected up to that point is returned. Unknown options are
/// skipped by their declared length, a later occurrence of a recognized
/// option overwrites an earlier one, and no read ever crosses the end of
/// `options`.
pub fn scan_options(data: &[u8]) -> DhcpOptionSummary {
    let mut summary = DhcpOptionSummary::default();
    let mut offset = 0usize;

    while offset < data.len() {
        let code = data[offset];

        // Pad is a bare byte, no length field follows.
        if code == options::PAD {
            offset += 1;
            continue;
        }
        if code == options::END {
            break;
        }
        if offset + 2 > data.len() {
            break;
        }

        let len = usize::from(data[offset + 1]);
        let value_start = offset + 2;
        if value_start + len > data.len() {
            break;
        }
        let value = &data[value_start..value_start + len];

        match code {
            options::MESSAGE_TYPE => {
                if !value.is_empty() {
                    summary.message_subtype = Some(value[0]);
                }
            }
            options::HOSTNAME => {
                let take = value.len().min(HOSTNAME_MAX);
                summary.client_hostname =
                    Some(String::from_utf8_lossy(&value[..take]).into_owned());
            }
            options::CLIENT_ID => {
                // Only the Ethernet form is meaningful: hardware type
                // byte followed by six MAC octets.
                if len == 7 && value[0] == HTYPE_ETHERNET {
                    let mut mac = [0u8; 6];
                    mac.copy_from_slice(&value[1..7]);
                    summary.client_id = Some(MacAddr(mac));
                }
            }
            options::SERVER_ID => {
                if len == 4 {
                    summary.server_ip =
                        Some(Ipv4Addr::new(value[0], value[1], value[2], value[3]));
                }
            }
            options::REQUESTED_IP => {
                if len == 4 {
                    summary.requested_ip =
                        Some(Ipv4Addr::new(value[0], value[1], value[2], value[3]));
                }
            }
            _ => {}
        }

        offset = value_start + len;
    }

    summary
}

//! Default gateway discovery from the kernel's routing and neighbor tables

use std::fmt;
use std::fs;
use std::net::Ipv4Addr;
use std::str::FromStr;

use tracing::debug;

use lanprowl_core::{MacAddr, ResolveError, Result};

const ROUTE_TABLE: &str = "/proc/net/route";
const ARP_TABLE: &str = "/proc/net/arp";

/// A resolved default gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayInfo {
    /// Gateway IPv4 address from the routing table
    pub ip: Ipv4Addr,
    /// Gateway MAC address from the neighbor table
    pub mac: MacAddr,
}

impl fmt::Display for GatewayInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.ip, self.mac)
    }
}

/// Resolve the default gateway for a device from the live kernel tables
pub fn resolve_gateway(device: &str) -> Result<GatewayInfo> {
    let route_table = fs::read_to_string(ROUTE_TABLE)?;
    let arp_table = fs::read_to_string(ARP_TABLE)?;
    resolve_gateway_from(&route_table, &arp_table, device)
}

/// Two-stage resolution over routing and neighbor table text.
///
/// Finds the device's default route first, then that gateway's neighbor
/// entry; each stage fails distinctly so callers can report which
/// lookup came up empty.
pub fn resolve_gateway_from(
    route_table: &str,
    arp_table: &str,
    device: &str,
) -> Result<GatewayInfo> {
    let ip = default_gateway_ip(route_table, device).ok_or(ResolveError::NoDefaultRoute)?;
    debug!("Default gateway for {} is {}", device, ip);

    let mac = neighbor_mac(arp_table, device, ip).ok_or(ResolveError::NoNeighborEntry)?;
    debug!("Gateway {} is at {}", ip, mac);

    Ok(GatewayInfo { ip, mac })
}

/// Scan a routing table for the device's default route.
///
/// Kernel format: whitespace-separated columns after a header line,
/// with destination and gateway as little-endian hex words.
fn default_gateway_ip(route_table: &str, device: &str) -> Option<Ipv4Addr> {
    for line in route_table.lines().skip(1) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            continue;
        }

        if fields[0] == device && fields[1] == "00000000" {
            if let Ok(gw) = u32::from_str_radix(fields[2], 16) {
                return Some(Ipv4Addr::from(gw.to_le_bytes()));
            }
        }
    }

    None
}

/// Scan a neighbor table for the gateway's MAC on the given device.
///
/// Incomplete entries (all-zero MAC) are skipped; the kernel keeps
/// those around for addresses it has given up resolving.
fn neighbor_mac(arp_table: &str, device: &str, gateway_ip: Ipv4Addr) -> Option<MacAddr> {
    let gateway_text = gateway_ip.to_string();

    for line in arp_table.lines().skip(1) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 6 {
            continue;
        }

        if fields[0] == gateway_text && fields[5] == device {
            if let Ok(mac) = MacAddr::from_str(fields[3]) {
                if !mac.is_zero() {
                    return Some(mac);
                }
            }
        }
    }

    None
}

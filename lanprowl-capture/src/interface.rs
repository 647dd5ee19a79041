//! Network interface enumeration and identity lookup

use std::net::{IpAddr, Ipv4Addr};

use pnet_datalink::{self, NetworkInterface};

use lanprowl_core::{MacAddr, Result, SessionError};

/// Information about a network interface
#[derive(Debug, Clone)]
pub struct InterfaceInfo {
    /// Interface name (e.g. "eth0", "wlan0")
    pub name: String,
    /// MAC address if the interface has one
    pub mac: Option<MacAddr>,
    /// Addresses assigned to this interface
    pub ips: Vec<IpAddr>,
    /// Whether the interface is up
    pub is_up: bool,
    /// Whether the interface is a loopback
    pub is_loopback: bool,
}

impl From<&NetworkInterface> for InterfaceInfo {
    fn from(iface: &NetworkInterface) -> Self {
        let mac = iface
            .mac
            .map(|mac| MacAddr::new([mac.0, mac.1, mac.2, mac.3, mac.4, mac.5]));
        let ips: Vec<IpAddr> = iface.ips.iter().map(|network| network.ip()).collect();

        InterfaceInfo {
            name: iface.name.clone(),
            mac,
            ips,
            is_up: iface.is_up(),
            is_loopback: iface.is_loopback(),
        }
    }
}

impl InterfaceInfo {
    /// Whether the interface is worth capturing on
    pub fn is_capture_capable(&self) -> bool {
        self.is_up && !self.is_loopback
    }

    /// First IPv4 address, if any
    pub fn primary_ipv4(&self) -> Option<Ipv4Addr> {
        self.ips.iter().find_map(|ip| match ip {
            IpAddr::V4(v4) => Some(*v4),
            IpAddr::V6(_) => None,
        })
    }
}

/// List all available network interfaces
pub fn list_interfaces() -> Result<Vec<InterfaceInfo>> {
    let interfaces = pnet_datalink::interfaces();

    if interfaces.is_empty() {
        return Err(SessionError::device(
            "no network interfaces found; are you running with sufficient privileges?",
        ));
    }

    Ok(interfaces.iter().map(InterfaceInfo::from).collect())
}

/// Get information about a specific interface by name
pub fn get_interface(name: &str) -> Result<InterfaceInfo> {
    let interfaces = pnet_datalink::interfaces();

    interfaces
        .iter()
        .find(|iface| iface.name == name)
        .map(InterfaceInfo::from)
        .ok_or_else(|| SessionError::InterfaceNotFound(name.to_string()))
}

/// This host's MAC and IPv4 identity on the named interface.
///
/// Both addresses are required for crafting frames; an interface
/// missing either fails with `NoAddress`.
pub fn interface_identity(device: &str) -> Result<(MacAddr, Ipv4Addr)> {
    let interfaces = pnet_datalink::interfaces();
    let iface = interfaces
        .into_iter()
        .find(|i| i.name == device)
        .ok_or_else(|| SessionError::InterfaceNotFound(device.to_string()))?;

    let mac = iface
        .mac
        .map(|mac| MacAddr::new([mac.0, mac.1, mac.2, mac.3, mac.4, mac.5]))
        .ok_or_else(|| SessionError::NoAddress(device.to_string()))?;

    let ip = iface
        .ips
        .iter()
        .find_map(|network| match network {
            ipnetwork::IpNetwork::V4(v4) => Some(v4.ip()),
            ipnetwork::IpNetwork::V6(_) => None,
        })
        .ok_or_else(|| SessionError::NoAddress(device.to_string()))?;

    Ok((mac, ip))
}

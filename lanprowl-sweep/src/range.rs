//! CIDR range derivation for sweeps

use std::net::Ipv4Addr;

use lanprowl_core::{Result, SessionError};

/// Derive the first and last address of a CIDR block.
///
/// Returns the whole block, network and broadcast addresses included;
/// sweeps probe those too. Prefix lengths outside `[1,32]` and anything
/// that does not parse as `<dotted-quad>/<prefix>` fail with an address
/// parse error.
pub fn scan_range(cidr: &str) -> Result<(Ipv4Addr, Ipv4Addr)> {
    let (address, prefix) = cidr
        .split_once('/')
        .ok_or_else(|| SessionError::address(format!("missing prefix length in {:?}", cidr)))?;

    let network: Ipv4Addr = address
        .parse()
        .map_err(|_| SessionError::address(format!("bad network address in {:?}", cidr)))?;

    let prefix: u32 = prefix
        .parse()
        .map_err(|_| SessionError::address(format!("bad prefix length in {:?}", cidr)))?;
    if !(1..=32).contains(&prefix) {
        return Err(SessionError::address(format!(
            "prefix length {} out of range in {:?}",
            prefix, cidr
        )));
    }

    // A /32 shift would be the full word width; handle it directly.
    let netmask: u32 = if prefix == 32 {
        u32::MAX
    } else {
        u32::MAX << (32 - prefix)
    };

    let network = u32::from(network);
    let first = network & netmask;
    let last = network | !netmask;

    Ok((Ipv4Addr::from(first), Ipv4Addr::from(last)))
}

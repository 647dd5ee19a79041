//! BPF filter builders for the capture paths

/// Default watch filter: broadcast traffic plus all ARP.
///
/// Catches ARP chatter, DHCP broadcasts and other segment-wide noise
/// while dropping the unicast bulk.
pub fn broadcast_or_arp() -> String {
    "broadcast or arp".to_string()
}

/// ARP only, for listening to sweep replies
pub fn arp_only() -> String {
    "arp".to_string()
}

/// DHCP traffic in both directions
pub fn dhcp() -> String {
    "(udp port 67 or udp port 68)".to_string()
}

/// DNS queries leaving the segment
pub fn dns_queries() -> String {
    "udp dst port 53".to_string()
}

/// Traffic to or from a single host
pub fn host(ip: &str) -> String {
    format!("host {}", ip)
}

/// Combine multiple filters with OR logic
pub fn combine_or(filters: &[&str]) -> String {
    if filters.is_empty() {
        return String::new();
    }

    filters
        .iter()
        .map(|f| format!("({})", f))
        .collect::<Vec<_>>()
        .join(" or ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_filters() {
        assert_eq!(broadcast_or_arp(), "broadcast or arp");
        assert_eq!(arp_only(), "arp");
        assert_eq!(dns_queries(), "udp dst port 53");
    }

    #[test]
    fn test_dhcp_uses_both_ports() {
        let filter = dhcp();
        assert!(filter.contains("67"));
        assert!(filter.contains("68"));
    }

    #[test]
    fn test_host_filter() {
        assert_eq!(host("192.168.1.1"), "host 192.168.1.1");
    }

    #[test]
    fn test_combine_or() {
        let combined = combine_or(&[&dhcp(), &dns_queries()]);
        assert_eq!(
            combined,
            "((udp port 67 or udp port 68)) or (udp dst port 53)"
        );

        let empty: Vec<&str> = vec![];
        assert_eq!(combine_or(&empty), "");
    }
}

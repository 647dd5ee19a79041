//! Probe and spoof drivers over a frame sink

use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use lanprowl_core::{FrameSender, LinkContext, Result, SpoofIntent};
use lanprowl_wire::{build_probe, build_spoof};

use crate::range::scan_range;

/// Default number of passes over a swept range.
///
/// ARP requests are fire-and-forget broadcast; a second pass catches
/// hosts that missed the first.
const DEFAULT_REPEATS: u32 = 2;

/// Default pacing between spoofed frames
const DEFAULT_SPOOF_INTERVAL: Duration = Duration::from_secs(1);

/// Drives ARP probe emission over address ranges
pub struct Sweeper {
    link: LinkContext,
    repeats: u32,
    stop: Arc<AtomicBool>,
}

impl Sweeper {
    pub fn new(link: LinkContext) -> Self {
        Self {
            link,
            repeats: DEFAULT_REPEATS,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set how many passes each sweep makes (at least one)
    pub fn with_repeats(mut self, repeats: u32) -> Self {
        self.repeats = repeats.max(1);
        self
    }

    /// Handle that cancels a running sweep from another thread
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Probe a single host, once per configured repeat
    pub fn probe_host(&self, sink: &mut dyn FrameSender, ip: Ipv4Addr) -> Result<u64> {
        let mut sent = 0u64;
        for _ in 0..self.repeats {
            sink.send(&build_probe(&self.link, ip))?;
            sent += 1;
        }

        debug!("Probed {} with {} requests", ip, sent);
        Ok(sent)
    }

    /// Probe every address in a CIDR block, network and broadcast
    /// addresses included.
    ///
    /// The stop flag is checked between sends, so a wide sweep can be
    /// canceled mid-flight; a canceled sweep returns the count sent so
    /// far.
    pub fn sweep(&self, sink: &mut dyn FrameSender, cidr: &str) -> Result<u64> {
        let (first, last) = scan_range(cidr)?;
        info!("Sweeping {} ({} through {})", cidr, first, last);

        let end = u32::from(last);
        let mut sent = 0u64;

        for _ in 0..self.repeats {
            let mut current = u32::from(first);

            loop {
                if self.stop.load(Ordering::SeqCst) {
                    debug!("Sweep of {} canceled after {} probes", cidr, sent);
                    return Ok(sent);
                }

                sink.send(&build_probe(&self.link, Ipv4Addr::from(current)))?;
                sent += 1;

                if current == end {
                    break;
                }
                current += 1;
            }
        }

        debug!("Sweep of {} done, {} probes sent", cidr, sent);
        Ok(sent)
    }
}

/// Drives spoofed-ARP emission against one target
pub struct Spoofer {
    link: LinkContext,
    interval: Duration,
    stop: Arc<AtomicBool>,
}

impl Spoofer {
    pub fn new(link: LinkContext) -> Self {
        Self {
            link,
            interval: DEFAULT_SPOOF_INTERVAL,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the pacing between frames
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Handle that stops a running spoof loop from another thread
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Send one spoofed frame for the intent
    pub fn send_once(&self, sink: &mut dyn FrameSender, intent: &SpoofIntent) -> Result<()> {
        sink.send(&build_spoof(&self.link, intent))
    }

    /// Send spoofed frames for the intent, one per interval, until the
    /// stop flag is raised or `count` frames have gone out. A zero
    /// count means no limit.
    pub fn run(
        &self,
        sink: &mut dyn FrameSender,
        intent: &SpoofIntent,
        count: u64,
    ) -> Result<u64> {
        let kind = if intent.poison { "poison" } else { "rearp" };
        info!(
            "Sending {} frames to {} ({})",
            kind, intent.target_ip, intent.target_mac
        );

        let mut sent = 0u64;
        while !self.stop.load(Ordering::SeqCst) {
            self.send_once(sink, intent)?;
            sent += 1;

            if count != 0 && sent >= count {
                break;
            }
            thread::sleep(self.interval);
        }

        info!("Sent {} {} frames to {}", sent, kind, intent.target_ip);
        Ok(sent)
    }
}

//! Packet capture wrapper around pcap

use pcap::{Active, Capture, Device, Linktype};
use tracing::{debug, info};

use lanprowl_core::{RawFrame, Result, SessionError};

/// Default snapshot length (maximum bytes per frame)
const DEFAULT_SNAPLEN: i32 = 1024;

/// Default read timeout (milliseconds)
const DEFAULT_TIMEOUT_MS: i32 = 1000;

/// Configuration for packet capture
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Device to capture on (e.g. "eth0", "wlan0")
    pub device: String,
    /// Maximum bytes to capture per frame
    pub snaplen: i32,
    /// Read timeout in milliseconds
    pub timeout_ms: i32,
    /// Enable promiscuous mode
    pub promiscuous: bool,
    /// Enable immediate mode (deliver frames as they arrive)
    pub immediate_mode: bool,
    /// BPF filter to apply, if any
    pub filter: Option<String>,
}

impl CaptureConfig {
    /// Configuration with the watch-loop defaults for a device
    pub fn new(device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            snaplen: DEFAULT_SNAPLEN,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            promiscuous: true,
            immediate_mode: true,
            filter: None,
        }
    }

    /// Set the BPF filter
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

/// Counters as reported by the capture device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureStats {
    /// Frames received by the capture
    pub received: u32,
    /// Frames dropped because buffers were full
    pub dropped: u32,
    /// Frames dropped by the interface or its driver
    pub if_dropped: u32,
}

impl From<pcap::Stat> for CaptureStats {
    fn from(stat: pcap::Stat) -> Self {
        Self {
            received: stat.received,
            dropped: stat.dropped,
            if_dropped: stat.if_dropped,
        }
    }
}

/// An open capture handle frames are pulled from.
///
/// Single-owner, blocking pull model: `next_frame` blocks up to the
/// configured read timeout and reports a quiet wire as `Ok(None)`.
pub struct FrameCapture {
    device: String,
    capture: Capture<Active>,
}

impl FrameCapture {
    /// Open a capture per the given configuration
    pub fn open(config: &CaptureConfig) -> Result<Self> {
        debug!("Opening capture on {}", config.device);

        let device = Device::from(config.device.as_str());
        let mut capture = Capture::from_device(device)
            .map_err(|e| SessionError::device(format!("failed to create capture: {}", e)))?
            .promisc(config.promiscuous)
            .snaplen(config.snaplen)
            .timeout(config.timeout_ms)
            .immediate_mode(config.immediate_mode)
            .open()
            .map_err(|e| {
                SessionError::device(format!("failed to open {}: {}", config.device, e))
            })?;

        if capture.get_datalink() != Linktype::ETHERNET {
            return Err(SessionError::device(format!(
                "{} is not an Ethernet device",
                config.device
            )));
        }

        if let Some(filter) = &config.filter {
            capture.filter(filter, true).map_err(|e| {
                SessionError::device(format!("invalid filter {:?}: {}", filter, e))
            })?;
            debug!("Applied filter: {}", filter);
        }

        info!("Capture open on {}", config.device);
        Ok(Self {
            device: config.device.clone(),
            capture,
        })
    }

    /// Pull the next frame.
    ///
    /// Returns `Ok(None)` when the read timed out with nothing to
    /// deliver; the caller just polls again.
    pub fn next_frame(&mut self) -> Result<Option<RawFrame>> {
        match self.capture.next_packet() {
            Ok(packet) => {
                let declared_len = packet.header.len as usize;
                Ok(Some(RawFrame::with_declared_len(
                    packet.data.to_vec(),
                    declared_len,
                )))
            }
            Err(pcap::Error::TimeoutExpired) => Ok(None),
            Err(e) => Err(SessionError::device(format!(
                "capture read on {} failed: {}",
                self.device, e
            ))),
        }
    }

    /// Counters from the capture device
    pub fn stats(&mut self) -> Result<CaptureStats> {
        let stats = self
            .capture
            .stats()
            .map_err(|e| SessionError::device(format!("failed to get stats: {}", e)))?;
        Ok(CaptureStats::from(stats))
    }

    /// Device this capture reads from
    pub fn device(&self) -> &str {
        &self.device
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters;

    #[test]
    fn test_capture_config_defaults() {
        let config = CaptureConfig::new("wlan0");
        assert_eq!(config.device, "wlan0");
        assert_eq!(config.snaplen, DEFAULT_SNAPLEN);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(config.promiscuous);
        assert!(config.immediate_mode);
        assert!(config.filter.is_none());
    }

    #[test]
    fn test_capture_config_with_filter() {
        let config = CaptureConfig::new("eth0").with_filter(filters::broadcast_or_arp());
        assert_eq!(config.filter.as_deref(), Some("broadcast or arp"));
    }

    #[test]
    fn test_open_nonexistent_device_fails() {
        let config = CaptureConfig::new("nonexistent_device_xyz");
        let result = FrameCapture::open(&config);
        assert!(result.is_err());
    }

    #[test]
    fn test_capture_stats_default() {
        let stats = CaptureStats::default();
        assert_eq!(stats.received, 0);
        assert_eq!(stats.dropped, 0);
        assert_eq!(stats.if_dropped, 0);
    }
}

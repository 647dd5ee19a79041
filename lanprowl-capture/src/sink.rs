//! Raw frame injection through the OS datalink layer

use pnet_datalink::{self, Channel, DataLinkSender};
use tracing::debug;

use lanprowl_core::{FrameSender, Result, SessionError};

/// Raw Ethernet injection handle for one interface
pub struct FrameSink {
    device: String,
    tx: Box<dyn DataLinkSender>,
}

impl FrameSink {
    /// Open a sending channel on the named interface
    pub fn open(device: &str) -> Result<Self> {
        let interface = pnet_datalink::interfaces()
            .into_iter()
            .find(|iface| iface.name == device)
            .ok_or_else(|| SessionError::InterfaceNotFound(device.to_string()))?;

        let (tx, _rx) = match pnet_datalink::channel(&interface, Default::default()) {
            Ok(Channel::Ethernet(tx, rx)) => (tx, rx),
            Ok(_) => return Err(SessionError::device("unsupported channel type")),
            Err(e) => {
                return Err(SessionError::device(format!(
                    "failed to create channel on {}: {}",
                    device, e
                )))
            }
        };

        debug!("Send channel open on {}", device);
        Ok(Self {
            device: device.to_string(),
            tx,
        })
    }

    /// Device this sink injects on
    pub fn device(&self) -> &str {
        &self.device
    }
}

impl FrameSender for FrameSink {
    fn send(&mut self, frame: &[u8]) -> Result<()> {
        self.tx
            .send_to(frame, None)
            .ok_or_else(|| SessionError::device("send channel closed"))?
            .map_err(|e| {
                SessionError::device(format!("send on {} failed: {}", self.device, e))
            })?;
        Ok(())
    }
}

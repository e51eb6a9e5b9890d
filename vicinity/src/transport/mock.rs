// vicinity-rs/vicinity/src/transport/mock.rs

use crate::transport::traits::Transceiver;
use crate::{Error, Result};

/// Mock transceiver for unit tests. It records sent frames and returns
/// queued responses in order.
#[derive(Debug)]
pub struct MockTransceiver {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
    pub connected: bool,
    /// Testing hook: number of connect calls that should fail.
    pub connect_failures: usize,
}

impl MockTransceiver {
    /// A mock that starts with the link up and an empty queue.
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            responses: Vec::new(),
            connected: true,
            connect_failures: 0,
        }
    }

    /// A mock that starts with the link down, for exercising the
    /// connection guard.
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            ..Self::new()
        }
    }

    /// Set how many subsequent connect calls should fail (for tests).
    pub fn set_connect_failures(&mut self, n: usize) {
        self.connect_failures = n;
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Default for MockTransceiver {
    fn default() -> Self {
        Self::new()
    }
}

impl Transceiver for MockTransceiver {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn connect(&mut self) -> Result<()> {
        if self.connect_failures > 0 {
            self.connect_failures -= 1;
            return Err(Error::ConnectFailed);
        }
        self.connected = true;
        Ok(())
    }

    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        self.sent.push(frame.to_vec());
        if self.responses.is_empty() {
            Err(Error::Timeout)
        } else {
            Ok(self.responses.remove(0))
        }
    }

    fn close(&mut self) -> Result<()> {
        self.connected = false;
        Ok(())
    }
}

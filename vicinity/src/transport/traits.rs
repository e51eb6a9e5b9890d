// vicinity-rs/vicinity/src/transport/traits.rs

use crate::Result;

/// Transceiver trait abstracts the raw tag link away from protocol and
/// session logic.
///
/// One call to `transceive` is one command/response exchange. Implementors
/// own their own timeout policy and map native failures to
/// `Error::Transport` or `Error::Timeout`; a failed `connect` maps to
/// `Error::ConnectFailed`.
pub trait Transceiver {
    /// Whether the link to the tag is currently up.
    fn is_connected(&self) -> bool;

    /// (Re)establish the link.
    fn connect(&mut self) -> Result<()>;

    /// Send one command frame and block for the response frame.
    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>>;

    /// Tear the link down. Dropping an open link is allowed but explicit
    /// close lets the host release the antenna sooner.
    fn close(&mut self) -> Result<()>;
}

mod udp;

pub use udp::UdpSource;

use thiserror::Error;

/// A datagram-oriented endpoint with a bounded wait.
///
/// `Ok(Some(bytes))` is one whole datagram, `Ok(None)` means the wait
/// timed out with no data, and `Err` is a fatal socket failure.
pub trait DatagramSource {
    fn recv_datagram(&mut self) -> Result<Option<Vec<u8>>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

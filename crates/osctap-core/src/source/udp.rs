use std::io;
use std::net::{Ipv4Addr, SocketAddr, UdpSocket};
use std::time::Duration;

use socket2::{Domain, Protocol, Socket, Type};

use super::{DatagramSource, SourceError};
use crate::protocol::layout;

/// UDP datagram source with a bounded read timeout.
///
/// The receive buffer is reused across calls but callers only ever see the
/// `[0, received)` slice, copied into a fresh allocation.
pub struct UdpSource {
    socket: UdpSocket,
    buf: Vec<u8>,
}

impl UdpSource {
    /// Bind to `port` on all IPv4 interfaces with address reuse enabled.
    ///
    /// `timeout` bounds each wait for readability and must be non-zero.
    pub fn bind(port: u16, timeout: Duration) -> io::Result<Self> {
        let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;
        socket.set_reuse_address(true)?;
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
        socket.bind(&addr.into())?;

        let socket: UdpSocket = socket.into();
        socket.set_read_timeout(Some(timeout))?;
        Ok(Self {
            socket,
            buf: vec![0u8; layout::MAX_DATAGRAM_LEN],
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }
}

impl DatagramSource for UdpSource {
    fn recv_datagram(&mut self) -> Result<Option<Vec<u8>>, SourceError> {
        match self.socket.recv_from(&mut self.buf) {
            Ok((len, _sender)) => Ok(Some(self.buf[..len].to_vec())),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
                ) =>
            {
                Ok(None)
            }
            Err(err) => Err(SourceError::Io(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::UdpSocket;
    use std::time::Duration;

    use super::{DatagramSource, UdpSource};

    #[test]
    fn bind_ephemeral_and_receive() {
        let mut source = UdpSource::bind(0, Duration::from_millis(100)).unwrap();
        let addr = source.local_addr().unwrap();

        let sender = UdpSocket::bind("127.0.0.1:0").unwrap();
        sender.send_to(b"ping", ("127.0.0.1", addr.port())).unwrap();

        let datagram = (0..50)
            .find_map(|_| source.recv_datagram().unwrap())
            .expect("datagram within timeout budget");
        assert_eq!(datagram, b"ping");
    }

    #[test]
    fn timeout_yields_none() {
        let mut source = UdpSource::bind(0, Duration::from_millis(20)).unwrap();
        assert!(source.recv_datagram().unwrap().is_none());
    }
}

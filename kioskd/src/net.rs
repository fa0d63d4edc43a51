use std::net::{IpAddr, SocketAddr, TcpStream, UdpSocket};
use std::time::Duration;

use crate::platform::ConnectivityProbe;

const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Probe implementation backed by real sockets. Both probes are bounded,
/// retry-free, and leave nothing open behind them.
pub struct NetProbe;

impl ConnectivityProbe for NetProbe {
    /// Bounded TCP connect to a well-known resolver; any failure counts as
    /// "no internet".
    fn has_internet(&self) -> bool {
        let addr = SocketAddr::from(([8, 8, 8, 8], 53));
        TcpStream::connect_timeout(&addr, PROBE_TIMEOUT).is_ok()
    }

    /// Discover the machine's routable address. Connecting a UDP socket
    /// sends no packet; it only asks the kernel which source address would
    /// be used for the destination.
    fn local_address(&self) -> Option<IpAddr> {
        let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
        socket.connect(SocketAddr::from(([8, 8, 8, 8], 80))).ok()?;
        socket.local_addr().ok().map(|addr| addr.ip())
    }
}

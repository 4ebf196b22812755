use std::time::Duration;
use tokio::net::TcpStream;

/// How long a port probe waits for a connection before declaring the port
/// free.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(1000);

/// Returns whether something is listening on `host:port`.
///
/// A single connection attempt bounded by `timeout` (1s when `None`). A
/// successful connect means the port is taken and the connection is
/// dropped right away; a refused connection, any other socket error or a
/// timeout all count as free. The probe itself never fails.
pub async fn is_port_taken(host: &str, port: u16, timeout: Option<Duration>) -> bool {
    let timeout = timeout.unwrap_or(DEFAULT_PROBE_TIMEOUT);
    matches!(
        tokio::time::timeout(timeout, TcpStream::connect((host, port))).await,
        Ok(Ok(_))
    )
}

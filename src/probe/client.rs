//! Liveness probe client
//!
//! Performs a single WebSocket handshake against the health endpoint and
//! waits for the server to close the session. A healthy gateway accepts the
//! upgrade and closes immediately with a normal-closure status (1000).
//!
//! Both phases are bounded: the handshake by `connect_timeout`, and the
//! post-handshake wait by `close_timeout`, re-armed per received frame. A
//! server that accepts but never closes is reported as unhealthy instead of
//! hanging the probe.

use futures_util::StreamExt;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};
use tracing::debug;

use super::config::ProbeConfig;
use crate::errors::probe_error::{ProbeError, ProbeResult};

/// Run a single probe attempt against the configured endpoint.
///
/// # Returns
/// * `Ok(())` - the server accepted the handshake and closed the session
///   normally
/// * `Err(ProbeError)` - any other outcome, including a server that never
///   closes within the close timeout
pub async fn run(config: &ProbeConfig) -> ProbeResult<()> {
    let (mut ws_stream, _response) =
        match timeout(config.connect_timeout, connect_async(config.url.as_str())).await {
            Ok(Ok(connection)) => connection,
            Ok(Err(e)) => return Err(ProbeError::Handshake(e.to_string())),
            Err(_elapsed) => return Err(ProbeError::ConnectTimeout(config.connect_timeout)),
        };

    debug!(url = %config.url, "WebSocket handshake accepted, awaiting close");

    loop {
        let message = timeout(config.close_timeout, ws_stream.next())
            .await
            .map_err(|_elapsed| ProbeError::CloseTimeout(config.close_timeout))?;

        match message {
            Some(Ok(Message::Close(frame))) => {
                if let Some(frame) = frame {
                    debug!(code = u16::from(frame.code), reason = %frame.reason, "server closed session");
                    if frame.code != CloseCode::Normal {
                        return Err(ProbeError::AbnormalClosure {
                            code: frame.code.into(),
                            reason: frame.reason.as_str().to_string(),
                        });
                    }
                }
                // Complete the closing handshake so the server sees a clean
                // shutdown; the probe's verdict no longer depends on it.
                let _ = timeout(config.close_timeout, ws_stream.close(None)).await;
                return Ok(());
            }
            // Ping/pong or stray data before the close frame is tolerated
            Some(Ok(other)) => {
                debug!(frame = ?other, "ignoring frame received before close");
            }
            Some(Err(e)) => return Err(ProbeError::Transport(e.to_string())),
            None => return Err(ProbeError::ConnectionLost),
        }
    }
}

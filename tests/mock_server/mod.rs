//! Mock Health Endpoints
//!
//! Local WebSocket endpoints simulating the gateway health check under
//! different conditions: healthy (accept then close 1000), abnormal close,
//! silent (accept then never close), and a plain-HTTP endpoint that rejects
//! the upgrade. Each server binds an ephemeral port on 127.0.0.1.

// Allow dead code in test fixtures - not every test file uses every endpoint
#![allow(dead_code)]

use std::net::SocketAddr;

use futures_util::{SinkExt, StreamExt};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::protocol::Message;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use url::Url;

/// Bind a listener on an ephemeral port and return it with its address.
async fn bind_local() -> (TcpListener, SocketAddr) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind mock listener");
    let addr = listener
        .local_addr()
        .expect("mock listener has no local address");
    (listener, addr)
}

/// Build the health URL for a mock endpoint address.
pub fn health_url(addr: SocketAddr) -> Url {
    Url::parse(&format!("ws://{addr}/health")).expect("mock health URL must parse")
}

/// Find an available port with nothing listening on it.
pub fn find_available_port() -> u16 {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind to random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

/// Endpoint that accepts the handshake then closes immediately with 1000.
pub async fn spawn_healthy_endpoint() -> SocketAddr {
    let (listener, addr) = bind_local().await;
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let Ok(mut ws_stream) = accept_async(stream).await else {
                    return;
                };
                let frame = CloseFrame {
                    code: CloseCode::Normal,
                    reason: "healthy".into(),
                };
                let _ = ws_stream.close(Some(frame)).await;
                // Drain until the client completes the closing handshake
                while let Some(Ok(_)) = ws_stream.next().await {}
            });
        }
    });
    addr
}

/// Endpoint that sends a ping and a text frame before the normal close.
pub async fn spawn_chatty_endpoint() -> SocketAddr {
    let (listener, addr) = bind_local().await;
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let Ok(mut ws_stream) = accept_async(stream).await else {
                    return;
                };
                let _ = ws_stream.send(Message::Ping(Default::default())).await;
                let _ = ws_stream.send(Message::Text("draining".into())).await;
                let frame = CloseFrame {
                    code: CloseCode::Normal,
                    reason: "healthy".into(),
                };
                let _ = ws_stream.close(Some(frame)).await;
                while let Some(Ok(_)) = ws_stream.next().await {}
            });
        }
    });
    addr
}

/// Endpoint that closes with a non-normal status (1011, internal error).
pub async fn spawn_abnormal_close_endpoint() -> SocketAddr {
    let (listener, addr) = bind_local().await;
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let Ok(mut ws_stream) = accept_async(stream).await else {
                    return;
                };
                let frame = CloseFrame {
                    code: CloseCode::Error,
                    reason: "backend unavailable".into(),
                };
                let _ = ws_stream.close(Some(frame)).await;
                while let Some(Ok(_)) = ws_stream.next().await {}
            });
        }
    });
    addr
}

/// Endpoint that accepts the handshake and then holds the session open
/// without ever closing it.
pub async fn spawn_silent_endpoint() -> SocketAddr {
    let (listener, addr) = bind_local().await;
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let Ok(mut ws_stream) = accept_async(stream).await else {
                    return;
                };
                while let Some(Ok(_)) = ws_stream.next().await {}
            });
        }
    });
    addr
}

/// Plain-HTTP endpoint that rejects the WebSocket upgrade with a 503.
pub async fn spawn_rejecting_endpoint() -> SocketAddr {
    let (listener, addr) = bind_local().await;
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf).await;
                let _ = stream
                    .write_all(b"HTTP/1.1 503 Service Unavailable\r\ncontent-length: 0\r\n\r\n")
                    .await;
                let _ = stream.shutdown().await;
            });
        }
    });
    addr
}

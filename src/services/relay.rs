// src/services/relay.rs
//! Per-connection relay between a client socket and the completion service.
//!
//! Every inbound frame gets exactly one reply before the next frame is read.
//! Failures while handling a frame become `{"error": ...}` replies; only a
//! closed connection ends the loop.

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::error::{RelayError, SocketClosed};
use crate::message::{ChatRequest, ChatResponse};
use crate::services::completion::CompletionClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Text(String),
    Binary(Vec<u8>),
}

/// Bidirectional frame transport owned by one relay loop.
#[async_trait]
pub trait FrameSocket: Send {
    /// Next data frame, or `None` once the connection is closed.
    async fn recv_frame(&mut self) -> Option<Frame>;

    async fn send_text(&mut self, text: String) -> Result<(), SocketClosed>;
}

async fn process(client: &dyn CompletionClient, frame: &str) -> Result<String, RelayError> {
    let request = ChatRequest::parse(frame).map_err(RelayError::Parse)?;
    Ok(client.complete(&request.text).await?)
}

/// Turn one inbound text frame into its reply. Never fails.
pub async fn handle_frame(client: &dyn CompletionClient, frame: &str) -> ChatResponse {
    match process(client, frame).await {
        Ok(text) => ChatResponse::success(text),
        Err(err) => {
            warn!(error = %err, "failed to process frame");
            ChatResponse::failure(err)
        }
    }
}

async fn reply_for(client: &dyn CompletionClient, frame: Frame) -> ChatResponse {
    match frame {
        Frame::Text(text) => handle_frame(client, &text).await,
        Frame::Binary(bytes) => match std::str::from_utf8(&bytes) {
            Ok(text) => handle_frame(client, text).await,
            Err(err) => ChatResponse::failure(RelayError::from(err)),
        },
    }
}

/// Drive one connection until the client goes away.
pub async fn run<S: FrameSocket>(mut socket: S, client: &dyn CompletionClient) {
    info!("client connected");

    while let Some(frame) = socket.recv_frame().await {
        let reply = reply_for(client, frame).await;

        let payload = match serde_json::to_string(&reply) {
            Ok(payload) => payload,
            Err(err) => {
                error!(error = %err, "failed to serialize reply");
                r#"{"error":"internal error"}"#.to_string()
            }
        };

        debug!(failed = reply.is_failure(), "sending reply");
        if let Err(err) = socket.send_text(payload).await {
            info!(error = %err, "client went away before reply was sent");
            break;
        }
    }

    info!("client disconnected");
}

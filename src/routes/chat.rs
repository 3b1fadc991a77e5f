use async_trait::async_trait;
use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use tracing::warn;

use crate::{
    error::SocketClosed,
    services::relay::{self, Frame, FrameSocket},
    state::SharedState,
};

pub async fn chat_ws_handler(ws: WebSocketUpgrade, State(state): State<SharedState>) -> Response {
    ws.on_upgrade(move |socket| async move {
        relay::run(socket, state.completion.as_ref()).await;
    })
}

#[async_trait]
impl FrameSocket for WebSocket {
    async fn recv_frame(&mut self) -> Option<Frame> {
        loop {
            match self.recv().await? {
                Ok(Message::Text(text)) => return Some(Frame::Text(text.as_str().to_owned())),
                Ok(Message::Binary(bytes)) => return Some(Frame::Binary(bytes.to_vec())),
                Ok(Message::Close(_)) => return None,
                // Ping and pong are answered by the transport.
                Ok(_) => continue,
                Err(err) => {
                    warn!(error = %err, "websocket receive failed");
                    return None;
                }
            }
        }
    }

    async fn send_text(&mut self, text: String) -> Result<(), SocketClosed> {
        self.send(Message::Text(text.into()))
            .await
            .map_err(|err| SocketClosed(err.to_string()))
    }
}

/**
 * everything that can end a run. run() treats them all the same
 * (one "Connection failed" line, done), the variants just say where it broke
 */
use thiserror::Error;
use tokio_tungstenite::tungstenite::{self, protocol::CloseFrame};

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error(transparent)]
    Connect(tungstenite::Error),

    #[error(transparent)]
    Send(tungstenite::Error),

    #[error(transparent)]
    Receive(tungstenite::Error),

    // server sent a close frame, with or without a status
    #[error("{}", describe_close(.frame))]
    Closed { frame: Option<CloseFrame<'static>> },

    // stream ran dry without any close frame
    #[error("no close frame received or sent")]
    Ended,
}

impl ProbeError {
    pub fn stage(&self) -> &'static str {
        match self {
            ProbeError::Connect(_) => "connect",
            ProbeError::Send(_) => "send",
            ProbeError::Receive(_) | ProbeError::Closed { .. } | ProbeError::Ended => "receive",
        }
    }
}

fn describe_close(frame: &Option<CloseFrame<'static>>) -> String {
    match frame {
        Some(frame) if frame.reason.is_empty() => {
            format!("received {} close frame; connection closed", u16::from(frame.code))
        }
        Some(frame) => format!(
            "received {} ({}) close frame; connection closed",
            u16::from(frame.code),
            frame.reason
        ),
        None => "received close frame (no status); connection closed".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;

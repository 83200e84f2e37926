/**
 * one session, one greeting, then print whatever comes back
 * until the session dies. no retries.
 */
use std::{convert::Infallible, fmt, io::Write};

use futures_util::{Sink, SinkExt, Stream, StreamExt};
use tokio_tungstenite::{
    connect_async,
    tungstenite::{protocol::Message, Error as WsError},
};
use tracing::{debug, trace, warn};

use crate::{
    config::ProbeConfig,
    error::{ProbeError, Result},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeState {
    Connecting,
    Connected,
    Terminated,
}

pub struct Probe {
    config: ProbeConfig,
    state: ProbeState,
}

impl Probe {
    pub fn new(config: ProbeConfig) -> Self {
        Self {
            config,
            state: ProbeState::Connecting,
        }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    pub fn state(&self) -> ProbeState {
        self.state
    }

    /**
     * dial the endpoint and run the session on it. only comes back once the
     * session faulted (remote close counts). a used probe does nothing
     */
    pub async fn run<W: Write>(&mut self, out: &mut W) {
        if !self.fresh() {
            return;
        }

        let endpoint = self.config.endpoint.as_str();
        debug!(endpoint, "connecting");

        let dialed = connect_async(endpoint).await;
        match dialed {
            Ok((ws, _response)) => self.run_on(ws, out).await,
            Err(e) => self.terminate(ProbeError::Connect(e), out),
        }
    }

    /**
     * same as run() but over a transport somebody else already opened
     */
    pub async fn run_on<S, W>(&mut self, ws: S, out: &mut W)
    where
        S: Sink<Message, Error = WsError> + Stream<Item = std::result::Result<Message, WsError>> + Unpin,
        W: Write,
    {
        if !self.fresh() {
            return;
        }

        self.transition(ProbeState::Connected);
        emit(out, format_args!("Connected to the server."));

        let fault = match converse(ws, &self.config.greeting, out).await {
            Ok(never) => match never {},
            Err(fault) => fault,
        };
        self.terminate(fault, out);
    }

    fn fresh(&self) -> bool {
        if self.state != ProbeState::Connecting {
            debug!(state = ?self.state, "probe already used, not reconnecting");
            return false;
        }
        true
    }

    fn terminate<W: Write>(&mut self, fault: ProbeError, out: &mut W) {
        debug!(stage = fault.stage(), error = ?fault, "session ended");
        self.transition(ProbeState::Terminated);
        emit(out, format_args!("Connection failed: {}", fault));
    }

    fn transition(&mut self, next: ProbeState) {
        debug!(from = ?self.state, to = ?next, "probe state");
        self.state = next;
    }
}

async fn converse<S, W>(mut ws: S, greeting: &str, out: &mut W) -> Result<Infallible>
where
    S: Sink<Message, Error = WsError> + Stream<Item = std::result::Result<Message, WsError>> + Unpin,
    W: Write,
{
    ws.send(Message::Text(greeting.to_string()))
        .await
        .map_err(ProbeError::Send)?;
    emit(out, format_args!("Message sent."));

    loop {
        let msg = match ws.next().await {
            Some(Ok(msg)) => msg,
            Some(Err(e)) => return Err(ProbeError::Receive(e)),
            None => return Err(ProbeError::Ended),
        };

        match msg {
            Message::Text(text) => emit(out, format_args!("Received from server: {}", text)),
            Message::Binary(bytes) => emit(
                out,
                format_args!("Received from server: {}", String::from_utf8_lossy(&bytes)),
            ),
            Message::Close(frame) => {
                // tungstenite queued the close reply, push it out before dropping the socket
                if let Err(e) = SinkExt::close(&mut ws).await {
                    trace!(error = %e, "close reply not delivered");
                }
                return Err(ProbeError::Closed { frame });
            }
            other => trace!(?other, "control frame"),
        }
    }
}

fn emit<W: Write>(out: &mut W, line: fmt::Arguments<'_>) {
    if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
        warn!(error = %e, "could not write probe output");
    }
}

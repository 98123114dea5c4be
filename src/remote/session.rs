//! Compile orchestration — single-slot session state and the request
//! lifecycle: reset, dispatch, decode, locate, apply.
//!
//! The orchestrator never touches the UI directly. The App owns one
//! `Orchestrator`, dispatches requests from the event loop, drains the
//! response channel each tick, and acts on the returned `CompileEvent`.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use super::client::{CompileService, ServiceError};
use super::locate;
use super::outcome::CompileOutcome;
use super::token::Token;
use super::tree::SyntaxTree;

/// Result of one remote compile call, as delivered over the channel.
pub type CompileResult = Result<CompileOutcome, ServiceError>;

/// Sender half — cloned into the worker thread per request.
pub type ResponseSender = mpsc::Sender<CompileResult>;

/// Receiver half — held by the TUI event loop.
pub struct ResponseReceiver {
    rx: mpsc::Receiver<CompileResult>,
}

impl ResponseReceiver {
    /// Non-blocking poll for the next finished compile.
    pub fn poll(&self) -> Option<CompileResult> {
        self.rx.try_recv().ok()
    }
}

/// Create the response channel pair.
pub fn response_channel() -> (ResponseSender, ResponseReceiver) {
    let (tx, rx) = mpsc::channel();
    (tx, ResponseReceiver { rx })
}

/// Single-slot result state, reset at the start of every compile and
/// replaced wholesale when a response arrives.
#[derive(Debug, Default)]
pub struct CompileSession {
    pub busy: bool,
    pub tokens: Vec<Token>,
    pub tree: Option<SyntaxTree>,
    pub error_location: Option<u32>,
}

/// What a finished compile amounted to, for the UI to act on.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileEvent {
    Succeeded,
    FailedSyntax {
        message: String,
        line: Option<u32>,
    },
    FailedTransport {
        detail: String,
    },
}

pub struct Orchestrator {
    session: CompileSession,
    service: Arc<dyn CompileService + Send + Sync>,
}

impl Orchestrator {
    pub fn new(service: Arc<dyn CompileService + Send + Sync>) -> Self {
        Self {
            session: CompileSession::default(),
            service,
        }
    }

    pub fn session(&self) -> &CompileSession {
        &self.session
    }

    pub fn is_busy(&self) -> bool {
        self.session.busy
    }

    /// Admission guard, session reset, and dispatch.
    ///
    /// Returns false while a compile is in flight — the request is
    /// dropped at the boundary, with no reset and no second worker. The
    /// document is captured by value here, so edits made while the
    /// request is in flight cannot affect it.
    pub fn request_compile(&mut self, document: String, tx: ResponseSender) -> bool {
        if self.session.busy {
            return false;
        }
        self.session = CompileSession {
            busy: true,
            ..CompileSession::default()
        };
        let service = Arc::clone(&self.service);
        thread::spawn(move || {
            let result = service.compile(&document);
            // Receiver gone means the app is shutting down.
            let _ = tx.send(result);
        });
        true
    }

    /// Apply a finished response to the session.
    ///
    /// `busy` clears first, unconditionally, so every path — success,
    /// syntax failure, transport failure — returns the session to Idle.
    pub fn finish(&mut self, result: CompileResult) -> CompileEvent {
        self.session.busy = false;
        match result {
            Err(err) => CompileEvent::FailedTransport {
                detail: err.to_string(),
            },
            Ok(outcome) => {
                // Partial lexing results are always shown.
                self.session.tokens = outcome.tokens;
                match outcome.error {
                    Some(message) => {
                        let line = locate::locate(&message);
                        self.session.error_location = line;
                        CompileEvent::FailedSyntax { message, line }
                    }
                    None => {
                        self.session.tree = outcome.tree;
                        CompileEvent::Succeeded
                    }
                }
            }
        }
    }
}

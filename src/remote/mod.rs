//! Everything that faces the remote compiler service: the wire types,
//! the HTTP client, error-line extraction, and the compile orchestrator.

pub mod client;
pub mod locate;
pub mod outcome;
pub mod session;
pub mod token;
pub mod tree;

pub use client::{CompileService, HttpCompileService, ServiceError};
pub use outcome::{decode, CompileOutcome, RawResponse, RawToken};
pub use session::{
    response_channel, CompileEvent, CompileResult, CompileSession, Orchestrator, ResponseReceiver,
    ResponseSender,
};
pub use token::{Token, TokenKind};
pub use tree::{SyntaxNode, SyntaxTree};

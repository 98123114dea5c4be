//! Wire response shape and its normalization into a UI-ready outcome.

use serde::Deserialize;
use serde_json::Value;

use super::token::Token;
use super::tree::SyntaxTree;

/// Raw compile response as the service sends it.
///
/// Field presence is enforced here by serde; a body that fails to parse
/// into this shape is rejected by the client as a transport failure and
/// never reaches `decode`.
#[derive(Debug, Deserialize)]
pub struct RawResponse {
    pub tokens: Vec<RawToken>,
    pub ast: Option<Value>,
    pub error: Option<String>,
}

/// One token as serialized on the wire.
#[derive(Debug, Deserialize)]
pub struct RawToken {
    pub kind: String,
    #[serde(default)]
    pub value: Value,
    pub line: u32,
    pub column: u32,
}

/// The complete, decoded result of one compile attempt.
#[derive(Debug, Clone, Default)]
pub struct CompileOutcome {
    pub tokens: Vec<Token>,
    pub tree: Option<SyntaxTree>,
    pub error: Option<String>,
}

/// Normalize a raw response. Total over structurally valid input.
///
/// Tokens are always carried over, even alongside an error: lexing can
/// succeed while parsing fails. When the service reports an error, any
/// `ast` it also sent is discarded, so `error` present and `tree` absent
/// hold together by construction.
pub fn decode(raw: RawResponse) -> CompileOutcome {
    let tokens: Vec<Token> = raw.tokens.into_iter().map(Token::decode).collect();
    match raw.error {
        Some(error) => CompileOutcome {
            tokens,
            tree: None,
            error: Some(error),
        },
        None => CompileOutcome {
            tokens,
            tree: raw.ast.as_ref().map(SyntaxTree::from_value),
            error: None,
        },
    }
}

//! Token types for the compiler service wire format.

use serde_json::Value;

use super::outcome::RawToken;

/// A token reported by the compiler service.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Kind tag exactly as the service named it ("Numero", "Mais", ...).
    pub name: String,
    pub kind: TokenKind,
    pub line: u32,
    pub column: u32,
}

/// Decoded token kind and payload.
///
/// The service's vocabulary is open-ended: tags we have never seen decode
/// to `Unknown` with their payload rendered as text, never to an error.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Preprocessor directive, e.g. `#include <iostream>`.
    Directive(String),
    Keyword(String),
    Identifier(String),
    Number(f64),
    Text(String),
    CharLit(String),
    /// Operator symbol, resolved from the tag name ("Mais" -> "+").
    Operator(&'static str),
    Punct(&'static str),
    /// End-of-input sentinel ("Fundo").
    Eof,
    Unknown(String),
}

/// Unit-variant operator tags and their display symbols.
const OPERATORS: &[(&str, &str)] = &[
    ("Mais", "+"),
    ("Menos", "-"),
    ("Asterisco", "*"),
    ("Divisao", "/"),
    ("Igual", "="),
    ("MenorMenor", "<<"),
];

/// Unit-variant punctuation tags and their display symbols.
const PUNCTUATION: &[(&str, &str)] = &[
    ("AbreParenteses", "("),
    ("FechaParenteses", ")"),
    ("AbreChave", "{"),
    ("FechaChave", "}"),
    ("PontoVirgula", ";"),
    ("Virgula", ","),
];

/// Keyword tags. The payload is the tag's source spelling.
const KEYWORDS: &[(&str, &str)] = &[
    ("Int", "int"),
    ("Retorno", "return"),
    ("Cout", "cout"),
    ("Using", "using"),
    ("Namespace", "namespace"),
];

fn lookup(table: &[(&str, &'static str)], name: &str) -> Option<&'static str> {
    table.iter().find(|(n, _)| *n == name).map(|(_, s)| *s)
}

/// Render a lenient payload value as plain text.
fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl Token {
    /// Decode a raw wire token. Total: the tag name alone selects the
    /// variant, and a missing or oddly shaped payload falls back to a
    /// neutral default rather than failing the whole response.
    pub fn decode(raw: RawToken) -> Self {
        let kind = match raw.kind.as_str() {
            "Inclusao" => TokenKind::Directive(value_text(&raw.value)),
            "Identificador" => TokenKind::Identifier(value_text(&raw.value)),
            "Numero" => TokenKind::Number(raw.value.as_f64().unwrap_or(0.0)),
            "Texto" => TokenKind::Text(value_text(&raw.value)),
            "Char" => TokenKind::CharLit(value_text(&raw.value)),
            "Fundo" => TokenKind::Eof,
            name => {
                if let Some(sym) = lookup(OPERATORS, name) {
                    TokenKind::Operator(sym)
                } else if let Some(sym) = lookup(PUNCTUATION, name) {
                    TokenKind::Punct(sym)
                } else if let Some(spelling) = lookup(KEYWORDS, name) {
                    TokenKind::Keyword(spelling.to_string())
                } else {
                    TokenKind::Unknown(value_text(&raw.value))
                }
            }
        };
        Self {
            name: raw.kind,
            kind,
            line: raw.line,
            column: raw.column,
        }
    }

    /// The token's payload as display text for the tokens panel.
    pub fn display_value(&self) -> String {
        match &self.kind {
            TokenKind::Directive(s)
            | TokenKind::Keyword(s)
            | TokenKind::Identifier(s)
            | TokenKind::Text(s)
            | TokenKind::CharLit(s)
            | TokenKind::Unknown(s) => s.clone(),
            TokenKind::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            TokenKind::Operator(s) | TokenKind::Punct(s) => (*s).to_string(),
            TokenKind::Eof => String::new(),
        }
    }
}

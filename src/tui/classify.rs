//! Display categories for the token stream panel.
//!
//! Categories are derived from the wire tag by substring, not from the
//! decoded token kind, so every tag the service invents still lands in
//! a bucket. Rules apply in order and the first hit wins.

use crate::remote::Token;

/// Coarse visual bucket for a token row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    Directive,
    Literal,
    Identifier,
    Operator,
    Other,
}

/// Map a token to its display category from its verbatim wire tag.
pub fn classify(token: &Token) -> TokenCategory {
    let name = token.name.as_str();
    if name.contains("Inclusao") || name.contains("Diretiva") {
        TokenCategory::Directive
    } else if name.contains("Numero") || name.contains("Texto") || name.contains("Char") {
        TokenCategory::Literal
    } else if name == "Identificador" {
        TokenCategory::Identifier
    } else if name.contains("Mais")
        || name.contains("Menos")
        || name.contains("Igual")
        || name.contains("Asterisco")
        || name.contains("Divisao")
    {
        TokenCategory::Operator
    } else {
        TokenCategory::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::TokenKind;

    fn token(name: &str) -> Token {
        Token {
            name: name.to_string(),
            kind: TokenKind::Unknown(name.to_string()),
            line: 1,
            column: 1,
        }
    }

    #[test]
    fn directives() {
        assert_eq!(classify(&token("Inclusao")), TokenCategory::Directive);
        assert_eq!(classify(&token("Diretiva")), TokenCategory::Directive);
    }

    #[test]
    fn literals() {
        assert_eq!(classify(&token("Numero")), TokenCategory::Literal);
        assert_eq!(classify(&token("Texto")), TokenCategory::Literal);
        assert_eq!(classify(&token("Char")), TokenCategory::Literal);
    }

    #[test]
    fn identifier_is_exact_match_only() {
        assert_eq!(classify(&token("Identificador")), TokenCategory::Identifier);
        assert_eq!(classify(&token("IdentificadorX")), TokenCategory::Other);
    }

    #[test]
    fn operators() {
        for name in ["Mais", "Menos", "Igual", "Asterisco", "Divisao", "MenorMenor"] {
            let expected = if name == "MenorMenor" {
                // No operator substring matches the shift tag.
                TokenCategory::Other
            } else {
                TokenCategory::Operator
            };
            assert_eq!(classify(&token(name)), expected, "{name}");
        }
    }

    #[test]
    fn literal_rule_shadows_operator_rule() {
        // "CharMais" hits the literal bucket first; order is part of the
        // contract inherited by downstream color themes.
        assert_eq!(classify(&token("CharMais")), TokenCategory::Literal);
    }

    #[test]
    fn keywords_and_punctuation_fall_through() {
        for name in ["Int", "Retorno", "Cout", "AbreParenteses", "PontoVirgula", "Fundo"] {
            assert_eq!(classify(&token(name)), TokenCategory::Other, "{name}");
        }
    }
}

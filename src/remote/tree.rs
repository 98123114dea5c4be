//! Syntax tree decoding — a kind-tagged recursive structure built from
//! the service's `ast` JSON.
//!
//! The tree is opaque to the rest of the app: panels only ever flatten it
//! for display. Decoding is total; any JSON shape maps to *some* node.

use serde_json::Value;

/// The parse result of a successful compile.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTree {
    pub root: SyntaxNode,
}

/// One node of the syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxNode {
    /// A tagged node: type tag plus named children.
    Node {
        kind: String,
        fields: Vec<(String, SyntaxNode)>,
    },
    /// A scalar leaf (token text, number, flag).
    Leaf(String),
    /// An ordered sequence of children.
    List(Vec<SyntaxNode>),
}

impl SyntaxTree {
    pub fn from_value(value: &Value) -> Self {
        Self {
            root: SyntaxNode::from_value(value),
        }
    }
}

impl SyntaxNode {
    /// Decode arbitrary JSON into a node.
    ///
    /// Objects carry their type tag in a `"node"` field; a single-key
    /// object without one is treated as externally tagged (the key is the
    /// tag). Anything else still produces a node, so a service-side schema
    /// drift degrades the display instead of failing the compile.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => SyntaxNode::Leaf("null".to_string()),
            Value::Bool(b) => SyntaxNode::Leaf(b.to_string()),
            Value::Number(n) => SyntaxNode::Leaf(n.to_string()),
            Value::String(s) => SyntaxNode::Leaf(s.clone()),
            Value::Array(items) => {
                SyntaxNode::List(items.iter().map(SyntaxNode::from_value).collect())
            }
            Value::Object(map) => {
                if let Some(Value::String(kind)) = map.get("node") {
                    let fields = map
                        .iter()
                        .filter(|(k, _)| k.as_str() != "node")
                        .map(|(k, v)| (k.clone(), SyntaxNode::from_value(v)))
                        .collect();
                    SyntaxNode::Node {
                        kind: kind.clone(),
                        fields,
                    }
                } else if map.len() == 1 {
                    let (kind, inner) = map.iter().next().map(|(k, v)| (k.clone(), v)).unwrap_or((
                        String::new(),
                        &Value::Null,
                    ));
                    SyntaxNode::Node {
                        kind,
                        fields: Self::fields_of(inner),
                    }
                } else {
                    SyntaxNode::Node {
                        kind: "object".to_string(),
                        fields: map
                            .iter()
                            .map(|(k, v)| (k.clone(), SyntaxNode::from_value(v)))
                            .collect(),
                    }
                }
            }
        }
    }

    fn fields_of(value: &Value) -> Vec<(String, SyntaxNode)> {
        match value {
            Value::Null => Vec::new(),
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| (k.clone(), SyntaxNode::from_value(v)))
                .collect(),
            Value::Array(items) => vec![(
                "items".to_string(),
                SyntaxNode::List(items.iter().map(SyntaxNode::from_value).collect()),
            )],
            scalar => vec![("value".to_string(), SyntaxNode::from_value(scalar))],
        }
    }

    /// The node's type tag, if it has one.
    pub fn kind(&self) -> Option<&str> {
        match self {
            SyntaxNode::Node { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

//! parseview — a terminal-native front-end for a remote teaching compiler.

pub mod remote;
pub mod tui;

//! Editor error annotation — drives the marker set from an optional
//! error line.

use super::editor::{Editor, Marker, Severity};

/// Stable marker owner id: re-annotating replaces, never accumulates.
const OWNER: &str = "compile-error";

/// Fixed tooltip attached to the error marker.
const TOOLTIP: &str = "Syntax error reported by the compiler";

/// Place or clear the single compile-error marker.
///
/// With a location, one error-severity marker spans the full line
/// (column 1 through the line's character count, minimum 1 for empty
/// lines) and the view centers on it. Without one, the owner's markers
/// are removed and the view stays put. A location past the document's
/// end — the document may have been edited since the error was reported
/// — clears instead of placing. Idempotent in all three cases.
pub fn annotate(editor: &mut Editor, location: Option<u32>) {
    let Some(line) = location else {
        editor.set_markers(OWNER, Vec::new());
        return;
    };
    let line = line as usize;
    let Some(length) = editor.line_length(line) else {
        editor.set_markers(OWNER, Vec::new());
        return;
    };
    editor.set_markers(
        OWNER,
        vec![Marker {
            start_line: line,
            start_column: 1,
            end_line: line,
            end_column: length.max(1),
            message: TOOLTIP.to_string(),
            severity: Severity::Error,
        }],
    );
    editor.reveal_line(line);
}

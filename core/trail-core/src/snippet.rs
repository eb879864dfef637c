//! Preview snippet construction.
//!
//! The tracker reads document text through the [`LineSource`] seam so it
//! never does I/O of its own: the host editor serves whatever it has open
//! in memory, and documents it cannot serve degrade to a placeholder rather
//! than an error.

/// Placeholder snippet for documents the line source cannot serve.
pub const UNAVAILABLE_SNIPPET: &str = "... (file not open) ...";

/// Synchronous, in-memory access to document text, implemented by the host.
///
/// Implementations must not block; [`line_count`](LineSource::line_count)
/// returns `None` for anything that would require I/O to answer.
pub trait LineSource {
    /// Number of lines in the document, or `None` when it is not currently
    /// available to read.
    fn line_count(&self, file_id: &str) -> Option<u32>;

    /// Text of a single zero-based line, without its terminator. Only called
    /// with indices below the reported `line_count`.
    fn line_text(&self, file_id: &str, line: u32) -> String;
}

/// Builds a window of `line_count` lines centered on `line`.
///
/// Clamping happens in two independent steps: a window running past the top
/// of the file is shifted down to start at line 0, and a window running past
/// the bottom is shifted up (but never above line 0). Short files therefore
/// yield the whole file.
pub fn build_snippet(
    lines: &dyn LineSource,
    file_id: &str,
    line: u32,
    line_count: u32,
) -> String {
    let Some(total) = lines.line_count(file_id) else {
        return UNAVAILABLE_SNIPPET.to_string();
    };
    if total == 0 {
        return String::new();
    }

    let half = i64::from(line_count / 2);
    let mut start = i64::from(line) - half;
    let mut end = start + i64::from(line_count) - 1;

    if start < 0 {
        start = 0;
        end = i64::from(line_count) - 1;
    }
    if end >= i64::from(total) {
        end = i64::from(total) - 1;
        start = (end - (i64::from(line_count) - 1)).max(0);
    }

    (start..=end)
        .map(|i| lines.line_text(file_id, i as u32))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A single ten-line document: "line 0" through "line 9".
    struct TenLines;

    impl LineSource for TenLines {
        fn line_count(&self, _file_id: &str) -> Option<u32> {
            Some(10)
        }

        fn line_text(&self, _file_id: &str, line: u32) -> String {
            format!("line {line}")
        }
    }

    struct EmptyDoc;

    impl LineSource for EmptyDoc {
        fn line_count(&self, _file_id: &str) -> Option<u32> {
            Some(0)
        }

        fn line_text(&self, _file_id: &str, _line: u32) -> String {
            unreachable!("empty document has no lines")
        }
    }

    struct NothingOpen;

    impl LineSource for NothingOpen {
        fn line_count(&self, _file_id: &str) -> Option<u32> {
            None
        }

        fn line_text(&self, _file_id: &str, _line: u32) -> String {
            unreachable!("unavailable document must not be read")
        }
    }

    #[test]
    fn centers_window_on_anchor() {
        let snippet = build_snippet(&TenLines, "f", 5, 3);
        assert_eq!(snippet, "line 4\nline 5\nline 6");
    }

    #[test]
    fn clamps_at_top_of_file() {
        let snippet = build_snippet(&TenLines, "f", 0, 3);
        assert_eq!(snippet, "line 0\nline 1\nline 2");
    }

    #[test]
    fn clamps_at_bottom_of_file() {
        let snippet = build_snippet(&TenLines, "f", 9, 3);
        assert_eq!(snippet, "line 7\nline 8\nline 9");
    }

    #[test]
    fn window_larger_than_file_yields_whole_file() {
        let snippet = build_snippet(&TenLines, "f", 5, 25);
        let expected: Vec<String> = (0..10).map(|i| format!("line {i}")).collect();
        assert_eq!(snippet, expected.join("\n"));
    }

    #[test]
    fn single_line_window() {
        let snippet = build_snippet(&TenLines, "f", 4, 1);
        assert_eq!(snippet, "line 4");
    }

    #[test]
    fn empty_document_yields_empty_snippet() {
        assert_eq!(build_snippet(&EmptyDoc, "f", 0, 3), "");
    }

    #[test]
    fn unavailable_document_yields_placeholder() {
        assert_eq!(build_snippet(&NothingOpen, "f", 3, 3), UNAVAILABLE_SNIPPET);
    }

    #[test]
    fn anchor_past_end_clamps_to_tail() {
        // An anchor beyond the document (e.g. recorded before lines were
        // deleted) still yields the tail window rather than panicking.
        let snippet = build_snippet(&TenLines, "f", 50, 3);
        assert_eq!(snippet, "line 7\nline 8\nline 9");
    }
}

//! String helpers for the tree view.
//!
//! The widgets themselves live on the host side; these produce the labels
//! they show.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Area;

static RE_LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n").unwrap());

/// Lowest directory plus file name, for compact file labels.
///
/// `/home/user/project/src/foo.rs` becomes `src/foo.rs`. Inputs with no
/// separator come back unchanged.
pub fn short_file_name(path: &str) -> String {
    let parts: Vec<&str> = path.split(['/', '\\']).collect();
    if parts.len() < 2 {
        path.to_string()
    } else {
        format!("{}/{}", parts[parts.len() - 2], parts[parts.len() - 1])
    }
}

/// One-line label for an area: `Line <n>: <snippet>` with a one-based line
/// number and line breaks collapsed to spaces. The full multi-line snippet
/// stays on the [`Area`] for tooltips.
pub fn area_label(area: &Area) -> String {
    let single_line = RE_LINE_BREAK.replace_all(&area.snippet, " ");
    format!("Line {}: {}", area.line + 1, single_line)
}

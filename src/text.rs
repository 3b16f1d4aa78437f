//! Text normalization for rendering raw email bodies.
//!
//! Enron-corpus bodies arrive with erratic whitespace; the table's detail
//! panel wants trimmed content with long blank runs folded and a line list
//! it can render directly.

use std::sync::LazyLock;

use regex::Regex;

static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\s*\r?\n\r?){4,}").expect("blank-run regex must compile"));
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n\r?").expect("line-break regex must compile"));

/// Fold runs of four or more blank-ish lines down to a fixed maximum of two.
pub fn fold_blank_runs(text: &str) -> String {
    BLANK_RUNS.replace_all(text, "\n\n\n").into_owned()
}

/// Prepare raw email content for the detail panel: trim, fold blank runs,
/// split into display lines.
pub fn content_lines(content: &str) -> Vec<String> {
    let folded = fold_blank_runs(content.trim());
    LINE_BREAK
        .split(&folded)
        .map(|line| line.to_string())
        .collect()
}

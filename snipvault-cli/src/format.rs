//! Output formatting for the `list` command

use std::fmt::Write as _;

use snipvault_core::Snippet;

/// Width of the code preview column in table output
const CODE_PREVIEW_WIDTH: usize = 40;

/// Format snippets as a table string
#[must_use]
pub fn format_table(snippets: &[Snippet]) -> String {
    if snippets.is_empty() {
        return "No snippets found.".to_string();
    }

    let name_width = snippets
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);
    let tags_width = snippets
        .iter()
        .map(|s| s.tag_summary().chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    let _ = writeln!(output, "{:<name_width$}  {:<tags_width$}  CODE", "NAME", "TAGS");
    let _ = writeln!(
        output,
        "{}  {}  {}",
        "-".repeat(name_width),
        "-".repeat(tags_width),
        "-".repeat(CODE_PREVIEW_WIDTH)
    );

    for snippet in snippets {
        let _ = writeln!(
            output,
            "{:<name_width$}  {:<tags_width$}  {}",
            snippet.name,
            snippet.tag_summary(),
            code_preview(&snippet.code)
        );
    }

    output.truncate(output.trim_end().len());
    output
}

/// Format snippets as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_json(snippets: &[Snippet]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(snippets)
}

/// Format snippets as CSV
#[must_use]
pub fn format_csv(snippets: &[Snippet]) -> String {
    let mut output = String::from("id,name,tags,code\n");

    for snippet in snippets {
        let _ = writeln!(
            output,
            "{},{},{},{}",
            snippet.id,
            escape_csv_field(&snippet.name),
            escape_csv_field(&snippet.tags.join(";")),
            escape_csv_field(&snippet.code)
        );
    }

    output
}

/// Escape a CSV field if it contains special characters
fn escape_csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// First line of the code, shortened to the preview width
fn code_preview(code: &str) -> String {
    let first_line = code.lines().next().unwrap_or("");
    let more = code.lines().nth(1).is_some();

    if first_line.chars().count() > CODE_PREVIEW_WIDTH {
        let cut: String = first_line.chars().take(CODE_PREVIEW_WIDTH - 3).collect();
        format!("{cut}...")
    } else if more {
        format!("{first_line} ...")
    } else {
        first_line.to_string()
    }
}

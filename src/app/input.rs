//! Target list parsing.
//!
//! Input files carry one target per line: an identifier and a URL separated
//! by whitespace or a comma, or a bare URL that serves as its own identifier.
//! Blank lines and `#` comments are skipped.

/// Parses one input line into an `(id, url)` pair.
///
/// Returns `None` for blank lines, comments, and lines whose URL field is
/// empty (e.g. a trailing comma).
pub fn parse_target_line(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    match trimmed.split_once(|c: char| c == ',' || c.is_whitespace()) {
        Some((id, rest)) => {
            let id = id.trim();
            let url = rest.trim();
            if id.is_empty() || url.is_empty() {
                return None;
            }
            Some((id.to_string(), url.to_string()))
        }
        // Bare URL: the URL is its own identifier
        None => Some((trimmed.to_string(), trimmed.to_string())),
    }
}

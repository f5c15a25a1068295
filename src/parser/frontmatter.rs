//! YAML frontmatter extraction

/// Return the YAML text between the leading `---` delimiter lines, if any
///
/// The opening delimiter must be the very first line of the document. The
/// closing delimiter may be `---` or `...`.
pub fn extract_frontmatter(source: &str) -> Option<&str> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut lines = source.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end() != "---" {
        return None;
    }

    let body_start = first.len();
    let mut offset = body_start;

    for line in lines {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            return Some(&source[body_start..offset]);
        }
        offset += line.len();
    }

    None
}

// src/extractors/section.rs

use once_cell::sync::Lazy;
use regex::Regex;

// A heading that terminates a section: 1-4 hashes followed by whitespace.
// Five or more hashes (or hashes glued to text) do not close a section.
static SECTION_BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,4}\s").expect("Failed to compile SECTION_BOUNDARY_RE"));

/// Returns the prose following the first markdown heading (1-4 `#`) whose
/// text contains any of `keywords`, up to but not including the next
/// heading of level 1-4, or end of text. Matching is case-insensitive and
/// first-match-only; no matching heading yields an empty string.
pub fn section(md: &str, keywords: &[&str]) -> String {
    let lowered_keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let lines: Vec<&str> = md.lines().collect();
    for (i, line) in lines.iter().enumerate() {
        if !is_matching_heading(line, &lowered_keywords) {
            continue;
        }
        tracing::trace!("section heading matched: '{}'", line.trim());
        let body: Vec<&str> = lines[i + 1..]
            .iter()
            .take_while(|l| !SECTION_BOUNDARY_RE.is_match(l.trim_start()))
            .copied()
            .collect();
        return body.join("\n");
    }
    String::new()
}

fn is_matching_heading(line: &str, lowered_keywords: &[String]) -> bool {
    let trimmed = line.trim_start();
    let hashes = trimmed.chars().take_while(|&c| c == '#').count();
    if !(1..=4).contains(&hashes) {
        return false;
    }
    let lowered = trimmed.to_lowercase();
    lowered_keywords.iter().any(|k| lowered.contains(k.as_str()))
}

/// Returns the ordered bullet items of `text`: lines whose trimmed form
/// starts with `-`, `*` or `•` followed by whitespace. The marker and
/// surrounding whitespace are stripped; empty items and non-bullet lines
/// are ignored.
pub fn bullets(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim_start();
            let rest = trimmed
                .strip_prefix('-')
                .or_else(|| trimmed.strip_prefix('*'))
                .or_else(|| trimmed.strip_prefix('•'))?;
            if !rest.starts_with(char::is_whitespace) {
                return None;
            }
            let item = rest.trim();
            (!item.is_empty()).then(|| item.to_string())
        })
        .collect()
}

// src/extractors/field.rs

use crate::extractors::table::Record;

/// Lowercases `s` and folds the common Spanish accented vowels to their
/// plain forms, so that header spellings like `Próxima` and `Proxima`
/// compare equal.
pub fn fold(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            other => other,
        })
        .collect()
}

/// Resolves a field on `record` by trying each candidate name in order:
/// the first record key whose folded form contains the folded candidate
/// wins, and its value is returned even when empty. Returns `""` when no
/// candidate matches any key.
///
/// Matching is substring-contains on folded strings, so overlapping
/// synonyms can over-match (a key `urgencia_cliente` matches candidate
/// `urgencia`). That looseness is intentional: upstream column names vary
/// per document.
pub fn resolve<'r>(record: &'r Record, candidates: &[&str]) -> &'r str {
    for candidate in candidates {
        let folded_candidate = fold(candidate);
        for key in record.keys() {
            if fold(key).contains(&folded_candidate) {
                return record.get(key).unwrap_or("");
            }
        }
    }
    ""
}

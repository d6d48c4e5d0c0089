// src/extractors/script.rs

use regex::Regex;

// A usable script has to be a real sentence, not a stray quoted word.
const MIN_SNIPPET_LEN: usize = 20;

/// Extracts the suggested message script for a lead type from `md`.
///
/// `label` is the bolded label to look for and may be a `|`-separated
/// alternation (e.g. `"Cold|Frio|Frío"`). Two patterns are tried in
/// order, first success wins:
///
/// 1. `**<label>...:` at the end of a line, followed by a (possibly
///    block-quoted) line holding a quoted sentence of at least 20 chars.
/// 2. `**<label>...**` followed by the next double-quoted sentence of at
///    least 20 chars.
///
/// Matching is case-insensitive. Any failure, including a label that
/// breaks regex compilation, yields an empty string rather than an error.
pub fn script_snippet(md: &str, label: &str) -> String {
    let patterns = [
        format!(
            r#"(?i)\*\*(?:{label})[^\n]*:[^\n]*\n\s*>"?([^"\n]{{{MIN_SNIPPET_LEN},}})"?"#
        ),
        format!(r#"(?i)\*\*(?:{label})[^*]*\*\*[^"]*"([^"]{{{MIN_SNIPPET_LEN},}})""#),
    ];

    for pattern in &patterns {
        let re = match Regex::new(pattern) {
            Ok(re) => re,
            Err(e) => {
                tracing::warn!("script pattern for label '{}' did not compile: {}", label, e);
                return String::new();
            }
        };
        if let Some(text) = re
            .captures(md)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|t| !t.is_empty())
        {
            return text.to_string();
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blockquote_pattern_matches() {
        let md = "\
**Hot — cierre directo:**
> \"Hola! Vi que estas lista para inscribirte esta semana.\"";
        let snippet = script_snippet(md, "Hot");
        assert_eq!(snippet, "Hola! Vi que estas lista para inscribirte esta semana.");
    }

    #[test]
    fn blockquote_pattern_without_quotes_matches() {
        let md = "**Warm — seguimiento:**\n> Te guardo el cupo hasta el viernes, te parece?";
        let snippet = script_snippet(md, "Warm");
        assert!(snippet.starts_with("Te guardo el cupo"));
    }

    #[test]
    fn blockquote_pattern_beats_inline_bold() {
        // Both forms present, the inline-bold one first in the document;
        // the block-quoted snippet must still win.
        let md = "\
**Hot lead** responder \"Mensaje inline que tambien supera el largo minimo.\"

**Hot — cierre directo:**
>\"Hola! Vi que estas lista para inscribirte esta semana.\"";
        let snippet = script_snippet(md, "Hot");
        assert_eq!(snippet, "Hola! Vi que estas lista para inscribirte esta semana.");
    }

    #[test]
    fn inline_bold_pattern_is_the_fallback() {
        let md = "**Cold lead** sugerimos enviar \"Hace tiempo no hablamos, sigues interesada?\"";
        let snippet = script_snippet(md, "Cold|Frio|Frío");
        assert_eq!(snippet, "Hace tiempo no hablamos, sigues interesada?");
    }

    #[test]
    fn label_alternation_matches_accented_variant() {
        let md = "**Frío** mensaje: \"Retomemos la conversacion cuando gustes, sin compromiso.\"";
        assert!(!script_snippet(md, "Cold|Frio|Frío").is_empty());
    }

    #[test]
    fn short_quote_is_rejected() {
        let md = "**Hot** responder \"ok gracias\"";
        assert_eq!(script_snippet(md, "Hot"), "");
    }

    #[test]
    fn missing_label_yields_empty() {
        let md = "**Warm** responder \"Este mensaje es suficientemente largo para calificar.\"";
        assert_eq!(script_snippet(md, "Hot"), "");
    }

    #[test]
    fn broken_label_regex_is_suppressed() {
        assert_eq!(script_snippet("anything at all", "Hot("), "");
    }
}

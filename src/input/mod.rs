// src/input/mod.rs
//
// serde models for the upstream aggregate payload. Two generations of the
// producer are in the wild, so both envelope field names (`output`/`data`)
// and both item field names (`output`/`text`) are accepted.

use serde::Deserialize;

/// The aggregate envelope: `{ "output": [ ... ] }` or `{ "data": [ ... ] }`.
#[derive(Debug, Default, Deserialize)]
pub struct AggregatePayload {
    #[serde(default)]
    pub output: Option<Vec<AggregateItem>>,
    #[serde(default)]
    pub data: Option<Vec<AggregateItem>>,
}

/// One upstream item carrying a markdown document.
#[derive(Debug, Default, Deserialize)]
pub struct AggregateItem {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl AggregateItem {
    /// The item's markdown body: `output` wins over `text`, empty strings
    /// count as absent.
    pub fn markdown(&self) -> Option<&str> {
        self.output
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.text.as_deref().filter(|s| !s.is_empty()))
    }
}

impl AggregatePayload {
    /// Flattens the envelope into the non-empty markdown documents.
    /// An envelope with neither field (or only empty items) yields an
    /// empty collection, never an error.
    pub fn documents(&self) -> Vec<String> {
        let items = self.output.as_deref().or(self.data.as_deref()).unwrap_or(&[]);
        let docs: Vec<String> = items
            .iter()
            .filter_map(|item| item.markdown().map(str::to_string))
            .collect();
        tracing::debug!("aggregate payload: {} item(s), {} with markdown", items.len(), docs.len());
        docs
    }
}

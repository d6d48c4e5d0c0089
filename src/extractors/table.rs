// src/extractors/table.rs

/// One parsed row of a markdown pipe table, as an ordered
/// field-name -> cell-value mapping. Insertion order follows the
/// header row of the table the record came from; keys are not
/// guaranteed stable across documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.push((key.into(), value.into()));
    }

    /// Exact-key lookup. See `extractors::field::resolve` for the
    /// alias-tolerant variant used by the report layer.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True if at least one cell value is non-empty.
    pub fn has_content(&self) -> bool {
        self.fields.iter().any(|(_, v)| !v.is_empty())
    }
}

/// Parses every markdown pipe table found in `md` into a flat sequence of
/// records, one per data row.
///
/// A line whose trimmed form starts with `|` is part of a table. The first
/// such line after a non-table line is the header; table lines containing
/// `---` are separators and are discarded; every following table line is a
/// data row until a non-table line (or end of input) closes the table.
/// Each table uses its own local header, so documents mixing several tables
/// with different columns still parse.
///
/// No validation that a row's cell count matches the header: short rows
/// simply leave the trailing entries missing, extra cells are dropped.
pub fn parse_tables(md: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut header: Option<Vec<String>> = None;

    for line in md.lines() {
        let trimmed = line.trim();
        if !trimmed.starts_with('|') {
            // Any non-table line closes the current table, including a
            // header-only one that never produced a data row.
            header = None;
            continue;
        }
        if trimmed.contains("---") {
            continue; // separator row
        }
        match &header {
            None => header = Some(split_cells(trimmed)),
            Some(headers) => {
                let cells = split_cells(trimmed);
                let mut record = Record::new();
                for (i, h) in headers.iter().enumerate() {
                    if let Some(cell) = cells.get(i) {
                        record.insert(h.clone(), cell.clone());
                    }
                }
                if record.has_content() {
                    records.push(record);
                }
            }
        }
    }

    tracing::debug!("parsed {} record(s) from markdown tables", records.len());
    records
}

/// Splits a table line on `|` and trims each cell. The empty leading and
/// trailing cells produced by the boundary pipes are dropped; interior
/// empty cells are kept so columns stay aligned.
fn split_cells(line: &str) -> Vec<String> {
    let mut cells: Vec<String> = line.split('|').map(|c| c.trim().to_string()).collect();
    if cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_table_one_record_per_row() {
        let md = "\
Some intro prose.

| Lead ID | Estado | Score |
|---------|--------|-------|
| L-001   | HOT    | 85    |
| L-002   | Warm   | 60    |

Closing prose.";
        let records = parse_tables(md);
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].keys().collect::<Vec<_>>(),
            vec!["Lead ID", "Estado", "Score"]
        );
        assert_eq!(records[0].get("Estado"), Some("HOT"));
        assert_eq!(records[1].get("Score"), Some("60"));
    }

    #[test]
    fn header_only_table_yields_nothing() {
        let md = "| A | B |\n|---|---|\nno more table here";
        assert!(parse_tables(md).is_empty());
    }

    #[test]
    fn all_empty_cells_row_is_skipped() {
        let md = "| A | B |\n|---|---|\n|   |   |";
        assert!(parse_tables(md).is_empty());
    }

    #[test]
    fn multiple_tables_concatenate_with_local_headers() {
        let md = "\
| A | B |
|---|---|
| 1 | 2 |

text between

| X |
|---|
| 9 |";
        let records = parse_tables(md);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("A"), Some("1"));
        assert_eq!(records[1].get("X"), Some("9"));
        assert_eq!(records[1].get("A"), None);
    }

    #[test]
    fn short_row_leaves_entry_missing() {
        let md = "| A | B | C |\n|---|---|---|\n| 1 | 2 |";
        let records = parse_tables(md);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("A"), Some("1"));
        assert_eq!(records[0].get("C"), None);
        assert_eq!(records[0].len(), 2);
    }

    #[test]
    fn interior_empty_cells_keep_columns_aligned() {
        let md = "| A | B | C |\n|---|---|---|\n| 1 |   | 3 |";
        let records = parse_tables(md);
        assert_eq!(records[0].get("B"), Some(""));
        assert_eq!(records[0].get("C"), Some("3"));
    }

    #[test]
    fn table_at_end_of_input_is_closed() {
        let md = "prose\n| A |\n|---|\n| 1 |";
        let records = parse_tables(md);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("A"), Some("1"));
    }

    #[test]
    fn header_does_not_leak_across_prose_gap() {
        // A lone header abandoned mid-document must not claim the next
        // table's header line as a data row.
        let md = "| Old |\nprose\n| New |\n|---|\n| v |";
        let records = parse_tables(md);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("New"), Some("v"));
        assert_eq!(records[0].get("Old"), None);
    }

    #[test]
    fn extra_cells_beyond_header_are_dropped() {
        let md = "| A |\n|---|\n| 1 | 2 | 3 |";
        let records = parse_tables(md);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 1);
        assert_eq!(records[0].get("A"), Some("1"));
    }
}

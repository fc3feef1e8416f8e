use async_trait::async_trait;

/// A row as the spreadsheet hands it back: positional cells, trailing empties trimmed.
pub type Row = Vec<String>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Sheets request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sheets API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid sheets URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Row {row} does not exist in sheet '{sheet}'")]
    RowOutOfRange { sheet: String, row: usize },

    #[error("Store is not configured: {0}")]
    NotConfigured(String),
}

/// Row-oriented access to named sheets.
///
/// Row indices are 0-based and count data rows only; the header row is
/// never returned and never addressed.
#[async_trait]
pub trait TabularStore: Send + Sync {
    async fn read_rows(&self, sheet: &str) -> Result<Vec<Row>, StoreError>;

    /// Appends all rows in a single call.
    async fn append_rows(&self, sheet: &str, rows: Vec<Row>) -> Result<(), StoreError>;

    /// Overwrites `values.len()` cells of one row starting at `first_column`.
    async fn update_cells(
        &self,
        sheet: &str,
        row: usize,
        first_column: usize,
        values: Row,
    ) -> Result<(), StoreError>;
}

/// Spreadsheet column letter for a 0-based column index.
pub fn column_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Sheet name for a per-event medal table: `table-tennis` -> `Table_Tennis`.
pub fn event_sheet_name(event_id: &str) -> String {
    let mut name = String::with_capacity(event_id.len());
    let mut previous_alphabetic = false;
    for c in event_id.replace('-', "_").chars() {
        if c.is_alphabetic() {
            if previous_alphabetic {
                name.extend(c.to_lowercase());
            } else {
                name.extend(c.to_uppercase());
            }
            previous_alphabetic = true;
        } else {
            name.push(c);
            previous_alphabetic = false;
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(3), "D");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(27), "AB");
    }

    #[test]
    fn test_event_sheet_names() {
        assert_eq!(event_sheet_name("chess"), "Chess");
        assert_eq!(event_sheet_name("table-tennis"), "Table_Tennis");
        assert_eq!(event_sheet_name("esports-fifa"), "Esports_Fifa");
        assert_eq!(event_sheet_name("beg-borrow-steal"), "Beg_Borrow_Steal");
    }
}

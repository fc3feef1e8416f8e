use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::layout::{
    CULTURAL_SHEET, FIXTURES_HEADER, FIXTURES_SHEET, MATCHES_HEADER, MATCHES_SHEET,
    OVERALL_SHEET, SPORTS_SHEET, STANDINGS_HEADER,
};
use crate::db::store::{Row, StoreError, TabularStore};

#[derive(Debug, Default, Clone)]
struct Sheet {
    header: Row,
    rows: Vec<Row>,
}

/// Process-local sheets. Backs tests and the `in_memory` store backend.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    sheets: RwLock<HashMap<String, Sheet>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with the header rows of the standard tournament workbook.
    pub fn with_standard_layout() -> Self {
        let mut sheets = HashMap::new();
        for name in [OVERALL_SHEET, SPORTS_SHEET, CULTURAL_SHEET] {
            sheets.insert(name.to_string(), Sheet { header: to_row(&STANDINGS_HEADER), rows: vec![] });
        }
        sheets.insert(FIXTURES_SHEET.to_string(), Sheet { header: to_row(&FIXTURES_HEADER), rows: vec![] });
        sheets.insert(MATCHES_SHEET.to_string(), Sheet { header: to_row(&MATCHES_HEADER), rows: vec![] });
        Self { sheets: RwLock::new(sheets) }
    }

    pub async fn header(&self, sheet: &str) -> Option<Row> {
        self.sheets.read().await.get(sheet).map(|s| s.header.clone())
    }
}

fn to_row(cells: &[&str]) -> Row {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Sheets drops trailing empty cells from every row it returns.
fn trimmed(row: &Row) -> Row {
    let len = row.iter().rposition(|c| !c.is_empty()).map_or(0, |i| i + 1);
    row[..len].to_vec()
}

#[async_trait]
impl TabularStore for InMemoryStore {
    async fn read_rows(&self, sheet: &str) -> Result<Vec<Row>, StoreError> {
        let sheets = self.sheets.read().await;
        Ok(sheets
            .get(sheet)
            .map(|s| s.rows.iter().map(trimmed).collect())
            .unwrap_or_default())
    }

    async fn append_rows(&self, sheet: &str, rows: Vec<Row>) -> Result<(), StoreError> {
        let mut sheets = self.sheets.write().await;
        sheets.entry(sheet.to_string()).or_default().rows.extend(rows);
        Ok(())
    }

    async fn update_cells(
        &self,
        sheet: &str,
        row: usize,
        first_column: usize,
        values: Row,
    ) -> Result<(), StoreError> {
        let mut sheets = self.sheets.write().await;
        let target = sheets
            .get_mut(sheet)
            .and_then(|s| s.rows.get_mut(row))
            .ok_or_else(|| StoreError::RowOutOfRange { sheet: sheet.to_string(), row })?;

        let needed = first_column + values.len();
        if target.len() < needed {
            target.resize(needed, String::new());
        }
        for (offset, value) in values.into_iter().enumerate() {
            target[first_column + offset] = value;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        to_row(cells)
    }

    #[tokio::test]
    async fn test_missing_sheet_reads_empty() {
        let store = InMemoryStore::new();
        assert!(store.read_rows("Nowhere").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_then_read_trims_trailing_empties() {
        let store = InMemoryStore::with_standard_layout();
        store
            .append_rows(FIXTURES_SHEET, vec![row(&["chess", "A", "B", "2024-03-01", "10:00", "Hall", "scheduled", "", ""])])
            .await
            .unwrap();

        let rows = store.read_rows(FIXTURES_SHEET).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 7);
        assert_eq!(store.header(FIXTURES_SHEET).await.unwrap()[0], "Event");
    }

    #[tokio::test]
    async fn test_update_cells_extends_short_rows() {
        let store = InMemoryStore::new();
        store.append_rows("Chess", vec![row(&["A"])]).await.unwrap();
        store.update_cells("Chess", 0, 1, row(&["1", "2", "3"])).await.unwrap();

        let rows = store.read_rows("Chess").await.unwrap();
        assert_eq!(rows[0], row(&["A", "1", "2", "3"]));
    }

    #[tokio::test]
    async fn test_update_unknown_row_fails() {
        let store = InMemoryStore::new();
        let err = store.update_cells("Chess", 4, 0, row(&["x"])).await.unwrap_err();
        assert!(matches!(err, StoreError::RowOutOfRange { row: 4, .. }));
    }
}

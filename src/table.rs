// src/table.rs

use csv::{ReaderBuilder, WriterBuilder};
use std::io::Cursor;
use std::path::Path;

/// An in-memory CSV table: ordered headers plus one `Vec<String>` per row.
///
/// Everything is held as text exactly as the archive returned it; this crate
/// never interprets cell values, only column names. Filtering operations
/// return a fresh `Table` and leave `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Parse a full CSV document (header row first) into a table.
    pub fn from_csv(text: &str) -> csv::Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(Cursor::new(text.as_bytes()));

        let headers = rdr.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Return a copy of this table containing only the columns for which
    /// `keep` returns true, in their original order. Rows keep their order
    /// and values; columns the predicate never matches simply don't appear.
    pub fn filter_columns<F>(&self, keep: F) -> Table
    where
        F: Fn(&str) -> bool,
    {
        let kept: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .filter(|(_, name)| keep(name))
            .map(|(i, _)| i)
            .collect();

        let headers = kept.iter().map(|&i| self.headers[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| kept.iter().map(|&i| row[i].clone()).collect())
            .collect();

        Table { headers, rows }
    }

    /// Write the table as CSV to `path`: header row first, no index column.
    pub fn write_csv(&self, path: &Path) -> csv::Result<()> {
        let mut wtr = WriterBuilder::new().from_path(path)?;
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample() -> Table {
        Table::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec![
                vec!["1".into(), "2".into(), "3".into()],
                vec!["4".into(), "5".into(), "6".into()],
            ],
        )
    }

    #[test]
    fn from_csv_round_trips_headers_and_rows() {
        let table = Table::from_csv("a,b,c\n1,2,3\n4,5,6\n").unwrap();
        assert_eq!(table, sample());
    }

    #[test]
    fn filter_columns_preserves_order_and_values() {
        let table = sample();
        let filtered = table.filter_columns(|name| name != "b");
        assert_eq!(filtered.headers(), ["a", "c"]);
        assert_eq!(filtered.rows(), [vec!["1", "3"], vec!["4", "6"]]);
        // the original is untouched
        assert_eq!(table.headers(), ["a", "b", "c"]);
    }

    #[test]
    fn filter_columns_ignores_absent_names() {
        let table = sample();
        let filtered = table.filter_columns(|name| name != "no_such_column");
        assert_eq!(filtered, table);
    }

    #[test]
    fn write_csv_emits_header_and_no_index() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("out.csv");
        sample().write_csv(&path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "a,b,c\n1,2,3\n4,5,6\n");
    }
}

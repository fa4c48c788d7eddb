// File: crates/demo/src/table.rs
// Summary: Loads an uploaded CSV table into a data bag, picking canonical shapes from its column types.

use std::path::Path;

use anyhow::{Context, Result};
use chart_core::{BarDatum, DataBag, Point};
use tracing::{debug, warn};

/// Column-wise view of a CSV file with a header row.
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn load(path: &Path) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .with_context(|| format!("opening {}", path.display()))?;

        let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
        let mut rows = Vec::new();
        for (i, rec) in rdr.records().enumerate() {
            match rec {
                Ok(rec) => rows.push(rec.iter().map(str::to_string).collect()),
                Err(e) => warn!(row = i + 1, error = %e, "skipping unreadable row"),
            }
        }
        debug!(columns = headers.len(), rows = rows.len(), "table loaded");
        Ok(Self { headers, rows })
    }

    fn cell(&self, row: usize, col: usize) -> &str {
        self.rows[row].get(col).map(String::as_str).unwrap_or("")
    }

    /// A column is numeric when every non-empty cell parses and at least one does.
    fn is_numeric(&self, col: usize) -> bool {
        let mut any = false;
        for r in 0..self.rows.len() {
            let c = self.cell(r, col);
            if c.is_empty() { continue; }
            if c.parse::<f64>().is_err() { return false; }
            any = true;
        }
        any
    }

    fn number(&self, row: usize, col: usize) -> f64 {
        self.cell(row, col).parse().unwrap_or(f64::NAN)
    }

    pub fn numeric_columns(&self) -> Vec<usize> {
        (0..self.headers.len()).filter(|&c| self.is_numeric(c)).collect()
    }

    pub fn label_column(&self) -> Option<usize> {
        (0..self.headers.len()).find(|&c| !self.is_numeric(c))
    }

    /// Shapes filled:
    /// - bars: label column + first numeric column
    /// - points: first two numeric columns, or (row index, value) for a single numeric column
    /// - matrix: every numeric column, when there are at least two
    pub fn to_bag(&self) -> DataBag {
        let numeric = self.numeric_columns();
        let label = self.label_column();
        let n = self.rows.len();
        let mut bag = DataBag::new();

        if let (Some(lc), Some(&vc)) = (label, numeric.first()) {
            let bars = (0..n).map(|r| BarDatum::new(self.cell(r, lc), self.number(r, vc))).collect();
            bag = bag.with_bars(bars);
        }
        match numeric.as_slice() {
            [] => warn!("no numeric columns found"),
            [only] if label.is_none() => {
                let pts = (0..n).map(|r| Point::new(r as f64, self.number(r, *only))).collect();
                bag = bag.with_points(pts);
            }
            [_] => {}
            [xc, yc, ..] => {
                let pts = (0..n).map(|r| Point::new(self.number(r, *xc), self.number(r, *yc))).collect();
                bag = bag.with_points(pts);
                let matrix = (0..n).map(|r| numeric.iter().map(|&c| self.number(r, c)).collect()).collect();
                bag = bag.with_matrix(matrix);
            }
        }
        debug!(shapes = ?bag.present_shapes(), "table mapped to data bag");
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows.iter().map(|r| r.iter().map(|s| s.to_string()).collect()).collect(),
        }
    }

    #[test]
    fn labelled_table_yields_bars_points_and_matrix() {
        let t = table(&["region", "sales", "cost"], &[&["N", "10", "4"], &["S", "", "2"]]);
        let bag = t.to_bag();
        let bars = bag.bars.as_ref().unwrap();
        assert_eq!(bars[0], BarDatum::new("N", 10.0));
        assert!(bars[1].value.is_nan());
        assert_eq!(bag.points.as_ref().unwrap()[0], Point::new(10.0, 4.0));
        assert_eq!(bag.matrix.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn single_numeric_column_becomes_indexed_points() {
        let t = table(&["v"], &[&["3"], &["5"]]);
        let bag = t.to_bag();
        assert!(bag.bars.is_none() && bag.matrix.is_none());
        assert_eq!(bag.points.unwrap(), vec![Point::new(0.0, 3.0), Point::new(1.0, 5.0)]);
    }
}

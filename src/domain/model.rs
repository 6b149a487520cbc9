use crate::utils::error::MatrixError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 已驗證的方陣，建立後不可變
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Matrix {
    rows: Vec<Vec<i64>>,
}

impl Matrix {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn into_rows(self) -> Vec<Vec<i64>> {
        self.rows
    }
}

impl TryFrom<Vec<Vec<i64>>> for Matrix {
    type Error = MatrixError;

    /// Rows must all share the first row's width, and that width must equal
    /// the row count.
    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self, Self::Error> {
        let Some(first) = rows.first() else {
            return Ok(Self::empty());
        };

        let width = first.len();
        for (index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MatrixError::ShapeError {
                    expected: width,
                    actual: row.len(),
                    row: index + 1,
                });
            }
        }

        // 寬度一致但與行數不同
        if width != rows.len() {
            return Err(MatrixError::ShapeError {
                expected: rows.len(),
                actual: width,
                row: 1,
            });
        }

        Ok(Self { rows })
    }
}

/// 一次遍歷的結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpiralReport {
    pub source: String,
    pub dimension: usize,
    pub sequence: Vec<i64>,
    pub generated_at: DateTime<Utc>,
}

impl SpiralReport {
    pub fn new(source: impl Into<String>, dimension: usize, sequence: Vec<i64>) -> Self {
        Self {
            source: source.into(),
            dimension,
            sequence,
            generated_at: Utc::now(),
        }
    }

    /// `[a, b, c]` form, the way the sequence is printed on the console.
    pub fn render_text(&self) -> String {
        let items: Vec<String> = self.sequence.iter().map(|v| v.to_string()).collect();
        format!("[{}]", items.join(", "))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_square_rows() {
        let matrix = Matrix::try_from(vec![vec![1, 2], vec![4, 3]]).unwrap();
        assert_eq!(matrix.dimension(), 2);
        assert_eq!(matrix.get(1, 0), Some(4));
        assert_eq!(matrix.get(2, 0), None);
    }

    #[test]
    fn test_try_from_ragged_rows_reports_first_row_width() {
        let err = Matrix::try_from(vec![vec![1, 2], vec![3, 4, 5]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::ShapeError {
                expected: 2,
                actual: 3,
                row: 2
            }
        );
    }

    #[test]
    fn test_try_from_rectangular_rows() {
        let err = Matrix::try_from(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::ShapeError {
                expected: 3,
                actual: 2,
                row: 1
            }
        );
    }

    #[test]
    fn test_try_from_empty() {
        let matrix = Matrix::try_from(Vec::new()).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.dimension(), 0);
    }

    #[test]
    fn test_render_text() {
        let report = SpiralReport::new("test", 2, vec![1, 4, 3, 2]);
        assert_eq!(report.render_text(), "[1, 4, 3, 2]");
        assert_eq!(SpiralReport::new("test", 0, vec![]).render_text(), "[]");
    }
}

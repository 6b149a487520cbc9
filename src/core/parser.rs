use crate::domain::model::Matrix;
use crate::utils::error::MatrixError;

/// 邊框行的起始字元
pub const BORDER_MARKER: char = '+';
/// 欄位分隔字元
pub const COLUMN_SEPARATOR: char = '|';

/// Parses bordered grid text such as
///
/// ```text
/// +---+---+
/// | 1 | 2 |
/// +---+---+
/// | 4 | 3 |
/// +---+---+
/// ```
///
/// into a validated square [`Matrix`].
pub struct MatrixParser;

impl MatrixParser {
    pub fn parse(text: &str) -> Result<Matrix, MatrixError> {
        let mut rows = Vec::new();

        for (index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();

            // 跳過空行、邊框行以及沒有分隔符的行
            if line.is_empty() || line.starts_with(BORDER_MARKER) || !line.contains(COLUMN_SEPARATOR)
            {
                continue;
            }

            let row = Self::parse_row(line, index + 1)?;
            // 沒有任何欄位的行（例如 "||"）直接丟棄
            if !row.is_empty() {
                rows.push(row);
            }
        }

        Matrix::try_from(rows)
    }

    fn parse_row(line: &str, line_number: usize) -> Result<Vec<i64>, MatrixError> {
        line.trim_matches(COLUMN_SEPARATOR)
            .split(COLUMN_SEPARATOR)
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(|field| {
                field.parse::<i64>().map_err(|_| MatrixError::ParseError {
                    line: line_number,
                    field: field.to_string(),
                })
            })
            .collect()
    }
}

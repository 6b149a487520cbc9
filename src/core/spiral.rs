use crate::domain::model::Matrix;

/// Counter-clockwise spiral walk starting at the top-left cell: down the left
/// column, right along the bottom row, up the right column, then left along
/// the top row, shrinking the ring after each pass.
pub struct SpiralTraverser;

impl SpiralTraverser {
    pub fn traverse(matrix: &Matrix) -> Vec<i64> {
        let rows = matrix.rows();
        let n = matrix.dimension();
        let mut result = Vec::with_capacity(n * n);

        // 半開區間：[top, bottom) x [left, right)
        let (mut top, mut bottom) = (0, n);
        let (mut left, mut right) = (0, n);

        while top < bottom && left < right {
            // 往下走左邊
            for row in rows.iter().take(bottom).skip(top) {
                result.push(row[left]);
            }
            left += 1;

            // 往右走底部
            result.extend_from_slice(&rows[bottom - 1][left..right]);
            bottom -= 1;

            // 往上走右邊
            if left < right {
                for row in rows[top..bottom].iter().rev() {
                    result.push(row[right - 1]);
                }
                right -= 1;
            }

            // 往左走頂部
            if top < bottom {
                result.extend(rows[top][left..right].iter().rev());
                top += 1;
            }
        }

        result
    }
}

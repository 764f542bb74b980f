use crate::error::KataError;

/// Row-major integer matrix.
pub type Matrix = Vec<Vec<i64>>;

// Column count if every row has the same length.
fn width(m: &[Vec<i64>]) -> Option<usize> {
    let w = m.first().map_or(0, Vec::len);
    m.iter().all(|row| row.len() == w).then_some(w)
}

/// Standard matrix product.
///
/// Both operands must be rectangular, and the column count of `m1` must
/// equal the row count of `m2`; any violation is a dimension-mismatch
/// error. The result is (rows of m1) x (columns of m2), each cell the
/// dot product of the corresponding row and column.
pub fn product(m1: &[Vec<i64>], m2: &[Vec<i64>]) -> Result<Matrix, KataError> {
    let mismatch = || KataError::DimensionMismatch {
        left_rows: m1.len(),
        left_cols: m1.first().map_or(0, Vec::len),
        right_rows: m2.len(),
        right_cols: m2.first().map_or(0, Vec::len),
    };

    let left_cols = width(m1).ok_or_else(mismatch)?;
    let right_cols = width(m2).ok_or_else(mismatch)?;
    if left_cols != m2.len() {
        return Err(mismatch());
    }

    let rows = m1
        .iter()
        .map(|row| {
            (0..right_cols)
                .map(|j| row.iter().zip(m2).map(|(a, m2_row)| a * m2_row[j]).sum())
                .collect()
        })
        .collect();

    Ok(rows)
}

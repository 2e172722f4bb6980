//! Column extraction from multi-column classifier output.

use crate::error::SeriesError;

/// Keeps one whitespace-separated column of each record, 1-based.
///
/// The classifier writes `YYYY MM DD class` rows; extracting column 4
/// leaves just the class-label series the leap-day inserter consumes.
/// Fields are split on any run of whitespace, so fixed-width and
/// tab-separated layouts both work.
///
/// # Errors
///
/// Returns [`SeriesError::InvalidColumn`] if `column` is 0 and
/// [`SeriesError::ColumnOutOfRange`] naming the first record with too
/// few fields.
pub fn extract_column(records: &[String], column: usize) -> Result<Vec<String>, SeriesError> {
    if column == 0 {
        return Err(SeriesError::InvalidColumn);
    }
    let mut out = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let mut fields = record.split_whitespace();
        match fields.nth(column - 1) {
            Some(field) => out.push(field.to_owned()),
            None => {
                return Err(SeriesError::ColumnOutOfRange {
                    line: i + 1,
                    column,
                    n_columns: record.split_whitespace().count(),
                });
            }
        }
    }
    Ok(out)
}

//! Column-wise pasting of equal-length record lists.

use crate::error::SeriesError;

/// Joins several record lists row by row with `separator`.
///
/// The in-memory equivalent of `paste date.dat member_*.dat`: input 0 is
/// conventionally the date vector and the remaining inputs are one
/// classification series per ensemble member. All inputs must have the
/// same record count.
///
/// # Errors
///
/// Returns [`SeriesError::EmptyPaste`] for zero inputs and
/// [`SeriesError::LengthMismatch`] naming the first input whose length
/// differs from input 0's.
pub fn paste(inputs: &[Vec<String>], separator: &str) -> Result<Vec<String>, SeriesError> {
    let first = inputs.first().ok_or(SeriesError::EmptyPaste)?;
    let expected = first.len();
    for (index, input) in inputs.iter().enumerate().skip(1) {
        if input.len() != expected {
            return Err(SeriesError::LengthMismatch {
                index,
                expected,
                got: input.len(),
            });
        }
    }

    let mut out = Vec::with_capacity(expected);
    for row in 0..expected {
        let fields: Vec<&str> = inputs.iter().map(|input| input[row].as_str()).collect();
        out.push(fields.join(separator));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn date_vector_and_two_members() {
        let dates = column(&["1960 01 01", "1960 01 02"]);
        let member_a = column(&["3", "7"]);
        let member_b = column(&["10", "nan"]);
        let wide = paste(&[dates, member_a, member_b], "\t").unwrap();
        assert_eq!(wide, vec!["1960 01 01\t3\t10", "1960 01 02\t7\tnan"]);
    }

    #[test]
    fn single_input_is_identity() {
        let only = column(&["3", "7", "1"]);
        let wide = paste(&[only.clone()], "\t").unwrap();
        assert_eq!(wide, only);
    }

    #[test]
    fn custom_separator() {
        let a = column(&["1"]);
        let b = column(&["2"]);
        let wide = paste(&[a, b], " | ").unwrap();
        assert_eq!(wide, vec!["1 | 2"]);
    }

    #[test]
    fn length_mismatch_names_input() {
        let a = column(&["1", "2", "3"]);
        let b = column(&["x", "y", "z"]);
        let c = column(&["only one"]);
        let err = paste(&[a, b, c], "\t").unwrap_err();
        match err {
            SeriesError::LengthMismatch {
                index,
                expected,
                got,
            } => {
                assert_eq!(index, 2);
                assert_eq!(expected, 3);
                assert_eq!(got, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn no_inputs_rejected() {
        let err = paste(&[], "\t").unwrap_err();
        assert!(matches!(err, SeriesError::EmptyPaste));
    }

    #[test]
    fn empty_columns_give_empty_output() {
        let wide = paste(&[Vec::new(), Vec::new()], "\t").unwrap();
        assert!(wide.is_empty());
    }
}

use crate::error::DrillError;
use crate::value::Loose;

/// Arithmetic mean; `EmptyInput` for an empty slice.
pub fn mean(values: &[f64]) -> Result<f64, DrillError> {
    if values.is_empty() {
        return Err(DrillError::EmptyInput);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean of loosely typed grades.
///
/// Every grade must coerce to a float; the first that does not fails the
/// whole computation with `InvalidGrade` (no partial average).
pub fn average_grades(grades: &[Loose]) -> Result<f64, DrillError> {
    let coerced = grades
        .iter()
        .map(|g| {
            g.to_f64()
                .ok_or_else(|| DrillError::InvalidGrade { raw: g.to_string() })
        })
        .collect::<Result<Vec<f64>, _>>()?;
    mean(&coerced)
}

/// Parse grades separated by spaces and/or commas, e.g. `"8 9 10"` or `"6.5, 7"`.
pub fn parse_grades(input: &str) -> Result<Vec<f64>, DrillError> {
    if input.trim().is_empty() {
        return Err(DrillError::EmptyInput);
    }
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            tok.parse::<f64>()
                .map_err(|_| DrillError::InvalidGrade {
                    raw: Loose::from(tok).to_string(),
                })
        })
        .collect()
}

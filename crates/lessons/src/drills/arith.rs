use crate::error::DrillError;
use crate::value::Loose;

/// Sum two loose values.
///
/// Tries a direct numeric add first, then float coercion of both sides
/// (so `10 + "5"` is `15.0`). Fails with `TypeMismatch` when either side
/// does not coerce.
pub fn robust_sum(a: &Loose, b: &Loose) -> Result<f64, DrillError> {
    if let (Some(x), Some(y)) = (a.as_number(), b.as_number()) {
        return Ok(x + y);
    }
    match (a.to_f64(), b.to_f64()) {
        (Some(x), Some(y)) => Ok(x + y),
        _ => Err(DrillError::TypeMismatch {
            left: a.type_name().to_string(),
            right: b.type_name().to_string(),
        }),
    }
}

fn parse_operand(raw: &str) -> Result<f64, DrillError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| DrillError::InvalidNumber {
            raw: raw.to_string(),
        })
}

/// Parse both operands, then divide.
/// Both operands are parsed before the zero check, so `("x", "0")` is `InvalidNumber`.
pub fn try_divide(dividend: &str, divisor: &str) -> Result<f64, DrillError> {
    let a = parse_operand(dividend)?;
    let b = parse_operand(divisor)?;
    if b == 0.0 {
        return Err(DrillError::DivisionByZero);
    }
    Ok(a / b)
}

/// Sentinel form of `try_divide`.
pub fn divide(dividend: &str, divisor: &str) -> Option<f64> {
    match try_divide(dividend, divisor) {
        Ok(q) => {
            tracing::info!(dividend, divisor, quotient = q, "divide");
            Some(q)
        }
        Err(err) => {
            tracing::warn!(dividend, divisor, %err, "divide rejected");
            None
        }
    }
}

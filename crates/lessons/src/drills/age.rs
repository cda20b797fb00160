use serde::Serialize;

use crate::cfg::AgeCfg;
use crate::error::DrillError;
use crate::value::Loose;

/// Confirmation message for an age inside `cfg`, else `InvalidAge`.
pub fn validate_age(age: i64, cfg: &AgeCfg) -> Result<String, DrillError> {
    if !cfg.contains(age) {
        return Err(DrillError::InvalidAge {
            age,
            min: cfg.min,
            max: cfg.max,
        });
    }
    Ok(format!("Valid age: {age}"))
}

/// Terminal result of `request_valid_age`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AgeOutcome {
    /// `attempt` is 1-based.
    Accepted {
        age: i64,
        attempt: usize,
        message: String,
    },
    Exhausted {
        attempts: usize,
        #[serde(skip)]
        rejected: Vec<DrillError>,
    },
}

impl AgeOutcome {
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Accepted { message, .. } => Some(message),
            Self::Exhausted { .. } => None,
        }
    }

    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Walk `attempts` until one is a valid age.
///
/// Non-integers are `InvalidInput`, out-of-range integers `InvalidAge`; both
/// are logged and the loop moves on. Running out of attempts yields
/// `Exhausted` carrying every rejection in order.
pub fn request_valid_age<I>(attempts: I, cfg: &AgeCfg) -> AgeOutcome
where
    I: IntoIterator,
    I::Item: Into<Loose>,
{
    let mut rejected = Vec::new();
    for (k, attempt) in attempts.into_iter().enumerate() {
        let raw: Loose = attempt.into();
        let checked = raw
            .to_i64()
            .ok_or_else(|| DrillError::InvalidInput {
                raw: raw.to_string(),
            })
            .and_then(|age| validate_age(age, cfg).map(|msg| (age, msg)));
        match checked {
            Ok((age, message)) => {
                tracing::info!(age, attempt = k + 1, "age accepted");
                return AgeOutcome::Accepted {
                    age,
                    attempt: k + 1,
                    message,
                };
            }
            Err(err) => {
                tracing::warn!(attempt = k + 1, %err, "age rejected");
                rejected.push(err);
            }
        }
    }
    tracing::info!(
        attempts = rejected.len(),
        "no valid age in the attempts provided"
    );
    AgeOutcome::Exhausted {
        attempts: rejected.len(),
        rejected,
    }
}

//! Small teaching units: geometry helpers, an animal hierarchy and
//! error-handling drills.
//!
//! Layout
//! - `geometry`: pure numeric helpers (roots, roundings, areas, hypotenuse).
//! - `zoo`: closed `Species` enum, `Animal`, and the `Zoo` holder.
//! - `drills`: validation functions that either return a coerced value or a
//!   typed `DrillError`; sentinel wrappers report and return `None`.
//! - `value`: `Loose`, the tagged stand-in for loosely typed inputs.
//!
//! Every unit is a leaf; nothing here keeps state across calls.

pub mod cfg;
pub mod drills;
pub mod error;
pub mod geometry;
pub mod value;
pub mod zoo;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{DomainError, DrillError, ErrorKind};
pub use value::Loose;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::AgeCfg;
    pub use crate::drills::{
        average_grades, divide, element_at, greeting, lookup, lookup_or, name_message,
        parse_grades, request_valid_age, robust_sum, try_divide, try_element_at, validate_age,
        AgeOutcome,
    };
    pub use crate::error::{DomainError, DrillError, ErrorKind};
    pub use crate::geometry::{circle_area, hypotenuse, roundings, sqrt, triangle_area, Roundings};
    pub use crate::value::Loose;
    pub use crate::zoo::{Animal, Species, Zoo};
}

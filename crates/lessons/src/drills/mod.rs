//! Error-handling drills.
//!
//! Each function is a leaf taking a small input. Two shapes exist:
//! - `try_*` / propagating functions return `Result<_, DrillError>`;
//! - sentinel wrappers (`element_at`, `divide`, `lookup`) log the
//!   diagnostic through `tracing` and return `None`.
//!
//! `request_valid_age` is the only loop: it walks a finite list of attempts
//! and reports the terminal `AgeOutcome`.

mod access;
mod age;
mod arith;
mod basics;
mod grades;
pub mod samples;

pub use access::{element_at, lookup, lookup_or, try_element_at};
pub use age::{request_valid_age, validate_age, AgeOutcome};
pub use arith::{divide, robust_sum, try_divide};
pub use basics::{greeting, name_message};
pub use grades::{average_grades, mean, parse_grades};

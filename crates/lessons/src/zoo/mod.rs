//! Animal hierarchy and the `Zoo` holder.
//!
//! Purpose
//! - Show polymorphic dispatch over a closed set of species: every `Animal`
//!   can `describe` itself and `vocalize`, and only the latter depends on
//!   the species.
//! - Keep the holder minimal: append, list in insertion order, filter by
//!   species.
//!
//! Code cross-refs: `Species`, `Animal`, `Zoo`

mod holder;
mod types;

pub use holder::Zoo;
pub use types::{Animal, Species};

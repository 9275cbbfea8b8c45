#![forbid(unsafe_code)]

//! Genealogical chart semantic model (headless).
//!
//! Design goals:
//! - typed chart data checked at the loading boundary (no ad hoc property access)
//! - deterministic coordinate resolution over the paternal ancestry chain
//! - pure, total computation: every failure mode is a typed error, never a panic

pub mod ancestry;
pub mod date;
pub mod error;
pub mod model;
pub mod relations;
pub mod resolve;
pub mod scale;

pub use ancestry::paternal_chain;
pub use error::{Error, Result};
pub use model::{
    ChartData, DynastyStyle, Person, PersonId, PositionSpec, PositionSpecs, Relation, RelationKind,
};
pub use relations::RelationIndex;
pub use resolve::{XResolver, resolve_x};
pub use scale::YearScale;

#[cfg(test)]
mod tests;

//! # tagflow
//!
//! Flow-wrap layout for tag chips.
//!
//! This crate provides the layout math with zero dependencies on any text
//! engine or renderer. The host measures content (through [`ContentMeasurer`],
//! implemented by backend crates like `tagflow-text`) and applies the computed
//! positions.
//!
//! ## Layout
//!
//! - [`measure`] - Bounding size of a flowed item list
//! - [`place`] - Top-left position of every item
//! - [`arrange`] - Both, plus per-row summaries, in one pass
//! - [`FlowLayout`] - Reusable spacing configuration
//!
//! ## Tags
//!
//! - [`Tag`] / [`TagStyle`] - Padded text chips
//! - [`TagCloud`] - Measures and flows an ordered set of tags

mod error;
mod flow;
mod measure;
mod primitives;
mod tag;

pub use error::*;
pub use flow::*;
pub use measure::*;
pub use primitives::*;
pub use tag::*;

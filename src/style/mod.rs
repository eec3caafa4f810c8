//! Styling primitives.
//!
//! This module provides the core styling values:
//!
//! - [`Color`]: the console color palette
//! - [`CustomStyle`]: an explicit combination of color, weight, and attributes
//! - [`Semantic`]: the closed set of semantic message roles
//! - [`StyleSpec`]: a style request, either semantic or explicit
//!
//! Resolution of a [`StyleSpec`] against a surface is a pure function: a
//! given spec always produces the same byte sequence for the same surface
//! capability, and non-capable surfaces receive the text unchanged.

mod color;
mod spec;

pub use color::Color;
pub use spec::{CustomStyle, Semantic, StyleSpec, Weight};

pub(crate) use spec::paint;

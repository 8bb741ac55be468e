//! Core data structures that flow from the structure readers to the GPF writer.
//!
//! - [`types`] – The whitelisted, ordered set of receptor atom types.
//! - [`grid`] – Grid boxes, explicit box specifications, and bounding boxes.

pub mod grid;
pub mod types;

//! `keshikomi-text` — Japanese text canonicalization.
//!
//! Bank exports mix half-width and full-width katakana, standalone and
//! combining voicing marks, and several dash-like code points. Matching
//! anywhere in the pipeline goes through [`normalize`] so that string
//! equality and substring checks are encoding-invariant.

pub mod money;
pub mod normalize;

pub use money::{format_amount, parse_amount};
pub use normalize::normalize;

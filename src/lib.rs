//! Frequency-weighted tag clouds over a collection of tagged notes.
//!
//! The pipeline is two pure stages: [`collect`] counts tag occurrences
//! over documents inside a recency window, [`normalize`] turns the
//! counts into display weights. [`vault`] feeds the pipeline from a
//! directory of Markdown notes and [`view`] is the seam towards
//! whatever ends up drawing the cloud.

pub use collect::{canonical_tag, collect, Document};
pub use normalize::{normalize, WeightedTag};
pub use settings::Settings;

pub mod collect;
pub mod normalize;
pub mod settings;
pub mod vault;
pub mod view;

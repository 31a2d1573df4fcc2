#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod errors;
/// One-level flattening over a closed atom/sequence union.
pub mod flatten;
/// N-ary cartesian product construction.
pub mod product;
/// Deterministic seedable RNG for reproducible sampling.
pub mod rng;
/// Uniform random sub-sampling without replacement.
pub mod sample;
/// Contiguous range extraction with strict bounds.
pub mod splice;
/// Shared type aliases.
pub mod types;

pub use errors::SequenceError;
pub use flatten::{flatten, Value};
pub use product::cartesian_product;
pub use rng::SplitMix64;
pub use sample::{sample, sample_with_rng};
pub use splice::{splice, SpliceCount};
pub use types::{Flattened, Tuple};

//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel frequency counting and batch encoding.

mod rayon_counter;
mod rayon_encoder;

pub use rayon_counter::count_samples_parallel;
pub use rayon_encoder::ParallelRayonEncoder;

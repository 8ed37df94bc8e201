//! facelore-core — face feature extraction and multi-domain prediction scoring.
//!
//! A pure pipeline: decode a portrait image, detect the first frontal face,
//! compute a fixed-shape feature vector, then cascade it through the
//! personality, career, wealth, love, fortune, and astrology stages into a
//! single composed report. Outputs are illustrative transformations with
//! bounded, injectable randomness — not validated models.

pub mod advice;
pub mod astrology;
pub mod career;
pub mod detector;
pub mod extractor;
pub mod fortune;
pub mod love;
pub mod mbti;
pub mod personality;
pub mod pipeline;
pub mod rng;
pub mod types;
pub mod wealth;

pub use mbti::Mbti;
pub use pipeline::{analyze, analyze_bytes, report_from_features};
pub use rng::{thread_jitter, JitterSource, RandomJitter, ZeroJitter};
pub use types::{FaceFeatures, Report};

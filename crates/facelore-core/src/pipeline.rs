//! Pipeline orchestration.
//!
//! Runs the stage DAG in dependency order and assembles the final report:
//! extractor → personality → {career, love, fortune} → wealth (needs
//! career) → advice composer. Astrology runs off the feature vector alone.

use crate::rng::JitterSource;
use crate::types::{FaceFeatures, Report};
use crate::{advice, astrology, career, extractor, fortune, love, personality, wealth};
use chrono::NaiveDate;
use image::DynamicImage;

/// Run the full pipeline over a decoded image.
pub fn analyze(image: &DynamicImage, today: NaiveDate, jitter: &mut dyn JitterSource) -> Report {
    report_from_features(extractor::extract(image), today, jitter)
}

/// Run the full pipeline over encoded image bytes. Total: an unreadable
/// image degrades to the canonical default feature vector.
pub fn analyze_bytes(bytes: &[u8], today: NaiveDate, jitter: &mut dyn JitterSource) -> Report {
    report_from_features(extractor::extract_bytes(bytes), today, jitter)
}

/// Run every scoring stage over an already-extracted feature vector.
pub fn report_from_features(
    features: FaceFeatures,
    today: NaiveDate,
    jitter: &mut dyn JitterSource,
) -> Report {
    let personality = personality::score(&features, jitter);
    let career = career::project(&features, &personality, jitter);
    let wealth = wealth::project(&personality, &career, today, jitter);
    let love = love::analyze(&features, &personality, jitter);
    let fortune = fortune::generate(&personality, today, jitter);
    let astrology = astrology::generate(&features, jitter);
    let advice = advice::compose(&fortune, &personality, &wealth, &career, &love);

    tracing::debug!(mbti = %personality.mbti, "report assembled");

    Report {
        personality,
        career,
        wealth,
        love,
        fortune,
        astrology,
        advice,
    }
}

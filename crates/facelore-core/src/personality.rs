//! Personality scoring: Big Five traits and MBTI inference.
//!
//! Deterministic core over normalized face features, plus bounded jitter,
//! clamped post-perturbation. MBTI is four independent threshold decisions
//! on the Big Five scores, so it is a pure function of the (already
//! jittered) trait values.

use crate::mbti::Mbti;
use crate::rng::JitterSource;
use crate::types::{BigFiveScores, FaceFeatures, PersonalityProfile};

const TRAIT_JITTER: (i32, i32) = (-5, 5);
/// Axis decisions flip at this trait score.
const MBTI_THRESHOLD: u8 = 55;
/// Traits above this contribute strengths.
const STRENGTH_THRESHOLD: u8 = 65;
/// Traits below this contribute development suggestions.
const WEAKNESS_THRESHOLD: u8 = 50;
const MAX_STRENGTHS: usize = 5;
const MAX_SUGGESTIONS: usize = 4;

/// Score a feature vector into a full personality profile.
pub fn score(features: &FaceFeatures, jitter: &mut dyn JitterSource) -> PersonalityProfile {
    let big_five = big_five(features, jitter);
    let mbti = infer_mbti(&big_five);

    tracing::debug!(%mbti, ?big_five, "personality scored");

    PersonalityProfile {
        big_five,
        mbti,
        description: description(mbti).to_string(),
        strengths: strengths(&big_five),
        suggestions: suggestions(&big_five),
    }
}

/// Big Five trait scores from normalized features.
///
/// Normalizations: brightness/255, contrast/100, symmetry as-is, texture
/// capped at /200, and (1 − face_ratio) as the neuroticism proxy.
pub fn big_five(features: &FaceFeatures, jitter: &mut dyn JitterSource) -> BigFiveScores {
    let brightness = features.brightness / 255.0;
    let contrast = features.contrast / 100.0;
    let symmetry = features.symmetry;
    let texture = (features.texture / 200.0).min(1.0);
    let narrowness = 1.0 - features.face_ratio;

    let (lo, hi) = TRAIT_JITTER;
    let mut trait_score = |base: f64, weight: f64, signal: f64| -> u8 {
        let raw = (base + weight * signal).round() as i64 + i64::from(jitter.jitter(lo, hi));
        raw.clamp(0, 100) as u8
    };

    BigFiveScores {
        openness: trait_score(60.0, 30.0, brightness),
        conscientiousness: trait_score(55.0, 35.0, symmetry),
        extraversion: trait_score(50.0, 40.0, contrast),
        agreeableness: trait_score(65.0, 40.0, 1.0 - texture),
        neuroticism: trait_score(45.0, 45.0, narrowness),
    }
}

/// Four independent axis decisions at a fixed threshold.
pub fn infer_mbti(big_five: &BigFiveScores) -> Mbti {
    Mbti::from_axes(
        big_five.extraversion > MBTI_THRESHOLD,
        big_five.openness > MBTI_THRESHOLD,
        // Low agreeableness reads as Thinking, high as Feeling.
        big_five.agreeableness < MBTI_THRESHOLD,
        big_five.conscientiousness > MBTI_THRESHOLD,
    )
}

/// One-line character sketch per code.
fn description(mbti: Mbti) -> &'static str {
    match mbti {
        Mbti::INTJ => "The Architect: original, with a strategic mind.",
        Mbti::INTP => "The Logician: an inventive, analytical thinker.",
        Mbti::ENTJ => "The Commander: a born leader.",
        Mbti::ENTP => "The Debater: clever and endlessly curious.",
        Mbti::INFJ => "The Advocate: idealistic and deeply empathetic.",
        Mbti::INFP => "The Mediator: poetic and kind.",
        Mbti::ENFJ => "The Protagonist: a charismatic leader.",
        Mbti::ENFP => "The Campaigner: enthusiastic and creative.",
        Mbti::ISTJ => "The Logistician: practical and responsible.",
        Mbti::ISFJ => "The Defender: warm and dutiful.",
        Mbti::ESTJ => "The Executive: an efficient organizer.",
        Mbti::ESFJ => "The Consul: a caring coordinator.",
        Mbti::ISTP => "The Virtuoso: bold and hands-on.",
        Mbti::ISFP => "The Adventurer: flexible and charming.",
        Mbti::ESTP => "The Entrepreneur: bursting with energy.",
        Mbti::ESFP => "The Entertainer: spontaneous and warm.",
    }
}

/// Trait-based strengths, padded with generic fallbacks below 3, capped at 5.
fn strengths(big_five: &BigFiveScores) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    if big_five.openness > STRENGTH_THRESHOLD {
        out.push("Innovative thinking".into());
        out.push("Strong adaptability".into());
    }
    if big_five.conscientiousness > STRENGTH_THRESHOLD {
        out.push("Strong execution".into());
        out.push("Attention to detail".into());
    }
    if big_five.extraversion > STRENGTH_THRESHOLD {
        out.push("Communication skills".into());
        out.push("Team collaboration".into());
    }
    if out.len() < 3 {
        out.push("Problem solving".into());
        out.push("Learning ability".into());
    }
    out.truncate(MAX_STRENGTHS);
    out
}

/// Weakness-based suggestions, padded with generic fallbacks below 3, capped at 4.
fn suggestions(big_five: &BigFiveScores) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    if big_five.openness < WEAKNESS_THRESHOLD {
        out.push("Try exposing yourself to new things".into());
    }
    if big_five.conscientiousness < WEAKNESS_THRESHOLD {
        out.push("Strengthen your planning habits".into());
    }
    if out.len() < 3 {
        out.push("Keep learning new skills".into());
        out.push("Maintain work-life balance".into());
    }
    out.truncate(MAX_SUGGESTIONS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{BoundJitter, RandomJitter, ZeroJitter};
    use crate::types::FaceFeatures;

    #[test]
    fn test_default_features_zero_jitter_fixture() {
        // Documented deterministic core over the canonical default vector.
        let scores = big_five(&FaceFeatures::canonical_default(), &mut ZeroJitter);
        assert_eq!(scores.openness, 75);
        assert_eq!(scores.conscientiousness, 83);
        assert_eq!(scores.extraversion, 70);
        assert_eq!(scores.agreeableness, 85);
        assert_eq!(scores.neuroticism, 52);
        assert_eq!(infer_mbti(&scores), Mbti::ENFJ);
    }

    #[test]
    fn test_mbti_is_pure_function_of_big_five() {
        let scores = BigFiveScores {
            extraversion: 60,
            openness: 60,
            agreeableness: 40,
            conscientiousness: 60,
            neuroticism: 50,
        };
        assert_eq!(infer_mbti(&scores), Mbti::ENTJ);
    }

    #[test]
    fn test_mbti_threshold_boundaries() {
        // Exactly at the threshold falls to the second letter of each axis.
        let scores = BigFiveScores {
            extraversion: 55,
            openness: 55,
            agreeableness: 55,
            conscientiousness: 55,
            neuroticism: 50,
        };
        assert_eq!(infer_mbti(&scores), Mbti::ISFP);
    }

    #[test]
    fn test_scores_clamped_under_extreme_jitter() {
        let features = FaceFeatures {
            face_ratio: 2.0, // drives the neuroticism proxy negative
            brightness: 255.0,
            contrast: 300.0,
            texture: 0.0,
            symmetry: 1.0,
            edge_density: 1.0,
            face_width: 100,
            face_height: 50,
        };
        for take_high in [false, true] {
            let scores = big_five(&features, &mut BoundJitter { take_high });
            for s in [
                scores.openness,
                scores.conscientiousness,
                scores.extraversion,
                scores.agreeableness,
                scores.neuroticism,
            ] {
                assert!(s <= 100, "score out of band: {s}");
            }
        }
    }

    #[test]
    fn test_profile_list_limits() {
        let mut jitter = RandomJitter::seeded(3);
        for _ in 0..50 {
            let profile = score(&FaceFeatures::canonical_default(), &mut jitter);
            assert!(!profile.strengths.is_empty() && profile.strengths.len() <= 5);
            assert!(!profile.suggestions.is_empty() && profile.suggestions.len() <= 4);
            assert!(!profile.description.is_empty());
        }
    }

    #[test]
    fn test_strength_fallback_when_all_traits_low() {
        let scores = BigFiveScores {
            openness: 30,
            conscientiousness: 30,
            extraversion: 30,
            agreeableness: 30,
            neuroticism: 80,
        };
        let s = strengths(&scores);
        assert_eq!(
            s,
            vec!["Problem solving".to_string(), "Learning ability".to_string()]
        );
        let g = suggestions(&scores);
        assert!(g.contains(&"Try exposing yourself to new things".to_string()));
        assert!(g.len() <= 4);
    }

    #[test]
    fn test_description_total_over_all_codes() {
        for code in Mbti::ALL {
            assert!(!description(code).is_empty());
        }
    }
}

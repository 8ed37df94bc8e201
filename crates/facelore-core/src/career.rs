//! Career projection: fit fields, success probability, multi-year trend,
//! promotion ladder, advice.

use crate::mbti::Mbti;
use crate::rng::JitterSource;
use crate::types::{CareerProjection, CareerYear, FaceFeatures, PersonalityProfile, PromotionStep};

/// First year of the projected trend.
const TREND_BASE_YEAR: i32 = 2025;
const TREND_YEARS: usize = 5;
const TREND_BASE_SCORE: f64 = 60.0;
const SUCCESS_JITTER: (i32, i32) = (-5, 10);
const TREND_JITTER: (i32, i32) = (-3, 5);
const MAX_ADVICE: usize = 5;

const PROMOTION_POSITIONS: [&str; 4] = ["Senior Specialist", "Team Lead", "Manager", "Director"];
/// Year offsets per successRate band: fast ladder at >= 80, slow below 60.
const FAST_LADDER: [u32; 4] = [1, 3, 5, 8];
const STANDARD_LADDER: [u32; 4] = [2, 4, 6, 10];
const SLOW_LADDER: [u32; 4] = [3, 5, 8, 12];
/// Probability offsets from successRate per rung.
const RUNG_PROBABILITY_OFFSETS: [i32; 4] = [5, -5, -15, -25];

/// Project career prospects from the feature vector and personality profile.
pub fn project(
    _features: &FaceFeatures,
    personality: &PersonalityProfile,
    jitter: &mut dyn JitterSource,
) -> CareerProjection {
    let success_rate = success_rate(personality, jitter);

    tracing::debug!(mbti = %personality.mbti, success_rate, "career projected");

    CareerProjection {
        best_fields: best_fields(personality.mbti)
            .iter()
            .map(|s| s.to_string())
            .collect(),
        success_rate,
        career_trend: career_trend(personality, jitter),
        promotion_timeline: promotion_timeline(success_rate),
        advice: advice(personality),
    }
}

/// Career fields by type code. The four analyst types carry curated lists;
/// everything else takes the generic pair.
pub fn best_fields(mbti: Mbti) -> &'static [&'static str] {
    match mbti {
        Mbti::INTJ => &["Strategic planning", "Systems architecture", "R&D"],
        Mbti::INTP => &["Data science", "Research analysis", "Software development"],
        Mbti::ENTJ => &["Corporate management", "Project management", "Strategy consulting"],
        Mbti::ENTP => &["Innovation consulting", "Market strategy", "Product management"],
        _ => &["General management", "Professional consulting"],
    }
}

/// clamp(50 + 0.4(C−50) + 0.2(E−50) + 0.2(O−50) + 0.2(50−N) + jitter, 40, 95).
fn success_rate(personality: &PersonalityProfile, jitter: &mut dyn JitterSource) -> u8 {
    let b = &personality.big_five;
    let raw = 50.0
        + 0.4 * (f64::from(b.conscientiousness) - 50.0)
        + 0.2 * (f64::from(b.extraversion) - 50.0)
        + 0.2 * (f64::from(b.openness) - 50.0)
        + 0.2 * (50.0 - f64::from(b.neuroticism))
        + f64::from(jitter.jitter(SUCCESS_JITTER.0, SUCCESS_JITTER.1));
    crate::types::clamp_score(raw, 40, 95)
}

/// Five consecutive years; growth rate scales with (C + O) / 200.
fn career_trend(personality: &PersonalityProfile, jitter: &mut dyn JitterSource) -> Vec<CareerYear> {
    let b = &personality.big_five;
    let growth_per_year =
        10.0 * (f64::from(b.conscientiousness) + f64::from(b.openness)) / 200.0;

    (0..TREND_YEARS)
        .map(|i| {
            let raw = TREND_BASE_SCORE
                + i as f64 * growth_per_year
                + f64::from(jitter.jitter(TREND_JITTER.0, TREND_JITTER.1));
            let score = crate::types::clamp_score(raw, 50, 95);
            CareerYear {
                year: TREND_BASE_YEAR + i as i32,
                score,
                description: trend_band(score).to_string(),
            }
        })
        .collect()
}

fn trend_band(score: u8) -> &'static str {
    match score {
        85.. => "Breakthrough year; momentum compounds",
        75..=84 => "Strong growth",
        65..=74 => "Steady progress",
        _ => "Consolidation phase",
    }
}

/// Four fixed rungs; ladder speed and probabilities derive from successRate.
fn promotion_timeline(success_rate: u8) -> Vec<PromotionStep> {
    let ladder = if success_rate >= 80 {
        FAST_LADDER
    } else if success_rate < 60 {
        SLOW_LADDER
    } else {
        STANDARD_LADDER
    };

    PROMOTION_POSITIONS
        .iter()
        .zip(ladder)
        .zip(RUNG_PROBABILITY_OFFSETS)
        .map(|((position, years), offset)| PromotionStep {
            position: position.to_string(),
            years,
            probability: crate::types::clamp_score(f64::from(success_rate) + f64::from(offset), 40, 95),
        })
        .collect()
}

/// Conditional advice plus two generic closers, capped at 5.
fn advice(personality: &PersonalityProfile) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    if personality.mbti.is_extravert() {
        out.push("Grow your network; visibility compounds over time".into());
    } else {
        out.push("Schedule deep-work blocks and let written work speak for you".into());
    }

    if personality.mbti.is_intuitive() {
        out.push("Lean into roles that reward systems thinking and innovation".into());
    } else {
        out.push("Operational roles reward your eye for concrete detail".into());
    }

    if personality.big_five.conscientiousness > 70 {
        out.push("You are ready for a leadership track; ask for ownership".into());
    }

    out.push("Keep learning and upgrading your skills".into());
    out.push("Invest in workplace relationships".into());

    out.truncate(MAX_ADVICE);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{BoundJitter, RandomJitter, ZeroJitter};
    use crate::types::{BigFiveScores, FaceFeatures};

    fn profile(big_five: BigFiveScores, mbti: Mbti) -> PersonalityProfile {
        PersonalityProfile {
            big_five,
            mbti,
            description: String::new(),
            strengths: vec![],
            suggestions: vec![],
        }
    }

    fn mid_profile() -> PersonalityProfile {
        profile(
            BigFiveScores {
                openness: 60,
                conscientiousness: 60,
                extraversion: 60,
                agreeableness: 60,
                neuroticism: 50,
            },
            Mbti::ENTJ,
        )
    }

    #[test]
    fn test_best_fields_total_over_all_codes() {
        for code in Mbti::ALL {
            assert!(!best_fields(code).is_empty(), "{code} has no fields");
        }
    }

    #[test]
    fn test_fallback_fields_for_unmapped_codes() {
        assert_eq!(
            best_fields(Mbti::ESFP),
            &["General management", "Professional consulting"]
        );
    }

    #[test]
    fn test_success_rate_zero_jitter() {
        // 50 + 0.4*10 + 0.2*10 + 0.2*10 + 0.2*0 = 58
        let rate = success_rate(&mid_profile(), &mut ZeroJitter);
        assert_eq!(rate, 58);
    }

    #[test]
    fn test_success_rate_stays_in_band() {
        for take_high in [false, true] {
            let extreme = profile(
                BigFiveScores {
                    openness: if take_high { 100 } else { 0 },
                    conscientiousness: if take_high { 100 } else { 0 },
                    extraversion: if take_high { 100 } else { 0 },
                    agreeableness: 50,
                    neuroticism: if take_high { 0 } else { 100 },
                },
                Mbti::ENTJ,
            );
            let rate = success_rate(&extreme, &mut BoundJitter { take_high });
            assert!((40..=95).contains(&rate), "rate out of band: {rate}");
        }
    }

    #[test]
    fn test_trend_has_five_consecutive_years() {
        let trend = career_trend(&mid_profile(), &mut ZeroJitter);
        assert_eq!(trend.len(), 5);
        for (i, entry) in trend.iter().enumerate() {
            assert_eq!(entry.year, TREND_BASE_YEAR + i as i32);
            assert!((50..=95).contains(&entry.score));
            assert!(!entry.description.is_empty());
        }
        // Growth: (60+60)/200 * 10 = 6 points per year from a base of 60.
        assert_eq!(trend[0].score, 60);
        assert_eq!(trend[4].score, 84);
    }

    #[test]
    fn test_promotion_ladder_banded_by_success_rate() {
        let fast = promotion_timeline(85);
        let standard = promotion_timeline(70);
        let slow = promotion_timeline(45);
        assert_eq!(fast.len(), 4);
        assert!(fast[0].years < standard[0].years);
        assert!(standard[3].years < slow[3].years);
        for step in fast.iter().chain(&standard).chain(&slow) {
            assert!((40..=95).contains(&step.probability));
        }
        // Highest rung carries the +5 offset, clamped to 95.
        assert_eq!(fast[0].probability, 90);
        assert_eq!(slow[0].probability, 50);
    }

    #[test]
    fn test_advice_caps_at_five_and_always_has_closers() {
        let mut conscientious = mid_profile();
        conscientious.big_five.conscientiousness = 80;
        let advice = advice(&conscientious);
        assert_eq!(advice.len(), 5);
        assert!(advice.contains(&"Keep learning and upgrading your skills".to_string()));
        assert!(advice.contains(&"Invest in workplace relationships".to_string()));
    }

    #[test]
    fn test_project_assembles_all_fields() {
        let mut jitter = RandomJitter::seeded(11);
        let projection = project(&FaceFeatures::canonical_default(), &mid_profile(), &mut jitter);
        assert!(!projection.best_fields.is_empty());
        assert!((40..=95).contains(&projection.success_rate));
        assert_eq!(projection.career_trend.len(), 5);
        assert_eq!(projection.promotion_timeline.len(), 4);
        assert!(!projection.advice.is_empty() && projection.advice.len() <= 5);
    }
}

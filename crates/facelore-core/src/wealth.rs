//! Wealth projection: current trend, 10-year accumulation curve,
//! investment advice, peak year, risk tolerance.

use crate::rng::JitterSource;
use crate::types::{CareerProjection, PersonalityProfile, WealthProjection, YearScore};
use chrono::{Datelike, NaiveDate};

const TREND_JITTER: (i32, i32) = (-5, 10);
const ACCUMULATION_YEARS: usize = 10;
const ACCUMULATION_BASE: i64 = 50;
/// Points gained per projected year.
const ACCUMULATION_SLOPE: i64 = 4;
const ACCUMULATION_JITTER: (i32, i32) = (-2, 5);
const PEAK_YEAR_OFFSET: i32 = 15;
const PEAK_YEAR_JITTER: (i32, i32) = (-2, 3);

/// Project wealth prospects from the personality profile and career output.
pub fn project(
    personality: &PersonalityProfile,
    career: &CareerProjection,
    today: NaiveDate,
    jitter: &mut dyn JitterSource,
) -> WealthProjection {
    let current_year = today.year();
    let current_trend = current_trend(personality, career, jitter);

    tracing::debug!(current_trend, "wealth projected");

    WealthProjection {
        current_trend,
        accumulation_trend: accumulation_trend(current_year, jitter),
        investment_advice: investment_advice(personality),
        peak_year: current_year
            + PEAK_YEAR_OFFSET
            + jitter.jitter(PEAK_YEAR_JITTER.0, PEAK_YEAR_JITTER.1),
        risk_tolerance: risk_tolerance(personality),
    }
}

/// clamp(55 + 0.3(C−50) + 0.4(successRate−50) + jitter, 40, 95).
fn current_trend(
    personality: &PersonalityProfile,
    career: &CareerProjection,
    jitter: &mut dyn JitterSource,
) -> u8 {
    let raw = 55.0
        + 0.3 * (f64::from(personality.big_five.conscientiousness) - 50.0)
        + 0.4 * (f64::from(career.success_rate) - 50.0)
        + f64::from(jitter.jitter(TREND_JITTER.0, TREND_JITTER.1));
    crate::types::clamp_score(raw, 40, 95)
}

/// Ten consecutive years rising ~4 points/year from a base of 50.
///
/// Unlike every other scored field this curve carries no upper clamp; its
/// formula tops out at 91, so the asymmetry is preserved as-is.
fn accumulation_trend(current_year: i32, jitter: &mut dyn JitterSource) -> Vec<YearScore> {
    (0..ACCUMULATION_YEARS)
        .map(|i| {
            let score = ACCUMULATION_BASE
                + i as i64 * ACCUMULATION_SLOPE
                + i64::from(jitter.jitter(ACCUMULATION_JITTER.0, ACCUMULATION_JITTER.1));
            YearScore {
                year: current_year + i as i32,
                score: score.clamp(0, u8::MAX as i64) as u8,
            }
        })
        .collect()
}

fn investment_advice(personality: &PersonalityProfile) -> Vec<String> {
    let b = &personality.big_five;
    let mut advice: Vec<String> = Vec::new();
    if b.openness > 65 {
        advice.push("Innovation-oriented investments are worth considering".into());
    }
    if b.conscientiousness > 70 {
        advice.push("Well suited to long-term value investing".into());
    } else {
        advice.push("Start with a structured financial plan".into());
    }
    advice.push("Keep an emergency reserve fund".into());
    advice
}

/// clamp(50 + 0.3(O−50) + 0.5(50−N), 20, 90). No jitter.
fn risk_tolerance(personality: &PersonalityProfile) -> u8 {
    let b = &personality.big_five;
    let raw = 50.0
        + 0.3 * (f64::from(b.openness) - 50.0)
        + 0.5 * (50.0 - f64::from(b.neuroticism));
    crate::types::clamp_score(raw, 20, 90)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mbti::Mbti;
    use crate::rng::{BoundJitter, RandomJitter, ZeroJitter};
    use crate::types::BigFiveScores;

    fn profile(openness: u8, conscientiousness: u8, neuroticism: u8) -> PersonalityProfile {
        PersonalityProfile {
            big_five: BigFiveScores {
                openness,
                conscientiousness,
                extraversion: 50,
                agreeableness: 50,
                neuroticism,
            },
            mbti: Mbti::ISTJ,
            description: String::new(),
            strengths: vec![],
            suggestions: vec![],
        }
    }

    fn career_with_rate(success_rate: u8) -> CareerProjection {
        CareerProjection {
            best_fields: vec![],
            success_rate,
            career_trend: vec![],
            promotion_timeline: vec![],
            advice: vec![],
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
    }

    #[test]
    fn test_current_trend_zero_jitter() {
        // 55 + 0.3*20 + 0.4*20 = 69
        let trend = current_trend(&profile(50, 70, 50), &career_with_rate(70), &mut ZeroJitter);
        assert_eq!(trend, 69);
    }

    #[test]
    fn test_current_trend_band() {
        for take_high in [false, true] {
            let trend = current_trend(
                &profile(50, if take_high { 100 } else { 0 }, 50),
                &career_with_rate(if take_high { 95 } else { 40 }),
                &mut BoundJitter { take_high },
            );
            assert!((40..=95).contains(&trend), "out of band: {trend}");
        }
    }

    #[test]
    fn test_accumulation_is_ten_rising_years() {
        let trend = accumulation_trend(2026, &mut ZeroJitter);
        assert_eq!(trend.len(), 10);
        assert_eq!(trend[0].year, 2026);
        assert_eq!(trend[9].year, 2035);
        assert_eq!(trend[0].score, 50);
        assert_eq!(trend[9].score, 86);
    }

    #[test]
    fn test_accumulation_ceiling_without_clamp() {
        // Max jitter at every step: final score 50 + 36 + 5 = 91.
        let trend = accumulation_trend(2026, &mut BoundJitter { take_high: true });
        assert_eq!(trend[9].score, 91);
    }

    #[test]
    fn test_peak_year_window() {
        let mut jitter = RandomJitter::seeded(5);
        for _ in 0..100 {
            let w = project(&profile(60, 60, 50), &career_with_rate(70), day(), &mut jitter);
            assert!((2039..=2044).contains(&w.peak_year), "peak {}", w.peak_year);
        }
    }

    #[test]
    fn test_risk_tolerance_band_and_formula() {
        // 50 + 0.3*30 + 0.5*(-30) = 44
        assert_eq!(risk_tolerance(&profile(80, 50, 80)), 44);
        assert_eq!(risk_tolerance(&profile(0, 50, 100)), 20);
        assert_eq!(risk_tolerance(&profile(100, 50, 0)), 90);
    }

    #[test]
    fn test_investment_advice_branches() {
        let open_diligent = investment_advice(&profile(70, 80, 50));
        assert!(open_diligent.contains(&"Well suited to long-term value investing".to_string()));
        assert!(open_diligent
            .contains(&"Innovation-oriented investments are worth considering".to_string()));

        let cautious = investment_advice(&profile(40, 40, 50));
        assert!(cautious.contains(&"Start with a structured financial plan".to_string()));

        // Emergency reserve closer is unconditional.
        for advice in [&open_diligent, &cautious] {
            assert_eq!(advice.last().unwrap(), "Keep an emergency reserve fund");
        }
    }
}

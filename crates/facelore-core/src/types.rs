//! Value objects flowing through the pipeline.
//!
//! JSON field names are a stable contract with the storage/display layer;
//! the serde renames below reproduce the original wire names exactly
//! (camelCase throughout, except the historical `current_trend`).

use crate::mbti::Mbti;
use serde::{Deserialize, Serialize};

/// Fixed-shape feature vector computed once per input image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceFeatures {
    pub face_ratio: f64,
    pub brightness: f64,
    pub contrast: f64,
    pub texture: f64,
    pub symmetry: f64,
    pub edge_density: f64,
    pub face_width: u32,
    pub face_height: u32,
}

impl FaceFeatures {
    /// Canonical default vector, substituted whenever extraction degrades
    /// (unreadable image, no detectable face, degenerate numerics).
    pub fn canonical_default() -> Self {
        Self {
            face_ratio: 0.85,
            brightness: 127.0,
            contrast: 50.0,
            texture: 100.0,
            symmetry: 0.8,
            edge_density: 0.15,
            face_width: 200,
            face_height: 235,
        }
    }
}

/// Big Five trait scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigFiveScores {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub neuroticism: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityProfile {
    #[serde(rename = "bigFive")]
    pub big_five: BigFiveScores,
    pub mbti: Mbti,
    pub description: String,
    /// At most 5 entries.
    pub strengths: Vec<String>,
    /// At most 4 entries.
    pub suggestions: Vec<String>,
}

/// One year of the projected career trend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerYear {
    pub year: i32,
    pub score: u8,
    pub description: String,
}

/// One rung of the promotion ladder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionStep {
    pub position: String,
    /// Years from now until this position is reachable.
    pub years: u32,
    pub probability: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerProjection {
    #[serde(rename = "bestFields")]
    pub best_fields: Vec<String>,
    /// [40, 95].
    #[serde(rename = "successRate")]
    pub success_rate: u8,
    #[serde(rename = "careerTrend")]
    pub career_trend: Vec<CareerYear>,
    #[serde(rename = "promotionTimeline")]
    pub promotion_timeline: Vec<PromotionStep>,
    pub advice: Vec<String>,
}

/// One year of the wealth accumulation curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearScore {
    pub year: i32,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WealthProjection {
    /// [40, 95]. Snake case on the wire for historical reasons.
    pub current_trend: u8,
    #[serde(rename = "accumulationTrend")]
    pub accumulation_trend: Vec<YearScore>,
    #[serde(rename = "investmentAdvice")]
    pub investment_advice: Vec<String>,
    #[serde(rename = "peakYear")]
    pub peak_year: i32,
    /// [20, 90].
    #[serde(rename = "riskTolerance")]
    pub risk_tolerance: u8,
}

/// One period of the 6-period relationship trend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodScore {
    /// Period label ("this month" … "6th month"); `month` on the wire.
    pub month: String,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoveProfile {
    /// [40, 95].
    #[serde(rename = "stabilityScore")]
    pub stability_score: u8,
    /// At most 3 codes.
    #[serde(rename = "bestMatches")]
    pub best_matches: Vec<Mbti>,
    #[serde(rename = "loveTrend")]
    pub love_trend: Vec<PeriodScore>,
    /// At most 4 entries.
    pub advice: Vec<String>,
    /// [40, 95].
    pub attractiveness: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyDates {
    pub yesterday: String,
    pub today: String,
    pub tomorrow: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyFortune {
    pub yesterday: u8,
    pub today: u8,
    pub tomorrow: u8,
    pub dates: DailyDates,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyFortune {
    #[serde(rename = "lastMonth")]
    pub last_month: u8,
    pub current: u8,
    #[serde(rename = "nextMonth")]
    pub next_month: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyYears {
    #[serde(rename = "lastYear")]
    pub last_year: i32,
    #[serde(rename = "thisYear")]
    pub this_year: i32,
    #[serde(rename = "nextYear")]
    pub next_year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyFortune {
    #[serde(rename = "lastYear")]
    pub last_year: u8,
    #[serde(rename = "thisYear")]
    pub this_year: u8,
    #[serde(rename = "nextYear")]
    pub next_year: u8,
    pub years: YearlyYears,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LuckyElements {
    pub color: String,
    /// 1–49.
    pub number: u8,
    pub direction: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FortuneCycle {
    pub daily: DailyFortune,
    pub monthly: MonthlyFortune,
    pub yearly: YearlyFortune,
    #[serde(rename = "luckyElements")]
    pub lucky_elements: LuckyElements,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZodiacReading {
    #[serde(rename = "sunSign")]
    pub sun_sign: String,
    #[serde(rename = "moonSign")]
    pub moon_sign: String,
    #[serde(rename = "risingSign")]
    pub rising_sign: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaziReading {
    #[serde(rename = "yearPillar")]
    pub year_pillar: String,
    #[serde(rename = "monthPillar")]
    pub month_pillar: String,
    #[serde(rename = "dayPillar")]
    pub day_pillar: String,
    #[serde(rename = "hourPillar")]
    pub hour_pillar: String,
    pub description: String,
}

/// Five-element balance scores, each in [50, 95].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WuxingScores {
    pub metal: u8,
    pub wood: u8,
    pub water: u8,
    pub fire: u8,
    pub earth: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WuxingReading {
    pub scores: WuxingScores,
    pub strongest: String,
    pub weakest: String,
    #[serde(rename = "favorableElement")]
    pub favorable_element: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MysticalSuggestions {
    #[serde(rename = "luckyColor")]
    pub lucky_color: String,
    #[serde(rename = "luckyStone")]
    pub lucky_stone: String,
    #[serde(rename = "luckyDirection")]
    pub lucky_direction: String,
    /// 1–9.
    #[serde(rename = "luckyNumber")]
    pub lucky_number: u8,
    pub advice: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AstrologyProfile {
    pub zodiac: ZodiacReading,
    pub bazi: BaziReading,
    pub wuxing: WuxingReading,
    pub suggestions: MysticalSuggestions,
}

/// The three composed advice strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceSet {
    pub daily: String,
    pub monthly: String,
    pub yearly: String,
}

/// The full report returned to the caller; field names and nesting are the
/// external contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub personality: PersonalityProfile,
    pub career: CareerProjection,
    pub wealth: WealthProjection,
    pub love: LoveProfile,
    pub fortune: FortuneCycle,
    pub astrology: AstrologyProfile,
    pub advice: AdviceSet,
}

/// Round, then clamp a derived score into its documented band.
pub(crate) fn clamp_score(value: f64, lo: u8, hi: u8) -> u8 {
    (value.round() as i64).clamp(i64::from(lo), i64::from(hi)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_default_is_idempotent() {
        // No hidden randomness in the default path.
        assert_eq!(
            FaceFeatures::canonical_default(),
            FaceFeatures::canonical_default()
        );
    }

    #[test]
    fn test_clamp_score_bands() {
        assert_eq!(clamp_score(39.4, 40, 95), 40);
        assert_eq!(clamp_score(95.6, 40, 95), 95);
        assert_eq!(clamp_score(67.5, 40, 95), 68);
        assert_eq!(clamp_score(-12.0, 0, 100), 0);
    }

    #[test]
    fn test_report_wire_names() {
        // Spot-check the renamed fields the storage layer depends on.
        let wealth = WealthProjection {
            current_trend: 70,
            accumulation_trend: vec![YearScore { year: 2026, score: 54 }],
            investment_advice: vec!["Keep an emergency reserve fund".into()],
            peak_year: 2041,
            risk_tolerance: 60,
        };
        let json = serde_json::to_value(&wealth).unwrap();
        assert!(json.get("current_trend").is_some());
        assert!(json.get("accumulationTrend").is_some());
        assert!(json.get("investmentAdvice").is_some());
        assert!(json.get("peakYear").is_some());
        assert!(json.get("riskTolerance").is_some());
    }
}

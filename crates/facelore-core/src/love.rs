//! Relationship analysis: stability, compatible types, 6-period trend,
//! attractiveness, advice.

use crate::mbti::Mbti;
use crate::rng::JitterSource;
use crate::types::{FaceFeatures, LoveProfile, PeriodScore, PersonalityProfile};

const STABILITY_JITTER: (i32, i32) = (-5, 5);
const TREND_BASE: f64 = 65.0;
const TREND_JITTER: (i32, i32) = (-10, 15);
const PERIOD_LABELS: [&str; 6] = [
    "this month",
    "next month",
    "3rd month",
    "4th month",
    "5th month",
    "6th month",
];
const MAX_ADVICE: usize = 4;

/// Analyze relationship prospects from the feature vector and personality.
pub fn analyze(
    _features: &FaceFeatures,
    personality: &PersonalityProfile,
    jitter: &mut dyn JitterSource,
) -> LoveProfile {
    let stability_score = stability(personality, jitter);

    tracing::debug!(mbti = %personality.mbti, stability_score, "love analyzed");

    LoveProfile {
        stability_score,
        best_matches: best_matches(personality.mbti).to_vec(),
        love_trend: love_trend(jitter),
        advice: advice(personality),
        attractiveness: attractiveness(personality),
    }
}

/// Compatibility triple per type code. The table covers all sixteen codes,
/// so the lookup is total by construction.
pub fn best_matches(mbti: Mbti) -> [Mbti; 3] {
    match mbti {
        Mbti::INTJ => [Mbti::ENFP, Mbti::ENTP, Mbti::INFJ],
        Mbti::INTP => [Mbti::ENTJ, Mbti::ESTJ, Mbti::INFJ],
        Mbti::ENTJ => [Mbti::INTP, Mbti::INFP, Mbti::ENFP],
        Mbti::ENTP => [Mbti::INTJ, Mbti::INFJ, Mbti::ENFJ],
        Mbti::INFJ => [Mbti::ENFP, Mbti::ENTP, Mbti::INTJ],
        Mbti::INFP => [Mbti::ENFJ, Mbti::ENTJ, Mbti::INFJ],
        Mbti::ENFJ => [Mbti::INFP, Mbti::ISFP, Mbti::INTP],
        Mbti::ENFP => [Mbti::INTJ, Mbti::INFJ, Mbti::ENTJ],
        Mbti::ISTJ => [Mbti::ESTP, Mbti::ESFP, Mbti::ISFJ],
        Mbti::ISFJ => [Mbti::ESFP, Mbti::ESTP, Mbti::ISTJ],
        Mbti::ESTJ => [Mbti::ISTP, Mbti::INTP, Mbti::ISFP],
        Mbti::ESFJ => [Mbti::ISFP, Mbti::ISTP, Mbti::ESFP],
        Mbti::ISTP => [Mbti::ESTJ, Mbti::ESFJ, Mbti::ESTP],
        Mbti::ISFP => [Mbti::ESFJ, Mbti::ENFJ, Mbti::ESTJ],
        Mbti::ESTP => [Mbti::ISTJ, Mbti::ISFJ, Mbti::ISTP],
        Mbti::ESFP => [Mbti::ISTJ, Mbti::ISFJ, Mbti::ESFJ],
    }
}

/// clamp(60 + 0.4(A−50) + 0.3(C−50) + 0.3(50−N) + jitter, 40, 95).
fn stability(personality: &PersonalityProfile, jitter: &mut dyn JitterSource) -> u8 {
    let b = &personality.big_five;
    let raw = 60.0
        + 0.4 * (f64::from(b.agreeableness) - 50.0)
        + 0.3 * (f64::from(b.conscientiousness) - 50.0)
        + 0.3 * (50.0 - f64::from(b.neuroticism))
        + f64::from(jitter.jitter(STABILITY_JITTER.0, STABILITY_JITTER.1));
    crate::types::clamp_score(raw, 40, 95)
}

/// Six labeled periods, each jittered around the trend base.
fn love_trend(jitter: &mut dyn JitterSource) -> Vec<PeriodScore> {
    PERIOD_LABELS
        .iter()
        .map(|label| PeriodScore {
            month: label.to_string(),
            score: crate::types::clamp_score(
                TREND_BASE + f64::from(jitter.jitter(TREND_JITTER.0, TREND_JITTER.1)),
                50,
                95,
            ),
        })
        .collect()
}

/// clamp(50 + 0.3(E−50) + 0.3(A−50) + 0.2(O−50) + 0.2(50−N), 40, 95). No jitter.
fn attractiveness(personality: &PersonalityProfile) -> u8 {
    let b = &personality.big_five;
    let raw = 50.0
        + 0.3 * (f64::from(b.extraversion) - 50.0)
        + 0.3 * (f64::from(b.agreeableness) - 50.0)
        + 0.2 * (f64::from(b.openness) - 50.0)
        + 0.2 * (50.0 - f64::from(b.neuroticism));
    crate::types::clamp_score(raw, 40, 95)
}

/// Conditional advice plus two generic closers, capped at 4.
fn advice(personality: &PersonalityProfile) -> Vec<String> {
    let b = &personality.big_five;
    let mut out: Vec<String> = Vec::new();

    if b.extraversion < 50 {
        out.push("Join more social activities to widen your circle".into());
    }
    if b.agreeableness < 55 {
        out.push("Practice seeing things from your partner's perspective".into());
    }
    if b.neuroticism > 65 {
        out.push("Work on emotional steadiness and a sense of security".into());
    }
    if b.openness > 70 {
        out.push("Look for a partner who shares your curiosity".into());
    }

    out.push("Stay honest in communication and build trust".into());
    out.push("Give each other healthy personal space".into());

    out.truncate(MAX_ADVICE);
    out
}

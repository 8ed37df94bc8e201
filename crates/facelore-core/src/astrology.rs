//! Symbolic astrological framing: zodiac, bazi pillars, wuxing balance,
//! mystical suggestions.
//!
//! Every field is a uniform pick from a fixed enumerated set. The feature
//! vector is accepted to keep the stage signature uniform with its peers
//! but carries no numeric weight here.

use crate::rng::JitterSource;
use crate::types::{
    AstrologyProfile, BaziReading, FaceFeatures, MysticalSuggestions, WuxingReading, WuxingScores,
    ZodiacReading,
};

const ZODIAC_SIGNS: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

/// The ten heavenly stems, romanized.
const STEMS: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

/// The twelve earthly branches, romanized.
const BRANCHES: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

const ELEMENTS: [&str; 5] = ["Metal", "Wood", "Water", "Fire", "Earth"];
/// Element scores live in [50, 95]: a floor plus a non-negative spread.
const ELEMENT_SCORE_FLOOR: i32 = 50;
const ELEMENT_SCORE_SPREAD: i32 = 45;

const SUGGESTION_COLORS: [&str; 4] = ["Red", "Gold", "Green", "Blue"];
const SUGGESTION_STONES: [&str; 4] = ["Crystal", "Agate", "Jade", "Amber"];
const SUGGESTION_DIRECTIONS: [&str; 4] = ["East", "South", "West", "North"];

/// Generate the astrological profile.
pub fn generate(_features: &FaceFeatures, jitter: &mut dyn JitterSource) -> AstrologyProfile {
    AstrologyProfile {
        zodiac: zodiac(jitter),
        bazi: bazi(jitter),
        wuxing: wuxing(jitter),
        suggestions: suggestions(jitter),
    }
}

fn zodiac(jitter: &mut dyn JitterSource) -> ZodiacReading {
    let pick = |jitter: &mut dyn JitterSource| ZODIAC_SIGNS[jitter.pick(ZODIAC_SIGNS.len())];
    let sun = pick(jitter);
    let moon = pick(jitter);
    let rising = pick(jitter);

    ZodiacReading {
        sun_sign: sun.to_string(),
        moon_sign: moon.to_string(),
        rising_sign: rising.to_string(),
        description: format!("Sun in {sun}, Moon in {moon}, {rising} rising."),
    }
}

fn pillar(jitter: &mut dyn JitterSource) -> String {
    let stem = STEMS[jitter.pick(STEMS.len())];
    let branch = BRANCHES[jitter.pick(BRANCHES.len())];
    format!("{stem}-{branch}")
}

fn bazi(jitter: &mut dyn JitterSource) -> BaziReading {
    BaziReading {
        year_pillar: pillar(jitter),
        month_pillar: pillar(jitter),
        day_pillar: pillar(jitter),
        hour_pillar: pillar(jitter),
        description: "The four pillars sit in balance; a steady chart.".to_string(),
    }
}

fn wuxing(jitter: &mut dyn JitterSource) -> WuxingReading {
    // Anchored on the band floor so a zeroed source stays in band.
    let mut score =
        || (ELEMENT_SCORE_FLOOR + jitter.jitter(0, ELEMENT_SCORE_SPREAD)) as u8;
    let scores = WuxingScores {
        metal: score(),
        wood: score(),
        water: score(),
        fire: score(),
        earth: score(),
    };

    let values = [scores.metal, scores.wood, scores.water, scores.fire, scores.earth];
    // Ties resolve to the earlier element in conventional order.
    let mut strongest = (ELEMENTS[0], values[0]);
    let mut weakest = (ELEMENTS[0], values[0]);
    for (&name, &v) in ELEMENTS.iter().zip(&values) {
        if v > strongest.1 {
            strongest = (name, v);
        }
        if v < weakest.1 {
            weakest = (name, v);
        }
    }

    WuxingReading {
        scores,
        strongest: strongest.0.to_string(),
        weakest: weakest.0.to_string(),
        favorable_element: weakest.0.to_string(),
        description: format!(
            "{} dominates your five-element balance; nourish {}.",
            strongest.0, weakest.0
        ),
    }
}

fn suggestions(jitter: &mut dyn JitterSource) -> MysticalSuggestions {
    MysticalSuggestions {
        lucky_color: SUGGESTION_COLORS[jitter.pick(SUGGESTION_COLORS.len())].to_string(),
        lucky_stone: SUGGESTION_STONES[jitter.pick(SUGGESTION_STONES.len())].to_string(),
        lucky_direction: SUGGESTION_DIRECTIONS[jitter.pick(SUGGESTION_DIRECTIONS.len())]
            .to_string(),
        lucky_number: jitter.pick(9) as u8 + 1,
        advice: vec![
            "Spend time in nature".to_string(),
            "Keep a positive mindset".to_string(),
            "Meditate regularly".to_string(),
        ],
    }
}

//! Final advice composition.
//!
//! Pure string templating over the upstream profiles; the only stage that
//! sees all five of them, so it pins the cross-stage contract. No
//! randomness and no numeric computation beyond threshold bands.

use crate::types::{
    AdviceSet, CareerProjection, FortuneCycle, LoveProfile, PersonalityProfile, WealthProjection,
};

/// Daily score at or above this selects the action-oriented band.
const DAILY_ACTION_THRESHOLD: u8 = 80;
const DAILY_STEADY_THRESHOLD: u8 = 60;
const MONTHLY_WEALTH_THRESHOLD: u8 = 70;
const MONTHLY_LOVE_THRESHOLD: u8 = 70;
const YEARLY_KEY_THRESHOLD: u8 = 75;

/// Compose the three advice strings from the upstream profiles.
pub fn compose(
    fortune: &FortuneCycle,
    personality: &PersonalityProfile,
    wealth: &WealthProjection,
    career: &CareerProjection,
    love: &LoveProfile,
) -> AdviceSet {
    AdviceSet {
        daily: daily(fortune, personality),
        monthly: monthly(fortune, wealth, love),
        yearly: yearly(career, wealth),
    }
}

fn daily(fortune: &FortuneCycle, personality: &PersonalityProfile) -> String {
    let score = fortune.daily.today;
    let mut advice = format!("Today's fortune index: {score}.");

    if score >= DAILY_ACTION_THRESHOLD {
        advice.push_str(" A good day for action: push your important plans forward.");
    } else if score >= DAILY_STEADY_THRESHOLD {
        advice.push_str(" Fortune is steady today; make measured progress.");
    } else {
        advice.push_str(" Better to stay quiet today and focus on inner growth.");
    }

    if personality.mbti.is_extravert() {
        advice.push_str(" Reaching out to people will bring good luck.");
    } else {
        advice.push_str(" Time alone to think will bring you insight.");
    }

    advice
}

fn monthly(fortune: &FortuneCycle, wealth: &WealthProjection, love: &LoveProfile) -> String {
    let mut advice = format!(
        "Overall fortune this month: {} points.",
        fortune.monthly.current
    );

    if wealth.current_trend >= MONTHLY_WEALTH_THRESHOLD {
        advice.push_str(" Finances look favorable; moderate investment is worth considering.");
    }

    if love.stability_score >= MONTHLY_LOVE_THRESHOLD {
        advice.push_str(" Relationships are stable, a good time to deepen bonds.");
    } else {
        advice.push_str(" Relationships need more attention and communication.");
    }

    advice
}

fn yearly(career: &CareerProjection, wealth: &WealthProjection) -> String {
    let mut advice = format!(
        "Career success probability this year: {}%.",
        career.success_rate
    );

    if career.success_rate >= YEARLY_KEY_THRESHOLD {
        advice.push_str(" A pivotal year for your career.");
    }

    advice.push_str(&format!(
        " Wealth is projected to peak around {}.",
        wealth.peak_year
    ));
    advice.push_str(" Balance work and life, and mind your health.");

    advice
}

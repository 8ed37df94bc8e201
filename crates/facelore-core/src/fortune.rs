//! Daily/monthly/yearly fortune cycles and lucky-element picks.
//!
//! Scores are sampled around fixed bases with bounded jitter; calendar
//! fields are computed from the invocation date. The personality argument
//! is part of the stage contract but does not feed any formula (kept as-is
//! from the original design).

use crate::rng::JitterSource;
use crate::types::{
    DailyDates, DailyFortune, FortuneCycle, LuckyElements, MonthlyFortune, PersonalityProfile,
    YearlyFortune, YearlyYears,
};
use chrono::{Datelike, Duration, NaiveDate};

const DAILY_BASE: i32 = 70;
const DAILY_JITTER: (i32, i32) = (-8, 12);
const DAILY_BAND: (u8, u8) = (40, 100);

const MONTHLY_BASE: i32 = 60;
const MONTHLY_JITTER: (i32, i32) = (-15, 25);
const MONTHLY_BAND: (u8, u8) = (45, 95);

const YEARLY_BAND: (u8, u8) = (50, 95);

const LUCKY_COLORS: [&str; 7] = ["Red", "Blue", "Green", "Purple", "Gold", "Silver", "White"];
const LUCKY_DIRECTIONS: [&str; 8] = [
    "East",
    "South",
    "West",
    "North",
    "Southeast",
    "Southwest",
    "Northeast",
    "Northwest",
];
const LUCKY_TIMES: [&str; 4] = ["6-9 am", "9-12 am", "2-5 pm", "5-8 pm"];
const LUCKY_NUMBER_MAX: u8 = 49;

/// Generate the full fortune cycle for the given date.
pub fn generate(
    _personality: &PersonalityProfile,
    today: NaiveDate,
    jitter: &mut dyn JitterSource,
) -> FortuneCycle {
    FortuneCycle {
        daily: daily(today, jitter),
        monthly: monthly(jitter),
        yearly: yearly(today.year(), jitter),
        lucky_elements: lucky_elements(jitter),
    }
}

fn day_score(base: i32, jitter: &mut dyn JitterSource) -> u8 {
    crate::types::clamp_score(
        f64::from(base + jitter.jitter(DAILY_JITTER.0, DAILY_JITTER.1)),
        DAILY_BAND.0,
        DAILY_BAND.1,
    )
}

fn daily(today: NaiveDate, jitter: &mut dyn JitterSource) -> DailyFortune {
    let yesterday = today - Duration::days(1);
    let tomorrow = today + Duration::days(1);

    DailyFortune {
        yesterday: day_score(DAILY_BASE - 10, jitter),
        today: day_score(DAILY_BASE, jitter),
        tomorrow: day_score(DAILY_BASE + 5, jitter),
        dates: DailyDates {
            yesterday: yesterday.format("%Y-%m-%d").to_string(),
            today: today.format("%Y-%m-%d").to_string(),
            tomorrow: tomorrow.format("%Y-%m-%d").to_string(),
        },
    }
}

fn month_score(jitter: &mut dyn JitterSource) -> u8 {
    crate::types::clamp_score(
        f64::from(MONTHLY_BASE + jitter.jitter(MONTHLY_JITTER.0, MONTHLY_JITTER.1)),
        MONTHLY_BAND.0,
        MONTHLY_BAND.1,
    )
}

fn monthly(jitter: &mut dyn JitterSource) -> MonthlyFortune {
    MonthlyFortune {
        last_month: month_score(jitter),
        current: month_score(jitter),
        next_month: month_score(jitter),
    }
}

fn yearly(current_year: i32, jitter: &mut dyn JitterSource) -> YearlyFortune {
    let year_score = |base: i32, hi: i32, jitter: &mut dyn JitterSource| -> u8 {
        crate::types::clamp_score(
            f64::from(base + jitter.jitter(-10, hi)),
            YEARLY_BAND.0,
            YEARLY_BAND.1,
        )
    };

    YearlyFortune {
        last_year: year_score(60, 15, jitter),
        this_year: year_score(65, 20, jitter),
        next_year: year_score(70, 20, jitter),
        years: YearlyYears {
            last_year: current_year - 1,
            this_year: current_year,
            next_year: current_year + 1,
        },
    }
}

fn lucky_elements(jitter: &mut dyn JitterSource) -> LuckyElements {
    LuckyElements {
        color: LUCKY_COLORS[jitter.pick(LUCKY_COLORS.len())].to_string(),
        number: jitter.pick(LUCKY_NUMBER_MAX as usize) as u8 + 1,
        direction: LUCKY_DIRECTIONS[jitter.pick(LUCKY_DIRECTIONS.len())].to_string(),
        time: LUCKY_TIMES[jitter.pick(LUCKY_TIMES.len())].to_string(),
    }
}

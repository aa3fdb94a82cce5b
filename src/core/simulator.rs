use chrono::{Days, NaiveDate};

use super::random::RandomSource;
use super::types::{
    ContributionEvent, CorrectionWindow, DailyPoint, SimulationParameters, SimulationResult,
};

const DAYS_PER_YEAR: f64 = 365.0;

const HIGH_VOLATILITY_SHARE: f64 = 0.05;
const HIGH_VOLATILITY_BAND: f64 = 0.02;
const NORMAL_VOLATILITY_BAND: f64 = 0.006;

const CORRECTION_LENGTH_DAYS: u32 = 40;
const DRAWDOWN_DAYS: u32 = 7;
const DRAWDOWN_PER_DAY: f64 = -0.01;
const RECOVERY_TOTAL: f64 = 0.07;
const LONG_HORIZON_DAYS: u32 = 500;
const CORRECTION_TAIL_MARGIN_DAYS: u32 = 100;

const CONTRIBUTION_EARLIEST_FROM_END: u32 = 90;
const CONTRIBUTION_LATEST_FROM_END: u32 = 30;
const CONTRIBUTION_SHARE: f64 = 0.25;

/// High-volatility days and correction windows, fixed before the daily loop.
#[derive(Debug, Clone)]
pub struct VolatilitySchedule {
    high_volatility: Vec<bool>,
    corrections: Vec<CorrectionWindow>,
}

impl VolatilitySchedule {
    pub fn draw<R: RandomSource + ?Sized>(horizon_days: u32, rng: &mut R) -> Self {
        let corrections = draw_corrections(horizon_days, rng);

        let mut high_volatility = vec![false; horizon_days as usize];
        let high_count = (horizon_days as f64 * HIGH_VOLATILITY_SHARE).floor() as u32;
        for day in rng.sample_distinct(horizon_days, high_count) {
            high_volatility[day as usize] = true;
        }

        Self {
            high_volatility,
            corrections,
        }
    }

    #[cfg(test)]
    fn corrections(&self) -> &[CorrectionWindow] {
        &self.corrections
    }

    pub fn is_high_volatility(&self, day: u32) -> bool {
        self.high_volatility
            .get(day as usize)
            .copied()
            .unwrap_or(false)
    }

    #[cfg(test)]
    fn high_volatility_days(&self) -> usize {
        self.high_volatility.iter().filter(|&&flag| flag).count()
    }

    /// Summed additive impact of every window active on `day`.
    pub fn correction_impact(&self, day: u32) -> f64 {
        self.corrections
            .iter()
            .filter(|window| {
                day >= window.start_day && day < window.start_day + CORRECTION_LENGTH_DAYS
            })
            .map(|window| {
                if day - window.start_day < DRAWDOWN_DAYS {
                    DRAWDOWN_PER_DAY
                } else {
                    RECOVERY_TOTAL / (CORRECTION_LENGTH_DAYS - DRAWDOWN_DAYS) as f64
                }
            })
            .sum()
    }
}

fn draw_corrections<R: RandomSource + ?Sized>(
    horizon_days: u32,
    rng: &mut R,
) -> Vec<CorrectionWindow> {
    let first_start = horizon_days / 4;
    let end_exclusive = horizon_days.saturating_sub(CORRECTION_TAIL_MARGIN_DAYS);
    if end_exclusive <= first_start {
        return Vec::new();
    }

    let count = if horizon_days < LONG_HORIZON_DAYS { 1 } else { 2 };
    rng.sample_distinct(end_exclusive - first_start, count)
        .into_iter()
        .map(|offset| CorrectionWindow {
            start_day: first_start + offset,
        })
        .collect()
}

fn draw_contribution_day<R: RandomSource + ?Sized>(horizon_days: u32, rng: &mut R) -> u32 {
    let from_end = rng.int_inclusive(CONTRIBUTION_LATEST_FROM_END, CONTRIBUTION_EARLIEST_FROM_END);
    horizon_days
        .saturating_sub(from_end)
        .min(horizon_days.saturating_sub(1))
}

fn weekly_factor<R: RandomSource + ?Sized>(day: u32, rng: &mut R) -> f64 {
    match day % 7 {
        2 | 3 => rng.uniform(0.997, 0.999),
        0 | 4 => rng.uniform(1.001, 1.003),
        _ => 1.0,
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Simulates one goal's daily balance over `params.horizon_days`, ending on
/// `end_date`.
pub fn simulate<R: RandomSource + ?Sized>(
    params: &SimulationParameters,
    end_date: NaiveDate,
    rng: &mut R,
) -> SimulationResult {
    let horizon_days = params.horizon_days;
    // Empty when the first day would fall before the earliest representable date.
    let Some(start_date) = horizon_days
        .checked_sub(1)
        .and_then(|back| end_date.checked_sub_days(Days::new(u64::from(back))))
    else {
        return SimulationResult {
            points: Vec::new(),
            contribution: None,
        };
    };

    let contribution_day = draw_contribution_day(horizon_days, rng);
    let schedule = VolatilitySchedule::draw(horizon_days, rng);
    let daily_rate = params.annual_return_rate / DAYS_PER_YEAR;

    let mut current_amount = params.initial_amount;
    let mut cumulative_invested = params.initial_amount;
    let mut contribution = None;
    let mut points = Vec::with_capacity(horizon_days as usize);

    for day in 0..horizon_days {
        let date = start_date + Days::new(u64::from(day));

        let daily_growth = current_amount * daily_rate;
        let weekly = weekly_factor(day, rng);
        let band = if schedule.is_high_volatility(day) {
            HIGH_VOLATILITY_BAND
        } else {
            NORMAL_VOLATILITY_BAND
        };
        let volatility = rng.uniform(-band, band);
        let correction = schedule.correction_impact(day);

        current_amount += daily_growth;
        current_amount *= (1.0 + volatility + correction) * weekly;

        if day == contribution_day && contribution.is_none() {
            let amount_added = current_amount * CONTRIBUTION_SHARE;
            current_amount += amount_added;
            cumulative_invested += amount_added;
            contribution = Some(ContributionEvent {
                day,
                date,
                amount_added,
            });
        }

        if current_amount.is_nan() || current_amount <= 0.0 {
            current_amount = 0.0;
        }

        points.push(DailyPoint {
            date,
            amount: round_cents(current_amount),
            cumulative_net_invested: round_cents(cumulative_invested),
        });
    }

    SimulationResult {
        points,
        contribution,
    }
}

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use super::random::{RandomSource, derive_seed};
use super::simulator::simulate;
use super::types::{BucketSpec, GeneratedGoal, GoalSpec, SimulationParameters};

pub const GOAL_TYPE: &str = "GENERAL_WEALTH_ACCUMULATION";

const TARGET_VARIATION_MIN: f64 = 0.92;
const TARGET_VARIATION_MAX: f64 = 1.10;
const INITIAL_SHARE_MIN: f64 = 0.60;
const INITIAL_SHARE_MAX: f64 = 0.70;
/// One hundred years of daily points.
pub const MAX_HORIZON_DAYS: u32 = 36_500;

fn goal(
    name: &str,
    target_amount: f64,
    target_allocation: u32,
    min_return: f64,
    max_return: f64,
) -> GoalSpec {
    GoalSpec {
        name: name.to_string(),
        target_amount,
        target_allocation,
        min_return,
        max_return,
    }
}

/// House Purchase (one year) and Retirement (two years) buckets.
pub fn default_catalog() -> Vec<BucketSpec> {
    vec![
        BucketSpec {
            name: "House Purchase".to_string(),
            horizon_days: 365,
            goals: vec![
                goal("Core - Balanced", 140_000.0, 70, 0.05, 0.12),
                goal("Megatrends", 20_000.0, 10, 0.03, 0.15),
                goal("Tech", 20_000.0, 10, -0.02, 0.20),
                goal("China", 20_000.0, 10, -0.08, 0.18),
            ],
        },
        BucketSpec {
            name: "Retirement".to_string(),
            horizon_days: 730,
            goals: vec![
                goal("Core - Aggressive", 33_000.0, 55, 0.06, 0.14),
                goal("Megatrends", 9_000.0, 15, 0.03, 0.15),
                goal("Tech", 9_000.0, 15, -0.02, 0.20),
                goal("China", 9_000.0, 15, -0.08, 0.18),
            ],
        },
    ]
}

pub fn validate_catalog(catalog: &[BucketSpec]) -> Result<(), String> {
    if catalog.is_empty() {
        return Err("catalog must contain at least one bucket".to_string());
    }

    for bucket in catalog {
        if bucket.name.trim().is_empty() {
            return Err("bucket name must not be empty".to_string());
        }
        if bucket.horizon_days == 0 {
            return Err(format!("bucket '{}': horizonDays must be > 0", bucket.name));
        }
        if bucket.horizon_days > MAX_HORIZON_DAYS {
            return Err(format!(
                "bucket '{}': horizonDays must be <= {MAX_HORIZON_DAYS}",
                bucket.name
            ));
        }
        if bucket.goals.is_empty() {
            return Err(format!("bucket '{}': must contain at least one goal", bucket.name));
        }
        for goal in &bucket.goals {
            if !goal.target_amount.is_finite() || goal.target_amount < 0.0 {
                return Err(format!(
                    "goal '{} - {}': targetAmount must be >= 0",
                    bucket.name, goal.name
                ));
            }
            if !goal.min_return.is_finite()
                || !goal.max_return.is_finite()
                || goal.min_return > goal.max_return
            {
                return Err(format!(
                    "goal '{} - {}': minReturn must be <= maxReturn",
                    bucket.name, goal.name
                ));
            }
        }
    }

    Ok(())
}

pub fn goal_id(bucket_name: &str, index: usize) -> String {
    format!(
        "mock-goal-{}-{}",
        bucket_name.to_lowercase().replace(' ', "-"),
        index
    )
}

/// Draws one goal's parameters, simulates it, and derives its returns.
/// `index` is 1-based within the bucket.
pub fn generate_goal<R: RandomSource + ?Sized>(
    bucket: &BucketSpec,
    index: usize,
    spec: &GoalSpec,
    end_date: NaiveDate,
    rng: &mut R,
) -> GeneratedGoal {
    let variation = rng.uniform(TARGET_VARIATION_MIN, TARGET_VARIATION_MAX);
    let target_final_amount = (spec.target_amount * variation * 100.0).round() / 100.0;
    let initial_amount = spec.target_amount * rng.uniform(INITIAL_SHARE_MIN, INITIAL_SHARE_MAX);
    let annual_return_rate =
        spec.min_return + rng.unit() * (spec.max_return - spec.min_return);

    let params = SimulationParameters {
        initial_amount,
        target_final_amount,
        annual_return_rate,
        horizon_days: bucket.horizon_days,
    };
    let result = simulate(&params, end_date, rng);

    let (ending_balance, cumulative_invested) = result
        .points
        .last()
        .map(|point| (point.amount, point.cumulative_net_invested))
        .unwrap_or((0.0, 0.0));
    let total_cumulative_return = ending_balance - cumulative_invested;
    let simple_rate_of_return_percent = if cumulative_invested > 0.0 {
        total_cumulative_return / cumulative_invested
    } else {
        0.0
    };

    let goal_name = format!("{} - {}", bucket.name, spec.name);
    debug!(
        goal = %goal_name,
        horizon_days = bucket.horizon_days,
        annual_return_rate,
        target_final_amount,
        ending_balance,
        contribution_date = ?result.contribution_date(),
        "simulated goal"
    );

    GeneratedGoal {
        goal_id: goal_id(&bucket.name, index),
        goal_name,
        goal_bucket: bucket.name.clone(),
        goal_type: GOAL_TYPE,
        ending_balance,
        cumulative_invested,
        total_cumulative_return,
        simple_rate_of_return_percent,
        target_amount: spec.target_amount,
        target_allocation: spec.target_allocation,
        contribution_date: result.contribution_date(),
        time_series: result.points,
        annual_return_rate,
    }
}

/// Generates every goal in catalog order, each from its own seeded stream.
pub fn generate_goals(
    catalog: &[BucketSpec],
    base_seed: u64,
    end_date: NaiveDate,
) -> Vec<GeneratedGoal> {
    let mut goals = Vec::new();
    for (bucket_index, bucket) in catalog.iter().enumerate() {
        for (goal_index, spec) in bucket.goals.iter().enumerate() {
            let seed = derive_seed(base_seed, bucket_index as u32, goal_index as u32);
            let mut rng = StdRng::seed_from_u64(seed);
            goals.push(generate_goal(bucket, goal_index + 1, spec, end_date, &mut rng));
        }
    }
    goals
}

use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use super::format::{bucket_of, currency, goal_label, signed_percent};
use super::mock_data::MockDataDocument;

#[derive(Debug, Clone)]
struct GoalRow {
    name: String,
    actual: f64,
    returns: f64,
    return_pct: f64,
    target_amount: f64,
    target_allocation: u32,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    contribution_date: Option<NaiveDate>,
    num_days: usize,
}

#[derive(Debug, Clone, Default)]
struct BucketRollup {
    goals: Vec<GoalRow>,
    total_target: f64,
    total_actual: f64,
    total_returns: f64,
    time_horizons: Vec<usize>,
}

/// `BUCKET_CONFIGURATION.md`: per-bucket totals, allocations and series coverage.
#[derive(Debug, Clone)]
pub struct BucketConfigurationReport {
    generated_at: NaiveDateTime,
    buckets: BTreeMap<String, BucketRollup>,
}

impl BucketConfigurationReport {
    pub fn from_document(doc: &MockDataDocument, generated_at: NaiveDateTime) -> Self {
        let mut buckets: BTreeMap<String, BucketRollup> = BTreeMap::new();

        for goal in &doc.investible {
            let Some(perf) = doc
                .performance
                .iter()
                .find(|p| p.goal_id == goal.goal_id)
            else {
                continue;
            };
            let series = doc.performance_time_series.get(&goal.goal_id);
            let data = series.map(|s| s.time_series.data.as_slice()).unwrap_or(&[]);

            let actual = goal.total_investment_amount.display.amount;
            let returns = perf.total_cumulative_return.amount;
            let row = GoalRow {
                name: goal_label(&goal.goal_name).to_string(),
                actual,
                returns,
                return_pct: perf.simple_rate_of_return_percent * 100.0,
                target_amount: goal.target_amount,
                target_allocation: goal.target_allocation,
                start_date: data.first().map(|p| p.date),
                end_date: data.last().map(|p| p.date),
                contribution_date: series.and_then(|s| s.contribution_date),
                num_days: data.len(),
            };

            let bucket = buckets
                .entry(bucket_of(&goal.goal_name).to_string())
                .or_default();
            bucket.total_actual += actual;
            bucket.total_returns += returns;
            bucket.total_target += goal.target_amount;
            if !bucket.time_horizons.contains(&row.num_days) {
                bucket.time_horizons.push(row.num_days);
            }
            bucket.goals.push(row);
        }

        Self {
            generated_at,
            buckets,
        }
    }

    #[cfg(test)]
    fn bucket_names(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }
}

fn date_or_na(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_else(|| "N/A".to_string())
}

impl fmt::Display for BucketConfigurationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Demo Bucket Configuration\n")?;
        writeln!(
            f,
            "*Generated on: {}*\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(
            f,
            "This document tracks the bucket and target configuration used in the demo.\n"
        )?;
        writeln!(f, "---\n")?;

        for (name, bucket) in &self.buckets {
            let growth_pct = if bucket.total_actual > 0.0 {
                bucket.total_returns / bucket.total_actual * 100.0
            } else {
                0.0
            };
            let horizon_days = bucket.time_horizons.first().copied().unwrap_or(0);
            let horizon_years = horizon_days as f64 / 365.0;

            writeln!(f, "## {name} Bucket\n")?;
            writeln!(f, "**Total Target Investment:** {}\n", currency(bucket.total_target))?;
            writeln!(f, "**Total Actual Investment:** {}\n", currency(bucket.total_actual))?;
            writeln!(
                f,
                "**Total Returns:** {} ({})\n",
                currency(bucket.total_returns),
                signed_percent(growth_pct)
            )?;
            writeln!(
                f,
                "**Ending Balance:** {}\n",
                currency(bucket.total_actual + bucket.total_returns)
            )?;
            writeln!(
                f,
                "**Time Horizon:** {horizon_years:.1} year(s) ({horizon_days} days)\n"
            )?;

            writeln!(f, "### Goals Breakdown\n")?;
            writeln!(
                f,
                concat!(
                    "| Goal | Target | Actual Investment | Returns | Return % | Ending Balance |\n",
                    "|------|--------|-------------------|---------|----------|----------------|"
                )
            )?;
            for goal in &bucket.goals {
                writeln!(
                    f,
                    "| {} | {} | {} | {} | {} | {} |",
                    goal.name,
                    currency(goal.target_amount),
                    currency(goal.actual),
                    currency(goal.returns),
                    signed_percent(goal.return_pct),
                    currency(goal.actual + goal.returns)
                )?;
            }

            writeln!(f, "\n### Target Allocations\n")?;
            writeln!(
                f,
                concat!(
                    "| Goal | Target % | Actual % | Target Amount | Actual Amount | Variance |\n",
                    "|------|----------|----------|---------------|---------------|----------|"
                )
            )?;
            for goal in &bucket.goals {
                let actual_pct = if bucket.total_actual > 0.0 {
                    goal.actual / bucket.total_actual * 100.0
                } else {
                    0.0
                };
                let variance = actual_pct - goal.target_allocation as f64;
                writeln!(
                    f,
                    "| {} | {}% | {actual_pct:.2}% | {} | {} | {} |",
                    goal.name,
                    goal.target_allocation,
                    currency(goal.target_amount),
                    currency(goal.actual),
                    signed_percent(variance)
                )?;
            }

            writeln!(f, "\n### Time-Series Performance\n")?;
            writeln!(f, "| Goal | Start Date | End Date | Contribution Date | Data Points |")?;
            writeln!(f, "|------|------------|----------|-------------------|--------------|")?;
            for goal in &bucket.goals {
                let contribution = goal
                    .contribution_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "None".to_string());
                writeln!(
                    f,
                    "| {} | {} | {} | {} | {} |",
                    goal.name,
                    date_or_na(goal.start_date),
                    date_or_na(goal.end_date),
                    contribution,
                    goal.num_days
                )?;
            }

            writeln!(f, "\n---\n")?;
        }

        writeln!(f, "## Usage Notes\n")?;
        for note in USAGE_NOTES {
            writeln!(f, "- {note}")?;
        }
        Ok(())
    }
}

const USAGE_NOTES: &[&str] = &[
    "All actual investments have realistic variance from targets (-8% to +10%) for demo realism",
    "Returns are randomized within specified ranges per goal type",
    "Time-series data includes bumpy/realistic market volatility patterns",
    "Each goal has a 25% contribution event in the final 90 days",
    "House Purchase bucket spans 1 year (365 days)",
    "Retirement bucket spans 2 years (730 days)",
    "Regenerate this file whenever running `goal_mock generate`",
    "Use this configuration as reference for future demo updates",
];

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    pub initial_amount: f64,
    /// Carried for the caller's bookkeeping; the walk is never steered toward it.
    pub target_final_amount: f64,
    pub annual_return_rate: f64,
    pub horizon_days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(rename = "cumulativeNetInvestmentAmount")]
    pub cumulative_net_invested: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContributionEvent {
    pub day: u32,
    pub date: NaiveDate,
    pub amount_added: f64,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CorrectionWindow {
    pub start_day: u32,
}

#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub points: Vec<DailyPoint>,
    /// `None` only when the horizon is empty.
    pub contribution: Option<ContributionEvent>,
}

impl SimulationResult {
    pub fn contribution_date(&self) -> Option<NaiveDate> {
        self.contribution.map(|event| event.date)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSpec {
    pub name: String,
    pub target_amount: f64,
    pub target_allocation: u32,
    #[serde(default = "default_min_return")]
    pub min_return: f64,
    #[serde(default = "default_max_return")]
    pub max_return: f64,
}

fn default_min_return() -> f64 {
    -0.05
}

fn default_max_return() -> f64 {
    0.15
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketSpec {
    pub name: String,
    pub horizon_days: u32,
    pub goals: Vec<GoalSpec>,
}

#[derive(Debug, Clone)]
pub struct GeneratedGoal {
    pub goal_id: String,
    pub goal_name: String,
    pub goal_bucket: String,
    pub goal_type: &'static str,
    pub ending_balance: f64,
    pub cumulative_invested: f64,
    pub total_cumulative_return: f64,
    pub simple_rate_of_return_percent: f64,
    pub target_amount: f64,
    pub target_allocation: u32,
    pub time_series: Vec<DailyPoint>,
    pub contribution_date: Option<NaiveDate>,
    pub annual_return_rate: f64,
}

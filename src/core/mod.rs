mod goals;
mod random;
mod simulator;
mod types;

pub use goals::{
    GOAL_TYPE, default_catalog, generate_goal, generate_goals, goal_id, validate_catalog,
};
pub use random::{RandomSource, derive_seed};
pub use simulator::{VolatilitySchedule, simulate};
pub use types::{
    BucketSpec, ContributionEvent, CorrectionWindow, DailyPoint, GeneratedGoal, GoalSpec,
    SimulationParameters, SimulationResult,
};

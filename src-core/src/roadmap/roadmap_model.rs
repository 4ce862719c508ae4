use serde::{Deserialize, Serialize};

use crate::constants::{MONTHS_PER_YEAR, ROADMAP_MONTHS};

/// Coarse business lifecycle label attached to each roadmap year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessPhase {
    #[serde(alias = "創業期")]
    Founding,
    #[serde(alias = "転換期")]
    Transition,
    #[serde(alias = "成長期")]
    Growth,
    #[serde(alias = "拡大期")]
    Expansion,
    #[serde(alias = "安定期")]
    Stable,
}

impl BusinessPhase {
    /// Display label used on the dashboard
    pub fn label(&self) -> &'static str {
        match self {
            BusinessPhase::Founding => "創業期",
            BusinessPhase::Transition => "転換期",
            BusinessPhase::Growth => "成長期",
            BusinessPhase::Expansion => "拡大期",
            BusinessPhase::Stable => "安定期",
        }
    }
}

/// Target figures for one roadmap year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyTarget {
    /// Roadmap year, 1..=10
    pub year: u32,
    /// Net worth to reach by the end of the year
    pub net_worth: f64,
    pub revenue: f64,
    /// Business profit for the year
    pub profit: f64,
    pub employees: u32,
    pub phase: BusinessPhase,
}

/// One month of the projected roadmap. Derived on every read, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyProgress {
    /// Absolute month index, 1..=120
    pub month: u32,
    pub year: u32,
    /// Month within the roadmap year, 1..=12
    pub month_in_year: u32,
    pub phase: BusinessPhase,
    pub target_net_worth: f64,
    pub actual_net_worth: f64,
    pub is_completed: bool,
    pub is_current: bool,
}

/// Full 120-month projection of a roadmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapProjection {
    pub months: Vec<MonthlyProgress>,
    pub elapsed_months: u32,
    pub completed_months: u32,
    /// completed_months / 120
    pub completion_ratio: f64,
}

impl RoadmapProjection {
    /// The month in progress, or `None` once the whole roadmap has elapsed.
    pub fn current(&self) -> Option<&MonthlyProgress> {
        self.months.iter().find(|m| m.is_current)
    }

    /// Most recent completed month
    pub fn last_completed(&self) -> Option<&MonthlyProgress> {
        self.months.iter().rev().find(|m| m.is_completed)
    }

    pub fn month(&self, month: u32) -> Option<&MonthlyProgress> {
        if month == 0 || month > ROADMAP_MONTHS {
            return None;
        }
        self.months.get((month - 1) as usize)
    }

    pub fn progress_percentage(&self) -> f64 {
        self.completion_ratio * 100.0
    }
}

/// Where the owner currently stands on the roadmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPosition {
    pub month: u32,
    pub year: u32,
    pub month_in_year: u32,
    pub phase: BusinessPhase,
    pub target_net_worth: f64,
    pub actual_net_worth: f64,
}

impl From<&MonthlyProgress> for CurrentPosition {
    fn from(m: &MonthlyProgress) -> Self {
        CurrentPosition {
            month: m.month,
            year: m.year,
            month_in_year: m.month_in_year,
            phase: m.phase,
            target_net_worth: m.target_net_worth,
            actual_net_worth: m.actual_net_worth,
        }
    }
}

/// A run of consecutive roadmap years sharing the same phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseSummary {
    pub phase: BusinessPhase,
    pub first_year: u32,
    pub last_year: u32,
    /// Lowest yearly profit target within the run
    pub minimum_profit: f64,
}

/// Net worth progress towards a single roadmap year's target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneProgress {
    pub year: u32,
    pub target: f64,
    pub current: f64,
    pub percentage: f64,
}

/// Milestones and to-dos shown for a roadmap year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearGuide {
    pub year: u32,
    pub milestones: Vec<String>,
    pub todo_list: Vec<String>,
}

/// Immutable view model for the roadmap page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapOverview {
    pub projection: RoadmapProjection,
    pub current_position: Option<CurrentPosition>,
    pub progress_percentage: f64,
    pub phases: Vec<PhaseSummary>,
    pub current_guide: Option<YearGuide>,
    pub milestones: Vec<MilestoneProgress>,
}

/// Splits an absolute month (1-based) into (year, month_in_year).
pub fn split_month(month: u32) -> (u32, u32) {
    let year = month.div_ceil(MONTHS_PER_YEAR);
    let month_in_year = (month - 1) % MONTHS_PER_YEAR + 1;
    (year, month_in_year)
}

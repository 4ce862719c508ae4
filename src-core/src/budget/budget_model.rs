use serde::{Deserialize, Serialize};

use crate::constants::{KPI_SUCCESS_THRESHOLD, KPI_WARNING_THRESHOLD};

/// Traffic-light status of a KPI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiStatus {
    Success,
    Warning,
    Error,
    /// No rate could be computed (zero target)
    Info,
}

impl KpiStatus {
    /// Rates are compared as displayed, rounded to one decimal place.
    pub fn classify(achievement_rate: Option<f64>) -> Self {
        match achievement_rate.map(|rate| (rate * 10.0).round() / 10.0) {
            None => KpiStatus::Info,
            Some(rate) if rate >= KPI_SUCCESS_THRESHOLD => KpiStatus::Success,
            Some(rate) if rate >= KPI_WARNING_THRESHOLD => KpiStatus::Warning,
            Some(_) => KpiStatus::Error,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            KpiStatus::Success => "目標達成",
            KpiStatus::Warning => "要注意",
            KpiStatus::Error => "未達成",
            KpiStatus::Info => "データなし",
        }
    }
}

/// Planned and booked amount for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetEntry {
    pub label: String,
    pub target: f64,
    pub actual: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRow {
    pub label: String,
    pub target: f64,
    pub actual: f64,
    /// actual - target
    pub variance: f64,
    /// Percent of target reached; absent when the target is zero
    pub achievement_rate: Option<f64>,
    pub status: KpiStatus,
}

/// Budget-vs-actual summary over a run of periods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetComparison {
    pub rows: Vec<BudgetRow>,
    pub total_target: f64,
    pub total_actual: f64,
    pub cumulative_achievement_rate: Option<f64>,
    pub status: KpiStatus,
}

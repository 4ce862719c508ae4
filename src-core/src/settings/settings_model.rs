use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CURRENT_ASSETS, DEFAULT_EMPLOYEE_COUNT, DEFAULT_FISCAL_YEAR_START_MONTH,
    DEFAULT_LONG_TERM_NET_WORTH, MAX_EMPLOYEE_COUNT, ROADMAP_YEARS,
};
use crate::errors::{ensure_non_negative, Result, ValidationError};
use crate::roadmap::roadmap_model::{BusinessPhase, YearlyTarget};

/// Net worth the owner aims for at the end of the roadmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongTermGoal {
    pub target_year: i32,
    pub target_net_worth: f64,
    pub description: Option<String>,
}

impl LongTermGoal {
    /// Default ten-year goal counted from `today`
    pub fn ten_years_from(today: NaiveDate) -> Self {
        Self {
            target_year: today.year() + ROADMAP_YEARS as i32,
            target_net_worth: DEFAULT_LONG_TERM_NET_WORTH,
            description: Some("10年で純資産5000万円を達成する".to_string()),
        }
    }
}

/// Business settings captured during initial setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    pub company_name: Option<String>,
    /// Assets at roadmap start; the baseline anchor of year 1
    pub current_assets: f64,
    pub fiscal_year_start_month: u32,
    pub employee_count: u32,
    pub long_term_goal: LongTermGoal,
    /// Date the roadmap started; elapsed months are counted from here
    pub roadmap_start_date: Option<NaiveDate>,
}

impl BusinessProfile {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            company_name: None,
            current_assets: DEFAULT_CURRENT_ASSETS,
            fiscal_year_start_month: DEFAULT_FISCAL_YEAR_START_MONTH,
            employee_count: DEFAULT_EMPLOYEE_COUNT,
            long_term_goal: LongTermGoal::ten_years_from(today),
            roadmap_start_date: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("currentAssets", self.current_assets)?;
        ensure_non_negative(
            "longTermGoal.targetNetWorth",
            self.long_term_goal.target_net_worth,
        )?;
        if !(1..=12).contains(&self.fiscal_year_start_month) {
            return Err(ValidationError::out_of_range(
                "fiscalYearStartMonth",
                self.fiscal_year_start_month as i64,
                1,
                12,
            )
            .into());
        }
        if !(1..=MAX_EMPLOYEE_COUNT).contains(&self.employee_count) {
            return Err(ValidationError::out_of_range(
                "employeeCount",
                self.employee_count as i64,
                1,
                MAX_EMPLOYEE_COUNT as i64,
            )
            .into());
        }
        Ok(())
    }
}

/// Default ten-year plan: 5M to 50M net worth across founding, transition
/// and growth phases, headcount growing from `initial_employees`.
pub fn default_yearly_targets(initial_employees: u32) -> Result<Vec<YearlyTarget>> {
    const PLAN: [(f64, f64, f64, u32, BusinessPhase); ROADMAP_YEARS] = [
        (5_000_000.0, 10_000_000.0, 2_000_000.0, 0, BusinessPhase::Founding),
        (7_000_000.0, 12_000_000.0, 2_000_000.0, 1, BusinessPhase::Founding),
        (10_000_000.0, 15_000_000.0, 2_000_000.0, 2, BusinessPhase::Founding),
        (15_000_000.0, 18_000_000.0, 2_000_000.0, 3, BusinessPhase::Transition),
        (20_000_000.0, 22_000_000.0, 2_000_000.0, 4, BusinessPhase::Transition),
        (26_000_000.0, 30_000_000.0, 8_000_000.0, 6, BusinessPhase::Growth),
        (32_000_000.0, 35_000_000.0, 8_000_000.0, 8, BusinessPhase::Growth),
        (38_000_000.0, 40_000_000.0, 8_000_000.0, 10, BusinessPhase::Growth),
        (44_000_000.0, 45_000_000.0, 8_000_000.0, 12, BusinessPhase::Growth),
        (50_000_000.0, 50_000_000.0, 8_000_000.0, 15, BusinessPhase::Growth),
    ];

    PLAN.iter()
        .enumerate()
        .map(|(i, (net_worth, revenue, profit, extra_staff, phase))| -> Result<YearlyTarget> {
            let employees = initial_employees
                .checked_add(*extra_staff)
                .filter(|count| *count <= MAX_EMPLOYEE_COUNT)
                .ok_or_else(|| {
                    ValidationError::InvalidInput(format!(
                        "initialEmployees {} exceeds the headcount limit of {}",
                        initial_employees, MAX_EMPLOYEE_COUNT
                    ))
                })?;
            Ok(YearlyTarget {
                year: i as u32 + 1,
                net_worth: *net_worth,
                revenue: *revenue,
                profit: *profit,
                employees,
                phase: *phase,
            })
        })
        .collect()
}

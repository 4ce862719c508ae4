pub mod budget_model;
pub mod budget_service;

pub use budget_model::{BudgetComparison, BudgetEntry, BudgetRow, KpiStatus};
pub use budget_service::{
    achievement_rate, compare_budget, fiscal_budget_entries, year_over_year_change,
};

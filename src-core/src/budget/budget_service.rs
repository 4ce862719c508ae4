use crate::constants::MONTHS_PER_YEAR;
use crate::errors::{ensure_finite, Result, ValidationError};
use crate::budget::budget_model::{BudgetComparison, BudgetEntry, BudgetRow, KpiStatus};
use crate::fiscal::fiscal_month_sequence;

/// `actual` as a percentage of `target`; `None` for a zero target.
pub fn achievement_rate(actual: f64, target: f64) -> Option<f64> {
    if target == 0.0 {
        return None;
    }
    Some(actual / target * 100.0)
}

/// Percentage change against the previous period; `None` when there is no
/// previous value to compare with.
pub fn year_over_year_change(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous.abs() * 100.0)
}

pub fn compare_budget(entries: &[BudgetEntry]) -> Result<BudgetComparison> {
    let mut rows = Vec::with_capacity(entries.len());
    let mut total_target = 0.0;
    let mut total_actual = 0.0;

    for (i, entry) in entries.iter().enumerate() {
        let target = ensure_finite(&format!("entries[{}].target", i), entry.target)?;
        let actual = ensure_finite(&format!("entries[{}].actual", i), entry.actual)?;
        let rate = achievement_rate(actual, target);

        total_target += target;
        total_actual += actual;

        rows.push(BudgetRow {
            label: entry.label.clone(),
            target,
            actual,
            variance: actual - target,
            achievement_rate: rate,
            status: KpiStatus::classify(rate),
        });
    }

    let cumulative = achievement_rate(total_actual, total_target);
    log::debug!(
        "Compared {} budget rows, cumulative rate {:?}",
        rows.len(),
        cumulative
    );

    Ok(BudgetComparison {
        rows,
        total_target,
        total_actual,
        cumulative_achievement_rate: cumulative,
        status: KpiStatus::classify(cumulative),
    })
}

/// Pairs monthly targets and actuals with fiscal month labels, starting at
/// `start_month`.
pub fn fiscal_budget_entries(
    start_month: u32,
    targets: &[f64],
    actuals: &[f64],
) -> Result<Vec<BudgetEntry>> {
    if targets.len() != actuals.len() {
        return Err(ValidationError::InvalidInput(format!(
            "targets and actuals must have the same length ({} vs {})",
            targets.len(),
            actuals.len()
        ))
        .into());
    }
    if targets.is_empty() || targets.len() > MONTHS_PER_YEAR as usize {
        return Err(ValidationError::out_of_range(
            "months",
            targets.len() as i64,
            1,
            MONTHS_PER_YEAR as i64,
        )
        .into());
    }

    let months = fiscal_month_sequence(start_month, targets.len() as u32)?;
    Ok(months
        .into_iter()
        .zip(targets.iter().zip(actuals))
        .map(|(month, (target, actual))| BudgetEntry {
            label: month.label,
            target: *target,
            actual: *actual,
        })
        .collect())
}

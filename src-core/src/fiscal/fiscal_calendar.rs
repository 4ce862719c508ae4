use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::MONTHS_PER_YEAR;
use crate::errors::{Result, ValidationError};

/// A calendar month placed within a fiscal year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiscalMonth {
    /// Position within the fiscal year, starting at 1
    pub fiscal_index: u32,
    pub calendar_month: u32,
    pub label: String,
}

pub fn month_label(calendar_month: u32) -> String {
    format!("{}月", calendar_month)
}

/// `count` consecutive calendar months beginning at `start_month`, wrapping
/// after December.
pub fn fiscal_month_sequence(start_month: u32, count: u32) -> Result<Vec<FiscalMonth>> {
    ensure_month("fiscalYearStartMonth", start_month)?;
    if !(1..=MONTHS_PER_YEAR).contains(&count) {
        return Err(ValidationError::out_of_range("count", count as i64, 1, 12).into());
    }

    Ok((0..count)
        .map(|i| {
            let calendar_month = (start_month - 1 + i) % MONTHS_PER_YEAR + 1;
            FiscalMonth {
                fiscal_index: i + 1,
                calendar_month,
                label: month_label(calendar_month),
            }
        })
        .collect())
}

/// Calendar year in which the fiscal year containing `date` began
pub fn fiscal_year_of(date: NaiveDate, start_month: u32) -> Result<i32> {
    ensure_month("fiscalYearStartMonth", start_month)?;
    if date.month() >= start_month {
        Ok(date.year())
    } else {
        Ok(date.year() - 1)
    }
}

/// Whole months between `start` and `today`. A month counts once its
/// day-of-month has been reached; dates before `start` give 0.
pub fn elapsed_months(start: NaiveDate, today: NaiveDate) -> u32 {
    if today <= start {
        return 0;
    }
    let mut months = (today.year() - start.year()) * MONTHS_PER_YEAR as i32
        + today.month() as i32
        - start.month() as i32;
    if today.day() < start.day() {
        months -= 1;
    }
    months.max(0) as u32
}

fn ensure_month(field: &str, month: u32) -> Result<()> {
    if !(1..=MONTHS_PER_YEAR).contains(&month) {
        return Err(ValidationError::out_of_range(field, month as i64, 1, 12).into());
    }
    Ok(())
}

//! Roadmap progress projection
//!
//! Expands ten yearly net-worth anchors into 120 monthly records by linear
//! interpolation. The starting anchor of year 1 is the owner's current assets.

use std::collections::BTreeMap;

use crate::constants::{MONTHS_PER_YEAR, PLACEHOLDER_DAMPING_FACTOR, ROADMAP_MONTHS, ROADMAP_YEARS};
use crate::errors::{ensure_finite, ensure_non_negative, Result, ValidationError};
use crate::roadmap::roadmap_model::{split_month, MonthlyProgress, RoadmapProjection, YearlyTarget};

/// Inputs available when estimating the actual net worth of a month
#[derive(Debug, Clone, Copy)]
pub struct MonthContext {
    pub month: u32,
    pub target_net_worth: f64,
    pub current_assets: f64,
    pub elapsed_months: u32,
}

/// Supplies the actual net worth shown next to each month's target
pub trait ActualNetWorthSource {
    fn actual_net_worth(&self, ctx: &MonthContext) -> f64;
}

/// Placeholder estimate: assumes a fixed share of the planned growth is
/// realised, scaled by how much of the month range has elapsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampedEstimate {
    factor: f64,
}

impl DampedEstimate {
    pub fn new(factor: f64) -> Result<Self> {
        let factor = ensure_finite("dampingFactor", factor)?;
        if !(0.0..=1.0).contains(&factor) {
            return Err(ValidationError::InvalidInput(format!(
                "dampingFactor must lie within [0, 1] (got {})",
                factor
            ))
            .into());
        }
        Ok(Self { factor })
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl Default for DampedEstimate {
    fn default() -> Self {
        Self {
            factor: PLACEHOLDER_DAMPING_FACTOR,
        }
    }
}

impl ActualNetWorthSource for DampedEstimate {
    fn actual_net_worth(&self, ctx: &MonthContext) -> f64 {
        let progress_rate = (ctx.elapsed_months as f64 / ctx.month as f64).min(1.0);
        ctx.current_assets + (ctx.target_net_worth - ctx.current_assets) * progress_rate * self.factor
    }
}

/// Booked month-end net worth values, falling back to an estimate for
/// months without a booking.
#[derive(Debug, Clone, Default)]
pub struct RecordedActuals {
    booked: BTreeMap<u32, f64>,
    fallback: DampedEstimate,
}

impl RecordedActuals {
    pub fn new<I>(booked: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, f64)>,
    {
        let mut map = BTreeMap::new();
        for (month, value) in booked {
            if month == 0 || month > ROADMAP_MONTHS {
                return Err(ValidationError::out_of_range(
                    "bookedMonth",
                    month as i64,
                    1,
                    ROADMAP_MONTHS as i64,
                )
                .into());
            }
            map.insert(month, ensure_finite("bookedNetWorth", value)?);
        }
        Ok(Self {
            booked: map,
            fallback: DampedEstimate::default(),
        })
    }

    pub fn with_fallback(mut self, fallback: DampedEstimate) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn booked_months(&self) -> usize {
        self.booked.len()
    }
}

impl ActualNetWorthSource for RecordedActuals {
    fn actual_net_worth(&self, ctx: &MonthContext) -> f64 {
        match self.booked.get(&ctx.month) {
            Some(value) => *value,
            None => self.fallback.actual_net_worth(ctx),
        }
    }
}

/// Checks the shape of a yearly target table: exactly ten entries, years
/// 1..=10 in order, finite amounts.
pub fn validate_targets(targets: &[YearlyTarget]) -> std::result::Result<(), ValidationError> {
    if targets.len() != ROADMAP_YEARS {
        return Err(ValidationError::TargetCount {
            expected: ROADMAP_YEARS,
            actual: targets.len(),
        });
    }

    for (position, target) in targets.iter().enumerate() {
        if target.year as usize != position + 1 {
            return Err(ValidationError::NonContiguousYear {
                position,
                year: target.year,
            });
        }
        ensure_finite(&format!("targets[{}].netWorth", position), target.net_worth)?;
        ensure_finite(&format!("targets[{}].revenue", position), target.revenue)?;
        ensure_finite(&format!("targets[{}].profit", position), target.profit)?;
    }

    Ok(())
}

/// Projects the roadmap using the placeholder damped estimate for actuals.
pub fn project(
    targets: &[YearlyTarget],
    current_assets: f64,
    elapsed_months: u32,
) -> Result<RoadmapProjection> {
    project_with(&DampedEstimate::default(), targets, current_assets, elapsed_months)
}

pub fn project_with<S>(
    source: &S,
    targets: &[YearlyTarget],
    current_assets: f64,
    elapsed_months: u32,
) -> Result<RoadmapProjection>
where
    S: ActualNetWorthSource + ?Sized,
{
    if let Err(e) = validate_targets(targets) {
        log::warn!("Rejected roadmap targets: {}", e);
        return Err(e.into());
    }
    let current_assets = ensure_non_negative("currentAssets", current_assets).map_err(|e| {
        log::warn!("Rejected roadmap baseline: {}", e);
        e
    })?;

    let months = (1..=ROADMAP_MONTHS)
        .map(|month| {
            let (year, month_in_year) = split_month(month);
            let year_target = &targets[(year - 1) as usize];
            let prev_anchor = if year > 1 {
                targets[(year - 2) as usize].net_worth
            } else {
                current_assets
            };

            let target_net_worth = interpolate(prev_anchor, year_target.net_worth, month_in_year);
            let actual_net_worth = source.actual_net_worth(&MonthContext {
                month,
                target_net_worth,
                current_assets,
                elapsed_months,
            });

            MonthlyProgress {
                month,
                year,
                month_in_year,
                phase: year_target.phase,
                target_net_worth,
                actual_net_worth,
                is_completed: month <= elapsed_months,
                is_current: elapsed_months < ROADMAP_MONTHS && month == elapsed_months + 1,
            }
        })
        .collect::<Vec<_>>();

    let completed_months = elapsed_months.min(ROADMAP_MONTHS);
    log::debug!(
        "Projected {} roadmap months ({} completed)",
        months.len(),
        completed_months
    );

    Ok(RoadmapProjection {
        months,
        elapsed_months,
        completed_months,
        completion_ratio: completed_months as f64 / ROADMAP_MONTHS as f64,
    })
}

// The year-end month returns the anchor itself so no rounding error can
// accumulate at year boundaries.
fn interpolate(prev_anchor: f64, curr_anchor: f64, month_in_year: u32) -> f64 {
    if month_in_year >= MONTHS_PER_YEAR {
        return curr_anchor;
    }
    prev_anchor + (curr_anchor - prev_anchor) * (month_in_year as f64 / MONTHS_PER_YEAR as f64)
}

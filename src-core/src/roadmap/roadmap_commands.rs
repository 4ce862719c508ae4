//! Edits to the yearly target table, expressed as messages.
//!
//! Applying a command never touches the input table; it returns a new table
//! that has passed the same shape checks as projector input.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_EMPLOYEE_COUNT;
use crate::errors::{ensure_finite, ensure_non_negative, Result, ValidationError};
use crate::roadmap::roadmap_model::{BusinessPhase, YearlyTarget};
use crate::roadmap::roadmap_projector::validate_targets;
use crate::settings::settings_model::default_yearly_targets;

/// Numeric column of a yearly target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetField {
    NetWorth,
    Revenue,
    Profit,
    Employees,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TargetCommand {
    SetField {
        year: u32,
        field: TargetField,
        value: f64,
    },
    SetPhase {
        year: u32,
        phase: BusinessPhase,
    },
    /// Restore the default plan for the given starting headcount
    Reset { initial_employees: u32 },
}

pub fn apply(targets: &[YearlyTarget], command: &TargetCommand) -> Result<Vec<YearlyTarget>> {
    let updated = match command {
        TargetCommand::SetField { year, field, value } => {
            let mut next = targets.to_vec();
            let target = find_year_mut(&mut next, *year)?;
            set_field(target, *field, *value)?;
            next
        }
        TargetCommand::SetPhase { year, phase } => {
            let mut next = targets.to_vec();
            find_year_mut(&mut next, *year)?.phase = *phase;
            next
        }
        TargetCommand::Reset { initial_employees } => default_yearly_targets(*initial_employees)?,
    };

    validate_targets(&updated)?;
    log::debug!("Applied target command {:?}", command);
    Ok(updated)
}

fn find_year_mut(targets: &mut [YearlyTarget], year: u32) -> Result<&mut YearlyTarget> {
    targets
        .iter_mut()
        .find(|t| t.year == year)
        .ok_or_else(|| ValidationError::InvalidInput(format!("No target for year {}", year)).into())
}

fn set_field(target: &mut YearlyTarget, field: TargetField, value: f64) -> Result<()> {
    match field {
        TargetField::NetWorth => target.net_worth = ensure_finite("netWorth", value)?,
        TargetField::Revenue => target.revenue = ensure_non_negative("revenue", value)?,
        TargetField::Profit => target.profit = ensure_finite("profit", value)?,
        TargetField::Employees => {
            let value = ensure_non_negative("employees", value)?;
            if value.fract() != 0.0 || value > MAX_EMPLOYEE_COUNT as f64 {
                return Err(ValidationError::InvalidInput(format!(
                    "employees must be a whole number up to {} (got {})",
                    MAX_EMPLOYEE_COUNT, value
                ))
                .into());
            }
            target.employees = value as u32;
        }
    }
    Ok(())
}

pub mod fiscal_calendar;

pub use fiscal_calendar::{
    elapsed_months, fiscal_month_sequence, fiscal_year_of, month_label, FiscalMonth,
};

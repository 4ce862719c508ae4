/// Length of the roadmap in years
pub const ROADMAP_YEARS: usize = 10;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Number of monthly records in a projection
pub const ROADMAP_MONTHS: u32 = ROADMAP_YEARS as u32 * MONTHS_PER_YEAR;

/// Placeholder share of planned growth assumed to be realised when no booked
/// actuals exist for a month.
pub const PLACEHOLDER_DAMPING_FACTOR: f64 = 0.85;

/// Baseline assets used when a profile has none configured
pub const DEFAULT_CURRENT_ASSETS: f64 = 5_000_000.0;

pub const DEFAULT_FISCAL_YEAR_START_MONTH: u32 = 4;

pub const DEFAULT_EMPLOYEE_COUNT: u32 = 1;

/// Largest headcount a profile or target table may carry
pub const MAX_EMPLOYEE_COUNT: u32 = 1_000_000;

pub const DEFAULT_LONG_TERM_NET_WORTH: f64 = 50_000_000.0;

/// Achievement rate (percent) at or above which a KPI counts as met
pub const KPI_SUCCESS_THRESHOLD: f64 = 100.0;

/// Achievement rate (percent) at or above which a missed KPI is only a warning
pub const KPI_WARNING_THRESHOLD: f64 = 90.0;

/// Roadmap years reported as milestones in the overview
pub const MILESTONE_YEARS: [u32; 3] = [1, 5, 10];

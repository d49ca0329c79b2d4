use serde::{Deserialize, Serialize};

/// Short English month labels, indexed by calendar month (0 = January).
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Expected dividend income for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyDividend {
    /// 0 = January … 11 = December
    pub month: u8,
    pub label: String,
    pub amount: f64,
}

/// Twelve months of expected dividend income, January first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividendCalendar {
    pub months: Vec<MonthlyDividend>,
}

impl DividendCalendar {
    /// Amounts only, indexed by month.
    pub fn amounts(&self) -> Vec<f64> {
        self.months.iter().map(|m| m.amount).collect()
    }

    /// Amount for a month index; 0 for anything outside 0–11.
    pub fn amount_for(&self, month: u8) -> f64 {
        self.months
            .get(month as usize)
            .map(|m| m.amount)
            .unwrap_or(0.0)
    }

    /// Sum over all twelve months.
    pub fn annual_total(&self) -> f64 {
        self.months.iter().fold(0.0, |acc, m| acc + m.amount)
    }

    /// Largest monthly amount, never below 1 so it can be used as a bar-scale divisor.
    pub fn peak(&self) -> f64 {
        self.months.iter().map(|m| m.amount).fold(1.0, f64::max)
    }

    /// Month amount relative to the peak, 0–100.
    pub fn relative_height(&self, month: u8) -> f64 {
        (self.amount_for(month) / self.peak() * 100.0).max(0.0)
    }
}

/// Selectable projection lengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectionHorizon {
    #[default]
    Ten,
    TwentyFive,
    Forty,
}

impl ProjectionHorizon {
    pub const ALL: [ProjectionHorizon; 3] = [
        ProjectionHorizon::Ten,
        ProjectionHorizon::TwentyFive,
        ProjectionHorizon::Forty,
    ];

    pub fn years(&self) -> u32 {
        match self {
            ProjectionHorizon::Ten => 10,
            ProjectionHorizon::TwentyFive => 25,
            ProjectionHorizon::Forty => 40,
        }
    }
}

/// One year of the compounding projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub year: i32,
    /// Rounded to whole currency units for display
    pub amount: f64,
    /// Unrounded value; the next year compounds from this
    pub exact: f64,
}

/// Dividend income compounded forward, with progress towards the passive-income goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendProjection {
    pub current_annual: f64,
    pub growth_rate: f64,
    pub points: Vec<ProjectionPoint>,

    /// Rounded amount of the last point
    pub future_value: f64,
    pub target_year: i32,

    pub monthly_goal: f64,
    pub annual_goal: f64,

    /// current_annual / annual_goal × 100, unclamped
    pub progress_percent: f64,

    pub monthly_income: f64,
    pub daily_income: f64,
    pub hourly_income: f64,
}

impl DividendProjection {
    /// Goal progress clamped to 0–100 for a progress bar.
    pub fn display_progress(&self) -> f64 {
        self.progress_percent.clamp(0.0, 100.0)
    }
}

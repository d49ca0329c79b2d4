use crate::models::dividends::{
    DividendCalendar, DividendProjection, MonthlyDividend, ProjectionHorizon, ProjectionPoint,
    MONTH_LABELS,
};
use crate::models::investment::Investment;

/// Assumed yearly dividend growth used by the projection (8 %).
pub const DIVIDEND_GROWTH_RATE: f64 = 0.08;

/// Passive-income target per month, EUR.
pub const MONTHLY_PASSIVE_INCOME_GOAL: f64 = 1000.0;

const DAYS_PER_YEAR: f64 = 365.0;
const HOURS_PER_YEAR: f64 = 8760.0;

/// Dividend scheduling and forward projection.
pub struct DividendService;

impl DividendService {
    pub fn new() -> Self {
        Self
    }

    /// Spread each holding's annual dividend evenly over its payment months
    /// and total the result per calendar month.
    ///
    /// Holdings without payment months are left out entirely.
    pub fn monthly_schedule(&self, investments: &[Investment]) -> DividendCalendar {
        let mut totals = [0.0_f64; 12];

        for inv in investments {
            let payments = inv.payment_months.len().max(1) as f64;
            let per_payment = inv.annual_dividend() / payments;
            for &month in &inv.payment_months {
                if let Some(slot) = totals.get_mut(month as usize) {
                    *slot += per_payment;
                }
            }
        }

        let months = totals
            .iter()
            .enumerate()
            .map(|(idx, amount)| MonthlyDividend {
                month: idx as u8,
                label: MONTH_LABELS[idx].to_string(),
                amount: *amount,
            })
            .collect();

        DividendCalendar { months }
    }

    /// Compound `current_annual` forward for `years` years at `DIVIDEND_GROWTH_RATE`.
    ///
    /// Produces `years + 1` points starting at `start_year`. Each point keeps the
    /// unrounded value so rounding never feeds back into the compounding.
    pub fn project(&self, current_annual: f64, years: u32, start_year: i32) -> DividendProjection {
        let mut points = Vec::with_capacity(years as usize + 1);
        let mut amount = current_annual;

        for i in 0..=years {
            points.push(ProjectionPoint {
                year: start_year + i as i32,
                amount: amount.round(),
                exact: amount,
            });
            amount *= 1.0 + DIVIDEND_GROWTH_RATE;
        }

        let future_value = points.last().map(|p| p.amount).unwrap_or(0.0);
        let annual_goal = MONTHLY_PASSIVE_INCOME_GOAL * 12.0;

        DividendProjection {
            current_annual,
            growth_rate: DIVIDEND_GROWTH_RATE,
            points,
            future_value,
            target_year: start_year + years as i32,
            monthly_goal: MONTHLY_PASSIVE_INCOME_GOAL,
            annual_goal,
            progress_percent: current_annual / annual_goal * 100.0,
            monthly_income: current_annual / 12.0,
            daily_income: current_annual / DAYS_PER_YEAR,
            hourly_income: current_annual / HOURS_PER_YEAR,
        }
    }

    /// `project` for one of the selectable horizons.
    pub fn project_horizon(
        &self,
        current_annual: f64,
        horizon: ProjectionHorizon,
        start_year: i32,
    ) -> DividendProjection {
        self.project(current_annual, horizon.years(), start_year)
    }
}

impl Default for DividendService {
    fn default() -> Self {
        Self::new()
    }
}

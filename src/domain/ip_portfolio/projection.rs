//! Six-year investment outlook for the portfolio

use crate::domain::constants::ip::projection;
use crate::domain::quotient::Quotient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearProjection {
    pub year: i32,
    pub patent_cost: f64,
    pub trade_secret_cost: f64,
    pub patent_revenue: f64,
    pub trade_secret_revenue: f64,
    pub cumulative_cost: f64,
    pub cumulative_revenue: f64,
    /// (cumulative revenue - cumulative cost) / cumulative cost, in percent
    pub cumulative_roi_pct: Quotient,
}

/// Costs, revenues and cumulative ROI for each year from 2025
pub fn investment_projection() -> Vec<YearProjection> {
    let mut cumulative_cost = 0.0;
    let mut cumulative_revenue = 0.0;

    (0..projection::PATENT_COSTS.len())
        .map(|i| {
            let patent_cost = projection::PATENT_COSTS[i];
            let trade_secret_cost = projection::TRADE_SECRET_COSTS[i];
            let patent_revenue = projection::PATENT_REVENUE[i];
            let trade_secret_revenue = projection::TRADE_SECRET_REVENUE[i];

            cumulative_cost += patent_cost + trade_secret_cost;
            cumulative_revenue += patent_revenue + trade_secret_revenue;

            YearProjection {
                year: projection::FIRST_YEAR + i as i32,
                patent_cost,
                trade_secret_cost,
                patent_revenue,
                trade_secret_revenue,
                cumulative_cost,
                cumulative_revenue,
                cumulative_roi_pct: Quotient::divide(
                    cumulative_revenue - cumulative_cost,
                    cumulative_cost,
                )
                .map(|ratio| ratio * 100.0),
            }
        })
        .collect()
}

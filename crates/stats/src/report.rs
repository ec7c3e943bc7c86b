use serde::Serialize;

use crate::model::ReportRow;
use crate::rank::round2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMeta {
    pub config_name: String,
    pub engine_version: String,
    pub seller_count: usize,
    pub record_count: usize,
}

/// Totals across all sellers, computed from the already-rounded rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub total_revenue: f64,
    pub total_profit: f64,
    pub total_bonus: f64,
    pub total_sales: usize,
}

impl ReportSummary {
    pub fn from_rows(rows: &[ReportRow]) -> Self {
        let mut revenue = 0.0;
        let mut profit = 0.0;
        let mut bonus = 0.0;
        let mut sales = 0;

        for row in rows {
            revenue += row.revenue;
            profit += row.profit;
            bonus += row.bonus;
            sales += row.sales_count;
        }

        Self {
            total_revenue: round2(revenue),
            total_profit: round2(profit),
            total_bonus: round2(bonus),
            total_sales: sales,
        }
    }
}

/// Report rows plus run metadata. Contains no timestamps, so serializing the
/// same run twice gives identical bytes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    pub meta: ReportMeta,
    pub summary: ReportSummary,
    pub sellers: Vec<ReportRow>,
}

impl SalesReport {
    pub fn new(meta: ReportMeta, sellers: Vec<ReportRow>) -> Self {
        Self {
            meta,
            summary: ReportSummary::from_rows(&sellers),
            sellers,
        }
    }
}

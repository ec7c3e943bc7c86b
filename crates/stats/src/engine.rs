use log::debug;

use crate::aggregate::aggregate_records;
use crate::bonus::{BonusByProfit, BonusFn};
use crate::config::SalesConfig;
use crate::error::StatsError;
use crate::index::{ProductIndex, SellerIndex};
use crate::model::{Dataset, ReportRow};
use crate::rank::rank_sellers;
use crate::report::{ReportMeta, SalesReport};
use crate::revenue::{RevenueFn, SimpleRevenue};

/// The two pluggable strategies. Both are required; [`analyze`] rejects
/// options with either one missing before touching the data.
#[derive(Default)]
pub struct AnalyzeOptions {
    pub calculate_revenue: Option<Box<dyn RevenueFn>>,
    pub calculate_bonus: Option<Box<dyn BonusFn>>,
}

impl AnalyzeOptions {
    /// [`SimpleRevenue`] + [`BonusByProfit`].
    pub fn standard() -> Self {
        Self::default()
            .with_revenue(SimpleRevenue)
            .with_bonus(BonusByProfit)
    }

    pub fn with_revenue(mut self, revenue_fn: impl RevenueFn + 'static) -> Self {
        self.calculate_revenue = Some(Box::new(revenue_fn));
        self
    }

    pub fn with_bonus(mut self, bonus_fn: impl BonusFn + 'static) -> Self {
        self.calculate_bonus = Some(Box::new(bonus_fn));
        self
    }

    fn strategies(&self) -> Result<(&dyn RevenueFn, &dyn BonusFn), StatsError> {
        let revenue = self
            .calculate_revenue
            .as_deref()
            .ok_or(StatsError::MissingConfiguration("calculate_revenue"))?;
        let bonus = self
            .calculate_bonus
            .as_deref()
            .ok_or(StatsError::MissingConfiguration("calculate_bonus"))?;
        Ok((revenue, bonus))
    }
}

/// Per-seller statistics, ordered by profit descending.
///
/// Fails with `InvalidInput` when `data` is absent or has no sellers, with
/// `MissingConfiguration` when a strategy is missing, and with
/// `MissingReference` when a record points at an unknown seller or SKU. No
/// partial result is returned on failure.
pub fn analyze(data: Option<&Dataset>, options: &AnalyzeOptions) -> Result<Vec<ReportRow>, StatsError> {
    let data = data.ok_or_else(|| StatsError::InvalidInput("dataset is missing".into()))?;
    if data.sellers.is_empty() {
        return Err(StatsError::InvalidInput("sellers must be a non-empty list".into()));
    }

    let (revenue_fn, bonus_fn) = options.strategies()?;

    let mut sellers = SellerIndex::build(&data.sellers);
    let products = ProductIndex::build(&data.products);

    aggregate_records(&mut sellers, &products, &data.purchase_records, revenue_fn)?;

    Ok(rank_sellers(sellers.into_accumulators(), bonus_fn))
}

/// Run the analysis for a loaded config and wrap the rows with meta + summary.
pub fn run(config: &SalesConfig, data: &Dataset) -> Result<SalesReport, StatsError> {
    let options = config.analyze_options()?;
    debug!("running '{}'", config.name);

    let sellers = analyze(Some(data), &options)?;

    Ok(SalesReport::new(
        ReportMeta {
            config_name: config.name.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            seller_count: sellers.len(),
            record_count: data.purchase_records.len(),
        },
        sellers,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LineItem, Product, PurchaseRecord, Seller, SellerAccumulator, TopProduct};

    fn single_seller_dataset() -> Dataset {
        Dataset {
            sellers: vec![Seller {
                id: "s1".into(),
                first_name: "A".into(),
                last_name: "B".into(),
            }],
            products: vec![Product {
                sku: "p1".into(),
                purchase_price: 5.0,
            }],
            purchase_records: vec![PurchaseRecord {
                seller_id: "s1".into(),
                items: vec![LineItem {
                    sku: "p1".into(),
                    sale_price: 10.0,
                    quantity: 2,
                    discount: 0.0,
                }],
                total_amount: 20.0,
            }],
        }
    }

    #[test]
    fn single_seller_end_to_end() {
        let rows = analyze(Some(&single_seller_dataset()), &AnalyzeOptions::standard()).unwrap();

        assert_eq!(
            rows,
            vec![ReportRow {
                seller_id: "s1".into(),
                name: "A B".into(),
                revenue: 20.0,
                profit: 10.0,
                sales_count: 1,
                top_products: vec![TopProduct {
                    sku: "p1".into(),
                    quantity: 2,
                }],
                bonus: 1.5,
            }]
        );
    }

    #[test]
    fn missing_dataset_is_invalid_input() {
        let err = analyze(None, &AnalyzeOptions::standard()).unwrap_err();
        assert!(matches!(err, StatsError::InvalidInput(_)));
    }

    #[test]
    fn empty_sellers_is_invalid_input() {
        let data = Dataset::default();
        let err = analyze(Some(&data), &AnalyzeOptions::standard()).unwrap_err();
        assert!(matches!(err, StatsError::InvalidInput(_)));
    }

    #[test]
    fn missing_strategies_fail_before_processing() {
        // The record references an unknown seller; the config error must win.
        let mut data = single_seller_dataset();
        data.purchase_records[0].seller_id = "ghost".into();

        let err = analyze(Some(&data), &AnalyzeOptions::default()).unwrap_err();
        assert!(matches!(err, StatsError::MissingConfiguration("calculate_revenue")));

        let only_revenue = AnalyzeOptions::default().with_revenue(SimpleRevenue);
        let err = analyze(Some(&data), &only_revenue).unwrap_err();
        assert!(matches!(err, StatsError::MissingConfiguration("calculate_bonus")));
    }

    #[test]
    fn strategies_can_be_closures() {
        let options = AnalyzeOptions::default()
            .with_revenue(|item: &LineItem, _: &Product| item.sale_price * f64::from(item.quantity) * 2.0)
            .with_bonus(|_: usize, _: usize, _: &SellerAccumulator| 1000.0);

        let rows = analyze(Some(&single_seller_dataset()), &options).unwrap();
        assert_eq!(rows[0].profit, 30.0);
        assert_eq!(rows[0].bonus, 30.0);
    }
}

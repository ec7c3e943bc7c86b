use crate::model::{LineItem, Product};

/// Revenue strategy: money collected for one line item.
///
/// Called once per line item during aggregation and must be pure. The product
/// is passed so that product-aware pricing can be plugged in without touching
/// the aggregator.
pub trait RevenueFn {
    fn revenue(&self, item: &LineItem, product: &Product) -> f64;
}

impl<F> RevenueFn for F
where
    F: Fn(&LineItem, &Product) -> f64,
{
    fn revenue(&self, item: &LineItem, product: &Product) -> f64 {
        self(item, product)
    }
}

/// `sale_price * quantity * (1 - discount / 100)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenueFn for SimpleRevenue {
    fn revenue(&self, item: &LineItem, _product: &Product) -> f64 {
        let discount = 1.0 - item.discount / 100.0;
        item.sale_price * f64::from(item.quantity) * discount
    }
}

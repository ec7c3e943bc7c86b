use log::debug;

use crate::error::StatsError;
use crate::index::{ProductIndex, SellerIndex};
use crate::model::PurchaseRecord;
use crate::revenue::RevenueFn;

/// Fold purchase records into the seller accumulators, in input order.
///
/// Per record: `sales_count += 1`, `revenue += total_amount`. Per line item:
/// `profit += revenue_fn(item) - purchase_price * quantity` and the SKU's sold
/// quantity grows by `quantity`. An unknown seller id or SKU aborts the fold.
pub fn aggregate_records(
    sellers: &mut SellerIndex,
    products: &ProductIndex,
    records: &[PurchaseRecord],
    revenue_fn: &dyn RevenueFn,
) -> Result<(), StatsError> {
    let mut line_items = 0usize;

    for record in records {
        let seller = sellers.get_mut_or_err(&record.seller_id)?;

        seller.sales_count += 1;
        seller.revenue += record.total_amount;

        for item in &record.items {
            let product = products.get_or_err(&item.sku)?;

            let cost = product.purchase_price * f64::from(item.quantity);
            let revenue = revenue_fn.revenue(item, product);
            seller.profit += revenue - cost;

            seller.products_sold.add(&item.sku, u64::from(item.quantity));
            line_items += 1;
        }
    }

    debug!(
        "aggregated {} purchase record(s), {} line item(s)",
        records.len(),
        line_items
    );
    Ok(())
}

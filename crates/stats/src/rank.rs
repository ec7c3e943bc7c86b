use log::debug;

use crate::bonus::BonusFn;
use crate::model::{ReportRow, SellerAccumulator, TopProduct};

/// Maximum number of entries in a seller's `top_products`.
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Round to 2 decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Stable sort by profit, highest first. Equal profits keep their incoming
/// order.
pub fn sort_by_profit(sellers: &mut [SellerAccumulator]) {
    sellers.sort_by(|a, b| b.profit.total_cmp(&a.profit));
}

/// Most-sold SKUs by quantity, capped at [`TOP_PRODUCTS_LIMIT`]. Equal
/// quantities keep first-sold order.
pub fn top_products(seller: &SellerAccumulator) -> Vec<TopProduct> {
    let mut products: Vec<TopProduct> = seller.products_sold.iter().cloned().collect();
    products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    products.truncate(TOP_PRODUCTS_LIMIT);
    products
}

/// Sort, assign bonuses and top products, and project to report rows.
pub fn rank_sellers(mut sellers: Vec<SellerAccumulator>, bonus_fn: &dyn BonusFn) -> Vec<ReportRow> {
    sort_by_profit(&mut sellers);

    let total = sellers.len();
    for (rank, seller) in sellers.iter_mut().enumerate() {
        let weight = bonus_fn.weight(rank, total, seller);
        seller.bonus = seller.profit * (weight / 1000.0);
        seller.top_products = top_products(seller);
    }

    debug!("ranked {total} seller(s)");
    sellers.into_iter().map(project).collect()
}

fn project(seller: SellerAccumulator) -> ReportRow {
    ReportRow {
        seller_id: seller.id,
        name: seller.name,
        revenue: round2(seller.revenue),
        profit: round2(seller.profit),
        sales_count: seller.sales_count,
        top_products: seller.top_products,
        bonus: round2(seller.bonus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bonus::BonusByProfit;
    use crate::model::Seller;

    fn acc(id: &str, profit: f64) -> SellerAccumulator {
        let mut a = SellerAccumulator::new(&Seller {
            id: id.into(),
            first_name: "F".into(),
            last_name: "L".into(),
        });
        a.profit = profit;
        a
    }

    #[test]
    fn round2_half_away_from_zero() {
        assert_eq!(round2(2.345678), 2.35);
        assert_eq!(round2(-2.345678), -2.35);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(10.0), 10.0);
    }

    #[test]
    fn sort_is_descending_and_stable() {
        let mut sellers = vec![acc("a", 10.0), acc("b", 30.0), acc("c", 10.0), acc("d", 20.0)];
        sort_by_profit(&mut sellers);
        let ids: Vec<_> = sellers.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn top_products_capped_and_tie_stable() {
        let mut seller = acc("s1", 0.0);
        for i in 0..12 {
            seller.products_sold.add(&format!("sku_{i:02}"), 1);
        }
        seller.products_sold.add("sku_11", 4);
        seller.products_sold.add("sku_05", 4);

        let top = top_products(&seller);
        assert_eq!(top.len(), TOP_PRODUCTS_LIMIT);
        assert_eq!(top[0], TopProduct { sku: "sku_05".into(), quantity: 5 });
        assert_eq!(top[1], TopProduct { sku: "sku_11".into(), quantity: 5 });
        // Remaining ties at quantity 1 in first-sold order.
        let rest: Vec<_> = top[2..].iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(
            rest,
            vec!["sku_00", "sku_01", "sku_02", "sku_03", "sku_04", "sku_06", "sku_07", "sku_08"]
        );
    }

    #[test]
    fn bonuses_follow_rank() {
        let sellers = vec![
            acc("s1", 1000.0),
            acc("s2", 4000.0),
            acc("s3", 3000.0),
            acc("s4", 2000.0),
            acc("s5", 5000.0),
        ];
        let rows = rank_sellers(sellers, &BonusByProfit);

        let got: Vec<_> = rows.iter().map(|r| (r.seller_id.as_str(), r.bonus)).collect();
        assert_eq!(
            got,
            vec![
                ("s5", 750.0),
                ("s2", 400.0),
                ("s3", 300.0),
                ("s4", 100.0),
                ("s1", 0.0),
            ]
        );
    }

    #[test]
    fn projection_rounds_money_fields() {
        let mut seller = acc("s1", 10.0 / 3.0);
        seller.revenue = 100.0 / 3.0;
        let rows = rank_sellers(vec![seller], &BonusByProfit);

        assert_eq!(rows[0].revenue, 33.33);
        assert_eq!(rows[0].profit, 3.33);
        assert_eq!(rows[0].bonus, 0.5);
    }

    #[test]
    fn custom_bonus_strategy_sees_rank_and_total() {
        let flat = |rank: usize, total: usize, _: &SellerAccumulator| (total - rank) as f64 * 100.0;
        let rows = rank_sellers(vec![acc("a", 100.0), acc("b", 200.0)], &flat);
        assert_eq!(rows[0].seller_id, "b");
        assert_eq!(rows[0].bonus, 40.0);
        assert_eq!(rows[1].bonus, 10.0);
    }
}

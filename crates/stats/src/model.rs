use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A salesperson. Source records may carry more fields (`start_date`,
/// `position`); only these are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A catalog item keyed by SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub purchase_price: f64,
}

/// One product line within a purchase record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub sale_price: f64,
    pub quantity: u32,
    /// Percent, 0..=100. Absent or `null` in the source means no discount.
    #[serde(default, deserialize_with = "deserialize_discount")]
    pub discount: f64,
}

fn deserialize_discount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// One completed sale transaction (a receipt).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,
    pub items: Vec<LineItem>,
    pub total_amount: f64,
}

/// Pre-loaded dataset handed to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub sellers: Vec<Seller>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub purchase_records: Vec<PurchaseRecord>,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u64,
}

/// SKU → cumulative quantity, iterated in the order each SKU was first sold.
#[derive(Debug, Clone, Default)]
pub struct ProductTally {
    entries: Vec<TopProduct>,
    positions: HashMap<String, usize>,
}

impl ProductTally {
    pub fn add(&mut self, sku: &str, quantity: u64) {
        match self.positions.get(sku) {
            Some(&pos) => self.entries[pos].quantity += quantity,
            None => {
                self.positions.insert(sku.to_string(), self.entries.len());
                self.entries.push(TopProduct {
                    sku: sku.to_string(),
                    quantity,
                });
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TopProduct> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Running statistics for one seller. Created zeroed by the indexer, mutated
/// only by the aggregator, then read by the ranker.
#[derive(Debug, Clone)]
pub struct SellerAccumulator {
    pub id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: usize,
    pub products_sold: ProductTally,
    pub bonus: f64,
    pub top_products: Vec<TopProduct>,
}

impl SellerAccumulator {
    pub fn new(seller: &Seller) -> Self {
        Self {
            id: seller.id.clone(),
            name: seller.display_name(),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: ProductTally::default(),
            bonus: 0.0,
            top_products: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Final per-seller row. Money fields are rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub seller_id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: usize,
    pub top_products: Vec<TopProduct>,
    pub bonus: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_keeps_first_sold_order() {
        let mut tally = ProductTally::default();
        tally.add("b", 1);
        tally.add("a", 5);
        tally.add("b", 2);

        let sold: Vec<_> = tally.iter().map(|p| (p.sku.as_str(), p.quantity)).collect();
        assert_eq!(sold, vec![("b", 3), ("a", 5)]);
    }

    #[test]
    fn accumulator_starts_zeroed() {
        let seller = Seller {
            id: "seller_1".into(),
            first_name: "Alexey".into(),
            last_name: "Petrov".into(),
        };
        let acc = SellerAccumulator::new(&seller);
        assert_eq!(acc.name, "Alexey Petrov");
        assert_eq!(acc.revenue, 0.0);
        assert_eq!(acc.profit, 0.0);
        assert_eq!(acc.sales_count, 0);
        assert!(acc.products_sold.is_empty());
        assert!(acc.top_products.is_empty());
    }

    #[test]
    fn line_item_discount_defaults_to_zero() {
        let item: LineItem =
            serde_json::from_str(r#"{"sku": "p1", "sale_price": 10.5, "quantity": 3}"#).unwrap();
        assert_eq!(item.discount, 0.0);
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn line_item_null_discount_is_zero() {
        let item: LineItem = serde_json::from_str(
            r#"{"sku": "p1", "sale_price": 10.0, "quantity": 1, "discount": null}"#,
        )
        .unwrap();
        assert_eq!(item.discount, 0.0);
    }
}

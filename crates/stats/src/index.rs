use std::collections::HashMap;

use log::{debug, warn};

use crate::error::StatsError;
use crate::model::{Product, Seller, SellerAccumulator};

/// Seller id → accumulator. Iterates in input seller order, which is the
/// tie-break order the ranker relies on.
#[derive(Debug, Default)]
pub struct SellerIndex {
    accumulators: Vec<SellerAccumulator>,
    positions: HashMap<String, usize>,
}

impl SellerIndex {
    /// Duplicate ids are last-write-wins; the entry keeps the slot of the
    /// first occurrence.
    pub fn build(sellers: &[Seller]) -> Self {
        let mut index = Self {
            accumulators: Vec::with_capacity(sellers.len()),
            positions: HashMap::with_capacity(sellers.len()),
        };

        for seller in sellers {
            let acc = SellerAccumulator::new(seller);
            match index.positions.get(&seller.id) {
                Some(&pos) => {
                    warn!("duplicate seller id '{}', keeping the later record", seller.id);
                    index.accumulators[pos] = acc;
                }
                None => {
                    index.positions.insert(seller.id.clone(), index.accumulators.len());
                    index.accumulators.push(acc);
                }
            }
        }

        debug!("indexed {} seller(s)", index.accumulators.len());
        index
    }

    pub fn get(&self, id: &str) -> Option<&SellerAccumulator> {
        self.positions.get(id).map(|&pos| &self.accumulators[pos])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut SellerAccumulator> {
        self.positions.get(id).map(|&pos| &mut self.accumulators[pos])
    }

    pub fn get_mut_or_err(&mut self, id: &str) -> Result<&mut SellerAccumulator, StatsError> {
        self.get_mut(id).ok_or_else(|| StatsError::unknown_seller(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SellerAccumulator> {
        self.accumulators.iter()
    }

    pub fn into_accumulators(self) -> Vec<SellerAccumulator> {
        self.accumulators
    }
}

/// SKU → product.
#[derive(Debug, Default)]
pub struct ProductIndex {
    products: HashMap<String, Product>,
}

impl ProductIndex {
    pub fn build(products: &[Product]) -> Self {
        let mut map = HashMap::with_capacity(products.len());
        for product in products {
            if map.insert(product.sku.clone(), product.clone()).is_some() {
                warn!("duplicate product sku '{}', keeping the later record", product.sku);
            }
        }
        debug!("indexed {} product(s)", map.len());
        Self { products: map }
    }

    pub fn get(&self, sku: &str) -> Option<&Product> {
        self.products.get(sku)
    }

    pub fn get_or_err(&self, sku: &str) -> Result<&Product, StatsError> {
        self.get(sku).ok_or_else(|| StatsError::unknown_product(sku))
    }
}

use crate::model::SellerAccumulator;

/// Bonus strategy: weight for a seller at `rank` (0-based) among `total`
/// sellers. The ranker scales it as `profit * weight / 1000`.
pub trait BonusFn {
    fn weight(&self, rank: usize, total: usize, seller: &SellerAccumulator) -> f64;
}

impl<F> BonusFn for F
where
    F: Fn(usize, usize, &SellerAccumulator) -> f64,
{
    fn weight(&self, rank: usize, total: usize, seller: &SellerAccumulator) -> f64 {
        self(rank, total, seller)
    }
}

/// 150 for first place, 100 for second and third, 0 for last, 50 otherwise.
///
/// First place is checked before last place, so a single seller gets 150.
#[derive(Debug, Clone, Copy, Default)]
pub struct BonusByProfit;

impl BonusFn for BonusByProfit {
    fn weight(&self, rank: usize, total: usize, _seller: &SellerAccumulator) -> f64 {
        if rank == 0 {
            150.0
        } else if rank == 1 || rank == 2 {
            100.0
        } else if rank + 1 == total {
            0.0
        } else {
            50.0
        }
    }
}

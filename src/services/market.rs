use crate::models::offer::{Offer, SellerKind};

/// Per-unit market average over the player-submitted listings in `offers`.
///
/// Trader listings are dropped first. Whole-stack prices are divided by their
/// quantity, per-piece prices are used as-is. `None` means no player listings
/// remained, which is distinct from an average of zero.
pub fn player_unit_mean(offers: &[Offer]) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;

    for offer in offers.iter().filter(|o| o.seller == SellerKind::Player) {
        sum += offer.unit_price();
        count += 1;
    }

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

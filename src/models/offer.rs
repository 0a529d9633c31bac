use crate::error::{AppResult, DomainError};
use crate::models::types::TemplateId;
use serde::{Deserialize, Serialize};

/// Who put the listing up. Trader listings never count towards the observed
/// market average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SellerKind {
    Player,
    Trader,
}

/// A market listing of one item stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub seller: SellerKind,

    pub template: TemplateId,

    /// Asking price: for the whole stack, or for one piece when `per_piece`
    pub total: u64,

    /// Number of pieces in the listed stack (at least 1)
    pub quantity: u32,

    /// Price quoted per single piece instead of for the whole stack
    #[serde(default)]
    pub per_piece: bool,
}

impl Offer {
    pub fn new(
        seller: SellerKind,
        template: TemplateId,
        total: u64,
        quantity: u32,
        per_piece: bool,
    ) -> AppResult<Self> {
        if quantity == 0 {
            return Err(DomainError::Validation {
                field: "quantity",
                message: "offer quantity must be at least 1".to_string(),
            });
        }

        Ok(Self {
            seller,
            template,
            total,
            quantity,
            per_piece,
        })
    }

    /// Price of a single piece out of this listing.
    pub fn unit_price(&self) -> f64 {
        if self.per_piece {
            self.total as f64
        } else {
            self.total as f64 / self.quantity as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_rejects_zero_quantity() {
        let r = Offer::new(SellerKind::Player, TemplateId::new(), 100, 0, false);
        assert!(matches!(
            r,
            Err(DomainError::Validation { field: "quantity", .. })
        ));
    }

    #[test]
    fn t_accepts_single_piece() {
        let offer = Offer::new(SellerKind::Player, TemplateId::new(), 0, 1, true).unwrap();
        assert_eq!(offer.unit_price(), 0.0);
    }

    #[test]
    fn t_unit_price_divides_stack() {
        let offer = Offer::new(SellerKind::Player, TemplateId::new(), 900, 3, false).unwrap();
        assert_eq!(offer.unit_price(), 300.0);
    }

    #[test]
    fn t_unit_price_per_piece_as_is() {
        let offer = Offer::new(SellerKind::Player, TemplateId::new(), 900, 3, true).unwrap();
        assert_eq!(offer.unit_price(), 900.0);
    }
}

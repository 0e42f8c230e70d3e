//! Portfolio positions: stock and option legs.

use super::OptionContract;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The instrument a position holds.
///
/// A strategy leg is either the underlying stock or a specific option
/// contract. Making this a tagged union (instead of a nullable contract
/// reference) forces every consumer to handle both cases explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Leg {
    /// A position in the underlying itself.
    Stock,
    /// A position in an option contract.
    Option(OptionContract),
}

impl Leg {
    /// Shares represented by one unit of this leg.
    ///
    /// Stock trades one share per unit; options carry their contract
    /// multiplier.
    #[inline]
    pub fn unit_size(&self) -> f64 {
        match self {
            Leg::Stock => 1.0,
            Leg::Option(contract) => contract.multiplier(),
        }
    }

    /// The option contract, if this is an option leg.
    #[inline]
    pub fn contract(&self) -> Option<&OptionContract> {
        match self {
            Leg::Stock => None,
            Leg::Option(contract) => Some(contract),
        }
    }
}

/// A fill acknowledgement from the execution collaborator.
///
/// The engine never submits orders itself; fills arrive from outside and
/// are the only path through which position quantity and marks change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    /// Contract symbol or underlying identifier.
    pub instrument: String,
    /// Signed filled quantity (positive = bought).
    pub quantity: f64,
    /// Fill price per unit.
    pub price: f64,
    /// Fill timestamp.
    pub filled_at: DateTime<Utc>,
}

/// An open position in a stock or option leg.
///
/// Positive quantity is long, negative is short. Pricing and risk logic
/// read positions; only [`OptionPosition::apply_fill`] and
/// [`OptionPosition::mark`] mutate them, and both are driven by external
/// collaborators (execution and market data respectively).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionPosition {
    /// What the position holds.
    pub leg: Leg,
    /// Signed quantity (positive = long).
    pub quantity: f64,
    /// Average entry price per unit.
    pub entry_price: f64,
    /// Latest mark per unit.
    pub current_price: f64,
    /// Realised profit and loss.
    pub realized_pnl: f64,
    /// When the position was opened.
    pub opened_at: DateTime<Utc>,
    /// When the position was last updated.
    pub updated_at: DateTime<Utc>,
}

impl OptionPosition {
    /// Opens a new position.
    pub fn open(leg: Leg, quantity: f64, entry_price: f64, opened_at: DateTime<Utc>) -> Self {
        Self {
            leg,
            quantity,
            entry_price,
            current_price: entry_price,
            realized_pnl: 0.0,
            opened_at,
            updated_at: opened_at,
        }
    }

    /// Unrealised profit and loss at the current mark.
    #[inline]
    pub fn unrealized_pnl(&self) -> f64 {
        (self.current_price - self.entry_price) * self.quantity * self.leg.unit_size()
    }

    /// Updates the mark price from a fresh market observation.
    pub fn mark(&mut self, price: f64, at: DateTime<Utc>) {
        self.current_price = price;
        self.updated_at = at;
    }

    /// Applies a fill acknowledgement.
    ///
    /// Fills that reduce or flip the position realise P&L on the closed
    /// portion at the fill price; the remainder keeps the original entry
    /// price. Fills that extend the position blend the entry price.
    pub fn apply_fill(&mut self, fill: &Fill) {
        let unit = self.leg.unit_size();
        let same_direction = self.quantity == 0.0 || self.quantity.signum() == fill.quantity.signum();

        if same_direction {
            let total = self.quantity + fill.quantity;
            if total != 0.0 {
                self.entry_price = (self.entry_price * self.quantity
                    + fill.price * fill.quantity)
                    / total;
            }
            self.quantity = total;
        } else {
            let closed = fill.quantity.abs().min(self.quantity.abs());
            self.realized_pnl +=
                (fill.price - self.entry_price) * closed * self.quantity.signum() * unit;
            self.quantity += fill.quantity;
            if self.quantity != 0.0 && self.quantity.signum() == fill.quantity.signum() {
                // Position flipped through zero; the residual opens at the fill price.
                self.entry_price = fill.price;
            }
        }

        self.current_price = fill.price;
        self.updated_at = fill.filled_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;
    use quote_core::types::{ExerciseStyle, OptionKind};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    fn option_leg() -> Leg {
        let contract = OptionContract::new(
            "TEST_C_100",
            "STOCK",
            OptionKind::Call,
            ExerciseStyle::European,
            100.0,
            now() + chrono::Duration::days(30),
            now(),
        )
        .unwrap();
        Leg::Option(contract)
    }

    fn fill(quantity: f64, price: f64) -> Fill {
        Fill {
            instrument: "TEST_C_100".to_string(),
            quantity,
            price,
            filled_at: now() + chrono::Duration::hours(1),
        }
    }

    #[test]
    fn test_unit_size() {
        assert_eq!(Leg::Stock.unit_size(), 1.0);
        assert_eq!(option_leg().unit_size(), 100.0);
    }

    #[test]
    fn test_contract_accessor() {
        assert!(Leg::Stock.contract().is_none());
        assert!(option_leg().contract().is_some());
    }

    #[test]
    fn test_unrealized_pnl_option_leg() {
        let mut pos = OptionPosition::open(option_leg(), 2.0, 3.0, now());
        pos.mark(4.0, now());
        // (4 - 3) * 2 contracts * 100 multiplier
        assert_relative_eq!(pos.unrealized_pnl(), 200.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unrealized_pnl_short() {
        let mut pos = OptionPosition::open(option_leg(), -1.0, 3.0, now());
        pos.mark(2.0, now());
        assert_relative_eq!(pos.unrealized_pnl(), 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fill_extends_position_blends_entry() {
        let mut pos = OptionPosition::open(option_leg(), 1.0, 2.0, now());
        pos.apply_fill(&fill(1.0, 4.0));
        assert_relative_eq!(pos.quantity, 2.0, epsilon = 1e-12);
        assert_relative_eq!(pos.entry_price, 3.0, epsilon = 1e-12);
        assert_relative_eq!(pos.realized_pnl, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fill_closes_position_realises_pnl() {
        let mut pos = OptionPosition::open(option_leg(), 2.0, 3.0, now());
        pos.apply_fill(&fill(-2.0, 5.0));
        assert_relative_eq!(pos.quantity, 0.0, epsilon = 1e-12);
        // (5 - 3) * 2 contracts * 100 multiplier
        assert_relative_eq!(pos.realized_pnl, 400.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fill_flips_position() {
        let mut pos = OptionPosition::open(option_leg(), 1.0, 3.0, now());
        pos.apply_fill(&fill(-3.0, 4.0));
        assert_relative_eq!(pos.quantity, -2.0, epsilon = 1e-12);
        // Closed 1 long contract at 4 against entry 3.
        assert_relative_eq!(pos.realized_pnl, 100.0, epsilon = 1e-12);
        assert_relative_eq!(pos.entry_price, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fill_stock_leg_unit_size_one() {
        let mut pos = OptionPosition::open(Leg::Stock, 100.0, 50.0, now());
        pos.apply_fill(&fill(-100.0, 51.0));
        assert_relative_eq!(pos.realized_pnl, 100.0, epsilon = 1e-12);
    }
}

//! Implied-volatility surface built from an option-chain snapshot.

use chrono::{DateTime, Utc};
use quote_core::market_data::MarketSnapshot;
use serde::{Deserialize, Serialize};

/// Fallback volatility when the chain is too sparse to calibrate.
pub const DEFAULT_VOL: f64 = 0.20;

/// Implied-volatility grid over (expiration, strike).
///
/// Built from the chain of a [`MarketSnapshot`]: the axes are the distinct
/// strikes and expirations observed in the chain, each cell the mean quoted
/// implied vol of the contracts matching that (expiration, strike) pair.
/// Cells with no usable quote are filled by linear interpolation between the
/// two nearest strikes on the nearest-expiration row, with flat extrapolation
/// outside the quoted strike range. Term structure across expirations is
/// deliberately not interpolated; the strike dimension carries almost all of
/// the smile signal in the chains this engine sees, so missing cells borrow
/// from the front row.
///
/// A chain with fewer than two distinct strikes cannot support even that
/// heuristic, so the whole grid degrades to [`DEFAULT_VOL`] and
/// `low_confidence` is set. Sparse data is a quality signal, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolSurface {
    strikes: Vec<f64>,
    /// Years from the snapshot's valuation instant, ascending.
    expiries: Vec<f64>,
    /// Row-major, `vols[expiry_idx][strike_idx]`.
    vols: Vec<Vec<f64>>,
    spot: f64,
    risk_free_rate: f64,
    low_confidence: bool,
}

impl VolSurface {
    /// Builds a surface from the option chain of `snapshot`.
    ///
    /// Quotes with non-positive implied vol are treated as "not available"
    /// and never enter a cell mean. Construction always succeeds; sparse
    /// chains surface through [`VolSurface::low_confidence`] instead.
    ///
    /// # Examples
    /// ```
    /// use quote_core::market_data::MarketSnapshot;
    /// use quote_vol::{VolSurface, DEFAULT_VOL};
    /// use chrono::Utc;
    ///
    /// let snapshot = MarketSnapshot::new(100.0, 0.02, Utc::now(), vec![]).unwrap();
    /// let surface = VolSurface::from_chain(&snapshot);
    /// assert!(surface.low_confidence());
    /// assert_eq!(surface.volatility_at(100.0, 0.25), DEFAULT_VOL);
    /// ```
    pub fn from_chain(snapshot: &MarketSnapshot) -> Self {
        let chain = snapshot.chain();

        let mut strikes: Vec<f64> = chain.iter().map(|q| q.strike).collect();
        strikes.sort_by(|a, b| a.total_cmp(b));
        strikes.dedup();

        let mut expirations: Vec<DateTime<Utc>> = chain.iter().map(|q| q.expiration).collect();
        expirations.sort();
        expirations.dedup();
        let expiries: Vec<f64> = expirations.iter().map(|e| snapshot.years_to(*e)).collect();

        if strikes.len() < 2 {
            let rows = expiries.len().max(1);
            let cols = strikes.len().max(1);
            return Self {
                strikes,
                expiries,
                vols: vec![vec![DEFAULT_VOL; cols]; rows],
                spot: snapshot.spot(),
                risk_free_rate: snapshot.risk_free_rate(),
                low_confidence: true,
            };
        }

        // First pass: cell means of the quotes that carry an implied vol.
        // Zero marks "no usable quote" for the fill pass below.
        let mut vols = vec![vec![0.0; strikes.len()]; expirations.len()];
        for (i, expiration) in expirations.iter().enumerate() {
            for (j, strike) in strikes.iter().enumerate() {
                let mut sum = 0.0;
                let mut count = 0usize;
                for quote in chain {
                    if quote.expiration == *expiration
                        && quote.strike == *strike
                        && quote.implied_vol > 0.0
                    {
                        sum += quote.implied_vol;
                        count += 1;
                    }
                }
                if count > 0 {
                    vols[i][j] = sum / count as f64;
                }
            }
        }

        // Second pass: fill holes from the front-expiration row.
        let front_row = vols[0].clone();
        for row in vols.iter_mut() {
            for (j, cell) in row.iter_mut().enumerate() {
                if *cell <= 0.0 {
                    *cell = interpolate_strike(strikes[j], &strikes, &front_row);
                }
            }
        }

        Self {
            strikes,
            expiries,
            vols,
            spot: snapshot.spot(),
            risk_free_rate: snapshot.risk_free_rate(),
            low_confidence: false,
        }
    }

    /// Volatility at the grid cell nearest to `(strike, expiry)`.
    ///
    /// `expiry` is in years from the snapshot's valuation instant. There is
    /// no interpolation at lookup time; the consumer is the vol-arbitrage
    /// scan, which compares against quotes sitting exactly on grid nodes.
    pub fn volatility_at(&self, strike: f64, expiry: f64) -> f64 {
        let Some(j) = nearest_index(&self.strikes, strike) else {
            return DEFAULT_VOL;
        };
        let i = nearest_index(&self.expiries, expiry).unwrap_or(0);
        self.vols
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(DEFAULT_VOL)
    }

    /// Distinct strikes observed in the chain, ascending.
    pub fn strikes(&self) -> &[f64] {
        &self.strikes
    }

    /// Distinct expirations, as years from the valuation instant, ascending.
    pub fn expiries(&self) -> &[f64] {
        &self.expiries
    }

    /// Underlying spot at the snapshot's capture time.
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Risk-free rate carried over from the snapshot.
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// True when the chain was too sparse and the grid fell back to
    /// [`DEFAULT_VOL`].
    pub fn low_confidence(&self) -> bool {
        self.low_confidence
    }
}

/// Linear interpolation along the strike axis of the front-expiration row,
/// flat outside the quoted range. Non-positive reference cells fall back to
/// the default.
fn interpolate_strike(strike: f64, strikes: &[f64], front_row: &[f64]) -> f64 {
    let positive = |v: f64| if v > 0.0 { v } else { DEFAULT_VOL };

    if strike <= strikes[0] {
        return positive(front_row[0]);
    }
    if strike >= strikes[strikes.len() - 1] {
        return positive(front_row[front_row.len() - 1]);
    }

    // strikes is sorted and strike lies strictly inside, so a bracketing
    // pair exists.
    let upper = strikes.partition_point(|s| *s < strike);
    let lower = upper - 1;
    if strikes[lower] == strike {
        return positive(front_row[lower]);
    }

    let weight = (strike - strikes[lower]) / (strikes[upper] - strikes[lower]);
    let lower_vol = positive(front_row[lower]);
    let upper_vol = positive(front_row[upper]);
    lower_vol + weight * (upper_vol - lower_vol)
}

/// Index of the element of `axis` nearest to `target`, or `None` when empty.
fn nearest_index(axis: &[f64], target: f64) -> Option<usize> {
    axis.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (*a - target)
                .abs()
                .total_cmp(&(*b - target).abs())
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{Duration, TimeZone};
    use quote_core::market_data::ChainQuote;
    use quote_core::types::OptionKind;

    fn valuation() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    fn quote(strike: f64, days: i64, kind: OptionKind, iv: f64) -> ChainQuote {
        ChainQuote {
            strike,
            expiration: valuation() + Duration::days(days),
            kind,
            last: 1.0,
            bid: 0.95,
            ask: 1.05,
            implied_vol: iv,
        }
    }

    fn snapshot(chain: Vec<ChainQuote>) -> MarketSnapshot {
        MarketSnapshot::new(100.0, 0.02, valuation(), chain).unwrap()
    }

    #[test]
    fn test_cell_is_mean_of_matching_quotes() {
        let snap = snapshot(vec![
            quote(100.0, 30, OptionKind::Call, 0.24),
            quote(100.0, 30, OptionKind::Put, 0.26),
            quote(110.0, 30, OptionKind::Call, 0.30),
        ]);
        let surface = VolSurface::from_chain(&snap);
        assert!(!surface.low_confidence());
        assert_relative_eq!(
            surface.volatility_at(100.0, snap.years_to(valuation() + Duration::days(30))),
            0.25,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_missing_cell_interpolated_between_nearest_strikes() {
        // 100-strike has no usable quote; it sits midway between 90 (0.25)
        // and 110 (0.30) on the front row.
        let snap = snapshot(vec![
            quote(90.0, 30, OptionKind::Call, 0.25),
            quote(100.0, 30, OptionKind::Call, 0.0),
            quote(110.0, 30, OptionKind::Call, 0.30),
        ]);
        let surface = VolSurface::from_chain(&snap);
        let expiry = snap.years_to(valuation() + Duration::days(30));
        assert_relative_eq!(surface.volatility_at(100.0, expiry), 0.275, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_extrapolation_outside_strike_range() {
        // The 80 strike only appears on the back expiration; its fill comes
        // from the front row's edge value.
        let snap = snapshot(vec![
            quote(90.0, 30, OptionKind::Call, 0.25),
            quote(110.0, 30, OptionKind::Call, 0.30),
            quote(80.0, 60, OptionKind::Call, 0.0),
        ]);
        let surface = VolSurface::from_chain(&snap);
        let back = snap.years_to(valuation() + Duration::days(60));
        assert_relative_eq!(surface.volatility_at(80.0, back), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_back_expiration_hole_borrows_from_front_row() {
        let snap = snapshot(vec![
            quote(90.0, 30, OptionKind::Call, 0.22),
            quote(110.0, 30, OptionKind::Call, 0.28),
            quote(90.0, 60, OptionKind::Call, 0.35),
        ]);
        let surface = VolSurface::from_chain(&snap);
        let back = snap.years_to(valuation() + Duration::days(60));
        // 110 @ 60d is missing; the front row quotes 110 directly.
        assert_relative_eq!(surface.volatility_at(110.0, back), 0.28, epsilon = 1e-12);
        // The quoted 90 @ 60d cell is untouched.
        assert_relative_eq!(surface.volatility_at(90.0, back), 0.35, epsilon = 1e-12);
    }

    #[test]
    fn test_single_strike_degrades_to_default() {
        let snap = snapshot(vec![
            quote(100.0, 30, OptionKind::Call, 0.24),
            quote(100.0, 60, OptionKind::Put, 0.27),
        ]);
        let surface = VolSurface::from_chain(&snap);
        assert!(surface.low_confidence());
        assert_eq!(surface.volatility_at(100.0, 0.1), DEFAULT_VOL);
    }

    #[test]
    fn test_empty_chain_degrades_to_default() {
        let surface = VolSurface::from_chain(&snapshot(vec![]));
        assert!(surface.low_confidence());
        assert_eq!(surface.volatility_at(95.0, 0.5), DEFAULT_VOL);
    }

    #[test]
    fn test_non_positive_quotes_ignored_in_cell_mean() {
        let snap = snapshot(vec![
            quote(90.0, 30, OptionKind::Call, 0.20),
            quote(110.0, 30, OptionKind::Call, 0.30),
            quote(110.0, 30, OptionKind::Put, -1.0),
        ]);
        let surface = VolSurface::from_chain(&snap);
        let expiry = snap.years_to(valuation() + Duration::days(30));
        assert_relative_eq!(surface.volatility_at(110.0, expiry), 0.30, epsilon = 1e-12);
    }

    #[test]
    fn test_lookup_snaps_to_nearest_cell() {
        let snap = snapshot(vec![
            quote(90.0, 30, OptionKind::Call, 0.25),
            quote(110.0, 30, OptionKind::Call, 0.31),
        ]);
        let surface = VolSurface::from_chain(&snap);
        let expiry = snap.years_to(valuation() + Duration::days(30));
        // 104 is nearer 110 than 90.
        assert_relative_eq!(surface.volatility_at(104.0, expiry), 0.31, epsilon = 1e-12);
        // Expiry far beyond the grid still snaps to the only row.
        assert_relative_eq!(surface.volatility_at(90.0, 3.0), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_axes_sorted_and_distinct() {
        let snap = snapshot(vec![
            quote(110.0, 60, OptionKind::Call, 0.3),
            quote(90.0, 30, OptionKind::Call, 0.2),
            quote(110.0, 30, OptionKind::Put, 0.3),
        ]);
        let surface = VolSurface::from_chain(&snap);
        assert_eq!(surface.strikes(), &[90.0, 110.0]);
        assert_eq!(surface.expiries().len(), 2);
        assert!(surface.expiries()[0] < surface.expiries()[1]);
    }
}

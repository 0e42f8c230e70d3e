//! End-to-end market-making cycle: snapshot in, quotes, risk report and
//! hedge proposal out.

use chrono::{DateTime, Duration, TimeZone, Utc};
use quote_core::market_data::{ChainQuote, MarketSnapshot};
use quote_core::types::OptionKind;
use quote_maker::{delta_hedge, quote_grid, scan_vol_arbitrage, MakerConfig, MakerState};
use quote_pricing::OptionsPricer;
use quote_risk::{check_limits, risk_report, RiskLimits, VarConfig};
use quote_strategy::StrategyBuilder;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn valuation() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

fn chain() -> Vec<ChainQuote> {
    let expiration = valuation() + Duration::days(30);
    [
        (90.0, OptionKind::Call, 0.27),
        (90.0, OptionKind::Put, 0.27),
        (100.0, OptionKind::Call, 0.25),
        (100.0, OptionKind::Put, 0.32),
        (110.0, OptionKind::Call, 0.26),
        (110.0, OptionKind::Put, 0.26),
    ]
    .into_iter()
    .map(|(strike, kind, implied_vol)| ChainQuote {
        strike,
        expiration,
        kind,
        last: 2.0,
        bid: 1.9,
        ask: 2.1,
        implied_vol,
    })
    .collect()
}

#[test]
fn test_full_quoting_cycle() {
    init_tracing();

    let snapshot = MarketSnapshot::new(100.0, 0.02, valuation(), chain()).unwrap();
    let pricer = OptionsPricer::default();
    let config = MakerConfig::default();
    let mut state = MakerState::default();

    state.start_quoting().unwrap();

    // Quote a small grid around the spot.
    let expirations = [valuation() + Duration::days(30)];
    let quotes = quote_grid(
        &pricer,
        &snapshot,
        "STOCK",
        &expirations,
        (90.0, 110.0),
        10.0,
        &config,
    )
    .unwrap();
    assert_eq!(quotes.len(), 12);
    assert!(quotes.iter().all(|q| q.bid < q.ask && q.bid_size > 0));

    // Scan the same chain for vol dislocations; the 100 strike's call/put
    // disagreement shows up.
    let opportunities = scan_vol_arbitrage(&snapshot);
    assert!(!opportunities.is_empty());
    assert!(opportunities.iter().all(|o| o.confidence <= 0.9));

    // Hold a book of strategies and check its risk.
    let builder = StrategyBuilder::new(&pricer, &snapshot);
    let expiry = valuation() + Duration::days(45);
    let covered = builder
        .covered_call("STOCK", 105.0, expiry, 100.0, 0.25)
        .unwrap();
    let condor = builder
        .iron_condor("STOCK", 85.0, 95.0, 105.0, 115.0, expiry, 1.0, 0.25)
        .unwrap();
    let portfolio = vec![covered, condor];

    let report = risk_report(
        &portfolio,
        &snapshot,
        &pricer,
        &RiskLimits::default(),
        &VarConfig {
            scenarios: 500,
            ..VarConfig::default()
        },
    )
    .unwrap();
    assert!(report.var_estimate.is_finite());
    assert_eq!(
        report.violations,
        check_limits(&portfolio, &RiskLimits::default())
    );

    // The covered call leaves the book long delta; hedge if it drifted far
    // enough, then close the cycle either way.
    match delta_hedge(&report.aggregate_greeks, "STOCK", &config) {
        Some(hedge) => {
            assert!(hedge.quantity > 0.0);
            state.start_hedging().unwrap();
            state.finish_cycle().unwrap();
        }
        None => state.finish_cycle().unwrap(),
    }
    assert_eq!(state, MakerState::Idle);
}

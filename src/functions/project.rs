use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::structs::{
    InstrumentHolding, InstrumentPerformance, MarketSnapshot, PortfolioPerformance,
};

/* Turn reconciled percentages into rupiah figures. Pure and synchronous: everything was
materialized by the aggregator and the reconciler already.
*/
pub fn project_gains(
    holdings: &[InstrumentHolding],
    snapshot: &MarketSnapshot,
) -> PortfolioPerformance {
    let mut instruments = Vec::with_capacity(holdings.len());
    let mut total_invested: u64 = 0;
    let mut total_gain_loss = dec!(0);

    for holding in holdings {
        let combined = snapshot.combined(&holding.instrument);
        let gain_loss = Decimal::from(holding.amount) * combined / dec!(100);

        total_invested += holding.amount;
        total_gain_loss += gain_loss;

        instruments.push(InstrumentPerformance {
            instrument: holding.instrument.clone(),
            amount: holding.amount,
            base_change: snapshot
                .base_change
                .get(&holding.instrument)
                .copied()
                .unwrap_or(dec!(0)),
            fx_change: snapshot
                .fx_change
                .get(&holding.instrument)
                .copied()
                .unwrap_or(dec!(0)),
            combined_change: combined,
            gain_loss,
        });
    }

    let total_gain_loss_percent = if total_invested == 0 {
        dec!(0)
    } else {
        total_gain_loss / Decimal::from(total_invested) * dec!(100)
    };

    return PortfolioPerformance {
        instruments,
        total_invested,
        total_gain_loss,
        total_gain_loss_percent,
    };
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn holding(instrument: &str, amount: u64) -> InstrumentHolding {
        InstrumentHolding {
            instrument: instrument.to_string(),
            amount,
            first_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            purchase_rate: None,
        }
    }

    #[test]
    fn per_instrument_and_portfolio_gains() {
        let mut snapshot = MarketSnapshot::new(dec!(0));
        snapshot
            .combined_change
            .insert("Emas".to_string(), dec!(8));
        snapshot
            .combined_change
            .insert("Crypto".to_string(), dec!(-2));

        let holdings = vec![holding("Emas", 1_000_000), holding("Crypto", 500_000)];
        let report = project_gains(&holdings, &snapshot);

        assert_eq!(report.instruments[0].gain_loss, dec!(80000));
        assert_eq!(report.instruments[1].gain_loss, dec!(-10000));
        assert_eq!(report.total_invested, 1_500_000);
        assert_eq!(report.total_gain_loss, dec!(70000));
        // 70_000 / 1_500_000
        assert_eq!(
            report.total_gain_loss_percent.round_dp(2),
            dec!(4.67)
        );
    }

    #[test]
    fn empty_portfolio_is_all_zero() {
        let snapshot = MarketSnapshot::new(dec!(0));
        let report = project_gains(&[], &snapshot);
        assert_eq!(report.total_invested, 0);
        assert_eq!(report.total_gain_loss, dec!(0));
        assert_eq!(report.total_gain_loss_percent, dec!(0));
    }

    #[test]
    fn instrument_missing_from_snapshot_contributes_zero() {
        let snapshot = MarketSnapshot::new(dec!(0));
        let report = project_gains(&[holding("Emas", 1_000_000)], &snapshot);
        assert_eq!(report.instruments[0].gain_loss, dec!(0));
        assert_eq!(report.total_gain_loss_percent, dec!(0));
    }
}

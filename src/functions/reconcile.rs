use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::api::MarketData;
use crate::structs::{classify, Benchmark, InstrumentClass, InstrumentHolding, MarketSnapshot};

use super::change_since;

/* Scaling of the domestic-equity move for the instrument families that track it loosely */
const MUTUAL_FUND_FACTOR: Decimal = dec!(0.6);
const BOND_FACTOR: Decimal = dec!(0.25);
/* Flat percentage for time deposits, no market feed involved */
const TIME_DEPOSIT_CHANGE: Decimal = dec!(0.4);

/* Map every holding to its benchmark and attribute a percentage change to it since the
first purchase. Pure: all market inputs were fetched beforehand.

Base change: the historical-since-purchase change when the class's full series was
fetched; the single-day benchmark change otherwise (including when the series fetch
failed, the daily values are fetched unconditionally for exactly that reason).

FX: US-equity holdings that embed a purchase-time USD/IDR rate get their base compounded
with the rate move. Compounded, not added: a +10% asset move in a +5% currency is +15.5%.
*/
pub fn reconcile(holdings: &[InstrumentHolding], market: &MarketData) -> MarketSnapshot {
    let mut snapshot = MarketSnapshot::new(market.usd_idr_rate);

    for holding in holdings {
        let class = classify(&holding.instrument);
        let base = base_change(holding, class, market);

        let fx = if class == InstrumentClass::UsEquity {
            fx_change(holding.purchase_rate, market.usd_idr_rate)
        } else {
            dec!(0)
        };

        let combined = if fx.is_zero() {
            base
        } else {
            compound(base, fx)
        };

        snapshot
            .base_change
            .insert(holding.instrument.clone(), base);
        snapshot.fx_change.insert(holding.instrument.clone(), fx);
        snapshot
            .combined_change
            .insert(holding.instrument.clone(), combined);
    }

    return snapshot;
}

fn base_change(
    holding: &InstrumentHolding,
    class: InstrumentClass,
    market: &MarketData,
) -> Decimal {
    match class {
        InstrumentClass::TimeDeposit => TIME_DEPOSIT_CHANGE,
        InstrumentClass::Unclassified => dec!(0),
        InstrumentClass::MutualFund => market.daily(Benchmark::DomesticEquity) * MUTUAL_FUND_FACTOR,
        InstrumentClass::Bond => market.daily(Benchmark::DomesticEquity) * BOND_FACTOR,
        InstrumentClass::Crypto
        | InstrumentClass::UsEquity
        | InstrumentClass::DomesticEquity
        | InstrumentClass::Gold => {
            let benchmark = match class.benchmark() {
                Some(b) => b,
                None => return dec!(0),
            };
            if let Some(rows) = market.history.get(&benchmark) {
                return change_since(rows, holding.first_date);
            }
            return market.daily(benchmark);
        }
    }
}

fn fx_change(purchase_rate: Option<Decimal>, current_rate: Decimal) -> Decimal {
    match purchase_rate {
        Some(purchase) if purchase > dec!(0) && current_rate > dec!(0) => {
            return (current_rate - purchase) / purchase * dec!(100);
        }
        _ => return dec!(0),
    }
}

/* ((1 + base) * (1 + fx) - 1), in percent space */
pub fn compound(base: Decimal, fx: Decimal) -> Decimal {
    return ((dec!(1) + base / dec!(100)) * (dec!(1) + fx / dec!(100)) - dec!(1)) * dec!(100);
}

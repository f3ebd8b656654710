use hashbrown::HashMap;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/* Per-instrument percentage changes produced by one refresh cycle, plus the USD/IDR spot
rate used. Replaced wholesale each refresh: readers always see either the previous complete
snapshot or the new one, never a mix.
*/
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub base_change: HashMap<String, Decimal>,
    pub fx_change: HashMap<String, Decimal>,
    pub combined_change: HashMap<String, Decimal>,
    pub usd_idr_rate: Decimal,
}

impl MarketSnapshot {
    pub fn new(usd_idr_rate: Decimal) -> Self {
        return MarketSnapshot {
            base_change: HashMap::new(),
            fx_change: HashMap::new(),
            combined_change: HashMap::new(),
            usd_idr_rate,
        };
    }

    pub fn combined(&self, instrument: &str) -> Decimal {
        return self
            .combined_change
            .get(instrument)
            .copied()
            .unwrap_or(dec!(0));
    }
}

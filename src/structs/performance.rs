use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/* The table handed to the presentation layer: one row per instrument plus the portfolio
totals. Gains are in the smallest IDR unit but kept as Decimal since a percentage of an
integer amount is fractional.
*/
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct InstrumentPerformance {
    pub instrument: String,
    pub amount: u64,
    pub base_change: Decimal,
    pub fx_change: Decimal,
    pub combined_change: Decimal,
    pub gain_loss: Decimal,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPerformance {
    pub instruments: Vec<InstrumentPerformance>,
    pub total_invested: u64,
    pub total_gain_loss: Decimal,
    pub total_gain_loss_percent: Decimal,
}

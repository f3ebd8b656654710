use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/* An InstrumentHolding is the aggregate of every "Investasi" transaction sharing the same
extracted instrument name. It is derived data: recomputed from the ledger on every use,
never persisted on its own.

purchase_rate is the USD/IDR rate embedded in the description at purchase time
("USDIDR: 15500"). We keep the first one we see while aggregating so the reconciler stays
a pure function of holdings + market data.
*/
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct InstrumentHolding {
    pub instrument: String,
    pub amount: u64,
    pub first_date: NaiveDate,
    pub purchase_rate: Option<Decimal>,
}

/* Bucket for investment transactions whose description names no instrument */
pub const OTHER_INSTRUMENT: &str = "Lainnya";

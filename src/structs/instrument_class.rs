use serde::{Deserialize, Serialize};

use super::Benchmark;

/* Classification of an instrument name into the benchmark family used to estimate its
performance. Matching is case-insensitive substring search, evaluated strictly in rule
order: the first rule that matches wins. "Saham US" must therefore hit the US rule before
the generic "saham" rule ever runs.
*/
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum InstrumentClass {
    UsEquity,
    Crypto,
    Gold,
    DomesticEquity,
    MutualFund,  // domestic equities scaled by 0.6
    Bond,        // domestic equities scaled by 0.25
    TimeDeposit, // flat 0.4%, no market feed
    Unclassified,
}

/* Ordered (keywords, class) table. Order is part of the contract, do not sort. */
const CLASS_RULES: &[(&[&str], InstrumentClass)] = &[
    (
        &["saham us", "us stock", "nasdaq", "s&p", "sp500", "usa"],
        InstrumentClass::UsEquity,
    ),
    (&["crypto"], InstrumentClass::Crypto),
    (&["emas"], InstrumentClass::Gold),
    (&["saham"], InstrumentClass::DomesticEquity),
    (&["reksa"], InstrumentClass::MutualFund),
    (&["obligasi"], InstrumentClass::Bond),
    (&["deposito"], InstrumentClass::TimeDeposit),
];

pub fn classify(instrument: &str) -> InstrumentClass {
    let name = instrument.to_lowercase();
    for (keywords, class) in CLASS_RULES {
        if keywords.iter().any(|k| name.contains(k)) {
            return *class;
        }
    }
    return InstrumentClass::Unclassified;
}

impl InstrumentClass {
    /* The feed whose price move drives this class, if any */
    pub fn benchmark(&self) -> Option<Benchmark> {
        match self {
            InstrumentClass::UsEquity => Some(Benchmark::UsEquity),
            InstrumentClass::Crypto => Some(Benchmark::Crypto),
            InstrumentClass::Gold => Some(Benchmark::Gold),
            InstrumentClass::DomesticEquity
            | InstrumentClass::MutualFund
            | InstrumentClass::Bond => Some(Benchmark::DomesticEquity),
            InstrumentClass::TimeDeposit | InstrumentClass::Unclassified => None,
        }
    }

    /* Only these classes are priced against a full historical series; the scaled proxies
    and deposits always work from the single-day benchmark change. */
    pub fn uses_history(&self) -> bool {
        matches!(
            self,
            InstrumentClass::UsEquity | InstrumentClass::DomesticEquity | InstrumentClass::Gold
        )
    }
}

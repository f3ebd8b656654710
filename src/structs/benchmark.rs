use serde::{Deserialize, Serialize};

/* A Benchmark is one of the four external market feeds we track. Each one estimates the
performance of a family of instruments; the mapping from instrument to benchmark lives in
instrument_class.rs.

Symbols are Stooq daily-quote symbols.
*/
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Benchmark {
    Crypto,
    Gold,
    DomesticEquity,
    UsEquity,
}

impl Benchmark {
    pub const ALL: [Benchmark; 4] = [
        Benchmark::Crypto,
        Benchmark::Gold,
        Benchmark::DomesticEquity,
        Benchmark::UsEquity,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Benchmark::Crypto => "btcusd",
            Benchmark::Gold => "xauusd",
            Benchmark::DomesticEquity => "^jkse",
            Benchmark::UsEquity => "spy.us", // S&P 500 ETF as the US index proxy
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Benchmark::Crypto => "BTC/USD",
            Benchmark::Gold => "XAU/USD",
            Benchmark::DomesticEquity => "IHSG",
            Benchmark::UsEquity => "S&P 500",
        }
    }
}

use hashbrown::HashMap;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::structs::{InstrumentHolding, Transaction, OTHER_INSTRUMENT};

const INSTRUMENT_PREFIX: &str = "Instrumen: ";
const NAME_SEPARATOR: &str = " - ";
const PURCHASE_RATE_MARKER: &str = "USDIDR:";

/* Turn the flat ledger into per-instrument holdings. Pure: same transactions in, same
holdings out, no matter how often it runs.

Instrument name extraction, in priority order:
  1. the "Instrumen: " prefix is stripped and the whole remainder is the name,
  2. otherwise the text before the first " - " separator is the name,
  3. otherwise the transaction lands in "Lainnya".
Rule 1 wins outright: a description like "Instrumen: Saham US - USDIDR: 15500" keeps the
separator inside the name, rule 2 is never consulted.
*/
pub fn aggregate_holdings(transactions: &[Transaction]) -> Vec<InstrumentHolding> {
    let mut by_instrument: HashMap<String, InstrumentHolding> = HashMap::new();

    for tx in transactions.iter().filter(|tx| tx.is_investment()) {
        let instrument = extract_instrument(&tx.description);
        let holding = by_instrument
            .entry(instrument.clone())
            .or_insert_with(|| InstrumentHolding {
                instrument,
                amount: 0,
                first_date: tx.date,
                purchase_rate: None,
            });
        holding.amount += tx.amount;
        if tx.date < holding.first_date {
            holding.first_date = tx.date;
        }
        if holding.purchase_rate.is_none() {
            holding.purchase_rate = extract_purchase_rate(&tx.description);
        }
    }

    let mut holdings: Vec<InstrumentHolding> = by_instrument.into_values().collect();
    // Largest allocation first, then name: deterministic output for the same ledger
    holdings.sort_by(|a, b| {
        b.amount
            .cmp(&a.amount)
            .then_with(|| a.instrument.cmp(&b.instrument))
    });
    return holdings;
}

pub fn extract_instrument(description: &str) -> String {
    if let Some(rest) = description.strip_prefix(INSTRUMENT_PREFIX) {
        let name = rest.trim();
        if name.is_empty() {
            return OTHER_INSTRUMENT.to_string();
        }
        return name.to_string();
    }
    if let Some((head, _)) = description.split_once(NAME_SEPARATOR) {
        let name = head.trim();
        if name.is_empty() {
            return OTHER_INSTRUMENT.to_string();
        }
        return name.to_string();
    }
    return OTHER_INSTRUMENT.to_string();
}

/* Purchase-time USD/IDR rate embedded as "USDIDR: 15500" anywhere in the description */
pub fn extract_purchase_rate(description: &str) -> Option<Decimal> {
    let start = description.find(PURCHASE_RATE_MARKER)? + PURCHASE_RATE_MARKER.len();
    let rest = description[start..].trim_start();
    let digits: String = rest
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let rate = digits.parse::<Decimal>().ok()?;
    if rate <= dec!(0) {
        return None;
    }
    return Some(rate);
}

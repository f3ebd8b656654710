use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::api::QuoteRow;

/* Percentage math over a parsed quote series. Every degenerate input (short series,
missing base row, zero divisor) resolves to 0 instead of an error: a benchmark that cannot
be priced contributes nothing.
*/

/* (close - open) / open of the most recent row */
pub fn single_day_change(rows: &[QuoteRow]) -> Decimal {
    if rows.len() < 2 {
        return dec!(0);
    }
    let last = &rows[rows.len() - 1];
    if last.open.is_zero() {
        return dec!(0);
    }
    return (last.close - last.open) / last.open * dec!(100);
}

/* Change between the last close at or before `since` and the latest close. The series is
ascending by date, so the base row is the last one not after the target. */
pub fn change_since(rows: &[QuoteRow], since: NaiveDate) -> Decimal {
    let base = match rows.iter().rev().find(|row| row.date <= since) {
        Some(row) => row.close,
        None => return dec!(0),
    };
    let current = match rows.last() {
        Some(row) => row.close,
        None => return dec!(0),
    };
    if base.is_zero() {
        return dec!(0);
    }
    return (current - base) / base * dec!(100);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: (i32, u32, u32), open: Decimal, close: Decimal) -> QuoteRow {
        QuoteRow {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            open,
            close,
        }
    }

    #[test]
    fn change_since_uses_last_row_at_or_before_target() {
        let rows = vec![
            row((2024, 1, 1), dec!(99), dec!(100)),
            row((2024, 1, 5), dec!(100), dec!(110)),
            row((2024, 1, 10), dec!(110), dec!(90)),
        ];
        // base = 2024-01-01 close 100, current = 2024-01-10 close 90
        let since = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(change_since(&rows, since), dec!(-10));
    }

    #[test]
    fn change_since_without_base_row_is_zero() {
        let rows = vec![row((2024, 2, 1), dec!(100), dec!(110))];
        let since = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(change_since(&rows, since), dec!(0));
    }

    #[test]
    fn change_since_with_zero_base_is_zero() {
        let rows = vec![
            row((2024, 1, 1), dec!(0), dec!(0)),
            row((2024, 1, 2), dec!(0), dec!(50)),
        ];
        let since = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(change_since(&rows, since), dec!(0));
    }

    #[test]
    fn single_day_change_of_latest_row() {
        let rows = vec![
            row((2024, 1, 1), dec!(100), dec!(101)),
            row((2024, 1, 2), dec!(200), dec!(210)),
        ];
        assert_eq!(single_day_change(&rows), dec!(5));
    }

    #[test]
    fn short_or_zero_open_series_is_zero() {
        assert_eq!(single_day_change(&[]), dec!(0));
        assert_eq!(
            single_day_change(&[row((2024, 1, 1), dec!(100), dec!(110))]),
            dec!(0)
        );
        assert_eq!(
            single_day_change(&[
                row((2024, 1, 1), dec!(100), dec!(110)),
                row((2024, 1, 2), dec!(0), dec!(110)),
            ]),
            dec!(0)
        );
    }
}

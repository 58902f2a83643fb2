use crate::error::LoadError;
use chrono::{NaiveDate, NaiveDateTime};
use core_types::Transaction;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%m/%d/%Y"];

/// One row exactly as it appears in the file, matched by header name.
///
/// Both English headers and the Russian headers of the original export are
/// accepted. Unknown columns are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRecord {
    #[serde(alias = "Date", alias = "Дата")]
    date: String,
    #[serde(alias = "Category", alias = "Категория")]
    category: String,
    #[serde(alias = "Product", alias = "Товар")]
    product: String,
    #[serde(alias = "Amount", alias = "Сумма (в рублях)")]
    amount: String,
    #[serde(alias = "Quantity", alias = "Количество")]
    quantity: String,
}

impl RawRecord {
    /// Type-checks the raw fields. `line` is the 1-based line in the file.
    pub(crate) fn into_transaction(self, line: u64) -> Result<Transaction, LoadError> {
        let date = parse_date(&self.date).ok_or_else(|| LoadError::InvalidDate {
            line,
            value: self.date.clone(),
        })?;

        let amount = parse_amount(&self.amount).ok_or_else(|| LoadError::InvalidAmount {
            line,
            value: self.amount.clone(),
        })?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(LoadError::NegativeAmount {
                line,
                value: self.amount,
            });
        }

        let quantity = self
            .quantity
            .parse::<u32>()
            .map_err(|_| LoadError::InvalidQuantity {
                line,
                value: self.quantity.clone(),
            })?;

        Ok(Transaction {
            date,
            category: self.category,
            product: self.product,
            amount,
            quantity,
        })
    }
}

fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        for raw in ["2024-01-05", "05.01.2024", "01/05/2024", "2024-01-05 00:00:00"] {
            assert_eq!(parse_date(raw), Some(expected), "format {raw}");
        }
        assert_eq!(
            parse_date("2024-01-05T13:30:00").map(|d| d.date()),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
        assert_eq!(parse_date("2024-13-40"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn parses_plain_and_scientific_amounts() {
        assert_eq!(parse_amount("150.25"), Some(Decimal::new(15025, 2)));
        assert_eq!(parse_amount("1e3"), Some(Decimal::new(1000, 0)));
        assert_eq!(parse_amount("abc"), None);
    }
}

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AnalyticsError {
    #[error("Cost ratio must lie within [0, 1], got {0}")]
    InvalidCostRatio(Decimal),
}

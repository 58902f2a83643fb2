use core_types::{Table, Transaction};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Revenue, estimated cost and profit over a set of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpi {
    pub revenue: Decimal,
    pub cost: Decimal,
    pub profit: Decimal,
}

/// Estimated cost of one row.
///
/// The unit cost is `cost_ratio` times the unit price `amount / quantity`, so
/// the row cost reduces to `cost_ratio * amount`. A zero-quantity row has an
/// indeterminate unit price and contributes zero cost.
pub fn estimated_cost(row: &Transaction, cost_ratio: Decimal) -> Decimal {
    if row.quantity == 0 {
        return Decimal::ZERO;
    }
    cost_ratio * row.amount
}

/// Computes the KPI triple. An empty table gives all zeros.
pub fn kpi(table: &Table, cost_ratio: Decimal) -> Kpi {
    let (revenue, cost) = table.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(revenue, cost), row| (revenue + row.amount, cost + estimated_cost(row, cost_ratio)),
    );
    Kpi {
        revenue,
        cost,
        profit: revenue - cost,
    }
}

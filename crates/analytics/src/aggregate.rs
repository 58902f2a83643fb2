use chrono::NaiveDate;
use core_types::{Period, Table};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Revenue summed over one calendar bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub start: NaiveDate,
    pub amount: Decimal,
}

/// Resamples `table` into contiguous buckets of the given period.
///
/// The series is dense: it covers every bucket from the one holding the
/// earliest row to the one holding the latest, and buckets without rows carry
/// a zero amount. Buckets are ascending by start date. An empty table yields
/// an empty series.
pub fn bucket_by_period(table: &Table, period: Period) -> Vec<Bucket> {
    let mut sums: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for row in table {
        *sums.entry(period.bucket_start(row.day())).or_default() += row.amount;
    }

    let (Some(&first), Some(&last)) = (sums.keys().next(), sums.keys().next_back()) else {
        return Vec::new();
    };

    let mut buckets = Vec::new();
    let mut cursor = Some(first);
    while let Some(start) = cursor.filter(|start| *start <= last) {
        buckets.push(Bucket {
            start,
            amount: sums.get(&start).copied().unwrap_or_default(),
        });
        cursor = period.next_bucket(start);
    }
    buckets
}

/// Revenue per product, keyed in lexical product order.
pub fn sum_by_product(table: &Table) -> Vec<(String, Decimal)> {
    let mut sums: BTreeMap<&str, Decimal> = BTreeMap::new();
    for row in table {
        *sums.entry(row.product.as_str()).or_default() += row.amount;
    }
    sums.into_iter()
        .map(|(product, amount)| (product.to_string(), amount))
        .collect()
}

/// Revenue per category, in the order categories first appear in `table`.
pub fn sum_by_category(table: &Table) -> Vec<(String, Decimal)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut sums: Vec<(String, Decimal)> = Vec::new();
    for row in table {
        match index.get(row.category.as_str()) {
            Some(&i) => sums[i].1 += row.amount,
            None => {
                index.insert(row.category.as_str(), sums.len());
                sums.push((row.category.clone(), row.amount));
            }
        }
    }
    sums
}

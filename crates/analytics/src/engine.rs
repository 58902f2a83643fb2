use crate::aggregate::{bucket_by_period, sum_by_category, sum_by_product};
use crate::error::AnalyticsError;
use crate::filter::filter;
use crate::metrics::{Kpi, kpi};
use crate::views::*;
use core_types::{Period, Table};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashSet;

/// A stateless calculator that turns the base table and a filter selection
/// into the five dashboard view models.
///
/// Nothing is cached between calls: every selection change recomputes the
/// whole pipeline from the immutable base table, so identical inputs always
/// produce identical views.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEngine {
    cost_ratio: Decimal,
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self {
            cost_ratio: dec!(0.7),
        }
    }
}

impl AnalyticsEngine {
    /// Creates an engine that estimates cost as `cost_ratio` of revenue.
    pub fn new(cost_ratio: Decimal) -> Result<Self, AnalyticsError> {
        if cost_ratio < Decimal::ZERO || cost_ratio > Decimal::ONE {
            return Err(AnalyticsError::InvalidCostRatio(cost_ratio));
        }
        Ok(Self { cost_ratio })
    }

    pub fn cost_ratio(&self) -> Decimal {
        self.cost_ratio
    }

    /// The main entry point: filter, aggregate, derive, then shape the views.
    ///
    /// # Arguments
    ///
    /// * `base` - The full transaction table loaded at startup.
    /// * `period` - Resampling granularity for the time series.
    /// * `categories` - Selected categories. Empty means nothing is shown.
    pub fn compute_views(
        &self,
        base: &Table,
        period: Period,
        categories: &HashSet<String>,
    ) -> DashboardViews {
        let filtered = filter(base, categories);
        tracing::debug!(
            %period,
            selected = categories.len(),
            rows = filtered.len(),
            "Recomputing dashboard views."
        );

        DashboardViews {
            time_series: time_series_view(&filtered, period),
            category_share: category_share_view(&filtered),
            product_distribution: product_distribution_view(&filtered),
            kpi_table: kpi_table_view(&kpi(&filtered, self.cost_ratio)),
            scatter: scatter_view(&filtered),
        }
    }
}

fn time_series_view(table: &Table, period: Period) -> TimeSeriesView {
    TimeSeriesView {
        title: TIME_SERIES_TITLE.to_string(),
        period,
        points: bucket_by_period(table, period)
            .into_iter()
            .map(|b| TimePoint {
                bucket_start: b.start,
                amount: b.amount,
            })
            .collect(),
    }
}

fn category_share_view(table: &Table) -> CategoryShareView {
    let sums = sum_by_category(table);
    let total: Decimal = sums.iter().map(|(_, amount)| *amount).sum();
    CategoryShareView {
        title: CATEGORY_SHARE_TITLE.to_string(),
        slices: sums
            .into_iter()
            .map(|(category, amount)| CategorySlice {
                share: if total.is_zero() {
                    Decimal::ZERO
                } else {
                    amount / total
                },
                category,
                amount,
            })
            .collect(),
    }
}

fn product_distribution_view(table: &Table) -> ProductDistributionView {
    ProductDistributionView {
        title: PRODUCT_DISTRIBUTION_TITLE.to_string(),
        bars: sum_by_product(table)
            .into_iter()
            .map(|(product, amount)| ProductBar { product, amount })
            .collect(),
    }
}

fn kpi_table_view(kpi: &Kpi) -> KpiTableView {
    let row = |label: &str, value: Decimal| KpiRow {
        label: label.to_string(),
        value,
    };
    KpiTableView {
        title: KPI_TABLE_TITLE.to_string(),
        headers: ["Key indicator".to_string(), "Value".to_string()],
        rows: vec![
            row("Total revenue", kpi.revenue),
            row("Total costs", kpi.cost),
            row("Profit", kpi.profit),
        ],
    }
}

fn scatter_view(table: &Table) -> ScatterView {
    ScatterView {
        title: SCATTER_TITLE.to_string(),
        points: table
            .iter()
            .map(|row| ScatterPoint {
                quantity: row.quantity,
                amount: row.amount,
            })
            .collect(),
    }
}

use chrono::NaiveDate;
use core_types::Period;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const TIME_SERIES_TITLE: &str = "Revenue dynamics";
pub const CATEGORY_SHARE_TITLE: &str = "Revenue structure by category";
pub const PRODUCT_DISTRIBUTION_TITLE: &str = "Profit distribution by product";
pub const KPI_TABLE_TITLE: &str = "Key indicators";
pub const SCATTER_TITLE: &str = "Correlation between quantity and revenue";

/// The five view models rendered by the dashboard, all derived from the same
/// filtered table and independent of each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardViews {
    pub time_series: TimeSeriesView,
    pub category_share: CategoryShareView,
    pub product_distribution: ProductDistributionView,
    pub kpi_table: KpiTableView,
    pub scatter: ScatterView,
}

/// Line chart of revenue per time bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesView {
    pub title: String,
    pub period: Period,
    pub points: Vec<TimePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub bucket_start: NaiveDate,
    pub amount: Decimal,
}

/// Pie chart of revenue per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShareView {
    pub title: String,
    pub slices: Vec<CategorySlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub category: String,
    pub amount: Decimal,
    /// Fraction of the filtered revenue, 0 when that revenue is 0.
    pub share: Decimal,
}

/// Histogram of revenue per product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDistributionView {
    pub title: String,
    pub bars: Vec<ProductBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductBar {
    pub product: String,
    pub amount: Decimal,
}

/// The three-row KPI table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiTableView {
    pub title: String,
    pub headers: [String; 2],
    pub rows: Vec<KpiRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiRow {
    pub label: String,
    pub value: Decimal,
}

/// Point cloud of (quantity, amount), one point per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterView {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub quantity: u32,
    pub amount: Decimal,
}

impl DashboardViews {
    /// True when every view represents "no data".
    pub fn is_empty(&self) -> bool {
        self.time_series.points.is_empty()
            && self.category_share.slices.is_empty()
            && self.product_distribution.bars.is_empty()
            && self.scatter.points.is_empty()
            && self.kpi_table.rows.iter().all(|r| r.value.is_zero())
    }
}

use core_types::{Period, Table};
use serde::{Deserialize, Serialize};

pub const DASHBOARD_TITLE: &str = "Sales analysis of goods and services";
pub const DASHBOARD_DESCRIPTION: &str =
    "Interactive dashboard for analysing revenue and the structure of sales";

/// Everything the page needs to build its two selectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOptions {
    pub title: String,
    pub description: String,
    pub periods: Vec<PeriodOption>,
    pub categories: Vec<String>,
    pub default_period: Period,
    pub default_categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodOption {
    pub label: String,
    pub value: Period,
}

impl DashboardOptions {
    /// Builds the selector options from the base table. By default every
    /// category is selected and the series is resampled by month.
    pub fn from_table(table: &Table) -> Self {
        let categories = table.categories();
        Self {
            title: DASHBOARD_TITLE.to_string(),
            description: DASHBOARD_DESCRIPTION.to_string(),
            periods: Period::ALL
                .iter()
                .map(|p| PeriodOption {
                    label: p.label().to_string(),
                    value: *p,
                })
                .collect(),
            default_categories: categories.clone(),
            categories,
            default_period: Period::default(),
        }
    }
}

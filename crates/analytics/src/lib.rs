//! # Sales Analytics
//!
//! The filter / aggregate / derive pipeline behind the sales dashboard.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** no I/O and no knowledge of HTTP. It depends only on
//!   `core-types`.
//! - **Stateless calculation:** `AnalyticsEngine::compute_views` takes the
//!   immutable base table plus a (period, categories) selection and returns
//!   five independent view models. Nothing is memoized.
//!
//! ## Public API
//!
//! - `filter`, `bucket_by_period`, `sum_by_product`, `sum_by_category`, `kpi`:
//!   the individual stages.
//! - `AnalyticsEngine`: runs the stages and shapes `DashboardViews`.
//! - `DashboardOptions`: selector options derived from the base table.
//! - `AnalyticsError`: invalid engine parameters.

// Declare the modules that constitute this crate.
pub mod aggregate;
pub mod engine;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod options;
pub mod views;

// Re-export the key components to create a clean, public-facing API.
pub use aggregate::{Bucket, bucket_by_period, sum_by_category, sum_by_product};
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use filter::filter;
pub use metrics::{Kpi, estimated_cost, kpi};
pub use options::{DashboardOptions, PeriodOption};
pub use views::DashboardViews;

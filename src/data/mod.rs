/// Data layer: core types, loading, filtering, aggregation and export.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset (load once, read-only)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterCriteria → FilteredView (row indices)
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ aggregate   │  metrics, correlations, rankings, regional stats
///   └────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ dashboard   │  one recompute pass → DashboardViews
///   └────────────┘
/// ```

pub mod aggregate;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;

pub use error::DataError;

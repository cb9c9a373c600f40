/// Data layer: catalogs, row model, filtering and the CSV pipeline.
///
/// Architecture:
/// ```text
///  dataForQuestionN.csv          catalogs (code → label)
///        │                              │
///        ▼                              ▼
///   ┌──────────┐   FilterCriteria  ┌──────────┐
///   │ pipeline │ ◄──────────────── │ question │
///   └──────────┘                   └──────────┘
///        │  filter::matches per row
///        ▼
///  dataForPlotting.csv  ──►  loader  ──►  VacancySeries  ──►  chart
/// ```

pub mod catalog;
pub mod filter;
pub mod loader;
pub mod model;
pub mod pipeline;

/// Data layer: core types, loading, and classification.
///
/// Architecture:
/// ```text
///   CSV bytes
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse CSV → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  column names, rows of CellValue
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ classify │  flag rule on one column → Vec<bool>
///   └──────────┘
/// ```

pub mod classify;
pub mod loader;
pub mod model;

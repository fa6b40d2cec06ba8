/// Data layer: core types and text extraction.
///
/// Architecture:
/// ```text
///  COSPIN spring output (.txt)
///        │
///        ▼
///   ┌──────────┐
///   │ extract   │  regex scan → depth table → curve records
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ SpringSet │  Vec<SoilSpring>, one record per curve group
///   └──────────┘
/// ```
pub mod extract;
pub mod model;

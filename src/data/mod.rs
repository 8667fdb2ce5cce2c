/// Data layer: core types, remote loading, filtering, and repeat detection.
///
/// Architecture:
/// ```text
///  prize endpoint (JSON)
///        │
///        ▼
///   ┌──────────┐
///   │  fetch    │  GET + parse → Vec<Prize>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  model    │  Prize, Laureate, Selection
///   └──────────┘
///        │
///        ├──────────────────┐
///        ▼                  ▼
///   ┌──────────┐      ┌──────────┐
///   │  filter   │      │  detect   │
///   │ selectors │      │ repeats   │
///   └──────────┘      └──────────┘
/// ```

pub mod detect;
pub mod fetch;
pub mod filter;
pub mod model;

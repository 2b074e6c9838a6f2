/// Widget state and the pure rules behind each page.
///
/// Architecture:
/// ```text
///   user input (clicks, text, toggles)
///        │
///        ▼
///   ┌───────────────────────────────────────────────┐
///   │ hundreds · number_line · points · words       │  page state + resolvers
///   └───────────────────────────────────────────────┘
///        │                      │
///        ▼                      ▼
///   ┌──────────┐          ┌──────────┐
///   │  scale   │          │  chart   │  axis mapping, pie angles
///   └──────────┘          └──────────┘
///        │
///        ▼
///   ┌──────────┐   ┌────────────┐   ┌──────────┐
///   │  raster  │──▶│ whiteboard │──▶│  loader  │  snapshots, PNG / CSV / JSON
///   └──────────┘   └────────────┘   └──────────┘
/// ```

pub mod catalog;
pub mod chart;
pub mod hundreds;
pub mod loader;
pub mod number_line;
pub mod points;
pub mod raster;
pub mod scale;
pub mod whiteboard;
pub mod words;

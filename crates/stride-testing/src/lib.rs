//! # Stride Testing
//!
//! Mock implementations that return predictable responses, allowing for
//! reliable and controlled step-engine testing scenarios.

mod mock_tools;
mod mock_unit;

pub use mock_tools::MockTool;
pub use mock_unit::MockDecisionUnit;

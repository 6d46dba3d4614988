//! # Stride Tools
//!
//! Capability discovery for the step engine.
//!
//! Tools register through an explicit catalog of constructors handed to
//! [`ToolRegistry::discover`] at process start; there is no runtime
//! reflection or module scanning. Lookups are by name, and [`ToolRegistry::resolve`]
//! is deliberately lenient: unknown names are dropped silently, and callers
//! needing strict validation compare the returned count with the requested
//! count.

mod greet;
mod registry;

pub use greet::GreetTool;
pub use registry::{ToolConstructor, ToolRegistry};

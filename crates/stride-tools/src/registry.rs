//! Startup-time tool registry.

use std::collections::HashMap;
use std::sync::Arc;

use stride_core::tool::{Tool, ToolName};

use crate::greet::GreetTool;

/// A constructor producing one tool instance for the catalog.
pub type ToolConstructor = fn() -> Arc<dyn Tool>;

/// Registry of callable tools, indexed by name.
///
/// Construction is idempotent: discovering the same catalog twice yields
/// registries with identical name sets, even though instance identity may
/// differ. An empty catalog yields an empty registry, not an error.
pub struct ToolRegistry {
    tools: HashMap<ToolName, Arc<dyn Tool>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ToolRegistry {
    /// Build a registry from an explicit catalog of constructors.
    ///
    /// Each constructor is invoked once; a tool whose declared name fails
    /// validation is skipped with a warning. Later constructors shadow
    /// earlier ones under the same name.
    pub fn discover(catalog: &[ToolConstructor]) -> Self {
        let mut tools: HashMap<ToolName, Arc<dyn Tool>> = HashMap::new();
        for constructor in catalog {
            let tool = constructor();
            match ToolName::new(tool.name()) {
                Ok(name) => {
                    tools.insert(name, tool);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "skipping tool with invalid name");
                }
            }
        }
        tracing::debug!(count = tools.len(), "tools initialized");
        Self { tools }
    }

    /// The catalog of tools shipped with the engine.
    pub fn builtin_catalog() -> &'static [ToolConstructor] {
        &[|| Arc::new(GreetTool)]
    }

    /// Build a registry over the built-in catalog.
    pub fn builtin() -> Self {
        Self::discover(Self::builtin_catalog())
    }

    /// Resolve a requested subset of names to concrete tool handles.
    ///
    /// Unknown names are dropped silently; the result preserves the request
    /// order of the names that were found. Callers that need strict
    /// validation must compare the returned count against the requested
    /// count themselves.
    pub fn resolve(&self, names: &[&str]) -> Vec<Arc<dyn Tool>> {
        names
            .iter()
            .filter_map(|name| self.tools.get(*name).cloned())
            .collect()
    }

    /// Look up one tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// All registered tool names.
    pub fn names(&self) -> Vec<String> {
        self.tools.keys().map(|name| name.to_string()).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

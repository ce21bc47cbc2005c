//! Bindings visible to an included template.

use serde_json::{Map, Value};

/// Caller-supplied render arguments, in the order the caller gave them.
pub type TemplateArgs = Map<String, Value>;

/// Named bindings an included template can refer to.
///
/// Each argument key becomes one binding. Order follows the arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateContext {
    bindings: Map<String, Value>,
}

impl TemplateContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expose every argument as a binding.
    pub fn from_args(args: TemplateArgs) -> Self {
        Self { bindings: args }
    }

    /// Add or replace a binding.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.bindings.insert(name.into(), value.into());
    }

    /// Look up a binding.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Whether a binding exists.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Binding names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether there are no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// A binding as text: strings verbatim, `null` as empty, anything else
    /// as compact JSON.
    pub fn display(&self, name: &str) -> Option<String> {
        self.get(name).map(|value| match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        })
    }
}

//! Rendering of located templates.
//!
//! Arguments passed to a render call become named bindings in a
//! [`TemplateContext`]; an [`Includer`] turns a template file plus that
//! context into output.

pub mod context;
pub mod includer;
pub mod interpolation;

pub use context::{TemplateArgs, TemplateContext};
pub use includer::{FileIncluder, Includer};
pub use interpolation::{parse_template, render_template, Segment};

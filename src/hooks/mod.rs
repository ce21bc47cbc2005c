//! Extension points around template resolution and rendering.
//!
//! The loader never calls into global state to let extensions intervene.
//! Instead it is handed a [`Hooks`] capability and calls it at fixed points:
//!
//! | Hook                              | Kind   | Point                                   |
//! |-----------------------------------|--------|-----------------------------------------|
//! | `wenprise_template_path_tokens`   | filter | path-token discovery                    |
//! | `wenprise_locate_template`        | filter | final located path                      |
//! | `wenprise_get_template`           | filter | path about to be rendered               |
//! | `wenprise_get_template_part`      | filter | template-part path about to be rendered |
//! | `wenprise_before_template_part`   | action | just before a template is included      |
//! | `wenprise_after_template_part`    | action | just after a template is included       |
//!
//! Every method has a pass-through default, so [`NoHooks`] is an empty impl
//! and tests can override only what they observe. [`HookRegistry`] is the
//! host-side implementation holding ordered callback chains.

pub mod registry;

use serde::Serialize;
use std::path::PathBuf;

use crate::render::TemplateArgs;
use crate::tokens::PathTokens;

pub use registry::HookRegistry;

pub const PATH_TOKENS: &str = "wenprise_template_path_tokens";
pub const LOCATE_TEMPLATE: &str = "wenprise_locate_template";
pub const GET_TEMPLATE: &str = "wenprise_get_template";
pub const GET_TEMPLATE_PART: &str = "wenprise_get_template_part";
pub const BEFORE_TEMPLATE_PART: &str = "wenprise_before_template_part";
pub const AFTER_TEMPLATE_PART: &str = "wenprise_after_template_part";

/// What a `get_template` call is rendering, as seen by the path filter.
#[derive(Debug, Clone, Copy)]
pub struct TemplateQuery<'a> {
    /// Logical template name.
    pub name: &'a str,
    /// Caller-supplied arguments.
    pub args: &'a TemplateArgs,
    /// Theme search subpath.
    pub template_path: &'a str,
    /// Plugin default template directory.
    pub default_path: &'a str,
}

/// Payload of the before/after render notifications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPayload {
    pub template_name: String,
    pub template_path: String,
    pub located: PathBuf,
    /// Arguments as the caller supplied them.
    pub args: TemplateArgs,
}

/// Extension capability consulted by the loader.
pub trait Hooks: Send + Sync {
    /// Adjust the tokens used to encode and decode cached paths.
    fn path_tokens(&self, tokens: PathTokens) -> PathTokens {
        tokens
    }

    /// Override the path chosen by template location.
    fn located_template(&self, located: String, _name: &str, _template_path: &str) -> String {
        located
    }

    /// Override the file `get_template` is about to render.
    fn template_file(&self, path: String, _query: &TemplateQuery<'_>) -> String {
        path
    }

    /// Override the file `get_template_part` is about to render.
    fn template_part(&self, path: String, _slug: &str, _name: Option<&str>) -> String {
        path
    }

    /// Called just before a template is included.
    fn before_render(&self, _payload: &RenderPayload) {}

    /// Called just after a template is included.
    fn after_render(&self, _payload: &RenderPayload) {}
}

/// Hooks that change nothing and observe nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl Hooks for NoHooks {}

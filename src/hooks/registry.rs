//! Ordered callback chains for each extension point.

use std::fmt;

use crate::tokens::PathTokens;

use super::{
    Hooks, RenderPayload, TemplateQuery, AFTER_TEMPLATE_PART, BEFORE_TEMPLATE_PART, GET_TEMPLATE,
    GET_TEMPLATE_PART, LOCATE_TEMPLATE, PATH_TOKENS,
};

type TokensFilter = Box<dyn Fn(PathTokens) -> PathTokens + Send + Sync>;
type LocateFilter = Box<dyn Fn(String, &str, &str) -> String + Send + Sync>;
type TemplateFilter = Box<dyn Fn(String, &TemplateQuery<'_>) -> String + Send + Sync>;
type PartFilter = Box<dyn Fn(String, &str, Option<&str>) -> String + Send + Sync>;
type RenderAction = Box<dyn Fn(&RenderPayload) + Send + Sync>;

/// Registry of named hook callbacks.
///
/// Filters run in registration order, each receiving the previous one's
/// result. Actions fan out in registration order.
#[derive(Default)]
pub struct HookRegistry {
    path_tokens: Vec<TokensFilter>,
    locate: Vec<LocateFilter>,
    template: Vec<TemplateFilter>,
    part: Vec<PartFilter>,
    before: Vec<RenderAction>,
    after: Vec<RenderAction>,
}

impl HookRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a `wenprise_template_path_tokens` filter.
    pub fn add_path_tokens_filter<F>(&mut self, filter: F) -> &mut Self
    where
        F: Fn(PathTokens) -> PathTokens + Send + Sync + 'static,
    {
        self.path_tokens.push(Box::new(filter));
        self
    }

    /// Register a `wenprise_locate_template` filter, called with the located
    /// path, the template name and the search subpath.
    pub fn add_locate_filter<F>(&mut self, filter: F) -> &mut Self
    where
        F: Fn(String, &str, &str) -> String + Send + Sync + 'static,
    {
        self.locate.push(Box::new(filter));
        self
    }

    /// Register a `wenprise_get_template` filter.
    pub fn add_template_filter<F>(&mut self, filter: F) -> &mut Self
    where
        F: Fn(String, &TemplateQuery<'_>) -> String + Send + Sync + 'static,
    {
        self.template.push(Box::new(filter));
        self
    }

    /// Register a `wenprise_get_template_part` filter, called with the path,
    /// the slug and the optional name.
    pub fn add_template_part_filter<F>(&mut self, filter: F) -> &mut Self
    where
        F: Fn(String, &str, Option<&str>) -> String + Send + Sync + 'static,
    {
        self.part.push(Box::new(filter));
        self
    }

    /// Register a `wenprise_before_template_part` listener.
    pub fn on_before_render<F>(&mut self, action: F) -> &mut Self
    where
        F: Fn(&RenderPayload) + Send + Sync + 'static,
    {
        self.before.push(Box::new(action));
        self
    }

    /// Register a `wenprise_after_template_part` listener.
    pub fn on_after_render<F>(&mut self, action: F) -> &mut Self
    where
        F: Fn(&RenderPayload) + Send + Sync + 'static,
    {
        self.after.push(Box::new(action));
        self
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field(PATH_TOKENS, &self.path_tokens.len())
            .field(LOCATE_TEMPLATE, &self.locate.len())
            .field(GET_TEMPLATE, &self.template.len())
            .field(GET_TEMPLATE_PART, &self.part.len())
            .field(BEFORE_TEMPLATE_PART, &self.before.len())
            .field(AFTER_TEMPLATE_PART, &self.after.len())
            .finish()
    }
}

impl Hooks for HookRegistry {
    fn path_tokens(&self, tokens: PathTokens) -> PathTokens {
        self.path_tokens
            .iter()
            .fold(tokens, |tokens, filter| filter(tokens))
    }

    fn located_template(&self, located: String, name: &str, template_path: &str) -> String {
        if !self.locate.is_empty() {
            tracing::trace!(hook = LOCATE_TEMPLATE, name, "applying filters");
        }
        self.locate
            .iter()
            .fold(located, |path, filter| filter(path, name, template_path))
    }

    fn template_file(&self, path: String, query: &TemplateQuery<'_>) -> String {
        if !self.template.is_empty() {
            tracing::trace!(hook = GET_TEMPLATE, name = query.name, "applying filters");
        }
        self.template
            .iter()
            .fold(path, |path, filter| filter(path, query))
    }

    fn template_part(&self, path: String, slug: &str, name: Option<&str>) -> String {
        self.part
            .iter()
            .fold(path, |path, filter| filter(path, slug, name))
    }

    fn before_render(&self, payload: &RenderPayload) {
        for action in &self.before {
            action(payload);
        }
    }

    fn after_render(&self, payload: &RenderPayload) {
        for action in &self.after {
            action(payload);
        }
    }
}

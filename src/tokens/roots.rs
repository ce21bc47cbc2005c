//! Host root directories that may be substituted by tokens.

use serde::{Deserialize, Serialize};

use crate::hooks::Hooks;

use super::codec::PathTokens;

/// Root directory names, in the order tokens are discovered.
pub const ROOT_NAMES: [&str; 6] = [
    "ABSPATH",
    "WP_CONTENT_DIR",
    "WP_PLUGIN_DIR",
    "WPMU_PLUGIN_DIR",
    "PLUGINDIR",
    "WP_THEME_DIR",
];

/// Well-known host roots. Any of them may be undefined on a given host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RootPaths {
    /// Application root.
    #[serde(rename = "ABSPATH", default, skip_serializing_if = "Option::is_none")]
    pub abspath: Option<String>,

    /// Content root.
    #[serde(
        rename = "WP_CONTENT_DIR",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub content_dir: Option<String>,

    /// Plugins root.
    #[serde(
        rename = "WP_PLUGIN_DIR",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub plugin_dir: Option<String>,

    /// Must-use (multisite) plugins root.
    #[serde(
        rename = "WPMU_PLUGIN_DIR",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mu_plugin_dir: Option<String>,

    /// Legacy plugins alias.
    #[serde(rename = "PLUGINDIR", default, skip_serializing_if = "Option::is_none")]
    pub legacy_plugin_dir: Option<String>,

    /// Themes root.
    #[serde(
        rename = "WP_THEME_DIR",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub theme_dir: Option<String>,
}

impl RootPaths {
    /// Look up a root by its token name.
    pub fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            "ABSPATH" => &self.abspath,
            "WP_CONTENT_DIR" => &self.content_dir,
            "WP_PLUGIN_DIR" => &self.plugin_dir,
            "WPMU_PLUGIN_DIR" => &self.mu_plugin_dir,
            "PLUGINDIR" => &self.legacy_plugin_dir,
            "WP_THEME_DIR" => &self.theme_dir,
            _ => return None,
        };
        value.as_deref()
    }

    fn slot(&mut self, name: &str) -> Option<&mut Option<String>> {
        match name {
            "ABSPATH" => Some(&mut self.abspath),
            "WP_CONTENT_DIR" => Some(&mut self.content_dir),
            "WP_PLUGIN_DIR" => Some(&mut self.plugin_dir),
            "WPMU_PLUGIN_DIR" => Some(&mut self.mu_plugin_dir),
            "PLUGINDIR" => Some(&mut self.legacy_plugin_dir),
            "WP_THEME_DIR" => Some(&mut self.theme_dir),
            _ => None,
        }
    }

    /// Set a root by its token name. Unknown names are ignored.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if let Some(slot) = self.slot(name) {
            *slot = Some(value.into());
        }
    }

    /// Override roots from process environment variables of the same name.
    pub fn with_env(self) -> Self {
        self.with_env_from(|name| std::env::var(name).ok())
    }

    /// Override roots from a lookup function (environment variables in
    /// production, a map in tests). Empty values are ignored.
    pub fn with_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        for name in ROOT_NAMES {
            if let Some(value) = lookup(name).filter(|v| !v.is_empty()) {
                self.set(name, value);
            }
        }
        self
    }

    /// Defined roots as tokens, in [`ROOT_NAMES`] order.
    pub fn defined(&self) -> PathTokens {
        ROOT_NAMES
            .iter()
            .filter_map(|name| self.get(name).map(|value| (*name, value)))
            .collect()
    }
}

/// Tokens for the current host, after extensions have had their say.
///
/// Recomputed on every call; callers must not hold on to the result across
/// configuration changes.
pub fn discover_path_tokens(roots: &RootPaths, hooks: &dyn Hooks) -> PathTokens {
    let tokens = hooks.path_tokens(roots.defined());
    tracing::trace!(count = tokens.len(), "discovered path tokens");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::{HookRegistry, NoHooks};
    use std::collections::HashMap;

    #[test]
    fn defined_skips_missing_roots() {
        let roots = RootPaths {
            abspath: Some("/srv/".into()),
            theme_dir: Some("/srv/wp-content/themes".into()),
            ..Default::default()
        };
        let tokens = roots.defined();
        let names: Vec<_> = tokens.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["ABSPATH", "WP_THEME_DIR"]);
    }

    #[test]
    fn get_and_set_by_name() {
        let mut roots = RootPaths::default();
        roots.set("WPMU_PLUGIN_DIR", "/srv/mu");
        roots.set("NOT_A_ROOT", "/ignored");
        assert_eq!(roots.get("WPMU_PLUGIN_DIR"), Some("/srv/mu"));
        assert_eq!(roots.get("NOT_A_ROOT"), None);
    }

    #[test]
    fn env_overrides_file_values() {
        let env: HashMap<&str, &str> = [("WP_CONTENT_DIR", "/env/content"), ("ABSPATH", "")]
            .into_iter()
            .collect();
        let roots = RootPaths {
            abspath: Some("/file/".into()),
            content_dir: Some("/file/content".into()),
            ..Default::default()
        }
        .with_env_from(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(roots.content_dir.as_deref(), Some("/env/content"));
        assert_eq!(roots.abspath.as_deref(), Some("/file/"));
    }

    #[test]
    fn deserializes_constant_names() {
        let yaml = "ABSPATH: /srv/\nWP_PLUGIN_DIR: /srv/plugins\n";
        let roots: RootPaths = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(roots.abspath.as_deref(), Some("/srv/"));
        assert_eq!(roots.plugin_dir.as_deref(), Some("/srv/plugins"));
    }

    #[test]
    fn rejects_unknown_root_names() {
        let result: Result<RootPaths, _> = serde_yaml::from_str("WP_LANG_DIR: /srv/lang\n");
        assert!(result.is_err());
    }

    #[test]
    fn discovery_without_hooks_is_defined_roots() {
        let roots = RootPaths {
            plugin_dir: Some("/srv/plugins".into()),
            ..Default::default()
        };
        assert_eq!(discover_path_tokens(&roots, &NoHooks), roots.defined());
    }

    #[test]
    fn discovery_passes_through_hooks() {
        let roots = RootPaths {
            abspath: Some("/srv/".into()),
            ..Default::default()
        };
        let mut hooks = HookRegistry::new();
        hooks.add_path_tokens_filter(|mut tokens| {
            tokens.remove("ABSPATH");
            tokens.insert("UPLOADS", "/srv/uploads");
            tokens
        });

        let tokens = discover_path_tokens(&roots, &hooks);
        assert_eq!(tokens.get("ABSPATH"), None);
        assert_eq!(tokens.get("UPLOADS"), Some("/srv/uploads"));
    }
}

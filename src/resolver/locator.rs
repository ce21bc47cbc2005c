//! Searching the active theme for template overrides.

use std::path::{Path, PathBuf};

/// Finds the first candidate that exists in the active theme.
///
/// Candidates are relative paths in priority order; earlier wins.
pub trait ThemeLocator: Send + Sync {
    /// Absolute path of the first existing candidate.
    fn locate(&self, candidates: &[String]) -> Option<PathBuf>;
}

/// No active theme: nothing is ever found.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTheme;

impl ThemeLocator for NoTheme {
    fn locate(&self, _candidates: &[String]) -> Option<PathBuf> {
        None
    }
}

/// Active theme directories.
///
/// Each candidate is checked in the child theme (stylesheet) directory and
/// then in the parent theme (template) directory before moving on to the
/// next candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDirs {
    stylesheet_dir: PathBuf,
    template_dir: Option<PathBuf>,
}

impl ThemeDirs {
    /// A standalone theme.
    pub fn new(stylesheet_dir: impl Into<PathBuf>) -> Self {
        Self {
            stylesheet_dir: stylesheet_dir.into(),
            template_dir: None,
        }
    }

    /// A child theme on top of a parent theme.
    pub fn with_parent(mut self, template_dir: impl Into<PathBuf>) -> Self {
        let template_dir = template_dir.into();
        if template_dir != self.stylesheet_dir {
            self.template_dir = Some(template_dir);
        }
        self
    }

    /// Child theme directory.
    pub fn stylesheet_dir(&self) -> &Path {
        &self.stylesheet_dir
    }

    /// Parent theme directory, when distinct from the child.
    pub fn template_dir(&self) -> Option<&Path> {
        self.template_dir.as_deref()
    }
}

impl ThemeLocator for ThemeDirs {
    fn locate(&self, candidates: &[String]) -> Option<PathBuf> {
        let dirs = std::iter::once(&self.stylesheet_dir).chain(self.template_dir.as_ref());
        let dirs: Vec<&PathBuf> = dirs.collect();

        candidates
            .iter()
            .filter(|c| !c.is_empty())
            .find_map(|candidate| {
                dirs.iter()
                    .map(|dir| dir.join(candidate))
                    .find(|path| path.is_file())
            })
    }
}

//! Including a located template into the output.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{LoaderError, Result};

use super::context::TemplateContext;
use super::interpolation::render_template;

/// Renders a template file with a set of bindings.
pub trait Includer: Send + Sync {
    /// Write the rendering of `path` to `out`.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or rendered. A path that still
    /// carries an unexpanded `{{TOKEN}}` fails here as a missing file.
    fn include(&self, path: &Path, context: &TemplateContext, out: &mut dyn Write) -> Result<()>;
}

/// Reads template files from disk and expands `${binding}` references.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileIncluder;

impl Includer for FileIncluder {
    fn include(&self, path: &Path, context: &TemplateContext, out: &mut dyn Write) -> Result<()> {
        let body = fs::read_to_string(path).map_err(|source| LoaderError::Include {
            path: path.to_path_buf(),
            source,
        })?;
        let rendered = render_template(&body, context, path)?;
        out.write_all(rendered.as_bytes())
            .map_err(|source| LoaderError::Include {
                path: path.to_path_buf(),
                source,
            })
    }
}

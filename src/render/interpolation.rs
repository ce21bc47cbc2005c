//! `${binding}` expansion for template files.
//!
//! # Syntax
//!
//! - `${name}` - replaced with the binding's text
//! - `$${name}` - produces literal `${name}` in output
//! - `$` not followed by `{` is left alone, and so is `$$` not followed by `{`

use std::path::Path;

use crate::error::{LoaderError, Result};

use super::context::TemplateContext;

/// A segment of a template body.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Binding reference: ${name}
    Binding(String),
}

/// Split a template body into literal text and binding references.
pub fn parse_template(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut chars = input.chars().peekable();
    let mut literal = String::new();

    while let Some(c) = chars.next() {
        if c != '$' {
            literal.push(c);
            continue;
        }
        match chars.peek() {
            Some('$') => {
                chars.next();
                if chars.peek() == Some(&'{') {
                    // $${...} -> literal ${...}
                    chars.next();
                    literal.push_str("${");
                    for c in chars.by_ref() {
                        literal.push(c);
                        if c == '}' {
                            break;
                        }
                    }
                } else {
                    literal.push_str("$$");
                }
            }
            Some('{') => {
                chars.next();
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                let mut name = String::new();
                for c in chars.by_ref() {
                    if c == '}' {
                        break;
                    }
                    name.push(c);
                }
                segments.push(Segment::Binding(name));
            }
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    segments
}

/// Expand every binding in `input` from `context`.
///
/// `path` only labels errors.
///
/// # Errors
///
/// Returns `UnresolvedVariable` for the first binding missing from `context`.
pub fn render_template(input: &str, context: &TemplateContext, path: &Path) -> Result<String> {
    let mut output = String::with_capacity(input.len());

    for segment in parse_template(input) {
        match segment {
            Segment::Literal(text) => output.push_str(&text),
            Segment::Binding(name) => {
                let value = context
                    .display(&name)
                    .ok_or_else(|| LoaderError::UnresolvedVariable {
                        name: name.clone(),
                        path: path.to_path_buf(),
                    })?;
                output.push_str(&value);
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(pairs: &[(&str, &str)]) -> TemplateContext {
        let mut ctx = TemplateContext::new();
        for (k, v) in pairs {
            ctx.bind(*k, *v);
        }
        ctx
    }

    #[test]
    fn parse_literal_only() {
        assert_eq!(
            parse_template("<p>hello</p>"),
            vec![Segment::Literal("<p>hello</p>".to_string())]
        );
    }

    #[test]
    fn parse_binding_with_surrounding_text() {
        assert_eq!(
            parse_template("<h1>${title}</h1>"),
            vec![
                Segment::Literal("<h1>".to_string()),
                Segment::Binding("title".to_string()),
                Segment::Literal("</h1>".to_string()),
            ]
        );
    }

    #[test]
    fn parse_adjacent_bindings() {
        assert_eq!(
            parse_template("${a}${b}"),
            vec![
                Segment::Binding("a".to_string()),
                Segment::Binding("b".to_string()),
            ]
        );
    }

    #[test]
    fn parse_escaped_binding() {
        assert_eq!(
            parse_template("$${not_a_binding}"),
            vec![Segment::Literal("${not_a_binding}".to_string())]
        );
    }

    #[test]
    fn parse_dollar_without_brace() {
        assert_eq!(
            parse_template("price: $100"),
            vec![Segment::Literal("price: $100".to_string())]
        );
    }

    #[test]
    fn parse_empty_string() {
        assert!(parse_template("").is_empty());
    }

    #[test]
    fn render_replaces_bindings() {
        let out = render_template(
            "<h1>${title}</h1><span>${price}</span>",
            &ctx(&[("title", "Hoodie"), ("price", "$45")]),
            Path::new("single.php"),
        )
        .unwrap();
        assert_eq!(out, "<h1>Hoodie</h1><span>$45</span>");
    }

    #[test]
    fn render_preserves_escapes() {
        let out = render_template("$${raw}", &TemplateContext::new(), Path::new("t.php")).unwrap();
        assert_eq!(out, "${raw}");
    }

    #[test]
    fn render_keeps_double_dollar_without_brace() {
        let out = render_template("Save $$5 today", &TemplateContext::new(), Path::new("t.php"))
            .unwrap();
        assert_eq!(out, "Save $$5 today");
    }

    #[test]
    fn parse_double_dollar_before_binding() {
        assert_eq!(
            parse_template("$$$${a}"),
            vec![Segment::Literal("$$${a}".to_string())]
        );
    }

    #[test]
    fn render_fails_on_missing_binding() {
        let result = render_template("${missing}", &TemplateContext::new(), Path::new("t.php"));
        match result {
            Err(LoaderError::UnresolvedVariable { name, path }) => {
                assert_eq!(name, "missing");
                assert_eq!(path, Path::new("t.php"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

//! Path segments: the `path` attribute carried by every node.
//!
//! A segment is either a literal, a template with `{name}` placeholders, or
//! a function of the parameter bag. Templates and functions declare the
//! parameter names they depend on so the schema can report them without
//! rendering anything.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::model::key::is_valid_param_name;
use crate::params::Params;

type RenderFn = dyn Fn(&Params) -> Result<String> + Send + Sync;

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TemplatePart {
    Text(String),
    Param(String),
}

/// A segment rendered by substituting `{name}` placeholders.
///
/// `{{` and `}}` produce literal braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    parts: Vec<TemplatePart>,
    dependencies: Vec<String>,
}

impl Template {
    /// The template as written.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    fn render(&self, params: &Params) -> Result<String> {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                TemplatePart::Text(text) => out.push_str(text),
                TemplatePart::Param(name) => out.push_str(&params.require(name)?.to_string()),
            }
        }
        Ok(out)
    }
}

/// A segment computed by a caller-supplied function.
#[derive(Clone)]
pub struct DynamicSegment {
    dependencies: Vec<String>,
    render: Arc<RenderFn>,
}

impl fmt::Debug for DynamicSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicSegment")
            .field("dependencies", &self.dependencies)
            .finish_non_exhaustive()
    }
}

/// The path attribute of a node.
///
/// # Examples
///
/// ```
/// use treepath::{Params, PathSegment};
///
/// let literal = PathSegment::literal("master.m3u8").unwrap();
/// assert!(literal.dependencies().is_empty());
///
/// let template = PathSegment::template("videos/{videoId}").unwrap();
/// assert_eq!(template.dependencies(), ["videoId"]);
///
/// let params = Params::new().with("videoId", 1);
/// assert_eq!(template.render(&params).unwrap(), "videos/1");
/// ```
#[derive(Debug, Clone)]
pub enum PathSegment {
    /// A fixed string.
    Literal(String),
    /// A string with `{name}` placeholders.
    Template(Template),
    /// A function of the parameter bag.
    Dynamic(DynamicSegment),
}

impl PathSegment {
    /// Creates a literal segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSegment`] if `text` is empty.
    pub fn literal(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(invalid(&text, "path segments cannot be empty"));
        }
        Ok(Self::Literal(text))
    }

    /// Parses a template segment.
    ///
    /// A template without placeholders becomes a literal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSegment`] if the source is empty, a brace is
    /// unbalanced, or a placeholder name is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use treepath::PathSegment;
    ///
    /// assert!(PathSegment::template("stream_{quality}").is_ok());
    /// assert!(PathSegment::template("stream_{quality").is_err());
    /// assert!(PathSegment::template("").is_err());
    /// ```
    pub fn template(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        if source.is_empty() {
            return Err(invalid(&source, "path segments cannot be empty"));
        }

        let parts = parse_template(&source)?;
        let mut dependencies: Vec<String> = Vec::new();
        for part in &parts {
            if let TemplatePart::Param(name) = part {
                if !dependencies.contains(name) {
                    dependencies.push(name.clone());
                }
            }
        }

        if dependencies.is_empty() {
            let text = parts
                .into_iter()
                .map(|part| match part {
                    TemplatePart::Text(text) | TemplatePart::Param(text) => text,
                })
                .collect::<String>();
            return Self::literal(text);
        }

        Ok(Self::Template(Template {
            source,
            parts,
            dependencies,
        }))
    }

    /// Creates a segment rendered by `render`.
    ///
    /// `dependencies` lists the parameter names `render` reads; it must not
    /// be empty. Inside `render`, use [`Params::require`] so an absent name
    /// is reported rather than defaulted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSegment`] if no dependencies are declared or a
    /// name is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use treepath::{Params, PathSegment};
    ///
    /// let segment = PathSegment::dynamic(["segmentIndex"], |params| {
    ///     let index = params.require("segmentIndex")?.as_i64().unwrap_or_default();
    ///     Ok(format!("segment_{}.ts", index + 1))
    /// })
    /// .unwrap();
    ///
    /// let params = Params::new().with("segmentIndex", 0);
    /// assert_eq!(segment.render(&params).unwrap(), "segment_1.ts");
    /// ```
    pub fn dynamic<I, S, F>(dependencies: I, render: F) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&Params) -> Result<String> + Send + Sync + 'static,
    {
        let mut names: Vec<String> = Vec::new();
        for name in dependencies {
            let name = name.into();
            if !is_valid_param_name(&name) {
                return Err(invalid(
                    "<dynamic>",
                    &format!("invalid dependency name {name:?}"),
                ));
            }
            if !names.contains(&name) {
                names.push(name);
            }
        }

        if names.is_empty() {
            return Err(invalid(
                "<dynamic>",
                "dynamic paths must declare at least one dependency",
            ));
        }

        Ok(Self::Dynamic(DynamicSegment {
            dependencies: names,
            render: Arc::new(render),
        }))
    }

    /// Parameter names this segment reads, in declaration order.
    #[must_use]
    pub fn dependencies(&self) -> &[String] {
        match self {
            Self::Literal(_) => &[],
            Self::Template(template) => &template.dependencies,
            Self::Dynamic(dynamic) => &dynamic.dependencies,
        }
    }

    /// Whether rendering needs parameters.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        !matches!(self, Self::Literal(_))
    }

    /// Renders the segment against `params`.
    ///
    /// Declared dependencies are checked before a dynamic function runs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingDependency`] if a declared name is absent,
    /// [`Error::EmptyRenderedSegment`] if the result is empty, or whatever
    /// error a dynamic function returns.
    pub fn render(&self, params: &Params) -> Result<Cow<'_, str>> {
        let rendered = match self {
            Self::Literal(text) => return Ok(Cow::Borrowed(text)),
            Self::Template(template) => template.render(params)?,
            Self::Dynamic(dynamic) => {
                for name in &dynamic.dependencies {
                    params.require(name)?;
                }
                (dynamic.render)(params)?
            }
        };

        if rendered.is_empty() {
            return Err(Error::EmptyRenderedSegment {
                keypath: String::new(),
            });
        }
        Ok(Cow::Owned(rendered))
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::Template(template) => f.write_str(&template.source),
            Self::Dynamic(dynamic) => write!(f, "<dynamic: {}>", dynamic.dependencies.join(", ")),
        }
    }
}

impl TryFrom<&str> for PathSegment {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        Self::literal(text)
    }
}

impl TryFrom<String> for PathSegment {
    type Error = Error;

    fn try_from(text: String) -> Result<Self> {
        Self::literal(text)
    }
}

fn invalid(segment: &str, reason: &str) -> Error {
    Error::InvalidSegment {
        segment: segment.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_template(source: &str) -> Result<Vec<TemplatePart>> {
    let mut parts = Vec::new();
    let mut text = String::new();
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                text.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                text.push('}');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => name.push(c),
                        None => return Err(invalid(source, "unclosed '{' in template")),
                    }
                }
                if !is_valid_param_name(&name) {
                    return Err(invalid(
                        source,
                        &format!("invalid placeholder name {name:?}"),
                    ));
                }
                if !text.is_empty() {
                    parts.push(TemplatePart::Text(std::mem::take(&mut text)));
                }
                parts.push(TemplatePart::Param(name));
            }
            '}' => return Err(invalid(source, "unmatched '}' in template")),
            c => text.push(c),
        }
    }

    if !text.is_empty() {
        parts.push(TemplatePart::Text(text));
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_rejects_empty() {
        let err = PathSegment::literal("").unwrap_err();
        assert!(err.is_construction_error());
    }

    #[test]
    fn test_literal_renders_borrowed() {
        let segment = PathSegment::literal("master.m3u8").unwrap();
        let rendered = segment.render(&Params::new()).unwrap();
        assert!(matches!(rendered, Cow::Borrowed("master.m3u8")));
        assert!(!segment.is_dynamic());
    }

    #[test]
    fn test_template_dependencies_in_order() {
        let segment = PathSegment::template("{b}_{a}_{b}").unwrap();
        assert_eq!(segment.dependencies(), ["b", "a"]);
        assert!(segment.is_dynamic());
    }

    #[test]
    fn test_template_without_placeholders_is_literal() {
        let segment = PathSegment::template("plain{{x}}").unwrap();
        assert!(matches!(segment, PathSegment::Literal(ref t) if t == "plain{x}"));
    }

    #[test]
    fn test_template_escapes_render() {
        let segment = PathSegment::template("{{{id}}}").unwrap();
        let params = Params::new().with("id", 5);
        assert_eq!(segment.render(&params).unwrap(), "{5}");
    }

    #[test]
    fn test_template_errors() {
        for source in ["a{b", "a}b", "{}", "{a b}", "{a.b}"] {
            let err = PathSegment::template(source).unwrap_err();
            assert!(
                matches!(err, Error::InvalidSegment { .. }),
                "{source:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_template_missing_param() {
        let segment = PathSegment::template("stream_{quality}").unwrap();
        let err = segment.render(&Params::new()).unwrap_err();
        assert!(matches!(err, Error::MissingDependency { ref name, .. } if name == "quality"));
    }

    #[test]
    fn test_template_rendering_empty_is_rejected() {
        let segment = PathSegment::template("{name}").unwrap();
        let params = Params::new().with("name", "");
        let err = segment.render(&params).unwrap_err();
        assert!(matches!(err, Error::EmptyRenderedSegment { .. }));
    }

    #[test]
    fn test_dynamic_requires_dependencies() {
        let err = PathSegment::dynamic(Vec::<String>::new(), |_| Ok("x".into())).unwrap_err();
        assert!(err.is_construction_error());

        let err = PathSegment::dynamic(["bad name"], |_| Ok("x".into())).unwrap_err();
        assert!(err.is_construction_error());
    }

    #[test]
    fn test_dynamic_checks_declared_names_before_running() {
        let segment = PathSegment::dynamic(["fileParam"], |_| {
            panic!("render must not run without its dependencies")
        })
        .unwrap();
        let err = segment.render(&Params::new()).unwrap_err();
        assert!(err.is_missing_dependency());
    }

    #[test]
    fn test_dynamic_render() {
        let segment = PathSegment::dynamic(["fileParam"], |params| {
            Ok(format!("file_{}.ext", params.require("fileParam")?))
        })
        .unwrap();
        let params = Params::new().with("fileParam", "hello");
        assert_eq!(segment.render(&params).unwrap(), "file_hello.ext");
    }

    #[test]
    fn test_display() {
        assert_eq!(PathSegment::literal("a").unwrap().to_string(), "a");
        assert_eq!(PathSegment::template("v/{id}").unwrap().to_string(), "v/{id}");
        let dynamic = PathSegment::dynamic(["x", "y"], |_| Ok("z".into())).unwrap();
        assert_eq!(dynamic.to_string(), "<dynamic: x, y>");
    }

    #[test]
    fn test_try_from_str() {
        assert!(PathSegment::try_from("a").is_ok());
        assert!(PathSegment::try_from(String::new()).is_err());
    }
}

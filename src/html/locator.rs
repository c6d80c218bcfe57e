//! Tag locator
//!
//! The one lookup primitive every extractor relies on: find the first element
//! under a node matching a tag name and a set of attribute constraints. A miss
//! is an error, never a silent `None`.

use crate::{Result, ScraperError};
use regex::Regex;
use scraper::ElementRef;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;

/// How a single attribute must match
#[derive(Debug, Clone)]
pub enum AttrMatch {
    /// Attribute value equals the string
    Exact(String),
    /// Regex search succeeds on the attribute value
    Pattern(Regex),
}

impl AttrMatch {
    fn matches_value(&self, value: &str) -> bool {
        match self {
            AttrMatch::Exact(expected) => value == expected,
            AttrMatch::Pattern(re) => re.is_match(value),
        }
    }
}

/// A tag name plus attribute constraints
///
/// For `class`, a constraint matches either the whole attribute value or any
/// single class token, so `.attr("class", "toctree-wrapper")` finds
/// `<div class="toctree-wrapper compound">`.
///
/// # Example
///
/// ```
/// use pydoc_scraper::html::TagQuery;
///
/// let query = TagQuery::new("section").attr("id", "numerical-index");
/// assert_eq!(query.to_string(), r#"section {"id": "numerical-index"}"#);
/// ```
#[derive(Debug, Clone)]
pub struct TagQuery {
    tag: String,
    attrs: Vec<(String, AttrMatch)>,
}

impl TagQuery {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
        }
    }

    /// Requires `name` to equal `value`
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs
            .push((name.into(), AttrMatch::Exact(value.into())));
        self
    }

    /// Requires `name` to match `pattern`
    pub fn attr_matching(mut self, name: impl Into<String>, pattern: Regex) -> Self {
        self.attrs.push((name.into(), AttrMatch::Pattern(pattern)));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Checks a single element against the query
    pub fn matches(&self, element: &ElementRef) -> bool {
        let el = element.value();
        if !el.name().eq_ignore_ascii_case(&self.tag) {
            return false;
        }

        self.attrs.iter().all(|(name, wanted)| match el.attr(name) {
            None => false,
            Some(value) if name == "class" => {
                wanted.matches_value(value)
                    || value.split_ascii_whitespace().any(|c| wanted.matches_value(c))
            }
            Some(value) => wanted.matches_value(value),
        })
    }

    /// The attribute constraints rendered as `{"name": "value", ...}`
    pub fn attrs_display(&self) -> String {
        let parts: Vec<String> = self
            .attrs
            .iter()
            .map(|(name, wanted)| match wanted {
                AttrMatch::Exact(v) => format!("{:?}: {:?}", name, v),
                AttrMatch::Pattern(re) => format!("{:?}: /{}/", name, re.as_str()),
            })
            .collect();
        format!("{{{}}}", parts.join(", "))
    }
}

impl fmt::Display for TagQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.attrs.is_empty() {
            write!(f, "{}", self.tag)
        } else {
            write!(f, "{} {}", self.tag, self.attrs_display())
        }
    }
}

/// Returns the first descendant of `root` matching `query`, in document order
///
/// `root` itself is not a candidate.
///
/// # Errors
///
/// `ScraperError::TagNotFound` when nothing matches; the miss is logged first.
pub fn find_tag<'a>(root: ElementRef<'a>, query: &TagQuery) -> Result<ElementRef<'a>> {
    match descendants(root).find(|el| query.matches(el)) {
        Some(found) => Ok(found),
        None => {
            tracing::error!("Tag not found: {}", query);
            let backtrace = Backtrace::capture();
            if backtrace.status() == BacktraceStatus::Captured {
                tracing::debug!("Tag lookup backtrace:\n{}", backtrace);
            }
            Err(ScraperError::TagNotFound {
                tag: query.tag.clone(),
                attrs: query.attrs_display(),
            })
        }
    }
}

/// Returns every descendant of `root` matching `query`, in document order
pub fn find_all<'a>(root: ElementRef<'a>, query: &TagQuery) -> Vec<ElementRef<'a>> {
    descendants(root).filter(|el| query.matches(el)).collect()
}

fn descendants<'a>(root: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    root.descendants().skip(1).filter_map(ElementRef::wrap)
}

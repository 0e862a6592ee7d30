//! Minimal read-only view over a parsed HTML document.
//!
//! Extraction only ever needs "first element with this tag" and "first element
//! whose attribute equals a value", so that is all [`HtmlQuery`] exposes.

use scraper::{ElementRef, Html, Selector};

/// An element returned by an [`HtmlQuery`] lookup.
pub trait HtmlElement {
    fn attr(&self, name: &str) -> Option<&str>;

    /// Concatenated text of all descendant text nodes.
    fn text(&self) -> String;
}

pub trait HtmlQuery {
    type Element<'a>: HtmlElement
    where
        Self: 'a;

    /// First element named `tag` in document order.
    fn first_by_tag(&self, tag: &str) -> Option<Self::Element<'_>>;

    /// First `tag` element whose `attr` is exactly `value`.
    fn first_by_attr(&self, tag: &str, attr: &str, value: &str) -> Option<Self::Element<'_>>;
}

/// [`HtmlQuery`] backed by `scraper`'s html5ever parser.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parsing never fails; broken markup is repaired the way browsers do.
    pub fn parse(source: &str) -> Self {
        Document {
            html: Html::parse_document(source),
        }
    }

    fn select_first(&self, css: &str) -> Option<ElementRef<'_>> {
        let selector = Selector::parse(css).ok()?;
        self.html.select(&selector).next()
    }
}

impl HtmlElement for ElementRef<'_> {
    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }
}

impl HtmlQuery for Document {
    type Element<'a> = ElementRef<'a>;

    fn first_by_tag(&self, tag: &str) -> Option<ElementRef<'_>> {
        self.select_first(tag)
    }

    fn first_by_attr(&self, tag: &str, attr: &str, value: &str) -> Option<ElementRef<'_>> {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        self.select_first(&format!(r#"{tag}[{attr}="{escaped}"]"#))
    }
}

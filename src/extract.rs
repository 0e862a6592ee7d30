use serde_json::Value;

use crate::html::{Document, HtmlElement, HtmlQuery};
use crate::models::{MetadataRecord, OpenGraph, SchemaData, TwitterCard};

const JSON_LD_TYPE: &str = "application/ld+json";

/// Parse `html` and pull out everything the scorer needs.
///
/// Never fails: missing or malformed pieces simply come back empty.
pub fn extract(html: &str, requested_url: &str) -> MetadataRecord {
    let document = Document::parse(html);
    extract_from(&document, html, requested_url)
}

/// Same as [`extract`] but over an already-parsed document.
pub fn extract_from<Q: HtmlQuery>(doc: &Q, raw_html: &str, requested_url: &str) -> MetadataRecord {
    let title = doc
        .first_by_tag("title")
        .map(|el| el.text().trim().to_string())
        .unwrap_or_default();

    let description = meta_name(doc, "description")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let open_graph = OpenGraph {
        title: meta_property(doc, "og:title"),
        description: meta_property(doc, "og:description"),
        image: meta_property(doc, "og:image"),
        og_type: meta_property(doc, "og:type"),
        url: meta_property(doc, "og:url"),
        site_name: meta_property(doc, "og:site_name"),
    };

    let twitter = TwitterCard {
        card: meta_name(doc, "twitter:card"),
        title: meta_name(doc, "twitter:title"),
        description: meta_name(doc, "twitter:description"),
        image: meta_name(doc, "twitter:image"),
        creator: meta_name(doc, "twitter:creator"),
        site: meta_name(doc, "twitter:site"),
    };

    let schema = doc
        .first_by_attr("script", "type", JSON_LD_TYPE)
        .map(|el| parse_schema(&el.text()))
        .unwrap_or_default();

    MetadataRecord {
        url: requested_url.to_string(),
        title,
        description,
        open_graph,
        twitter,
        schema,
        raw_html: raw_html.to_string(),
    }
}

fn meta_property<Q: HtmlQuery>(doc: &Q, property: &str) -> Option<String> {
    meta_content(doc, "property", property)
}

fn meta_name<Q: HtmlQuery>(doc: &Q, name: &str) -> Option<String> {
    meta_content(doc, "name", name)
}

// Only the first matching tag is consulted, even if it lacks `content`.
fn meta_content<Q: HtmlQuery>(doc: &Q, attr: &str, value: &str) -> Option<String> {
    doc.first_by_attr("meta", attr, value)
        .and_then(|el| el.attr("content").map(str::to_string))
}

/// Read `@type`, `name`, `description` and `image` from a JSON-LD block.
///
/// Invalid JSON yields an empty [`SchemaData`] instead of an error, so a broken
/// block looks the same as no block at all to the scorer.
pub fn parse_schema(text: &str) -> SchemaData {
    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring unparseable JSON-LD block");
            return SchemaData::default();
        }
    };

    let Value::Object(map) = value else {
        return SchemaData::default();
    };

    SchemaData {
        schema_type: map.get("@type").and_then(schema_text),
        name: map.get("name").and_then(schema_text),
        description: map.get("description").and_then(schema_text),
        image: map.get("image").and_then(schema_text),
    }
}

/// Flatten a JSON-LD value to a string: arrays give their first string,
/// objects (e.g. `ImageObject`) give their `url` or `@id`.
fn schema_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(Value::as_str).map(str::to_string),
        Value::Object(map) => map
            .get("url")
            .or_else(|| map.get("@id"))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

//! JSON-LD extraction from HTML documents.
//!
//! Reads `<script type="application/ld+json">` blocks and turns the
//! decoded objects into [`Item`]s. This is a rudimentary parser covering
//! the subset of the JSON-LD spec found in the wild: `@context` is only
//! honored as a string and is treated as a vocabulary identifier, never
//! fetched as an external context document. That misses a lot, but it is
//! enough for most pages embedding schema.org data in the simple syntax
//! used by the examples.
//!
//! https://json-ld.org/spec/latest/json-ld/

use crate::item::{Item, PropertyValue};
use crate::reader::Reader;
use crate::resolve::{normalize_vocabulary_url, resolve_url};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde_json::{Map, Value};
use std::collections::HashSet;

static SCRIPT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script[type='application/ld+json']").unwrap());

/// Reads JSON-LD documents embedded into an HTML document.
///
/// ## Example
///
/// ```rust
/// use structured_data::{JsonLdReader, Reader};
/// use scraper::Html;
///
/// let html = r#"
///     <script type="application/ld+json">
///     {"@context": "http://schema.org", "@type": "Person", "name": "Jane"}
///     </script>
/// "#;
///
/// let document = Html::parse_document(html);
/// let items = JsonLdReader::new().read(&document, "https://example.com/");
///
/// assert_eq!(items[0].types(), ["http://schema.org/Person"]);
/// ```
///
/// ## IRI-valued properties
///
/// Bare JSON-LD gives no way to tell a URI string from plain text without
/// full context processing, so properties whose values should be resolved
/// against the base URL are named explicitly:
///
/// ```rust
/// use structured_data::JsonLdReader;
///
/// let reader = JsonLdReader::with_iri_properties(["image", "url"]);
/// # let _ = reader;
/// ```
///
/// A listed property's string value is resolved to an absolute URL when
/// possible and passed through unchanged otherwise. The list applies at
/// every nesting level and matches keys as written in the document.
#[derive(Debug, Default)]
pub struct JsonLdReader {
    iri_properties: HashSet<String>,
}

impl JsonLdReader {
    /// Creates a JSON-LD reader with no IRI-valued properties configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a JSON-LD reader that resolves the named properties' string
    /// values against the base URL.
    pub fn with_iri_properties<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            iri_properties: properties.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads a list of items from one JSON-LD string.
    ///
    /// Invalid JSON yields an empty list; the failure stays local to the
    /// script block.
    fn read_json(&self, json: &str, url: &str) -> Vec<Item> {
        // Some pages wrap the block in CDATA markers.
        let json = json
            .trim()
            .trim_start_matches("<![CDATA[")
            .trim_end_matches("]]>")
            .trim();

        let data: Value = match serde_json::from_str(json) {
            Ok(data) => data,
            Err(_) => return Vec::new(),
        };

        match data {
            Value::Object(object) => vec![self.read_item(&object, url, None)],
            Value::Array(entries) => entries
                .iter()
                .filter_map(Value::as_object)
                .map(|object| self.read_item(object, url, None))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Reads a single item from a decoded JSON object.
    ///
    /// `vocabulary` is the vocabulary URL inherited from the enclosing
    /// item, replaced when this object declares a string `@context` of its
    /// own.
    fn read_item(&self, object: &Map<String, Value>, url: &str, vocabulary: Option<&str>) -> Item {
        let own_vocabulary = match object.get("@context") {
            // An invalid context URL clears the vocabulary rather than failing.
            Some(Value::String(context)) => normalize_vocabulary_url(context),
            _ => vocabulary.map(str::to_string),
        };
        let vocabulary = own_vocabulary.as_deref();

        // Always relative to the document URL; @base is unsupported.
        let id = object
            .get("@id")
            .and_then(Value::as_str)
            .and_then(|id| resolve_url(url, id));

        let types: Vec<String> = match object.get("@type") {
            Some(Value::String(ty)) => vec![resolve_term(ty, vocabulary)],
            Some(Value::Array(entries)) => entries
                .iter()
                .filter_map(Value::as_str)
                .map(|ty| resolve_term(ty, vocabulary))
                .collect(),
            _ => Vec::new(),
        };

        let mut item = Item::new(id, types);

        for (name, value) in object {
            if name.is_empty() || name == "@context" || name == "@id" || name == "@type" {
                continue;
            }

            let qualified = resolve_term(name, vocabulary);

            match value {
                Value::Array(entries) => {
                    for entry in entries {
                        if entry.is_array() {
                            // no nested arrays
                            continue;
                        }

                        if let Some(value) = self.property_value(name, entry, url, vocabulary) {
                            item.add_property(qualified.clone(), value);
                        }
                    }
                }
                value => {
                    if let Some(value) = self.property_value(name, value, url, vocabulary) {
                        item.add_property(qualified, value);
                    }
                }
            }
        }

        item
    }

    /// Converts one JSON value into a property value.
    ///
    /// `name` is the property key as written in the document, used to match
    /// the IRI allow-list. Returns `None` for value kinds that carry no
    /// property (null).
    fn property_value(
        &self,
        name: &str,
        value: &Value,
        url: &str,
        vocabulary: Option<&str>,
    ) -> Option<PropertyValue> {
        match value {
            Value::Bool(value) => {
                let text = if *value { "true" } else { "false" };
                Some(PropertyValue::Text(text.to_string()))
            }
            Value::Number(value) => Some(PropertyValue::Text(value.to_string())),
            Value::String(value) => {
                if self.iri_properties.contains(name) {
                    if let Some(resolved) = resolve_url(url, value) {
                        return Some(PropertyValue::Text(resolved));
                    }
                }

                Some(PropertyValue::Text(value.clone()))
            }
            // Context is inherited, not reset, unless the nested object
            // declares its own.
            Value::Object(object) => {
                Some(PropertyValue::Item(self.read_item(object, url, vocabulary)))
            }
            _ => None,
        }
    }
}

/// Qualifies a term with the current vocabulary, if one is set.
fn resolve_term(term: &str, vocabulary: Option<&str>) -> String {
    match vocabulary {
        Some(vocabulary) => format!("{vocabulary}{term}"),
        None => term.to_string(),
    }
}

impl Reader for JsonLdReader {
    fn read(&self, document: &Html, url: &str) -> Vec<Item> {
        let mut items = Vec::new();

        for script in document.select(&SCRIPT_SELECTOR) {
            let json = script.text().collect::<String>();
            items.extend(self.read_json(&json, url));
        }

        items
    }
}

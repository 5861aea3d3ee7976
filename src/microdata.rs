//! Microdata extraction from HTML documents.
//!
//! Microdata annotates elements with the `itemscope`, `itemtype`,
//! `itemprop` and `itemid` attributes. This reader walks the document
//! tree and turns every top-level item scope into an [`Item`].
//!
//! https://www.w3.org/TR/microdata/

use crate::item::{Item, PropertyValue};
use crate::reader::Reader;
use crate::resolve::{collapse_whitespace, resolve_url, vocabulary_identifier};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static ITEMSCOPE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("[itemscope]").unwrap());

static ITEMPROP_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("[itemprop]").unwrap());

/// The HTML5 elements carrying a `src` attribute.
const SRC_ELEMENTS: [&str; 9] = [
    "audio", "embed", "iframe", "img", "input", "script", "source", "track", "video",
];

/// The HTML5 elements carrying an `href` attribute.
const HREF_ELEMENTS: [&str; 4] = ["a", "area", "base", "link"];

/// Returns the URL-bearing attribute conventionally used by the element,
/// if it has one.
fn url_attribute(element_name: &str) -> Option<&'static str> {
    if SRC_ELEMENTS.contains(&element_name) {
        Some("src")
    } else if HREF_ELEMENTS.contains(&element_name) {
        Some("href")
    } else {
        None
    }
}

/// Reads Microdata embedded into an HTML document.
///
/// ## Example
///
/// ```rust
/// use structured_data::{MicrodataReader, Reader};
/// use scraper::Html;
///
/// let html = r#"
///     <div itemscope itemtype="http://schema.org/Person">
///         <span itemprop="name">Jane</span>
///     </div>
/// "#;
///
/// let document = Html::parse_document(html);
/// let items = MicrodataReader::new().read(&document, "https://example.com/");
///
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].types(), ["http://schema.org/Person"]);
/// ```
///
/// The `itemref` attribute is not supported.
#[derive(Debug, Default)]
pub struct MicrodataReader;

impl MicrodataReader {
    /// Creates a Microdata reader.
    pub fn new() -> Self {
        Self
    }

    /// Extracts an element with the `itemscope` attribute into an [`Item`].
    fn node_to_item(&self, node: ElementRef, url: &str) -> Item {
        let id = node.value().attr("itemid").map(str::to_string);

        // Multiple types from the same vocabulary can be given for a single
        // item by listing the URLs, separated by spaces, in the attribute's
        // value. https://www.w3.org/TR/microdata/#x4-3-typed-items
        let types: Vec<String> = node
            .value()
            .attr("itemtype")
            .map(|value| value.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        let vocabulary = vocabulary_identifier(&types);

        let mut item = Item::new(id, types);

        for element in node.select(&ITEMPROP_SELECTOR) {
            // Skip properties that belong to a nested item scope.
            if !is_direct_property(node, element) {
                continue;
            }

            let names = match element.value().attr("itemprop") {
                Some(names) => names,
                None => continue,
            };

            let value = self.property_value(element, url);

            // An element can introduce multiple properties at once, to avoid
            // duplication when some of the properties have the same value.
            // https://www.w3.org/TR/microdata/#ex-multival
            for name in names.split_whitespace() {
                item.add_property(format!("{vocabulary}{name}"), value.clone());
            }
        }

        item
    }

    /// Resolves the value of an element carrying the `itemprop` attribute.
    ///
    /// The rules mirror the Microdata property value algorithm; the first
    /// matching rule wins, the element's normalized text content is the
    /// fallback. https://www.w3.org/TR/microdata/#values
    fn property_value(&self, element: ElementRef, url: &str) -> PropertyValue {
        // An item scope on the property element makes the value a nested
        // group of name-value pairs.
        if element.value().attr("itemscope").is_some() {
            return PropertyValue::Item(self.node_to_item(element, url));
        }

        if let Some(content) = element.value().attr("content") {
            return PropertyValue::Text(content.to_string());
        }

        let element_name = element.value().name();

        // Machine-readable variants of the element content.
        if element_name == "data" {
            if let Some(value) = element.value().attr("value") {
                return PropertyValue::Text(value.to_string());
            }
        }

        // Link and media elements carry their value in src/href, resolved
        // to an absolute URL. Resolution failures keep the raw attribute.
        if let Some(attribute) = url_attribute(element_name) {
            if let Some(value) = element.value().attr(attribute) {
                let resolved =
                    resolve_url(url, value).unwrap_or_else(|| value.to_string());
                return PropertyValue::Text(resolved);
            }
        }

        if element_name == "meter" {
            if let Some(value) = element.value().attr("value") {
                return PropertyValue::Text(value.to_string());
            }
        }

        if element_name == "time" {
            if let Some(datetime) = element.value().attr("datetime") {
                return PropertyValue::Text(datetime.to_string());
            }
        }

        let text = element.text().collect::<String>();
        PropertyValue::Text(collapse_whitespace(&text))
    }
}

/// Reports whether `element` is a direct property of the `scope` item.
///
/// Walking upward from the element, the nearest ancestor carrying
/// `itemscope` must be the scope node itself; an intervening item scope
/// claims the property for its own, nested item.
fn is_direct_property(scope: ElementRef, element: ElementRef) -> bool {
    let mut current = element.parent();

    while let Some(node) = current {
        if node.id() == scope.id() {
            return true;
        }

        if let Some(ancestor) = ElementRef::wrap(node) {
            if ancestor.value().attr("itemscope").is_some() {
                return false;
            }
        }

        current = node.parent();
    }

    false
}

impl Reader for MicrodataReader {
    fn read(&self, document: &Html, url: &str) -> Vec<Item> {
        // Root items only: an item scope that also carries itemprop is the
        // value of another item's property, not a top-level item.
        document
            .select(&ITEMSCOPE_SELECTOR)
            .filter(|element| element.value().attr("itemprop").is_none())
            .map(|element| self.node_to_item(element, url))
            .collect()
    }
}

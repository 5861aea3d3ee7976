//! The extracted data model: [`Item`] and [`PropertyValue`].
//!
//! An [`Item`] is one node of the structured data graph found in a page:
//! an optional global identifier, a list of type URLs, and a map of
//! property name to values. Nesting a group of name-value pairs inside a
//! property forms a tree of items.
//!
//! ## Example
//!
//! ```rust
//! use structured_data::{Item, PropertyValue};
//!
//! let mut item = Item::new(None, vec!["http://schema.org/Person"]);
//! item.add_property("http://schema.org/name", "Jane");
//!
//! assert_eq!(item.types(), ["http://schema.org/Person"]);
//! assert_eq!(
//!     item.get_property("http://schema.org/name"),
//!     [PropertyValue::Text("Jane".to_string())]
//! );
//! assert!(item.get_property("http://schema.org/email").is_empty());
//! ```

use indexmap::IndexMap;
use serde::Serialize;

/// A single value of an item property: a nested [`Item`] or a plain string.
///
/// Both Microdata and JSON-LD allow a property to hold either a string or a
/// whole nested group of name-value pairs. No other value kind exists, so
/// the union is a closed enum and every consumer is exhaustively checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// A nested item, e.g. the Person behind a schema.org `author` property.
    Item(Item),
    /// A plain string value.
    Text(String),
}

impl PropertyValue {
    /// Returns the nested item, if this value is one.
    pub fn as_item(&self) -> Option<&Item> {
        match self {
            PropertyValue::Item(item) => Some(item),
            PropertyValue::Text(_) => None,
        }
    }

    /// Returns the string value, if this value is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Item(_) => None,
            PropertyValue::Text(text) => Some(text),
        }
    }
}

impl From<Item> for PropertyValue {
    fn from(item: Item) -> Self {
        PropertyValue::Item(item)
    }
}

impl From<String> for PropertyValue {
    fn from(text: String) -> Self {
        PropertyValue::Text(text)
    }
}

impl From<&str> for PropertyValue {
    fn from(text: &str) -> Self {
        PropertyValue::Text(text.to_string())
    }
}

/// An item extracted from a document, such as a Thing in schema.org's
/// vocabulary.
///
/// The identifier and types are fixed at construction; properties are
/// append-only and keep insertion order, both across property names and
/// within the value list of a single name. Readers build an item in one
/// forward pass over the document and never revise it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    /// Global identifier, if the document declared one.
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    /// The types this item implements, as URLs, e.g. `http://schema.org/Product`.
    types: Vec<String>,

    /// Map of property name (as a URL) to the list of values collected for it.
    properties: IndexMap<String, Vec<PropertyValue>>,
}

impl Item {
    /// Creates an item with the given identifier and type URLs.
    pub fn new<T, S>(id: Option<String>, types: T) -> Self
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            types: types.into_iter().map(Into::into).collect(),
            properties: IndexMap::new(),
        }
    }

    /// The item's global identifier, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The types this item implements, as URLs.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// All properties, as a map of property name to list of values.
    pub fn properties(&self) -> &IndexMap<String, Vec<PropertyValue>> {
        &self.properties
    }

    /// The values collected for the given property name.
    ///
    /// Returns an empty slice if the property was never set; asking for an
    /// unknown property is not an error.
    pub fn get_property(&self, name: &str) -> &[PropertyValue] {
        self.properties.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Appends a value to the list for the given property name, creating the
    /// list if this is the first value.
    pub fn add_property(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.entry(name.into()).or_default().push(value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_property_is_empty() {
        let item = Item::new(None, Vec::<String>::new());
        assert!(item.get_property("http://schema.org/name").is_empty());
    }

    #[test]
    fn test_add_property_appends_in_order() {
        let mut item = Item::new(None, vec!["http://schema.org/Book"]);
        item.add_property("http://schema.org/author", "First");
        item.add_property("http://schema.org/author", "Second");

        let values = item.get_property("http://schema.org/author");
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].as_text(), Some("First"));
        assert_eq!(values[1].as_text(), Some("Second"));
    }

    #[test]
    fn test_property_names_keep_insertion_order() {
        let mut item = Item::new(None, Vec::<String>::new());
        item.add_property("b", "1");
        item.add_property("a", "2");

        let names: Vec<&str> = item.properties().keys().map(String::as_str).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn test_nested_item_value() {
        let author = Item::new(None, vec!["http://schema.org/Person"]);
        let mut book = Item::new(Some("urn:isbn:0451450523".to_string()), vec![
            "http://schema.org/Book",
        ]);
        book.add_property("http://schema.org/author", author.clone());

        assert_eq!(book.id(), Some("urn:isbn:0451450523"));
        let values = book.get_property("http://schema.org/author");
        assert_eq!(values[0].as_item(), Some(&author));
    }
}

//! The [`Reader`] trait and the composing [`ReaderChain`].
//!
//! Each structured data syntax gets its own reader; a chain runs several
//! of them over the same document and aggregates the results.

use crate::item::Item;
use scraper::Html;

/// Common capability for readers of each syntax: Microdata, JSON-LD.
pub trait Reader {
    /// Reads the top-level items contained in the given document.
    ///
    /// `url` is the URL the document was retrieved from. It is used only to
    /// resolve relative URLs in property values; no attempt is made to
    /// connect to it.
    fn read(&self, document: &Html, url: &str) -> Vec<Item>;
}

/// Chains several readers and returns the aggregate results.
///
/// Every reader runs against the identical document and base URL; the
/// outputs are concatenated in reader order, item order preserved within
/// each. Nothing is deduplicated: an entity annotated in two syntaxes
/// yields two items.
///
/// ## Example
///
/// ```rust
/// use structured_data::{JsonLdReader, MicrodataReader, Reader, ReaderChain};
/// use scraper::Html;
///
/// let chain = ReaderChain::new(vec![
///     Box::new(MicrodataReader::new()),
///     Box::new(JsonLdReader::new()),
/// ]);
///
/// let document = Html::parse_document("<html></html>");
/// assert!(chain.read(&document, "https://example.com/").is_empty());
/// ```
#[derive(Default)]
pub struct ReaderChain {
    readers: Vec<Box<dyn Reader>>,
}

impl ReaderChain {
    /// Creates a chain over the given readers, in order.
    pub fn new(readers: Vec<Box<dyn Reader>>) -> Self {
        Self { readers }
    }

    /// Appends a reader to the end of the chain.
    pub fn push(&mut self, reader: Box<dyn Reader>) {
        self.readers.push(reader);
    }
}

impl Reader for ReaderChain {
    fn read(&self, document: &Html, url: &str) -> Vec<Item> {
        if self.readers.is_empty() {
            return Vec::new();
        }

        let mut items = Vec::new();

        for reader in &self.readers {
            items.extend(reader.read(document, url));
        }

        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedReader(Vec<Item>);

    impl Reader for FixedReader {
        fn read(&self, _document: &Html, _url: &str) -> Vec<Item> {
            self.0.clone()
        }
    }

    fn typed_item(ty: &str) -> Item {
        Item::new(None, vec![ty])
    }

    #[test]
    fn test_empty_chain_reads_nothing() {
        let chain = ReaderChain::new(Vec::new());
        let document = Html::parse_document("<html></html>");
        assert!(chain.read(&document, "https://example.com/").is_empty());
    }

    #[test]
    fn test_chain_concatenates_in_reader_order() {
        let first = FixedReader(vec![typed_item("http://schema.org/Person")]);
        let second = FixedReader(vec![
            typed_item("http://schema.org/Book"),
            typed_item("http://schema.org/Movie"),
        ]);

        let chain = ReaderChain::new(vec![Box::new(first), Box::new(second)]);
        let document = Html::parse_document("<html></html>");
        let items = chain.read(&document, "https://example.com/");

        let types: Vec<&str> = items.iter().map(|i| i.types()[0].as_str()).collect();
        assert_eq!(types, [
            "http://schema.org/Person",
            "http://schema.org/Book",
            "http://schema.org/Movie",
        ]);
    }

    #[test]
    fn test_chain_equals_manual_concatenation() {
        let a = vec![typed_item("http://schema.org/Person")];
        let b = vec![typed_item("http://schema.org/Book")];

        let chain = ReaderChain::new(vec![
            Box::new(FixedReader(a.clone())),
            Box::new(FixedReader(b.clone())),
        ]);
        let document = Html::parse_document("<html></html>");

        let mut expected = a;
        expected.extend(b);
        assert_eq!(chain.read(&document, "https://example.com/"), expected);
    }
}

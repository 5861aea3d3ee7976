//! Entry point tying an HTML source to a [`Reader`].
//!
//! The readers operate on an already-parsed [`scraper::Html`] tree;
//! [`HtmlReader`] does the parsing for callers starting from an HTML
//! string or file.

use crate::error::Result;
use crate::item::Item;
use crate::reader::Reader;
use scraper::Html;
use std::fs;
use std::path::Path;

/// Reads the items contained in an HTML string or file.
///
/// ## Example
///
/// ```rust
/// use structured_data::{HtmlReader, JsonLdReader, MicrodataReader, ReaderChain};
///
/// let chain = ReaderChain::new(vec![
///     Box::new(MicrodataReader::new()),
///     Box::new(JsonLdReader::new()),
/// ]);
/// let reader = HtmlReader::new(chain);
///
/// let html = r#"
///     <div itemscope itemtype="http://schema.org/Person">
///         <span itemprop="name">Jane</span>
///     </div>
/// "#;
///
/// let items = reader.read(html, "https://example.com/");
/// assert_eq!(items.len(), 1);
/// ```
pub struct HtmlReader<R> {
    reader: R,
}

impl<R: Reader> HtmlReader<R> {
    /// Wraps a reader (or a whole chain; [`crate::ReaderChain`] is itself a
    /// reader).
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Reads the top-level items contained in the given HTML string.
    ///
    /// `url` is the URL the document was retrieved from, used only to
    /// resolve relative URLs in property values.
    pub fn read(&self, html: &str, url: &str) -> Vec<Item> {
        let document = Html::parse_document(html);
        self.reader.read(&document, url)
    }

    /// Reads the top-level items contained in the given HTML file.
    pub fn read_file(&self, path: impl AsRef<Path>, url: &str) -> Result<Vec<Item>> {
        let html = fs::read_to_string(path)?;
        Ok(self.read(&html, url))
    }
}

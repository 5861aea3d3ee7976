//! # structured-data
//!
//! Extract structured data embedded in HTML documents.
//!
//! Web pages carry machine-readable annotations alongside their visible
//! content, most commonly schema.org vocabulary expressed in one of two
//! independent micro-syntaxes:
//!
//! - **Microdata**: attribute-based annotations on HTML elements
//!   (`itemscope`, `itemtype`, `itemprop`, `itemid`)
//! - **JSON-LD**: JSON objects embedded in
//!   `<script type="application/ld+json">` blocks
//!
//! This library reads both and produces a forest of typed,
//! property-bearing [`Item`]s, mirroring what a search engine or metadata
//! consumer would extract from the page.
//!
//! ## Basic Usage
//!
//! ```rust
//! use structured_data::{HtmlReader, JsonLdReader, MicrodataReader, ReaderChain};
//!
//! let html = r#"
//!     <div itemscope itemtype="http://schema.org/Person">
//!         <span itemprop="name">Jane</span>
//!         <a itemprop="url" href="/jane">Homepage</a>
//!     </div>
//! "#;
//!
//! let chain = ReaderChain::new(vec![
//!     Box::new(MicrodataReader::new()),
//!     Box::new(JsonLdReader::new()),
//! ]);
//! let reader = HtmlReader::new(chain);
//!
//! let items = reader.read(html, "https://example.com/");
//!
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].types(), ["http://schema.org/Person"]);
//! assert_eq!(
//!     items[0].get_property("http://schema.org/url")[0].as_text(),
//!     Some("https://example.com/jane")
//! );
//! ```
//!
//! ## Working with a parsed document
//!
//! Each reader implements the [`Reader`] trait over an already-parsed
//! [`scraper::Html`] tree, so a document parsed once can be handed to
//! several readers:
//!
//! ```rust
//! use structured_data::{MicrodataReader, Reader};
//! use scraper::Html;
//!
//! let document = Html::parse_document("<html></html>");
//! let items = MicrodataReader::new().read(&document, "https://example.com/");
//! assert!(items.is_empty());
//! ```
//!
//! ## Failure policy
//!
//! Extraction never fails. A JSON-LD block that does not decode
//! contributes zero items; an unresolvable URL leaves the affected field
//! absent or falls back to the raw attribute value. The base URL is used
//! only for relative-URL resolution and is never dereferenced.
//!
//! ## Scope
//!
//! The readers cover the subset of each syntax found on real pages.
//! Microdata's `itemref` attribute, external JSON-LD `@context`
//! documents, `@base`, and schema validation are out of scope.

mod error;
mod html;
mod item;
mod json_ld;
mod microdata;
mod reader;
mod resolve;

// Public exports
pub use error::{Result, StructuredDataError};
pub use html::HtmlReader;
pub use item::{Item, PropertyValue};
pub use json_ld::JsonLdReader;
pub use microdata::MicrodataReader;
pub use reader::{Reader, ReaderChain};

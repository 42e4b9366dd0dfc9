//! # Bookshelf Architecture
//!
//! Bookshelf is an **in-memory ordered index of books**. Books are kept in an
//! unbalanced binary search tree whose order is not a single key but a
//! configurable chain of attributes.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Index (index.rs)                                           │
//! │  - OrderedIndex / Bookshelf: insert, contains, queries      │
//! │  - Rendering and order description                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Ordering (attributes.rs)                                   │
//! │  - Attribute tags and the validated SortOrder chain         │
//! │  - The comparator shared by insert and contains             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (node.rs)                                          │
//! │  - Owned tree nodes, one record and up to two children      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```
//! use bookshelf::attributes::Attribute::*;
//! use bookshelf::index::Bookshelf;
//! use bookshelf::model::Book;
//!
//! let mut shelf = Bookshelf::new(&[Author, Title, PageCount, Id]).unwrap();
//! shelf.insert(Book::new(0, "Good Omens", 288, "Gaiman, Neil")).unwrap();
//! shelf.insert(Book::new(1, "2001", 296, "Clarke, Arthur C")).unwrap();
//!
//! assert_eq!(shelf.len(), 2);
//! assert!(shelf.insert(Book::new(0, "Good Omens", 288, "Gaiman, Neil")).is_err());
//! assert_eq!(shelf.books_by_author("Clarke, Arthur C").len(), 1);
//! ```
//!
//! ## Key Principle: No I/O in the Core
//!
//! The index never writes to stdout/stderr. Diagnostics go through
//! [`tracing`] events; installing a subscriber is up to the caller.
//!
//! ## Module Overview
//!
//! - [`index`]: The ordered index and the `Bookshelf` alias
//! - [`attributes`]: Attribute tags, sort orders and the comparator
//! - [`node`]: Tree nodes
//! - [`model`]: The `Record` contract and the `Book` record
//! - [`config`]: Loading a sort order from `bookshelf.toml`
//! - [`error`]: Error types

pub mod attributes;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod node;

pub use attributes::{Attribute, SortOrder};
pub use error::{ConfigurationError, Result, ShelfError};
pub use index::{Bookshelf, OrderedIndex};
pub use model::{Book, Record};

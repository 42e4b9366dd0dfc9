//! # Domain Model
//!
//! This module defines the [`Record`] contract the shelf orders by and the one
//! record the crate ships with, [`Book`].
//!
//! ## The Record Contract
//!
//! A shelf knows nothing about a record beyond:
//! - A primary key (the author) used by [`crate::index::OrderedIndex::by_primary`].
//! - A three-way comparison per [`Attribute`].
//! - Value equality and a text rendering.
//!
//! ## Book Rendering
//!
//! ```text
//! 0: "Good Omens", Gaiman, Neil (288)
//! ```
//!
//! Authors are stored as a single `"Last, First"` string, so comparing by
//! author orders by last name first.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attributes::Attribute;

/// Anything that can be placed on a shelf.
pub trait Record: fmt::Display + PartialEq {
    /// Type of the primary (author) attribute.
    type Key: PartialEq + ?Sized;

    fn primary_key(&self) -> &Self::Key;

    /// Compares `self` to `other` on a single attribute.
    fn compare_by(&self, other: &Self, attribute: Attribute) -> Ordering;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub page_count: u32,
    /// Formatted as `"Last, First"`.
    pub author: String,
}

impl Book {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        page_count: u32,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            page_count,
            author: author.into(),
        }
    }

    /// Builds the author string from separate name parts.
    pub fn with_author_name(
        id: u32,
        title: impl Into<String>,
        page_count: u32,
        last: &str,
        first: &str,
    ) -> Self {
        Self::new(id, title, page_count, format!("{}, {}", last, first))
    }
}

impl Record for Book {
    type Key = str;

    fn primary_key(&self) -> &str {
        &self.author
    }

    fn compare_by(&self, other: &Self, attribute: Attribute) -> Ordering {
        match attribute {
            Attribute::Author => self.author.cmp(&other.author),
            Attribute::Title => self.title.cmp(&other.title),
            Attribute::PageCount => self.page_count.cmp(&other.page_count),
            Attribute::Id => self.id.cmp(&other.id),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: \"{}\", {} ({})",
            self.id, self.title, self.author, self.page_count
        )
    }
}

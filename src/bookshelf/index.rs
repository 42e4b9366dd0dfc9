//! # The Ordered Index
//!
//! [`OrderedIndex`] is an unbalanced binary search tree. Its shape is decided
//! entirely by insertion order and by the [`SortOrder`] it was built with.
//!
//! ## Ordering
//!
//! Every comparison goes through [`SortOrder::rank`]:
//!
//! ```text
//! author differs?      -> author decides
//! else sort_order[1]   -> first non-equal result decides
//! else sort_order[2]
//! else sort_order[3]
//! else                 -> DuplicateRecord
//! ```
//!
//! So two books by the same author always sort next to each other in
//! [`OrderedIndex::render`], whatever the rest of the chain says.
//!
//! ## Duplicates
//!
//! A record that matches an existing one on all four attributes is rejected
//! as soon as the insertion walk meets it. Nothing is attached and the size is
//! unchanged. [`OrderedIndex::contains`] walks the same path with the same
//! comparator, so a `contains` check before inserting agrees with the
//! duplicate check.
//!
//! ## Author Queries
//!
//! [`OrderedIndex::by_primary`] scans every node. Books by one author can sit
//! in different subtrees once other attributes break ties, so the tree shape
//! cannot be used to prune the search.

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, warn};

use crate::attributes::{Attribute, SortOrder};
use crate::config::BookshelfConfig;
use crate::error::Result;
use crate::model::{Book, Record};
use crate::node::Node;

/// A bookshelf ordered by author, then by the configured fallbacks.
pub type Bookshelf = OrderedIndex<Book>;

#[derive(Debug)]
pub struct OrderedIndex<R> {
    root: Option<Box<Node<R>>>,
    len: usize,
    order: SortOrder,
}

impl<R: Record> OrderedIndex<R> {
    /// Create an empty index ordered by `attrs`.
    ///
    /// Fails with [`crate::error::ShelfError::Configuration`] unless `attrs`
    /// names all four attributes once each, author first.
    pub fn new(attrs: &[Attribute]) -> Result<Self> {
        let order = SortOrder::new(attrs)?;
        Ok(Self::with_order(order))
    }

    pub fn with_order(order: SortOrder) -> Self {
        debug!(order = %order, "created ordered index");
        Self {
            root: None,
            len: 0,
            order,
        }
    }

    pub fn from_config(config: &BookshelfConfig) -> Result<Self> {
        Ok(Self::with_order(config.sort_order()?))
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
        debug!("cleared ordered index");
    }

    /// Insert a record.
    ///
    /// Returns [`crate::error::ShelfError::DuplicateRecord`] if a record equal
    /// on every attribute is already present; the index is unchanged then.
    pub fn insert(&mut self, record: R) -> Result<()> {
        let mut slot = &mut self.root;

        while let Some(node) = slot {
            let ord = match self.order.rank(&record, node.data()) {
                Ok(ord) => ord,
                Err(err) => {
                    warn!(error = %err, "rejected insertion");
                    return Err(err);
                }
            };
            slot = node.child_slot(ord);
        }

        *slot = Some(Box::new(Node::new(record)));
        self.len += 1;
        debug!(size = self.len, "record attached");
        Ok(())
    }

    /// Whether a record equal on every attribute is present.
    pub fn contains(&self, record: &R) -> bool {
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            if record == node.data() {
                return true;
            }
            current = match self.order.rank(record, node.data()) {
                Ok(Ordering::Less) => node.left(),
                Ok(_) => node.right(),
                // All four attributes match this node.
                Err(_) => return true,
            };
        }

        false
    }

    /// Every record whose primary key equals `key`, in traversal order.
    pub fn by_primary(&self, key: &R::Key) -> Vec<&R> {
        self.iter()
            .filter(|record| record.primary_key() == key)
            .collect()
    }

    pub fn rank(&self, a: &R, b: &R) -> Result<Ordering> {
        self.order.rank(a, b)
    }

    /// In-order iterator over the records, smallest first.
    pub fn iter(&self) -> Iter<'_, R> {
        Iter::new(self.root.as_deref())
    }

    pub fn root(&self) -> Option<&Node<R>> {
        self.root.as_deref()
    }

    pub fn sort_order(&self) -> &SortOrder {
        &self.order
    }

    /// The configured chain as `1:AUTHOR 2:TITLE 3:PAGECOUNT 4:ID`.
    pub fn describe_order(&self) -> String {
        self.order.describe()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One record per line, in ascending order. Empty for an empty index.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl OrderedIndex<Book> {
    pub fn books_by_author(&self, author: &str) -> Vec<&Book> {
        self.by_primary(author)
    }
}

impl<R: Record> Default for OrderedIndex<R> {
    fn default() -> Self {
        Self::with_order(SortOrder::default())
    }
}

impl<R: Record> fmt::Display for OrderedIndex<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in self.iter() {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}

impl<'a, R: Record> IntoIterator for &'a OrderedIndex<R> {
    type Item = &'a R;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order traversal driven by an explicit stack of pending ancestors.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.data())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct ShelfFixture {
        pub shelf: Bookshelf,
    }

    impl Default for ShelfFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ShelfFixture {
        pub fn new() -> Self {
            Self {
                shelf: Bookshelf::default(),
            }
        }

        pub fn with_order(attrs: &[Attribute]) -> Self {
            Self {
                shelf: Bookshelf::new(attrs).unwrap(),
            }
        }

        pub fn with_book(mut self, id: u32, title: &str, pages: u32, author: &str) -> Self {
            self.shelf.insert(Book::new(id, title, pages, author)).unwrap();
            self
        }

        /// Eight books, two of them by the same author.
        pub fn with_library(self) -> Self {
            self.with_book(0, "Good Omens", 288, "Gaiman, Neil")
                .with_book(1, "FEED", 608, "Grant, Mira")
                .with_book(2, "Snow Crash", 468, "Stephenson, Neal")
                .with_book(3, "2001", 296, "Clarke, Arthur C")
                .with_book(4, "Legend", 284, "Liu, Marie")
                .with_book(5, "Genki", 382, "Banno, Eri")
                .with_book(6, "Genki Workbook", 148, "Shinagawa, Chikaka")
                .with_book(7, "Champion", 302, "Liu, Marie")
        }
    }
}

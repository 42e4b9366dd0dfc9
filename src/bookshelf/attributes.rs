//! # Attributes and Sort Orders
//!
//! Every record on a shelf exposes the same four attributes. A [`SortOrder`]
//! names all four in priority order and drives the shelf's comparator.
//!
//! ## Validity
//!
//! A sort order is valid when:
//! - It has exactly four entries, none of them absent.
//! - The first entry is [`Attribute::PRIMARY`] (the author).
//! - Each attribute appears exactly once.
//!
//! ## Comparison
//!
//! [`SortOrder::rank`] always compares the primary attribute first, then falls
//! back to positions 2, 3 and 4 in turn. Two records equal on all four are the
//! same record, which is reported as [`ShelfError::DuplicateRecord`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigurationError, Result, ShelfError};
use crate::model::Record;

/// One of the four attributes a record can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Author,
    Title,
    PageCount,
    Id,
}

impl Attribute {
    /// The attribute every comparison starts with.
    pub const PRIMARY: Attribute = Attribute::Author;

    /// All attributes, in declaration order.
    pub const ALL: [Attribute; 4] = [
        Attribute::Author,
        Attribute::Title,
        Attribute::PageCount,
        Attribute::Id,
    ];

    /// Stable name used in order descriptions and configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Author => "AUTHOR",
            Attribute::Title => "TITLE",
            Attribute::PageCount => "PAGECOUNT",
            Attribute::Id => "ID",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim();
        Attribute::ALL
            .into_iter()
            .find(|attr| attr.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigurationError::UnknownAttribute(name.to_string()))
    }
}

/// A validated, immutable priority chain over all four attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder([Attribute; 4]);

impl SortOrder {
    /// Builds a sort order from a list of attributes.
    pub fn new(attrs: &[Attribute]) -> std::result::Result<Self, ConfigurationError> {
        let slots: Vec<Option<Attribute>> = attrs.iter().copied().map(Some).collect();
        Self::from_slots(&slots)
    }

    /// Builds a sort order from slots that may be empty.
    ///
    /// Checks run in a fixed sequence: length, absent entries, primary slot,
    /// then set equality with [`Attribute::ALL`].
    pub fn from_slots(
        slots: &[Option<Attribute>],
    ) -> std::result::Result<Self, ConfigurationError> {
        if slots.len() != Attribute::ALL.len() {
            return Err(ConfigurationError::WrongLength(slots.len()));
        }

        let mut chain = [Attribute::PRIMARY; 4];
        for (pos, slot) in slots.iter().enumerate() {
            chain[pos] = slot.ok_or(ConfigurationError::MissingEntry(pos))?;
        }

        if chain[0] != Attribute::PRIMARY {
            return Err(ConfigurationError::PrimaryNotFirst(chain[0]));
        }

        // Four slots holding four distinct tags is the full set.
        let covers_all = Attribute::ALL.iter().all(|attr| chain.contains(attr));
        if !covers_all {
            return Err(ConfigurationError::NotUnique);
        }

        Ok(Self(chain))
    }

    pub fn attributes(&self) -> &[Attribute; 4] {
        &self.0
    }

    /// Attributes consulted after the primary one, in priority order.
    pub fn fallbacks(&self) -> &[Attribute] {
        &self.0[1..]
    }

    /// Renders the chain as `1:AUTHOR 2:TITLE 3:PAGECOUNT 4:ID`.
    pub fn describe(&self) -> String {
        self.0
            .iter()
            .enumerate()
            .map(|(i, attr)| format!("{}:{}", i + 1, attr))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Orders `a` relative to `b`.
    ///
    /// Never returns [`Ordering::Equal`]: records that match on every
    /// attribute yield [`ShelfError::DuplicateRecord`] instead.
    pub fn rank<R: Record>(&self, a: &R, b: &R) -> Result<Ordering> {
        let primary = a.compare_by(b, Attribute::PRIMARY);
        if primary != Ordering::Equal {
            return Ok(primary);
        }

        for attr in self.fallbacks() {
            match a.compare_by(b, *attr) {
                Ordering::Equal => continue,
                ord => return Ok(ord),
            }
        }

        Err(ShelfError::DuplicateRecord(a.to_string()))
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self(Attribute::ALL)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl TryFrom<&[Attribute]> for SortOrder {
    type Error = ConfigurationError;

    fn try_from(attrs: &[Attribute]) -> std::result::Result<Self, Self::Error> {
        Self::new(attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attribute::*;
    use crate::model::Book;

    #[test]
    fn test_names_are_stable() {
        assert_eq!(Author.name(), "AUTHOR");
        assert_eq!(Title.name(), "TITLE");
        assert_eq!(PageCount.name(), "PAGECOUNT");
        assert_eq!(Id.name(), "ID");
    }

    #[test]
    fn test_parses_names_case_insensitively() {
        assert_eq!("author".parse::<Attribute>(), Ok(Author));
        assert_eq!(" PageCount ".parse::<Attribute>(), Ok(PageCount));
        assert_eq!(
            "isbn".parse::<Attribute>(),
            Err(ConfigurationError::UnknownAttribute("isbn".into()))
        );
    }

    #[test]
    fn test_empty_order_is_rejected() {
        assert_eq!(
            SortOrder::new(&[]),
            Err(ConfigurationError::WrongLength(0))
        );
    }

    #[test]
    fn test_five_slots_are_rejected() {
        let slots = [None; 5];
        assert_eq!(
            SortOrder::from_slots(&slots),
            Err(ConfigurationError::WrongLength(5))
        );
    }

    #[test]
    fn test_absent_entry_is_rejected() {
        let slots = [Some(Author), Some(Title), None, Some(Id)];
        assert_eq!(
            SortOrder::from_slots(&slots),
            Err(ConfigurationError::MissingEntry(2))
        );
    }

    #[test]
    fn test_repeated_attribute_is_rejected() {
        assert_eq!(
            SortOrder::new(&[Author, PageCount, Title, Author]),
            Err(ConfigurationError::NotUnique)
        );
    }

    #[test]
    fn test_author_must_come_first() {
        assert_eq!(
            SortOrder::new(&[PageCount, Author, Title, Id]),
            Err(ConfigurationError::PrimaryNotFirst(PageCount))
        );
    }

    #[test]
    fn test_valid_order_is_accepted() {
        let order = SortOrder::new(&[Author, PageCount, Id, Title]).unwrap();
        assert_eq!(order.attributes(), &[Author, PageCount, Id, Title]);
        assert_eq!(order.fallbacks(), &[PageCount, Id, Title]);
    }

    #[test]
    fn test_describe_uses_configured_order() {
        let order = SortOrder::new(&[Author, PageCount, Id, Title]).unwrap();
        assert_eq!(order.describe(), "1:AUTHOR 2:PAGECOUNT 3:ID 4:TITLE");
        assert_eq!(
            SortOrder::default().to_string(),
            "1:AUTHOR 2:TITLE 3:PAGECOUNT 4:ID"
        );
    }

    #[test]
    fn test_rank_prefers_author_over_everything() {
        let order = SortOrder::new(&[Author, Id, PageCount, Title]).unwrap();
        let clarke = Book::new(9, "2001", 296, "Clarke, Arthur C");
        let gaiman = Book::new(0, "Good Omens", 288, "Gaiman, Neil");
        assert_eq!(order.rank(&clarke, &gaiman).unwrap(), Ordering::Less);
        assert_eq!(order.rank(&gaiman, &clarke).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_rank_falls_back_through_the_chain() {
        let order = SortOrder::new(&[Author, Title, PageCount, Id]).unwrap();
        let a = Book::new(1, "Legend", 284, "Liu, Marie");
        let b = Book::new(2, "Legend", 284, "Liu, Marie");
        // Same author, title and page count: the id decides.
        assert_eq!(order.rank(&a, &b).unwrap(), Ordering::Less);

        let c = Book::new(3, "Legend", 300, "Liu, Marie");
        assert_eq!(order.rank(&c, &a).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_rank_reports_identical_records() {
        let order = SortOrder::default();
        let a = Book::new(1, "Legend", 284, "Liu, Marie");
        let err = order.rank(&a, &a.clone()).unwrap_err();
        assert!(matches!(err, ShelfError::DuplicateRecord(_)));
    }
}

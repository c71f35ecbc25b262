use crate::lang::ast::Statement;
use crate::lang::{Line, LineNumber};
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

/// ## Stored program lines
///
/// Source text and parsed statement live in one entry, so they are always
/// inserted, replaced and removed together.

#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: BTreeMap<LineNumber, (Line, Statement)>,
}

impl Listing {
    pub fn clear(&mut self) {
        self.source.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn contains(&self, ln: LineNumber) -> bool {
        self.source.contains_key(&ln)
    }

    /// Replaces any previous entry for the same line number.
    pub fn insert(&mut self, ln: LineNumber, line: Line, statement: Statement) -> Option<Line> {
        self.source.insert(ln, (line, statement)).map(|(line, _)| line)
    }

    pub fn remove(&mut self, ln: LineNumber) -> Option<Line> {
        self.source.remove(&ln).map(|(line, _)| line)
    }

    pub fn line(&self, ln: LineNumber) -> Option<&Line> {
        self.source.get(&ln).map(|(line, _)| line)
    }

    pub fn statement(&self, ln: LineNumber) -> Option<&Statement> {
        self.source.get(&ln).map(|(_, statement)| statement)
    }

    pub fn first(&self) -> Option<LineNumber> {
        self.source.keys().next().copied()
    }

    /// Smallest stored line number strictly greater than `ln`.
    pub fn next_after(&self, ln: LineNumber) -> Option<LineNumber> {
        self.source
            .range((Excluded(ln), Unbounded))
            .next()
            .map(|(k, _)| *k)
    }

    /// Ascending by line number.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.source.values().map(|(line, _)| line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(s: &str) -> (LineNumber, Line, Statement) {
        let line = Line::new(s);
        let statement = line.ast().unwrap();
        (line.number().unwrap(), line, statement)
    }

    fn insert(listing: &mut Listing, s: &str) -> Option<Line> {
        let (ln, line, statement) = entry(s);
        listing.insert(ln, line, statement)
    }

    #[test]
    fn test_lines_are_ascending() {
        let mut listing = Listing::default();
        insert(&mut listing, "30 END");
        insert(&mut listing, "10 PRINT 1");
        insert(&mut listing, "20 REM two");
        let listed: Vec<String> = listing.lines().map(|l| l.to_string()).collect();
        assert_eq!(listed, vec!["10 PRINT 1", "20 REM two", "30 END"]);
    }

    #[test]
    fn test_redefine_replaces_text_and_statement() {
        let mut listing = Listing::default();
        insert(&mut listing, "10 PRINT 1");
        let old = insert(&mut listing, "10 END");
        assert_eq!(old.map(|l| l.to_string()), Some("10 PRINT 1".to_string()));
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.statement(10), Some(&Statement::End));
        assert_eq!(listing.line(10).map(|l| l.to_string()), Some("10 END".to_string()));
    }

    #[test]
    fn test_remove_drops_both() {
        let mut listing = Listing::default();
        insert(&mut listing, "10 END");
        assert!(listing.remove(10).is_some());
        assert!(listing.statement(10).is_none());
        assert!(listing.line(10).is_none());
        assert!(listing.remove(10).is_none());
        assert!(listing.is_empty());
    }

    #[test]
    fn test_next_after() {
        let mut listing = Listing::default();
        insert(&mut listing, "10 END");
        insert(&mut listing, "25 END");
        assert_eq!(listing.first(), Some(10));
        assert_eq!(listing.next_after(10), Some(25));
        assert_eq!(listing.next_after(11), Some(25));
        assert_eq!(listing.next_after(25), None);
    }
}

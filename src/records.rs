//! Provides `ParsedFile`, the records of one input file. A record is a line of
//! whitespace-separated fields: the first field is the record's key (usually a
//! path) and the rest are its patterns.
//!
//! Keys and patterns are borrowed from the operand's text, so parsing a file
//! copies nothing but the bookkeeping.
use bstr::{BStr, ByteSlice};
use fxhash::FxBuildHasher;
use indexmap::{IndexMap, IndexSet};
use memchr::memchr2;
use std::fmt;

/// The patterns of a record. Equality ignores order; iteration (and so
/// `Display`) follows the order of first appearance on the line.
pub type PatternSet<'data> = IndexSet<&'data BStr, FxBuildHasher>;

/// The records of a file, keyed by record key.
///
/// * Keys iterate in the order of their first appearance in the file.
/// * If a key occurs on several lines, its patterns are those of the *last*
///   such line, but its position is that of the first.
pub struct ParsedFile<'data> {
    records: IndexMap<&'data BStr, PatternSet<'data>, FxBuildHasher>,
}

impl<'data> ParsedFile<'data> {
    /// Parse `text`, skipping blank lines
    #[must_use]
    pub fn parse(text: &'data [u8]) -> ParsedFile<'data> {
        let mut records = IndexMap::default();
        for (index, line) in lines_of(text).enumerate() {
            let mut fields = line.fields_with(is_separator);
            let Some(key) = fields.next() else { continue };
            let key = key.as_bstr();
            let patterns: PatternSet = fields.map(ByteSlice::as_bstr).collect();
            if records.insert(key, patterns).is_some() {
                log::debug!("line {}: record for {key} replaces an earlier one", index + 1);
            }
        }
        ParsedFile { records }
    }

    /// The patterns recorded for `key`, if any
    #[must_use]
    pub fn get(&self, key: &BStr) -> Option<&PatternSet<'data>> {
        self.records.get(key)
    }

    /// Is there a record for `key`?
    #[must_use]
    pub fn contains_key(&self, key: &BStr) -> bool {
        self.records.contains_key(key)
    }

    /// Iterate over `(key, patterns)` in key order
    pub fn iter(&self) -> impl Iterator<Item = (&'data BStr, &PatternSet<'data>)> {
        self.records.iter().map(|(key, patterns)| (*key, patterns))
    }

    /// Iterate over the keys in order
    pub fn keys(&self) -> impl Iterator<Item = &'data BStr> + '_ {
        self.records.keys().copied()
    }

    /// The number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Were there no records at all?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Iterate over the lines of `slice`. A line ends at `\n`, `\r\n`, or a lone
/// `\r`; the last line needn't end at all.
fn lines_of(mut slice: &[u8]) -> impl Iterator<Item = &[u8]> {
    std::iter::from_fn(move || {
        if slice.is_empty() {
            return None;
        }
        let line;
        match memchr2(b'\n', b'\r', slice) {
            Some(end) => {
                line = &slice[..end];
                let crlf = slice[end] == b'\r' && slice.get(end + 1) == Some(&b'\n');
                slice = &slice[end + if crlf { 2 } else { 1 }..];
            }
            None => {
                line = slice;
                slice = b"";
            }
        }
        Some(line)
    })
}

/// Fields are separated by runs of Unicode whitespace or of the ASCII
/// information separators `\x1C` through `\x1F`.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Shows a `PatternSet` as `{a, b, c}`
pub(crate) struct Braced<'a, 'data>(pub(crate) &'a PatternSet<'data>);

impl fmt::Display for Braced<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (n, pattern) in self.0.iter().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{pattern}")?;
        }
        f.write_str("}")
    }
}

//! Houses the `compare_files` function, and the pieces it's made of:
//! `discrepancies` finds what differs between two parsed files, and
//! `write_report` describes it.

use anyhow::Result;
use bstr::BStr;
use std::{io, path::Path};

use crate::operands::Operand;
use crate::records::{Braced, ParsedFile, PatternSet};
use crate::styles::{as_file, as_key, as_success, as_warning};

/// What a comparison found
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Outcome {
    /// Both files have the same keys, with the same patterns for each key
    AllMatched,
    /// At least one key is missing from a file or has different patterns
    Mismatched {
        /// How many discrepancies were found
        discrepancies: usize,
    },
}

/// A single difference between the left and right files
#[derive(PartialEq, Eq, Debug)]
pub enum Discrepancy<'a> {
    /// The key has a record in the left file only
    OnlyInLeft(&'a BStr),
    /// The key's patterns aren't the same in the two files
    PatternsDiffer {
        /// The key
        key: &'a BStr,
        /// The key's patterns in the left file
        left: &'a PatternSet<'a>,
        /// The key's patterns in the right file
        right: &'a PatternSet<'a>,
    },
    /// The key has a record in the right file only
    OnlyInRight(&'a BStr),
}

/// Reads, parses and compares the files at `left` and `right`, writing a report
/// to `out` (unless `quiet`). Both files are read before anything is compared,
/// so an unreadable file means no report at all.
pub fn compare_files(
    left: &Path,
    right: &Path,
    quiet: bool,
    out: impl io::Write,
) -> Result<Outcome> {
    let left = Operand::read(left)?;
    let right = Operand::read(right)?;
    compare_operands(&left, &right, quiet, out)
}

/// `compare_files`, minus the reading
pub fn compare_operands(
    left: &Operand,
    right: &Operand,
    quiet: bool,
    out: impl io::Write,
) -> Result<Outcome> {
    let left_records = ParsedFile::parse(left.text());
    log::info!("{}: {} records", left.name(), left_records.len());
    let right_records = ParsedFile::parse(right.text());
    log::info!("{}: {} records", right.name(), right_records.len());

    let found = discrepancies(&left_records, &right_records);
    log::info!("{} discrepancies between {} and {}", found.len(), left.name(), right.name());
    if !quiet {
        write_report(&found, left.name(), right.name(), out)?;
    }
    Ok(if found.is_empty() {
        Outcome::AllMatched
    } else {
        Outcome::Mismatched { discrepancies: found.len() }
    })
}

/// Lists the differences between `left` and `right`:
///
/// * first, in the order of `left`'s keys, each key missing from `right` or
///   whose patterns differ there, then
/// * in the order of `right`'s keys, each key missing from `left`.
#[must_use]
pub fn discrepancies<'a>(
    left: &'a ParsedFile<'a>,
    right: &'a ParsedFile<'a>,
) -> Vec<Discrepancy<'a>> {
    let mut found = Vec::new();
    for (key, left_patterns) in left.iter() {
        match right.get(key) {
            None => found.push(Discrepancy::OnlyInLeft(key)),
            Some(right_patterns) if right_patterns != left_patterns => {
                found.push(Discrepancy::PatternsDiffer {
                    key,
                    left: left_patterns,
                    right: right_patterns,
                });
            }
            Some(_) => {}
        }
    }
    let only_in_right = right.keys().filter(|key| !left.contains_key(key));
    found.extend(only_in_right.map(Discrepancy::OnlyInRight));
    found
}

/// Writes one or more lines for each discrepancy, or a line saying that all
/// records match if there are none. `left_name` and `right_name` are the names
/// to call the two files by.
pub fn write_report(
    found: &[Discrepancy],
    left_name: &str,
    right_name: &str,
    mut out: impl io::Write,
) -> Result<()> {
    let (left_file, right_file) = (as_file(left_name), as_file(right_name));
    for discrepancy in found {
        match discrepancy {
            Discrepancy::OnlyInLeft(key) => {
                writeln!(out, "{} found in {left_file} but not in {right_file}", as_key(key))?;
            }
            Discrepancy::PatternsDiffer { key, left, right } => {
                let (heading, tail) = (as_warning("Patterns for"), as_warning("do not match:"));
                writeln!(out, "{heading} {} {tail}", as_key(key))?;
                writeln!(out, "{left_file}: {}", Braced(left))?;
                writeln!(out, "{right_file}: {}", Braced(right))?;
            }
            Discrepancy::OnlyInRight(key) => {
                writeln!(out, "{} found in {right_file} but not in {left_file}", as_key(key))?;
            }
        }
    }
    if found.is_empty() {
        let all_match = format!("All lines match between {left_name} and {right_name}.");
        writeln!(out, "{}", as_success(all_match))?;
    }
    out.flush()?;
    Ok(())
}

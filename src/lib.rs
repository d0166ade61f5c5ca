//! `patcmp` compares two files of records. A record is a line of
//! whitespace-separated fields: a key followed by a set of patterns. The
//! `compare` module is the kernel of the application; the `args` module parses
//! the command line, the `operands` module reads the files, and the `records`
//! module turns their text into records.
//!
//! Current Limitations:
//! * Keys and patterns are compared byte for byte, so two spellings of the same
//!   path (`a/b.txt` and `./a/b.txt`) are different keys.
//! * Files are read into memory in their entirety.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

pub mod args;
pub mod compare;
pub mod help;
pub mod operands;
pub mod records;
mod styles;

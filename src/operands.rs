//! Provides `Operand`, the contents of one input file. Each operand is read
//! into memory in its entirety; UTF-16 files are translated to UTF-8, and a
//! UTF-8 Byte Order Mark is set aside so that it never ends up as part of the
//! first key.
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// An input file's display name and contents
pub struct Operand {
    path_display: String,
    contents: Vec<u8>,
}

impl Operand {
    /// Read the file at `path`. The error for an unreadable file names the file.
    pub fn read(path: &Path) -> Result<Operand> {
        let path_display = format!("{}", path.display());
        let raw =
            fs::read(path).with_context(|| format!("Can't read file: {path_display}"))?;
        log::debug!("read {} bytes from {path_display}", raw.len());
        Ok(Operand::from_bytes(path_display, raw))
    }

    /// Make an `Operand` from bytes already in memory
    #[must_use]
    pub fn from_bytes(path_display: String, raw: Vec<u8>) -> Operand {
        let contents = decode_if_utf16(raw);
        Operand { path_display, contents }
    }

    /// The path as given on the command line, formatted for messages
    #[must_use]
    pub fn name(&self) -> &str {
        &self.path_display
    }

    /// The file's text, UTF-8 (or whatever it was) without a Byte Order Mark
    #[must_use]
    pub fn text(&self) -> &[u8] {
        self.contents.strip_prefix(BOM_BYTES).unwrap_or(&self.contents)
    }
}

const BOM_BYTES: &[u8] = b"\xEF\xBB\xBF";

/// Decode UTF-16 to UTF-8 if we see a UTF-16 Byte Order Mark at the beginning of `candidate`.
/// Otherwise return `candidate` unchanged
fn decode_if_utf16(candidate: Vec<u8>) -> Vec<u8> {
    // `decode_without_bom_handling` turns malformed sequences into the Unicode
    // REPLACEMENT CHARACTER, and turns the UTF-16 BOM into a UTF-8 BOM
    if let Some((enc, _)) = encoding_rs::Encoding::for_bom(&candidate) {
        if [encoding_rs::UTF_16LE, encoding_rs::UTF_16BE].contains(&enc) {
            let (translated, had_malformed_sequences) =
                enc.decode_without_bom_handling(&candidate);
            log::debug!("translated {} input to UTF-8", enc.name());
            if had_malformed_sequences {
                log::warn!("malformed {} sequences replaced with U+FFFD", enc.name());
            }
            return translated.into_owned().into_bytes();
        }
    }
    return candidate;
}

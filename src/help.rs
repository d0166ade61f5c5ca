//! Prints `patcmp`'s help and version messages. The help text itself is in
//! `help.txt`, in a lightweight format:
//!
//! * A line starting `Usage: ` is the usage line,
//! * a line ending with `:` is a section title, followed by its entries, one
//!   per line, each an item and a caption separated by the line's last double
//!   space, up to a blank line, and
//! * any other line is a paragraph, wrapped to the width of the terminal.
use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use std::io::Write;
use terminal_size::{terminal_size, Width};

use crate::args::ColorChoice;
use crate::styles::{app_name, as_item, as_title, Styled};

enum HelpItem<'a> {
    Usage(&'a str),
    Paragraph(&'a str),
    Section { title: &'a str, entries: Vec<Entry<'a>> },
}
struct Entry<'a> {
    item: &'a str,
    caption: &'a str,
}

fn name() -> Styled<&'static str> {
    app_name("patcmp")
}

/// `patcmp` followed by the version number
pub(crate) fn version() -> String {
    let version = std::env!("CARGO_PKG_VERSION");
    format!("{} {version}", name())
}

/// Write the version message to stdout
pub fn print_version(color_choice: ColorChoice) -> Result<()> {
    let mut stdout = anstream::AutoStream::new(std::io::stdout().lock(), color_choice.into());
    if let Err(e) = writeln!(stdout, "{}", version()) {
        bail!("failed printing to stdout: {e}");
    }
    Ok(())
}

/// Write the help message to stdout
pub fn print(color_choice: ColorChoice) -> Result<()> {
    let mut stdout = anstream::AutoStream::new(std::io::stdout().lock(), color_choice.into());
    if let Err(e) = write_help(&mut stdout, WIDTH.0) {
        bail!("failed printing to stdout: {e}");
    }
    Ok(())
}

fn write_help(out: &mut dyn Write, width: usize) -> std::io::Result<()> {
    writeln!(out, "{}", version())?;
    for help_item in parse(include_str!("help.txt")) {
        match help_item {
            HelpItem::Usage(args) => writeln!(out, "{}{}{args}", as_title("Usage: "), name())?,
            HelpItem::Paragraph(text) => {
                for line in textwrap::wrap(text, width) {
                    writeln!(out, "{line}")?;
                }
            }
            HelpItem::Section { title, entries } => {
                writeln!(out, "{}", as_title(title))?;
                write_entries(out, &entries, width)?;
            }
        }
    }
    out.flush()
}

/// Entries are printed with their captions lined up in a column after the
/// longest item. If that leaves too little room for the captions, each
/// caption goes on the line after its item instead.
fn write_entries(out: &mut dyn Write, entries: &[Entry], width: usize) -> std::io::Result<()> {
    const MIN_CAPTION_WIDTH: usize = 30;
    let column = entries.iter().map(|e| as_item(e.item).len()).max().unwrap_or(0) + 2;
    if column + MIN_CAPTION_WIDTH <= width {
        let indent = " ".repeat(column);
        for entry in entries {
            let options = textwrap::Options::new(width.saturating_sub(column));
            for (n, line) in textwrap::wrap(entry.caption, options).iter().enumerate() {
                if n == 0 {
                    let padding = " ".repeat(column - entry.item.len());
                    writeln!(out, "{}{padding}{line}", as_item(entry.item))?;
                } else {
                    writeln!(out, "{indent}{line}")?;
                }
            }
        }
    } else {
        let depth = entries.iter().map(|e| as_item(e.item).indented_by()).max().unwrap_or(0);
        let indent = " ".repeat(depth + 4);
        for entry in entries {
            writeln!(out, "{}", as_item(entry.item))?;
            let options =
                textwrap::Options::new(width).initial_indent(&indent).subsequent_indent(&indent);
            for line in textwrap::wrap(entry.caption, options) {
                writeln!(out, "{line}")?;
            }
        }
    }
    Ok(())
}

fn parse(text: &str) -> Vec<HelpItem> {
    const USAGE: &str = "Usage: ";
    let mut help = Vec::new();
    let mut lines = text.lines();
    while let Some(line) = lines.next() {
        if let Some(rest) = line.strip_prefix(USAGE) {
            // Drop the program name; `name()` supplies a styled one
            let args = rest.find(' ').map_or("", |space| &rest[space..]);
            help.push(HelpItem::Usage(args));
        } else if line.ends_with(':') {
            let mut entries = Vec::new();
            let mut blank_follows = false;
            for entry in lines.by_ref() {
                let entry = entry.trim_end();
                if entry.is_empty() {
                    blank_follows = true;
                    break;
                }
                let (item, caption) = match entry.rfind("  ") {
                    Some(sp_sp) => (&entry[..sp_sp], &entry[sp_sp + 2..]),
                    None => (entry, ""),
                };
                entries.push(Entry { item, caption });
            }
            help.push(HelpItem::Section { title: line, entries });
            if blank_follows {
                help.push(HelpItem::Paragraph(""));
            }
        } else {
            help.push(HelpItem::Paragraph(line));
        }
    }
    help
}

/// The terminal width, or failing that `$COLUMNS`, or failing that 100
struct LineWidth(usize);
static WIDTH: Lazy<LineWidth> = Lazy::new(|| {
    fn from_env() -> Option<usize> {
        std::env::var_os("COLUMNS")?.to_str()?.parse::<usize>().ok()
    }
    match terminal_size() {
        Some((Width(width), _)) => LineWidth(usize::from(width)),
        None => LineWidth(from_env().unwrap_or(100)),
    }
});

use anstyle::{AnsiColor, Color, Style};
use std::fmt;

use crate::args::ColorChoice;

const GREEN: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));
const BOLD_GREEN: Style = GREEN.bold();
const YELLOW: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));
const BOLD: Style = Style::new().bold();

impl From<ColorChoice> for anstream::ColorChoice {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => anstream::ColorChoice::Auto,
            ColorChoice::Always => anstream::ColorChoice::Always,
            ColorChoice::Never => anstream::ColorChoice::Never,
        }
    }
}

// Report styles
pub(crate) fn as_key<T: fmt::Display>(content: T) -> Styled<T> {
    Styled { prefix: GREEN, content }
}
pub(crate) fn as_file<T: fmt::Display>(content: T) -> Styled<T> {
    Styled { prefix: BOLD, content }
}
pub(crate) fn as_warning<T: fmt::Display>(content: T) -> Styled<T> {
    Styled { prefix: YELLOW, content }
}
pub(crate) fn as_success<T: fmt::Display>(content: T) -> Styled<T> {
    Styled { prefix: BOLD_GREEN, content }
}

// Help styles
pub(crate) fn app_name(content: &str) -> Styled<&str> {
    Styled { prefix: BOLD_GREEN, content }
}
pub(crate) fn as_item(content: &str) -> Styled<&str> {
    Styled { prefix: GREEN, content }
}
pub(crate) fn as_title(content: &str) -> Styled<&str> {
    Styled { prefix: YELLOW, content }
}

/// Content that displays wrapped in its style's escape codes. Whether those
/// codes reach the terminal is up to the `anstream::AutoStream` it's written to.
pub(crate) struct Styled<T> {
    prefix: Style,
    content: T,
}
impl Styled<&str> {
    /// Width on the screen, not counting escapes
    pub(crate) fn len(&self) -> usize {
        self.content.len()
    }
    /// Number of leading blanks
    pub(crate) fn indented_by(&self) -> usize {
        self.content.len() - self.content.trim_start_matches(' ').len()
    }
}
impl<T: fmt::Display> fmt::Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix.render(), self.content, self.prefix.render_reset())
    }
}

//! Terminal capability detection and styling.

use nudge::ReaderKind;
use owo_colors::{OwoColorize, colors::css};

/// Detects whether colored output should be enabled
fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Detects terminal width, returning None if not available
fn terminal_width() -> Option<u16> {
    terminal_size::terminal_size().map(|(w, _)| w.0)
}

/// Check if terminal is narrow (< 60 columns)
pub fn is_narrow() -> bool {
    terminal_width().map_or(false, |w| w < 60)
}

/// The resolved presentation settings for one process: whether color is
/// enabled and which flavor accent to use.
///
/// A [`Style`] is built once at startup and passed to the rendering layer;
/// there is no global styling state.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    colored: bool,
    kind: Option<ReaderKind>,
}

impl Style {
    /// Resolves the style from the reader flavor and an optional color
    /// override, falling back to terminal detection when no override is
    /// configured.
    pub fn detect(kind: Option<ReaderKind>, color: Option<bool>) -> Self {
        Self {
            colored: color.unwrap_or_else(supports_color),
            kind,
        }
    }

    /// The reader flavor this style is accented for.
    pub const fn kind(&self) -> Option<ReaderKind> {
        self.kind
    }

    /// Paints the status tag for an item: `[done]` green, `[open]` amber.
    pub fn status(&self, completed: bool) -> String {
        if completed {
            self.ok("[done]")
        } else {
            self.warn("[open]")
        }
    }

    /// Color as success (green)
    pub fn ok(&self, text: &str) -> String {
        if self.colored {
            text.fg::<css::Green>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Color as warning (amber)
    pub fn warn(&self, text: &str) -> String {
        if self.colored {
            text.fg::<css::Orange>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Color as error (red)
    pub fn err(&self, text: &str) -> String {
        if self.colored {
            text.fg::<css::Red>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Color as a link target (cyan)
    pub fn link(&self, text: &str) -> String {
        if self.colored {
            text.fg::<css::Aqua>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Dim the text
    pub fn dim(&self, text: &str) -> String {
        if self.colored {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    /// Paint with the flavor accent: green for todo, blue for read, gold
    /// for ques, cyan when no flavor is set.
    pub fn accent(&self, text: &str) -> String {
        if !self.colored {
            return text.to_string();
        }
        match self.kind {
            Some(ReaderKind::Todo) => text.fg::<css::Green>().to_string(),
            Some(ReaderKind::Read) => text.fg::<css::LightBlue>().to_string(),
            Some(ReaderKind::Ques) => text.fg::<css::Gold>().to_string(),
            None => text.fg::<css::Aqua>().to_string(),
        }
    }

    /// Clears the screen between interactive views.
    ///
    /// Terminals without color support keep their scrollback untouched.
    pub fn clear_screen(&self) {
        if self.colored {
            print!("\x1b[2J\x1b[1;1H");
        }
    }
}

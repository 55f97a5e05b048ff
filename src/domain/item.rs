use std::sync::LazyLock;

use regex::Regex;

/// Matches the first embedded markdown link in a line of item text.
///
/// Both captures are shortest-possible, so `[a](1) [b](2)` yields `a`/`1`.
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("link pattern is valid"));

/// An embedded markdown link of the form `[label](target)`.
///
/// The label and target always travel together: an [`Item`] either carries a
/// whole link or none at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// The display label between the square brackets.
    pub title: String,
    /// The link target between the parentheses.
    ///
    /// No validation is performed; the target is not required to look like a
    /// URL.
    pub url: String,
}

impl Link {
    /// Extracts the first embedded link from item text, if any.
    ///
    /// Only the first match counts; later links in the same line are ignored.
    #[must_use]
    pub fn extract(text: &str) -> Option<Self> {
        LINK.captures(text).map(|captures| Self {
            title: captures[1].to_string(),
            url: captures[2].to_string(),
        })
    }
}

/// One checklist line's parsed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// The text following the checkbox marker, trimmed.
    pub text: String,
    /// The first embedded `[label](target)` link, if the text contains one.
    pub link: Option<Link>,
    /// Whether the checkbox marker was exactly lowercase `x`.
    pub completed: bool,
}

impl Item {
    /// Builds an item from the free text after the checkbox marker.
    #[must_use]
    pub fn new(text: &str, completed: bool) -> Self {
        let text = text.trim().to_string();
        let link = Link::extract(&text);
        Self {
            text,
            link,
            completed,
        }
    }

    /// The preferred display label: the link title when a link is present,
    /// otherwise the raw text.
    #[must_use]
    pub fn label(&self) -> &str {
        self.link.as_ref().map_or(&self.text, |link| &link.title)
    }

    /// The link target, if the item carries a link.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.link.as_ref().map(|link| link.url.as_str())
    }
}

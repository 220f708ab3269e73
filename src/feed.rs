//! Mention highlighting for the raw complaint feed.
//!
//! A pure formatting transform: complaint text is split on whitespace,
//! `@mention` tokens are tagged for distinct styling, and the display
//! form rejoins everything with single spaces.

/// One display fragment of a feed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// The token text, including any leading `@`.
    pub text: String,
    /// Whether the token is a mention.
    pub mention: bool,
}

/// Split text into display fragments, tagging `@mention` tokens.
///
/// Runs of whitespace collapse: the fragments rejoin with single
/// spaces regardless of the original spacing.
pub fn highlight_mentions(text: &str) -> Vec<Fragment> {
    text.split_whitespace()
        .map(|token| Fragment {
            text: token.to_string(),
            mention: token.starts_with('@'),
        })
        .collect()
}

/// Render fragments as Markdown, emphasizing mentions.
pub fn render_markdown(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(|f| {
            if f.mention {
                format!("**{}**", f.text)
            } else {
                f.text.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

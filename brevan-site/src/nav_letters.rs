//! Nav-letter wave labels.
//!
//! Navigation links, reserve buttons and price tags show their text one
//! letter at a time, each letter delayed by its position. The wrapping is a
//! pure function of the label text so it can be re-run after every locale
//! switch without accumulating markup.

use std::fmt::Write as _;
use std::time::Duration;

/// Stagger between consecutive characters.
pub const LETTER_DELAY_MS: u64 = 50;

/// Elements whose labels are wrapped.
pub const NAV_LABEL_SELECTORS: [&str; 4] = [
    ".nav-left a",
    ".nav-right a",
    ".room-reserve-btn",
    ".price-tag",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPiece {
    /// A wrapped character animated after `delay`.
    Letter { ch: char, delay: Duration },
    /// Whitespace kept as plain text so spacing is not collapsed.
    Space(char),
}

impl LabelPiece {
    pub fn char(&self) -> char {
        match *self {
            LabelPiece::Letter { ch, .. } | LabelPiece::Space(ch) => ch,
        }
    }

    /// Value of the `--delay` custom property, for letters.
    pub fn css_delay(&self) -> Option<String> {
        match self {
            LabelPiece::Letter { delay, .. } => {
                Some(format!("{}ms", delay.as_millis()))
            }
            LabelPiece::Space(_) => None,
        }
    }
}

/// Split trimmed `text` into pieces. The delay index counts every
/// character, whitespace included.
pub fn wrap_label(text: &str) -> Vec<LabelPiece> {
    text.trim()
        .chars()
        .enumerate()
        .map(|(idx, ch)| {
            if ch.is_whitespace() {
                LabelPiece::Space(ch)
            } else {
                LabelPiece::Letter {
                    ch,
                    delay: Duration::from_millis(idx as u64 * LETTER_DELAY_MS),
                }
            }
        })
        .collect()
}

/// One wrapped label, optionally bound to a translation key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLabel {
    key: Option<String>,
    pieces: Vec<LabelPiece>,
}

impl NavLabel {
    pub fn new(text: &str) -> Self {
        Self {
            key: None,
            pieces: wrap_label(text),
        }
    }

    pub fn with_key(key: impl Into<String>, text: &str) -> Self {
        Self {
            key: Some(key.into()),
            pieces: wrap_label(text),
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn pieces(&self) -> &[LabelPiece] {
        &self.pieces
    }

    /// Plain text the label currently shows.
    pub fn text(&self) -> String {
        self.pieces.iter().map(LabelPiece::char).collect()
    }

    pub fn set_text(&mut self, text: &str) {
        self.pieces = wrap_label(text);
    }

    /// Rebuild the pieces from the current text.
    pub fn rewrap(&mut self) {
        let text = self.text();
        self.pieces = wrap_label(&text);
    }

    /// Markup for the label's children.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for piece in &self.pieces {
            match piece {
                LabelPiece::Space(ch) => html.push(*ch),
                LabelPiece::Letter { ch, delay } => {
                    let _ = write!(
                        html,
                        r#"<span class="nav-letter" style="--delay: {}ms">"#,
                        delay.as_millis()
                    );
                    push_escaped(&mut html, *ch);
                    html.push_str("</span>");
                }
            }
        }
        html
    }
}

fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        other => out.push(other),
    }
}

/// Every wrapped label on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavLabels {
    labels: Vec<NavLabel>,
}

impl NavLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: NavLabel) {
        self.labels.push(label);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NavLabel> {
        self.labels.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut NavLabel> {
        self.labels.iter_mut()
    }

    pub fn rewrap_all(&mut self) {
        for label in &mut self.labels {
            label.rewrap();
        }
    }
}

impl FromIterator<NavLabel> for NavLabels {
    fn from_iter<I: IntoIterator<Item = NavLabel>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_count_every_character() {
        let pieces = wrap_label("  autour de  ");
        assert_eq!(pieces.len(), 9);
        assert_eq!(pieces[6], LabelPiece::Space(' '));
        assert_eq!(
            pieces[7],
            LabelPiece::Letter {
                ch: 'd',
                delay: Duration::from_millis(350)
            }
        );
        assert_eq!(pieces[0].css_delay().as_deref(), Some("0ms"));
        assert_eq!(pieces[6].css_delay(), None);
    }

    #[test]
    fn rewrapping_is_idempotent() {
        let mut labels: NavLabels =
            ["galerie", "plan d'accès"].iter().map(|t| NavLabel::new(t)).collect();
        let before = labels.clone();
        labels.rewrap_all();
        labels.rewrap_all();
        assert_eq!(labels, before);
    }

    #[test]
    fn html_escapes_letters_and_keeps_spaces_plain() {
        let label = NavLabel::new("a <b");
        assert_eq!(
            label.to_html(),
            concat!(
                r#"<span class="nav-letter" style="--delay: 0ms">a</span> "#,
                r#"<span class="nav-letter" style="--delay: 100ms">&lt;</span>"#,
                r#"<span class="nav-letter" style="--delay: 150ms">b</span>"#,
            )
        );
    }

    #[test]
    fn multibyte_characters_are_single_letters() {
        let label = NavLabel::new("réserver");
        assert_eq!(label.pieces().len(), 8);
        assert_eq!(label.text(), "réserver");
    }
}

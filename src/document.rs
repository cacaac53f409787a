//! Tolerant `SKILL.md` frontmatter parser.
//!
//! Frontmatter is a flat block of `key: value` lines between two `---`
//! lines. This is not a YAML parser: only flat pairs are extracted, other
//! lines are skipped, and parsing never fails. A missing or unterminated
//! block yields no header.

use crate::contract::HEADER_DELIMITER;

/// One frontmatter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    /// Value as written after the colon, trimmed, quotes untouched.
    pub raw: String,
    /// `raw` with one layer of matching single or double quotes removed.
    pub value: String,
}

/// Flat frontmatter mapping.
///
/// Iteration follows first-insertion order. A repeated key keeps its first
/// position but takes the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    fields: Vec<(String, HeaderField)>,
}

impl Header {
    pub fn insert(&mut self, key: String, field: HeaderField) {
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = field,
            None => self.fields.push((key, field)),
        }
    }

    pub fn field(&self, key: &str) -> Option<&HeaderField> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, f)| f)
    }

    /// Unquoted value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.field(key).map(|f| f.value.as_str())
    }

    /// Unquoted value of `key`, treating an empty value as absent.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A parsed entry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub raw_text: String,
    /// `None` when there is no well-formed frontmatter block.
    pub header: Option<Header>,
    /// Text after the closing delimiter, trimmed. Without a header this is
    /// the whole text, unchanged.
    pub body: String,
}

impl Document {
    pub fn parse(text: &str) -> Document {
        let (header, body) = split_frontmatter(text);
        Document {
            raw_text: text.to_string(),
            header,
            body: body.to_string(),
        }
    }
}

/// Splits `text` into its header and body.
///
/// Returns `(None, text)` when the first line is not `---` or when no
/// closing `---` line follows.
///
/// # Examples
///
/// ```
/// use oxidized_skill_lint::document::split_frontmatter;
///
/// let (header, body) = split_frontmatter("---\nname: 'pdf-tools'\n---\n\n# PDF\n");
/// assert_eq!(header.unwrap().get("name"), Some("pdf-tools"));
/// assert_eq!(body, "# PDF");
///
/// let (header, body) = split_frontmatter("# No frontmatter\n");
/// assert!(header.is_none());
/// assert_eq!(body, "# No frontmatter\n");
/// ```
pub fn split_frontmatter(text: &str) -> (Option<Header>, &str) {
    match locate_block(text) {
        Some((block, rest)) => (Some(parse_block(block)), rest.trim()),
        None => (None, text),
    }
}

/// Finds the delimited block. Returns `(block, rest)` without the delimiter lines.
fn locate_block(text: &str) -> Option<(&str, &str)> {
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if !is_delimiter(first) {
        return None;
    }

    let block_start = first.len();
    let mut offset = block_start;
    for line in lines {
        if is_delimiter(line) {
            return Some((&text[block_start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\n', '\r']) == HEADER_DELIMITER
}

fn parse_block(block: &str) -> Header {
    let mut header = Header::default();
    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let raw = value.trim();
        header.insert(
            key.trim().to_string(),
            HeaderField {
                raw: raw.to_string(),
                value: unquote(raw).to_string(),
            },
        );
    }
    header
}

/// Strips one layer of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

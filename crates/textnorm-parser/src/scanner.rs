//! Prioritized-alternative token scanner.
//!
//! At every position the alternatives are tried in [`MatchKind`] order and the
//! first one that matches wins; whitespace that starts no alternative is
//! skipped. Letters match ASCII case-insensitively.

/// The alternative that produced a span, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// `http://` or `https://` followed by URL characters.
    Url,
    /// `word-word-word`; the middle run needs two or more chars.
    DoubleHyphen,
    /// `word-word`.
    Hyphenated,
    /// Backslashes followed by `n`s, e.g. a literal `\n` left in scraped text.
    EscapedNewline,
    /// `@name`.
    Mention,
    /// `<...>`, may span whitespace.
    Tag,
    /// `word'c`, exactly one word char after the apostrophe.
    Contraction,
    Word,
    /// Any other single non-whitespace char.
    Symbol,
}

/// A matched byte range of the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub kind: MatchKind,
}

impl Span {
    pub fn as_str<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// End of the maximal word run starting at `pos` (`pos` itself if none).
fn word_run(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .find(|(_, c)| !is_word_char(*c))
        .map_or(text.len(), |(i, _)| pos + i)
}

fn nonempty_word_run(text: &str, pos: usize) -> Option<usize> {
    let end = word_run(text, pos);
    (end > pos).then_some(end)
}

fn byte_at(text: &str, pos: usize) -> Option<u8> {
    text.as_bytes().get(pos).copied()
}

fn is_url_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || (b'$'..=b'_').contains(&b) || matches!(b, b'@' | b'.' | b'&' | b'+')
}

/// Non-ASCII letters that case-fold to `s`, `i` and `k`.
const FOLDED_LETTERS: [char; 3] = ['\u{17F}', '\u{130}', '\u{212A}'];

fn folded_letter_len(text: &str, pos: usize) -> Option<usize> {
    text.get(pos..)?
        .chars()
        .next()
        .filter(|c| FOLDED_LETTERS.contains(c))
        .map(char::len_utf8)
}

fn match_url(text: &str, pos: usize) -> Option<usize> {
    let rest = &text[pos..];
    let bytes = rest.as_bytes();
    if bytes.len() < 4 || !bytes[..4].eq_ignore_ascii_case(b"http") {
        return None;
    }
    let mut i = 4;
    if matches!(bytes.get(i), Some(b's' | b'S')) {
        i += 1;
    } else if rest[i..].starts_with('\u{17F}') {
        i += '\u{17F}'.len_utf8();
    }
    if !bytes[i..].starts_with(b"://") {
        return None;
    }
    i += 3;
    let body = i;
    loop {
        match bytes.get(i) {
            Some(&b) if is_url_byte(b) => i += 1,
            Some(b'!')
                if bytes.get(i + 1) == Some(&b'%')
                    && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit)
                    && bytes.get(i + 3).is_some_and(u8::is_ascii_hexdigit) =>
            {
                i += 4
            }
            Some(_) => match folded_letter_len(rest, i) {
                Some(len) => i += len,
                None => break,
            },
            None => break,
        }
    }
    (i > body).then_some(pos + i)
}

fn match_double_hyphen(text: &str, pos: usize) -> Option<usize> {
    let first = nonempty_word_run(text, pos)?;
    if byte_at(text, first) != Some(b'-') {
        return None;
    }
    let middle = word_run(text, first + 1);
    if text[first + 1..middle].chars().count() < 2 || byte_at(text, middle) != Some(b'-') {
        return None;
    }
    nonempty_word_run(text, middle + 1)
}

fn match_hyphenated(text: &str, pos: usize) -> Option<usize> {
    let first = nonempty_word_run(text, pos)?;
    if byte_at(text, first) != Some(b'-') {
        return None;
    }
    nonempty_word_run(text, first + 1)
}

fn match_escaped_newline(text: &str, pos: usize) -> Option<usize> {
    let bytes = &text.as_bytes()[pos..];
    let slashes = bytes.iter().take_while(|&&b| b == b'\\').count();
    if slashes == 0 {
        return None;
    }
    let ns = bytes[slashes..]
        .iter()
        .take_while(|&&b| b == b'n' || b == b'N')
        .count();
    (ns > 0).then_some(pos + slashes + ns)
}

fn match_mention(text: &str, pos: usize) -> Option<usize> {
    if byte_at(text, pos) != Some(b'@') {
        return None;
    }
    nonempty_word_run(text, pos + 1)
}

fn match_tag(text: &str, pos: usize) -> Option<usize> {
    if byte_at(text, pos) != Some(b'<') {
        return None;
    }
    match text[pos + 1..].find('>') {
        Some(i) if i > 0 => Some(pos + 1 + i + 1),
        _ => None,
    }
}

fn match_contraction(text: &str, pos: usize) -> Option<usize> {
    let stem = nonempty_word_run(text, pos)?;
    if byte_at(text, stem) != Some(b'\'') {
        return None;
    }
    let c = text[stem + 1..].chars().next().filter(|c| is_word_char(*c))?;
    Some(stem + 1 + c.len_utf8())
}

fn match_symbol(text: &str, pos: usize) -> Option<usize> {
    let c = text[pos..].chars().next().filter(|c| !is_space(*c))?;
    Some(pos + c.len_utf8())
}

const ALTERNATIVES: [(MatchKind, fn(&str, usize) -> Option<usize>); 9] = [
    (MatchKind::Url, match_url),
    (MatchKind::DoubleHyphen, match_double_hyphen),
    (MatchKind::Hyphenated, match_hyphenated),
    (MatchKind::EscapedNewline, match_escaped_newline),
    (MatchKind::Mention, match_mention),
    (MatchKind::Tag, match_tag),
    (MatchKind::Contraction, match_contraction),
    (MatchKind::Word, nonempty_word_run),
    (MatchKind::Symbol, match_symbol),
];

/// Iterator over the [`Span`]s of a text.
pub struct TokenScanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> TokenScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn match_at(&self, pos: usize) -> Option<Span> {
        ALTERNATIVES.iter().find_map(|(kind, matcher)| {
            matcher(self.text, pos).map(|end| Span { start: pos, end, kind: *kind })
        })
    }
}

impl Iterator for TokenScanner<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        while let Some(c) = self.text[self.pos..].chars().next() {
            if let Some(span) = self.match_at(self.pos) {
                self.pos = span.end;
                return Some(span);
            }
            self.pos += c.len_utf8();
        }
        None
    }
}

/// Matched substrings of `text`, in order.
pub fn scan(text: &str) -> Vec<&str> {
    TokenScanner::new(text).map(|span| span.as_str(text)).collect()
}

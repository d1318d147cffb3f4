//! Minimal HCL scanner — structure and literals only.
//!
//! Splits a body into attributes and nested blocks while skipping comments,
//! strings and heredocs, so braces inside them never count. Attribute values
//! stay raw text; [`literal`] turns plain literals into JSON values and leaves
//! anything else (references, function calls) as the raw expression string.

use regex::Regex;
use serde_json::{Map, Number, Value};
use std::sync::LazyLock;

static RE_HEREDOC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<<(-?)([A-Za-z_][A-Za-z0-9_]*)[ \t]*\r?\n").unwrap());

/// Attributes and nested blocks of one body, in source order.
#[derive(Debug, Default)]
pub(crate) struct Body<'a> {
    pub attributes: Vec<Attribute<'a>>,
    pub blocks: Vec<Block<'a>>,
}

#[derive(Debug)]
pub(crate) struct Attribute<'a> {
    pub key: &'a str,
    pub raw: &'a str,
}

#[derive(Debug)]
pub(crate) struct Block<'a> {
    pub kind: &'a str,
    pub labels: Vec<String>,
    pub body: &'a str,
}

/// A block whose braces never close; carries the block type.
#[derive(Debug)]
pub(crate) struct Unterminated(pub String);

impl<'a> Body<'a> {
    pub fn attribute(&self, key: &str) -> Option<&'a str> {
        self.attributes.iter().find(|a| a.key == key).map(|a| a.raw)
    }

    pub fn string(&self, key: &str) -> Option<String> {
        self.attribute(key).and_then(string)
    }

    pub fn bool(&self, key: &str) -> bool {
        self.attribute(key) == Some("true")
    }

    pub fn blocks_of<'s>(&'s self, kind: &'s str) -> impl Iterator<Item = &'s Block<'a>> {
        self.blocks.iter().filter(move |b| b.kind == kind)
    }
}

/// Parse the attributes and blocks of a file or block body.
pub(crate) fn parse(src: &str) -> Result<Body<'_>, Unterminated> {
    let bytes = src.as_bytes();
    let mut body = Body::default();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        if c.is_ascii_whitespace() || c == b',' {
            i += 1;
            continue;
        }
        if let Some(end) = skip_comment(src, i) {
            i = end;
            continue;
        }
        if !is_ident_start(c) {
            i += 1;
            continue;
        }

        let start = i;
        i = ident_end(bytes, i);
        let key = &src[start..i];
        i = skip_inline_space(bytes, i);

        if bytes.get(i) == Some(&b'=') && bytes.get(i + 1) != Some(&b'=') {
            let value_start = i + 1;
            let end = expression_end(src, value_start);
            body.attributes.push(Attribute {
                key,
                raw: src[value_start..end].trim(),
            });
            i = end;
            continue;
        }

        // Block header: zero or more labels, then `{`
        let mut labels = Vec::new();
        loop {
            i = skip_inline_space(bytes, i);
            match bytes.get(i) {
                Some(b'"') => {
                    let end = string_end(bytes, i);
                    labels.push(string(&src[i..end]).unwrap_or_default());
                    i = end;
                }
                Some(&b) if is_ident_start(b) => {
                    let label_start = i;
                    i = ident_end(bytes, i);
                    labels.push(src[label_start..i].to_string());
                }
                _ => break,
            }
        }

        if bytes.get(i) == Some(&b'{') {
            let close = matching_close(src, i).ok_or_else(|| Unterminated(key.to_string()))?;
            body.blocks.push(Block {
                kind: key,
                labels,
                body: &src[i + 1..close],
            });
            i = close + 1;
        }
    }

    Ok(body)
}

// -- Lexical helpers ----------------------------------------------------------

fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn ident_end(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_' || bytes[i] == b'-') {
        i += 1;
    }
    i
}

fn skip_inline_space(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && (bytes[i] == b' ' || bytes[i] == b'\t') {
        i += 1;
    }
    i
}

/// End of the comment starting at `i`, if one starts there.
fn skip_comment(src: &str, i: usize) -> Option<usize> {
    let rest = &src.as_bytes()[i..];
    if rest.starts_with(b"#") || rest.starts_with(b"//") {
        return Some(src[i..].find('\n').map_or(src.len(), |n| i + n));
    }
    if rest.starts_with(b"/*") {
        return Some(src[i + 2..].find("*/").map_or(src.len(), |n| i + 2 + n + 2));
    }
    None
}

/// Index just past the closing quote of the string starting at `i`.
fn string_end(bytes: &[u8], i: usize) -> usize {
    let mut j = i + 1;
    while j < bytes.len() {
        match bytes[j] {
            b'\\' => j += 2,
            b'"' => return j + 1,
            _ => j += 1,
        }
    }
    bytes.len()
}

/// End of the heredoc starting at `i` (the newline after its closing marker).
fn heredoc_end(src: &str, i: usize) -> Option<usize> {
    let caps = RE_HEREDOC.captures(&src[i..])?;
    let marker = caps.get(2)?.as_str();
    let mut pos = i + caps.get(0)?.end();
    while pos < src.len() {
        let line_end = src[pos..].find('\n').map_or(src.len(), |n| pos + n);
        if src[pos..line_end].trim() == marker {
            return Some(line_end);
        }
        pos = line_end + 1;
    }
    Some(src.len())
}

/// Index of the bracket closing the one opened at `open`.
fn matching_close(src: &str, open: usize) -> Option<usize> {
    let bytes = src.as_bytes();
    let mut depth = 0usize;
    let mut j = open;
    while j < bytes.len() {
        if let Some(end) = skip_comment(src, j) {
            j = end;
            continue;
        }
        match bytes[j] {
            b'"' => {
                j = string_end(bytes, j);
                continue;
            }
            b'<' => {
                if let Some(end) = heredoc_end(src, j) {
                    j = end;
                    continue;
                }
            }
            b'{' | b'[' | b'(' => depth += 1,
            b'}' | b']' | b')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(j);
                }
            }
            _ => {}
        }
        j += 1;
    }
    None
}

/// End of an attribute expression: the first newline or trailing comment
/// outside any bracket, string or heredoc.
fn expression_end(src: &str, start: usize) -> usize {
    let bytes = src.as_bytes();
    let mut depth = 0usize;
    let mut j = start;
    while j < bytes.len() {
        if let Some(end) = skip_comment(src, j) {
            if depth == 0 {
                return j;
            }
            j = end;
            continue;
        }
        match bytes[j] {
            b'"' => {
                j = string_end(bytes, j);
                continue;
            }
            b'<' => {
                if let Some(end) = heredoc_end(src, j) {
                    j = end;
                    continue;
                }
            }
            b'{' | b'[' | b'(' => depth += 1,
            b'}' | b']' | b')' => {
                if depth == 0 {
                    return j;
                }
                depth -= 1;
            }
            b'\n' if depth == 0 => return j,
            _ => {}
        }
        j += 1;
    }
    bytes.len()
}

// -- Literals -----------------------------------------------------------------

/// Convert a raw expression to a JSON value. Non-literal expressions come back
/// as their source text.
pub(crate) fn literal(raw: &str) -> Value {
    let raw = raw.trim();
    if let Some(text) = heredoc(raw) {
        return Value::String(text);
    }
    let mut parser = Literal {
        chars: raw.chars().collect(),
        pos: 0,
    };
    match parser.value() {
        Some(value) if parser.at_end() => value,
        _ => Value::String(raw.to_string()),
    }
}

/// Raw expression as a string, unquoted when it is a string literal.
pub(crate) fn string(raw: &str) -> Option<String> {
    match literal(raw) {
        Value::String(s) => Some(s),
        _ => None,
    }
}

fn heredoc(raw: &str) -> Option<String> {
    let caps = RE_HEREDOC.captures(raw)?;
    let marker = caps.get(2)?.as_str();
    let mut lines: Vec<&str> = raw[caps.get(0)?.end()..].lines().collect();
    if lines.last().is_some_and(|l| l.trim() == marker) {
        lines.pop();
    }
    let text = if caps.get(1).is_some_and(|m| !m.as_str().is_empty()) {
        unindent(&lines)
    } else {
        lines.join("\n")
    };
    Some(text.trim_end().to_string())
}

/// Remove the common leading indentation of non-empty lines.
fn unindent(lines: &[&str]) -> String {
    let min_indent = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);
    lines
        .iter()
        .map(|l| l.get(min_indent..).unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n")
}

struct Literal {
    chars: Vec<char>,
    pos: usize,
}

impl Literal {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn skip_space(&mut self, commas: bool) {
        while let Some(c) = self.peek() {
            if c == '#' {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.pos += 1;
                }
            } else if c.is_whitespace() || (commas && c == ',') {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn at_end(&mut self) -> bool {
        self.skip_space(false);
        self.pos == self.chars.len()
    }

    fn value(&mut self) -> Option<Value> {
        self.skip_space(false);
        match self.peek()? {
            '"' => self.string().map(Value::String),
            '[' => self.list(),
            '{' => self.object(),
            c if c == '-' || c.is_ascii_digit() => self.number(),
            c if c.is_alphabetic() || c == '_' => match self.word().as_str() {
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                "null" => Some(Value::Null),
                _ => None,
            },
            _ => None,
        }
    }

    fn string(&mut self) -> Option<String> {
        self.pos += 1;
        let mut out = String::new();
        while let Some(c) = self.bump() {
            match c {
                '"' => return Some(out),
                '\\' => match self.bump()? {
                    'n' => out.push('\n'),
                    't' => out.push('\t'),
                    'r' => out.push('\r'),
                    '"' => out.push('"'),
                    '\\' => out.push('\\'),
                    other => {
                        out.push('\\');
                        out.push(other);
                    }
                },
                c => out.push(c),
            }
        }
        None
    }

    fn list(&mut self) -> Option<Value> {
        self.pos += 1;
        let mut items = Vec::new();
        loop {
            self.skip_space(true);
            if self.peek()? == ']' {
                self.pos += 1;
                return Some(Value::Array(items));
            }
            items.push(self.value()?);
        }
    }

    fn object(&mut self) -> Option<Value> {
        self.pos += 1;
        let mut map = Map::new();
        loop {
            self.skip_space(true);
            let key = match self.peek()? {
                '}' => {
                    self.pos += 1;
                    return Some(Value::Object(map));
                }
                '"' => self.string()?,
                c if c.is_alphabetic() || c == '_' => self.word(),
                _ => return None,
            };
            self.skip_space(false);
            match self.bump()? {
                '=' | ':' => {}
                _ => return None,
            }
            let value = self.value()?;
            map.insert(key, value);
        }
    }

    fn number(&mut self) -> Option<Value> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'))
        {
            self.pos += 1;
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        if let Ok(int) = text.parse::<i64>() {
            return Some(Value::Number(int.into()));
        }
        text.parse::<f64>().ok().and_then(Number::from_f64).map(Value::Number)
    }

    fn word(&mut self) -> String {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }
}

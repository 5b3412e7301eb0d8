//! Line scanner for the desktop entry text format.

use std::collections::HashSet;
use std::io::{BufRead, Read};

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::error::{ParseError, ScanError};
use crate::locale::Locale;
use crate::table::GroupTable;

/// Longest accepted line, in bytes (including the line terminator).
const MAX_LINE_LEN: usize = 4096;

/// Graphic characters: letters, marks, numbers, punctuation, symbols and
/// spaces. Format characters and unassigned codepoints are not graphic.
fn is_graphic(ch: char) -> bool {
    matches!(
        ch.general_category_group(),
        GeneralCategoryGroup::Letter
            | GeneralCategoryGroup::Mark
            | GeneralCategoryGroup::Number
            | GeneralCategoryGroup::Punctuation
            | GeneralCategoryGroup::Symbol
    ) || ch.general_category() == GeneralCategory::SpaceSeparator
}

/// One sequential pass over a document. The first error aborts the scan
/// and carries the 1-based line number it occurred on.
pub(crate) struct Scanner<R> {
    reader: R,
    groups: GroupTable,
    declared: HashSet<String>,
    current: String,
}

impl<R: BufRead> Scanner<R> {
    pub(crate) fn new(reader: R) -> Self {
        Scanner {
            reader,
            groups: GroupTable::default(),
            declared: HashSet::new(),
            current: String::new(),
        }
    }

    pub(crate) fn scan(mut self) -> Result<GroupTable, ParseError> {
        let mut buf = Vec::new();
        let mut line = 1usize;

        loop {
            buf.clear();
            // Bound per-line buffering: an overlong line errors after at
            // most MAX_LINE_LEN + 1 bytes instead of being read whole.
            let n = (&mut self.reader)
                .take(MAX_LINE_LEN as u64 + 1)
                .read_until(b'\n', &mut buf)
                .map_err(|err| ParseError {
                    line,
                    kind: err.into(),
                })?;
            if n == 0 {
                break;
            }

            if buf.len() > MAX_LINE_LEN {
                return Err(ParseError {
                    line,
                    kind: ScanError::LineTooLong,
                });
            }

            let text = std::str::from_utf8(&buf).map_err(|_| ParseError {
                line,
                kind: ScanError::InvalidUtf8,
            })?;
            self.scan_line(text).map_err(|kind| ParseError { line, kind })?;

            line += 1;
        }

        Ok(self.groups)
    }

    fn scan_line(&mut self, line: &str) -> Result<(), ScanError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        if let Some(rest) = line.strip_prefix('[') {
            return self.scan_group(rest);
        }

        self.scan_key_value(line)
    }

    /// `rest` is the line content after the opening `[`. Every character
    /// up to the closing `]` must be printable.
    fn scan_group(&mut self, rest: &str) -> Result<(), ScanError> {
        let mut end = None;
        for (i, ch) in rest.char_indices() {
            if ch == ']' {
                end = Some(i);
                break;
            }

            if !is_graphic(ch) {
                return Err(ScanError::InvalidCharacter(ch));
            }
        }

        let Some(end) = end else {
            return Err(ScanError::UnterminatedBracket);
        };

        // Keys before any header may have created the implicit "" group
        // in the table; only a repeated header counts as a duplicate.
        let group = &rest[..end];
        if !self.declared.insert(group.to_string()) {
            return Err(ScanError::DuplicateGroup(group.to_string()));
        }

        self.groups.add(group);
        self.current = group.to_string();
        Ok(())
    }

    fn scan_key_value(&mut self, line: &str) -> Result<(), ScanError> {
        // Key name: letters, digits and '-'. A '[', '=' or whitespace
        // ends it; anything else is rejected.
        let mut key_end = None;
        for (i, ch) in line.char_indices() {
            if ch.is_alphanumeric() || ch == '-' {
                continue;
            }

            if ch == '[' || ch == '=' || ch.is_whitespace() {
                key_end = Some(i);
                break;
            }

            return Err(ScanError::InvalidCharacter(ch));
        }

        let Some(key_end) = key_end else {
            return Err(ScanError::MissingEquals);
        };

        let key = &line[..key_end];
        let mut rest = &line[key_end..];

        // Optional locale qualifier directly after the key.
        let mut locale = Locale::default();
        if let Some(bracketed) = rest.strip_prefix('[') {
            let Some(end) = bracketed.find(']') else {
                return Err(ScanError::UnterminatedBracket);
            };

            locale = Locale::from_tag(&bracketed[..end])?;
            rest = &bracketed[end + 1..];
        }

        let rest = rest.trim_start();
        let Some(value) = rest.strip_prefix('=') else {
            return Err(ScanError::MissingEquals);
        };

        // Values are stored literally; only embedded non-whitespace
        // control characters are rejected.
        let value = value.trim();
        for ch in value.chars() {
            if ch.is_control() && !ch.is_whitespace() {
                return Err(ScanError::InvalidCharacter(ch));
            }
        }

        self.groups.load(&self.current, key, &locale, value.to_string());
        Ok(())
    }
}

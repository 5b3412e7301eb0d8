//! Locale tags attached to desktop entry keys.

use std::fmt;
use std::str::FromStr;

use crate::error::LocaleError;

/// Delimiters that end each segment, indexed by the segment they close.
/// End of input closes whatever segment is current.
const DELIMS: [&[char]; 3] = [&['_', '-'], &['.'], &['@']];

/// A locale qualifier of the form `lang[_COUNTRY][.ENCODING][@MODIFIER]`.
///
/// An all-empty tag stands for "no locale" and formats to the empty
/// string; that empty string is the canonical lookup key for unqualified
/// values.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    pub language: String,
    pub country: String,
    pub encoding: String,
    pub modifier: String,
}

fn delim_index(ch: char) -> Option<usize> {
    DELIMS.iter().position(|set| set.contains(&ch))
}

fn allowed_in(segment: usize, ch: char) -> bool {
    match segment {
        0 => ch.is_ascii_lowercase(),
        1 => ch.is_ascii_alphabetic() || ch == '-',
        2 => ch.is_ascii_alphanumeric() || ch == '-',
        _ => ch.is_ascii_alphabetic(),
    }
}

impl Locale {
    /// Parse a bracketed qualifier. Tags in the `x-` extension namespace
    /// are kept verbatim in the language field instead of going through
    /// the tag grammar.
    pub fn from_tag(tag: &str) -> Result<Self, LocaleError> {
        if tag.starts_with("x-") {
            return Ok(Locale {
                language: tag.to_string(),
                ..Locale::default()
            });
        }

        tag.parse()
    }

    /// True for the "no locale" tag.
    pub fn is_empty(&self) -> bool {
        self.language.is_empty()
    }

    fn commit(&mut self, segment: usize, buf: &mut String) {
        let field = match segment {
            0 => &mut self.language,
            1 => &mut self.country,
            2 => &mut self.encoding,
            _ => &mut self.modifier,
        };
        *field = std::mem::take(buf);
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    /// Four-segment scan: a delimiter belonging to the current or a later
    /// segment commits the accumulated text and jumps past that segment;
    /// a delimiter of an already-passed segment falls through to the
    /// character-class check and is rejected there.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut locale = Locale::default();
        let mut segment = 0usize;
        let mut buf = String::new();

        for ch in s.chars() {
            match delim_index(ch) {
                Some(k) if k >= segment => {
                    if buf.is_empty() {
                        return Err(LocaleError::NothingBefore(ch));
                    }

                    locale.commit(segment, &mut buf);
                    segment = k + 1;
                }
                _ => {
                    if !allowed_in(segment, ch) {
                        return Err(LocaleError::InvalidCharacter(ch));
                    }

                    buf.push(ch);
                }
            }
        }

        if !buf.is_empty() {
            locale.commit(segment, &mut buf);
        } else if segment != 0 {
            return Err(LocaleError::NothingAfter(DELIMS[segment - 1][0]));
        }

        Ok(locale)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.language.is_empty() {
            return Ok(());
        }

        f.write_str(&self.language)?;

        if !self.country.is_empty() {
            write!(f, "_{}", self.country)?;
        }

        if !self.encoding.is_empty() {
            write!(f, ".{}", self.encoding)?;
        }

        if !self.modifier.is_empty() {
            write!(f, "@{}", self.modifier)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_only() {
        let locale: Locale = "de".parse().unwrap();
        assert_eq!(locale.language, "de");
        assert!(locale.country.is_empty());
        assert!(locale.encoding.is_empty());
        assert!(locale.modifier.is_empty());
    }

    #[test]
    fn test_parse_full_tag() {
        let locale: Locale = "sr_YU.utf-8@latin".parse().unwrap();
        assert_eq!(locale.language, "sr");
        assert_eq!(locale.country, "YU");
        assert_eq!(locale.encoding, "utf-8");
        assert_eq!(locale.modifier, "latin");
    }

    #[test]
    fn test_parse_skipped_segments() {
        let locale: Locale = "de@euro".parse().unwrap();
        assert_eq!(locale.language, "de");
        assert!(locale.country.is_empty());
        assert_eq!(locale.modifier, "euro");
    }

    #[test]
    fn test_hyphen_starts_country() {
        let locale: Locale = "de-DE".parse().unwrap();
        assert_eq!(locale.language, "de");
        assert_eq!(locale.country, "DE");
    }

    #[test]
    fn test_empty_string_is_no_locale() {
        let locale: Locale = "".parse().unwrap();
        assert!(locale.is_empty());
        assert_eq!(locale.to_string(), "");
    }

    #[test]
    fn test_uppercase_language_rejected() {
        assert!(matches!(
            "DE".parse::<Locale>(),
            Err(LocaleError::InvalidCharacter('D'))
        ));
    }

    #[test]
    fn test_leading_delimiter_rejected() {
        assert!(matches!(
            "_DE".parse::<Locale>(),
            Err(LocaleError::NothingBefore('_'))
        ));
    }

    #[test]
    fn test_trailing_delimiter_rejected() {
        assert!(matches!(
            "de_".parse::<Locale>(),
            Err(LocaleError::NothingAfter('_'))
        ));
    }

    #[test]
    fn test_delimiter_of_passed_segment_rejected() {
        // '.' after '@' falls into the modifier character class.
        assert!(matches!(
            "de@euro.utf8".parse::<Locale>(),
            Err(LocaleError::InvalidCharacter('.'))
        ));
    }

    #[test]
    fn test_format() {
        let locale = Locale {
            language: "ca".to_string(),
            country: "ES".to_string(),
            encoding: String::new(),
            modifier: "valencia".to_string(),
        };
        assert_eq!(locale.to_string(), "ca_ES@valencia");
    }

    #[test]
    fn test_round_trip() {
        for tag in ["de", "de_DE", "sr_YU.utf-8@latin", "ca_ES@valencia"] {
            let locale: Locale = tag.parse().unwrap();
            assert_eq!(locale.to_string(), tag);
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }

    #[test]
    fn test_extension_tag_kept_verbatim() {
        let locale = Locale::from_tag("x-test").unwrap();
        assert_eq!(locale.language, "x-test");
        assert_eq!(locale.to_string(), "x-test");
    }
}

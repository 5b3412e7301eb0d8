//! Group / key / value tables of a parsed document.
//!
//! Three levels of plain owned maps: a group owns its keys, a key owns
//! the per-locale values. Try-variant accessors return [`LookupError`];
//! the plain variants panic on misuse (looking up data without checking
//! it exists) and are meant for keys the caller knows are present.

use std::collections::HashMap;

use log::debug;

use crate::error::LookupError;
use crate::locale::Locale;

/// Values of one key, indexed by canonical locale string ("" for the
/// unqualified value).
#[derive(Debug, Default, Clone)]
pub struct ValueTable(HashMap<String, String>);

impl ValueTable {
    /// The first value written for a locale wins; later writes report
    /// `false` and are dropped.
    fn load(&mut self, locale: &Locale, value: String) -> bool {
        let tag = locale.to_string();
        if self.0.contains_key(&tag) {
            return false;
        }

        self.0.insert(tag, value);
        true
    }

    /// The value stored for a canonical locale string, if any.
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// The locales a value exists for, in no particular order.
    pub fn locales(&self) -> Vec<Locale> {
        self.0
            .keys()
            .filter_map(|tag| Locale::from_tag(tag).ok())
            .collect()
    }
}

/// Keys of one group and their values.
#[derive(Debug, Default, Clone)]
pub struct KeyTable(HashMap<String, ValueTable>);

impl KeyTable {
    pub(crate) fn load(&mut self, key: &str, locale: &Locale, value: String) -> bool {
        self.0.entry(key.to_string()).or_default().load(locale, value)
    }

    /// Look up the value stored for `key` under the canonical locale
    /// string `locale`. Exact match only, no locale fallback.
    pub fn try_get_string(&self, locale: &str, key: &str) -> Result<&str, LookupError> {
        self.0
            .get(key)
            .and_then(|values| values.get(locale))
            .ok_or_else(|| LookupError::KeyNotFound {
                key: key.to_string(),
                locale: locale.to_string(),
            })
    }

    /// Like [`KeyTable::try_get_string`], but panics when the key/locale
    /// pair is absent.
    pub fn get_string(&self, locale: &str, key: &str) -> &str {
        match self.try_get_string(locale, key) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// A boolean value must be exactly `true` or `false`.
    pub fn try_get_boolean(&self, locale: &str, key: &str) -> Result<bool, LookupError> {
        match self.try_get_string(locale, key)? {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(LookupError::NotBoolean {
                key: key.to_string(),
                locale: locale.to_string(),
            }),
        }
    }

    /// Like [`KeyTable::try_get_boolean`], but panics when the value is
    /// absent or not a boolean.
    pub fn get_boolean(&self, locale: &str, key: &str) -> bool {
        match self.try_get_boolean(locale, key) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// A numeric value must parse as a 64-bit float.
    pub fn try_get_numeric(&self, locale: &str, key: &str) -> Result<f64, LookupError> {
        let value = self.try_get_string(locale, key)?;
        value.parse().map_err(|_| LookupError::NotNumeric {
            key: key.to_string(),
            locale: locale.to_string(),
        })
    }

    /// Like [`KeyTable::try_get_numeric`], but panics when the value is
    /// absent or not numeric.
    pub fn get_numeric(&self, locale: &str, key: &str) -> f64 {
        match self.try_get_numeric(locale, key) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// The locales a value exists for under `key`, in no particular
    /// order.
    pub fn try_get_locales(&self, key: &str) -> Result<Vec<Locale>, LookupError> {
        self.0
            .get(key)
            .map(ValueTable::locales)
            .ok_or_else(|| LookupError::UnknownKey(key.to_string()))
    }

    /// Like [`KeyTable::try_get_locales`], but an absent key yields an
    /// empty set instead of an error.
    pub fn get_locales(&self, key: &str) -> Vec<Locale> {
        self.0.get(key).map(ValueTable::locales).unwrap_or_default()
    }
}

/// All groups of one document.
#[derive(Debug, Default, Clone)]
pub struct GroupTable(HashMap<String, KeyTable>);

impl GroupTable {
    /// Ensure a group exists. Duplicate declarations are caught by the
    /// scanner, which tracks the headers it has seen; the implicit ""
    /// group may already exist here without ever being declared.
    pub(crate) fn add(&mut self, group: &str) {
        self.0.entry(group.to_string()).or_default();
    }

    pub(crate) fn load(&mut self, group: &str, key: &str, locale: &Locale, value: String) {
        let loaded = self
            .0
            .entry(group.to_string())
            .or_default()
            .load(key, locale, value);
        if !loaded {
            debug!("dropped duplicate value for {key}[{locale}] in group {group:?}");
        }
    }

    pub fn get(&self, group: &str) -> Option<&KeyTable> {
        self.0.get(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(values: &[(&str, &str, &str)]) -> KeyTable {
        let mut table = KeyTable::default();
        for (key, tag, value) in values {
            let locale = Locale::from_tag(tag).unwrap();
            table.load(key, &locale, value.to_string());
        }
        table
    }

    #[test]
    fn test_first_write_wins() {
        let table = table_with(&[("Name", "", "first"), ("Name", "", "second")]);
        assert_eq!(table.try_get_string("", "Name").unwrap(), "first");
    }

    #[test]
    fn test_exact_locale_match_only() {
        let table = table_with(&[("Name", "de", "Bar")]);
        assert_eq!(table.try_get_string("de", "Name").unwrap(), "Bar");
        // No fallback from de_DE to de, nor from de to unqualified.
        assert!(table.try_get_string("de_DE", "Name").is_err());
        assert!(table.try_get_string("", "Name").is_err());
    }

    #[test]
    fn test_boolean_accessor() {
        let table = table_with(&[
            ("Hidden", "", "true"),
            ("Shown", "", "false"),
            ("Odd", "", "True"),
        ]);
        assert!(table.try_get_boolean("", "Hidden").unwrap());
        assert!(!table.try_get_boolean("", "Shown").unwrap());
        assert!(matches!(
            table.try_get_boolean("", "Odd"),
            Err(LookupError::NotBoolean { .. })
        ));
        assert!(matches!(
            table.try_get_boolean("", "Missing"),
            Err(LookupError::KeyNotFound { .. })
        ));
    }

    #[test]
    fn test_numeric_accessor() {
        let table = table_with(&[("Version", "", "1.5"), ("Name", "", "Foo")]);
        assert_eq!(table.try_get_numeric("", "Version").unwrap(), 1.5);
        assert!(matches!(
            table.try_get_numeric("", "Name"),
            Err(LookupError::NotNumeric { .. })
        ));
    }

    #[test]
    fn test_locale_enumeration() {
        let table = table_with(&[("Name", "", "Foo"), ("Name", "de", "Bar")]);

        let mut tags: Vec<String> = table
            .try_get_locales("Name")
            .unwrap()
            .iter()
            .map(Locale::to_string)
            .collect();
        tags.sort();
        assert_eq!(tags, ["", "de"]);

        assert!(table.try_get_locales("Missing").is_err());
        assert!(table.get_locales("Missing").is_empty());
    }

    #[test]
    #[should_panic(expected = "not found")]
    fn test_get_string_panics_on_missing() {
        KeyTable::default().get_string("", "Name");
    }

    #[test]
    #[should_panic(expected = "isn't boolean")]
    fn test_get_boolean_panics_on_mismatch() {
        let table = table_with(&[("Hidden", "", "yes")]);
        table.get_boolean("", "Hidden");
    }

    #[test]
    #[should_panic(expected = "isn't numeric")]
    fn test_get_numeric_panics_on_mismatch() {
        let table = table_with(&[("Version", "", "one")]);
        table.get_numeric("", "Version");
    }
}

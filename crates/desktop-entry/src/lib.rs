//! desktop-entry: locale-aware parser for XDG desktop entry files.
//!
//! Provides:
//! - A line scanner for the INI-like desktop entry format (groups,
//!   locale-qualified keys, value validation)
//! - Locale tags (`lang[_COUNTRY][.ENCODING][@MODIFIER]`) with parsing
//!   and canonical formatting
//! - [`Entry`]: one parsed document plus its identity, with typed
//!   accessors (string, boolean, numeric, locale enumeration)
//!
//! Lookups are exact-match on the canonical locale string; there is no
//! fallback from `lang_COUNTRY` to `lang` to the unqualified value.

mod entry;
mod error;
mod locale;
mod scanner;
mod table;

pub use entry::{Entry, MAIN_GROUP};
pub use error::{LocaleError, LookupError, ParseError, ScanError};
pub use locale::Locale;
pub use table::{GroupTable, KeyTable, ValueTable};

//! Parsed desktop entries and their typed accessors.

use std::io::BufRead;

use crate::error::ParseError;
use crate::scanner::Scanner;
use crate::table::{GroupTable, KeyTable};

/// The main group every desktop file is expected to carry.
pub const MAIN_GROUP: &str = "Desktop Entry";

/// One desktop entry document: its identity (application id and source
/// path) plus the group table produced by a successful [`Entry::decode`].
///
/// The identity is fixed at construction. The group table is installed by
/// one decode call and read-only afterwards; after a failed decode the
/// group data must not be used.
#[derive(Debug, Clone)]
pub struct Entry {
    app_id: String,
    path: String,
    groups: GroupTable,
}

impl Entry {
    pub fn new(app_id: impl Into<String>, path: impl Into<String>) -> Self {
        Entry {
            app_id: app_id.into(),
            path: path.into(),
            groups: GroupTable::default(),
        }
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Run one parse over `reader` and install the resulting groups.
    /// On failure the previous group data is left in place untouched.
    pub fn decode(&mut self, reader: impl BufRead) -> Result<(), ParseError> {
        self.groups = Scanner::new(reader).scan()?;
        Ok(())
    }

    pub fn try_group(&self, name: &str) -> Option<&KeyTable> {
        self.groups.get(name)
    }

    /// Like [`Entry::try_group`], but panics when the group is absent.
    pub fn group(&self, name: &str) -> &KeyTable {
        match self.groups.get(name) {
            Some(group) => group,
            None => panic!("group {name:?} not found"),
        }
    }

    /// The unqualified `Name` value from the main group.
    pub fn try_name(&self) -> Option<&str> {
        self.try_group(MAIN_GROUP)?.try_get_string("", "Name").ok()
    }

    /// Like [`Entry::try_name`], but panics when the main group or the
    /// `Name` key is absent.
    pub fn name(&self) -> &str {
        self.group(MAIN_GROUP).get_string("", "Name")
    }

    /// Whether the entry asks to be hidden from application listings.
    ///
    /// Read from the `NoDisplay` boolean in the main group, which is the
    /// assumed convention here; a missing or malformed value means
    /// "displayable". Never panics.
    pub fn try_no_display(&self) -> bool {
        self.try_group(MAIN_GROUP)
            .and_then(|group| group.try_get_boolean("", "NoDisplay").ok())
            .unwrap_or(false)
    }
}

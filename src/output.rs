//! Listing output, plain text and JSON.

use std::io::{self, Write};

use desktop_entry::Entry;
use serde::Serialize;

/// Which attributes to print for each entry.
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    pub id: bool,
    pub name: bool,
    pub path: bool,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    app_id: &'a str,
    name: &'a str,
    path: &'a str,
}

/// Entries marked NoDisplay are filtered from all listings.
fn visible(entries: &[Entry]) -> impl Iterator<Item = &Entry> {
    entries.iter().filter(|entry| !entry.try_no_display())
}

pub fn print_plain(
    out: &mut impl Write,
    entries: &[Entry],
    selection: Selection,
    delimiter: &str,
    null_separated: bool,
) -> io::Result<()> {
    let record_sep = if null_separated { "\0" } else { "\n" };

    for entry in visible(entries) {
        let mut parts: Vec<&str> = Vec::new();
        if selection.id {
            parts.push(entry.app_id());
        }
        if selection.name {
            parts.push(entry.try_name().unwrap_or_default());
        }
        if selection.path {
            parts.push(entry.path());
        }
        if parts.is_empty() {
            continue;
        }

        write!(out, "{}{}", parts.join(delimiter), record_sep)?;
    }

    Ok(())
}

pub fn print_json(out: &mut impl Write, entries: &[Entry]) -> serde_json::Result<()> {
    let records: Vec<JsonEntry<'_>> = visible(entries)
        .map(|entry| JsonEntry {
            app_id: entry.app_id(),
            name: entry.try_name().unwrap_or_default(),
            path: entry.path(),
        })
        .collect();

    serde_json::to_writer_pretty(out, &records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(app_id: &str, path: &str, content: &str) -> Entry {
        let mut entry = Entry::new(app_id, path);
        entry.decode(content.as_bytes()).unwrap();
        entry
    }

    fn sample_entries() -> Vec<Entry> {
        vec![
            entry(
                "firefox",
                "/apps/firefox.desktop",
                "[Desktop Entry]\nName=Firefox\n",
            ),
            entry(
                "hidden",
                "/apps/hidden.desktop",
                "[Desktop Entry]\nName=Hidden\nNoDisplay=true\n",
            ),
        ]
    }

    #[test]
    fn test_plain_output_filters_no_display() {
        let mut out = Vec::new();
        let selection = Selection {
            id: true,
            name: true,
            path: true,
        };
        print_plain(&mut out, &sample_entries(), selection, "\t", false).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "firefox\tFirefox\t/apps/firefox.desktop\n"
        );
    }

    #[test]
    fn test_plain_output_null_separated() {
        let mut out = Vec::new();
        let selection = Selection {
            id: false,
            name: true,
            path: false,
        };
        print_plain(&mut out, &sample_entries(), selection, "\t", true).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Firefox\0");
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        print_json(&mut out, &sample_entries()).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
        assert_eq!(parsed[0]["app_id"], "firefox");
        assert_eq!(parsed[0]["name"], "Firefox");
        assert_eq!(parsed[0]["path"], "/apps/firefox.desktop");
    }
}

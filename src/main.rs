//! applist - list desktop applications found in XDG data directories.

mod discovery;
mod output;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

/// List desktop applications found in the XDG data directories.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Print the application id.
    #[arg(short = 'i', long = "id")]
    show_id: bool,

    /// Print the application name (part of the default selection).
    #[arg(short = 'n', long = "name")]
    show_name: bool,

    /// Print the path of the .desktop file (part of the default selection).
    #[arg(short = 'p', long = "path")]
    show_path: bool,

    /// Delimiter between printed attributes.
    #[arg(short, long, default_value = "\t")]
    delimiter: String,

    /// Use the NUL character as the attribute delimiter.
    #[arg(short = 'z', long)]
    null_delimiter: bool,

    /// Separate records with the NUL character instead of newlines.
    #[arg(short = '0', long)]
    null: bool,

    /// Output a JSON array instead of plain text.
    #[arg(short, long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let selection = if cli.show_id || cli.show_name || cli.show_path {
        output::Selection {
            id: cli.show_id,
            name: cli.show_name,
            path: cli.show_path,
        }
    } else {
        output::Selection {
            id: false,
            name: true,
            path: true,
        }
    };

    let entries = discovery::scan_all();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = if cli.json {
        output::print_json(&mut out, &entries)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(out))
    } else {
        let delimiter = if cli.null_delimiter {
            "\0"
        } else {
            cli.delimiter.as_str()
        };
        output::print_plain(&mut out, &entries, selection, delimiter, cli.null)
    };

    if let Err(err) = result {
        eprintln!("applist: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

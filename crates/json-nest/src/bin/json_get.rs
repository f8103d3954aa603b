//! `json-get` — read the value at a slash path from a JSON document.
//!
//! Usage:
//!   json-get '<path>'
//!
//! The document is read from stdin; the addressed value is printed to
//! stdout as indented JSON.

use json_nest::JsonNest;
use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let path = match args.get(1) {
        Some(p) => p.clone(),
        None => {
            eprintln!("First argument must be a slash path.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let result =
        JsonNest::parse_str(buf.trim()).and_then(|doc| doc.to_json_string(&path, "  "));
    match result {
        Ok(text) => {
            io::stdout().write_all(text.as_bytes()).unwrap();
            io::stdout().write_all(b"\n").unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

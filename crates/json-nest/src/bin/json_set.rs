//! `json-set` — write a value at a slash path in a JSON document.
//!
//! Usage:
//!   json-set '<path>' '<value-json>'
//!
//! The document is read from stdin; the updated document is printed to
//! stdout as indented JSON. Missing intermediate containers are created,
//! so an empty stdin (or `null`) grows whatever structure the path needs.

use json_nest::JsonNest;
use serde_json::Value;
use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (path, value_text) = match (args.get(1), args.get(2)) {
        (Some(p), Some(v)) => (p.clone(), v.clone()),
        _ => {
            eprintln!("Usage: json-set '<path>' '<value-json>'");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let trimmed = buf.trim();
    let result = (|| {
        let doc = if trimmed.is_empty() {
            JsonNest::new()
        } else {
            JsonNest::parse_str(trimmed)?
        };
        let value: Value = serde_json::from_str(&value_text)?;
        doc.set(&path, value)?;
        doc.to_json_string("", "  ")
    })();

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

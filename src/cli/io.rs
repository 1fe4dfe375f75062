//! JSON output handling for CLI
//!
//! One-shot commands print a single envelope line to stdout, in the
//! same `success`/`error` shape the HTTP surface uses.

use std::io::{self, Write};

use serde_json::Value;

use super::errors::CliResult;

/// Write a success envelope to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "success": true,
        "data": data
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write an error envelope to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "success": false,
        "error": {
            "code": code,
            "message": message
        }
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

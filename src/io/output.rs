use std::fs::File;
use std::io::{self, Write};

use radixconv::error::Result;
use radixconv::types::OutputDest;

/// Writes one line of text. Files get the text with a trailing newline too.
pub fn write_line(text: &str, dest: &OutputDest) -> Result<()> {
    match dest {
        OutputDest::File(path) => {
            let mut file = File::create(path)?;
            writeln!(file, "{}", text)?;
            Ok(())
        }
        OutputDest::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", text)?;
            Ok(())
        }
    }
}

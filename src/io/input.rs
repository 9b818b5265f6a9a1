use std::fs;
use std::io::{self, Read};

use radixconv::error::Result;
use radixconv::types::InputSource;

/// Reads digits from the source. Text read from stdin or a file has
/// surrounding whitespace trimmed; literals are taken as given.
pub fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf.trim().to_string())
        }
        InputSource::File(path) => {
            let text = fs::read_to_string(path)?;
            Ok(text.trim().to_string())
        }
        InputSource::Literal(text) => Ok(text.clone()),
    }
}

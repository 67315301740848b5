//! Identifier list file I/O
//!
//! Lists are plain text with one identifier per line.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Load identifiers from file
///
/// Lines are trimmed and blank lines are skipped. No validation is done.
pub fn load_numbers(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut numbers = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            numbers.push(trimmed.to_string());
        }
    }

    Ok(numbers)
}

/// Save identifiers to file, one per line
pub fn save_numbers(path: impl AsRef<Path>, numbers: &[String]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for number in numbers {
        writeln!(writer, "{}", number)?;
    }

    writer.flush()?;
    Ok(())
}

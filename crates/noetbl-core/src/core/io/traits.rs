use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for parsing one of the plain-text input formats.
///
/// Implementors may carry context needed while parsing (such as the intensity
/// table used to turn peak intensities into distances), which is why reading
/// takes `&self`.
pub trait InputFile {
    /// The structured value produced from the file.
    type Output;

    /// The error type for parsing and I/O failures.
    type Error: Error + From<io::Error>;

    /// Parses the format from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is malformed or reading fails.
    fn read_from(&self, reader: &mut impl BufRead) -> Result<Self::Output, Self::Error>;

    /// Opens `path` and parses its content.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Self::Output, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        self.read_from(&mut reader)
    }
}

/// Defines the interface for serializing a sequence of records into an output format.
///
/// Records are taken by reference through any iterator, so callers can write
/// owned slices as well as borrowed views such as an enumerated restraint set.
pub trait OutputFile {
    /// The record type written, one per output unit.
    type Item;

    /// Writes `items` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to<'a, I>(items: I, writer: &mut impl Write) -> io::Result<()>
    where
        I: IntoIterator<Item = &'a Self::Item>,
        Self::Item: 'a;

    /// Creates (or truncates) `path` and writes `items` into it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<'a, I, P>(items: I, path: P) -> io::Result<()>
    where
        I: IntoIterator<Item = &'a Self::Item>,
        Self::Item: 'a,
        P: AsRef<Path>,
    {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(items, &mut writer)?;
        writer.flush()
    }
}

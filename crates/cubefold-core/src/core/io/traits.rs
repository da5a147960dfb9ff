use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// A file format holding a single record of type [`RecordFile::Record`].
pub trait RecordFile {
    type Record;

    type Error: Error + From<io::Error>;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Record, Self::Error>;

    /// # Errors
    ///
    /// Returns an error if serialization or the underlying writer fails.
    fn write_to(record: &Self::Record, writer: &mut impl Write) -> Result<(), Self::Error>;

    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self::Record, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Creates (or truncates) the file at `path` and writes `record` to it.
    fn write_to_path<P: AsRef<Path>>(record: &Self::Record, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(record, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

use std::{fs::File, io::{Write, BufWriter}, path::Path};
use anyhow::Result;

use located_error::LocatedError;

pub mod error;
pub use error::WriterError;

/// A generic line writer.
/// - source: Buffered output file.
pub struct GenericWriter {
    source: BufWriter<File>
}

impl GenericWriter {
    /// Instantiate a new `Writer`, linked to a file. Any existing file at `path` is truncated.
    ///
    /// # Errors
    /// if `path` is either an invalid file, or the user does not have the proper
    /// UNIX permissions to write at this location.
    pub fn new(path: impl AsRef<Path>) -> Result<GenericWriter> {
        let file = File::create(path).map_err(WriterError::IOError).loc("While creating file")?;
        Ok(GenericWriter{ source: BufWriter::new(file) })
    }

    /// Write the contents of a generic iterator. One item = one line.
    ///
    /// # Errors
    /// - If any of the items within `iter` fails to get written.
    pub fn write_iter<T, I>(&mut self, iter: T) -> Result<()>
    where   T: IntoIterator<Item = I>,
            I: std::fmt::Display,
    {
        iter.into_iter()
            .try_for_each(|obj| writeln!(self.source, "{obj}"))
            .map_err(WriterError::IOError)
            .loc("While writing contents into file")?;

        self.source.flush().loc("While flushing buffer contents of Writer")
    }
}

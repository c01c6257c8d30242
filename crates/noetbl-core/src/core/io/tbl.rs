use super::traits::OutputFile;
use crate::core::models::restraint::DistanceRestraint;
use std::io::{self, Write};

/// Writer for XPLOR/CNS-style `.tbl` restraint files.
///
/// One `assign` statement per line, lines separated by `\n`, no trailing newline.
pub struct TblFile;

impl OutputFile for TblFile {
    type Item = DistanceRestraint;

    fn write_to<'a, I>(restraints: I, writer: &mut impl Write) -> io::Result<()>
    where
        I: IntoIterator<Item = &'a DistanceRestraint>,
    {
        for (i, restraint) in restraints.into_iter().enumerate() {
            if i > 0 {
                writer.write_all(b"\n")?;
            }
            write!(writer, "{}", restraint)?;
        }
        Ok(())
    }
}

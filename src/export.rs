//! Re-emitting the JSON table as a script.

use std::path::Path;

use log::{debug, info};

use crate::error::Result;
use crate::table::{read_table_file, write_script_file, CharacterTable};

/// Convert the JSON table at `input` into the script file `output`,
/// returning the number of records.
///
/// `input` is read completely before `output` is touched, so a missing
/// or malformed input never leaves an output file behind.
pub fn export_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<usize> {
    let (input, output) = (input.as_ref(), output.as_ref());
    debug!("reading {}", input.display());
    let table = read_table_file(input)?;
    export_table(&table, output)?;
    Ok(table.len())
}

/// Write `table` in script form to `output`.
pub fn export_table<P: AsRef<Path>>(table: &CharacterTable, output: P) -> Result<()> {
    let output = output.as_ref();
    write_script_file(table, output)?;
    info!("wrote {} records to {}", table.len(), output.display());
    Ok(())
}

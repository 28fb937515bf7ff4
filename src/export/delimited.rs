//! CSV export of a selection.

use crate::error::Result;
use crate::model::{PlateTable, Selection};
use csv::{Terminator, WriterBuilder};
use std::io::Write;

/// Write the header row and the selected rows as CSV.
pub fn write_csv<W: Write>(table: &PlateTable, selection: &Selection, writer: W) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    writer.write_record(&table.headers)?;

    for row in table.selected_rows(selection) {
        let record: Vec<String> = (0..table.headers.len())
            .map(|col| row.cell(col).to_string())
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

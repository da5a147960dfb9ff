use super::IoError;
use super::traits::RecordFile;
use crate::core::models::chain::{ChainSnapshot, ResidueRecord};
use std::io::{BufRead, Write};

/// Structure table with the header `index,aa,x,y,z,H,Q`.
///
/// Rows must appear in residue order starting at index 0.
pub struct StructureCsv;

impl RecordFile for StructureCsv {
    type Record = ChainSnapshot;
    type Error = IoError;

    fn read_from(reader: &mut impl BufRead) -> Result<ChainSnapshot, IoError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut residues = Vec::new();
        for (expected, row) in csv_reader.deserialize::<ResidueRecord>().enumerate() {
            let record = row?;
            if record.index != expected {
                return Err(IoError::Inconsistency(format!(
                    "row {} has residue index {} (expected {})",
                    expected + 1,
                    record.index,
                    expected
                )));
            }
            residues.push(record);
        }

        Ok(ChainSnapshot {
            sequence: residues.iter().map(|r| r.symbol).collect(),
            residues,
        })
    }

    fn write_to(snapshot: &ChainSnapshot, writer: &mut impl Write) -> Result<(), IoError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in &snapshot.residues {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

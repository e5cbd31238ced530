//! CSV output sink for captured pose records.
//!
//! One header line, then one row per record: identifier, sequence number,
//! position and rotation components. Floating values use fixed `%12.6f`
//! formatting so columns line up in the capture file.

use crate::error::Result;
use crate::streaming::wire::PoseRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const HEADER: &str = "id,seq,px,py,pz,qx,qy,qz,qw";

/// Append-only CSV writer over a capture output file.
pub struct CsvSink {
    writer: BufWriter<File>,
}

impl CsvSink {
    /// Create (truncate) the output file and write the header line.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            log::error!("Failed to create {}", path.display());
            e
        })?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", HEADER)?;
        Ok(Self { writer })
    }

    /// Append one record row.
    pub fn append(&mut self, seq: u32, record: &PoseRecord) -> Result<()> {
        writeln!(
            self.writer,
            "{},{},{:12.6},{:12.6},{:12.6},{:12.6},{:12.6},{:12.6},{:12.6}",
            record.id,
            seq,
            record.position.x,
            record.position.y,
            record.position.z,
            record.rotation.x,
            record.rotation.y,
            record.rotation.z,
            record.rotation.w,
        )?;
        Ok(())
    }

    /// Flush buffered rows to disk.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

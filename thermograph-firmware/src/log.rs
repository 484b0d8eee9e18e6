//! Reading log sink
//!
//! Append-only destination for the per-cycle reading records. Records go
//! to the defmt console; a host-side tool can tee them into a flat file.

use defmt::info;

use thermograph_core::traits::{LogError, ReadingLog};

/// defmt-backed log sink
pub struct ConsoleLog;

impl ReadingLog for ConsoleLog {
    fn append(&mut self, line: &str) -> Result<(), LogError> {
        info!("{=str}", line);
        Ok(())
    }
}

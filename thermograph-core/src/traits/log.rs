//! Reading log trait

/// Errors from the log sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogError {
    /// The sink cannot accept further records
    Full,
    /// The sink failed to write the record
    Io,
}

/// Append-only sink for reading records
///
/// One record per sampling cycle, formatted by
/// [`crate::reading::format_log_line`]. No rotation and no readback; the
/// sink decides where records end up (RTT console, host-side file).
pub trait ReadingLog {
    /// Append one formatted record
    fn append(&mut self, line: &str) -> Result<(), LogError>;
}

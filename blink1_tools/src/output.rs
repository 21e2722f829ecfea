//! Handing a report over to whatever delivers it to the device.

use std::io::Write;
use tracing::{debug, trace};
use blink1::Report;

/// Write a report in a single write.
///
/// The report is meant for a hidraw device (or a pipe to one), which takes a report
/// per write, so a short write is an error rather than something to retry.
///
/// # Errors
///
///   * `std::io::ErrorKind::WriteZero` if fewer than [`Report::LEN`] bytes were written.
///   * Anything from writing to or flushing `output`, E.G.:
///     * `std::io::ErrorKind::BrokenPipe`
///     * `std::io::ErrorKind::PermissionDenied`
pub fn write_report(output: &mut impl Write, report: &Report) -> std::io::Result<()> {
    debug!("Writing report: {report}");
    let written = output.write(report.as_bytes())?;
    trace!("Wrote {written} bytes");
    if written != Report::LEN {
        return Err(std::io::Error::new(
            std::io::ErrorKind::WriteZero,
            format!("short write ({written} of {} bytes)", Report::LEN)
        ));
    }
    output.flush()
}

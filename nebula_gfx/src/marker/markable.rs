/// DebugMarkable trait - uniform name/tag operations shared by marker providers

use std::fmt;
use std::fmt::Write as _;

/// Capacity of the formatted-name buffer, in bytes, including the C-string
/// terminator the driver expects. Renderings longer than this are silently
/// truncated to `MARKER_NAME_CAPACITY - 1` bytes.
pub const MARKER_NAME_CAPACITY: usize = 1024;

/// Uniform set operations over one or many native handles
///
/// Implemented by [`ObjectMarker`](crate::marker::ObjectMarker) (one handle)
/// and [`MarkerGroup`](crate::marker::MarkerGroup) (many handles carrying one
/// logical identity). Wrapper types embed one of the two and forward these
/// calls.
pub trait DebugMarkable {
    /// Assign a name to every native handle fronted by this provider
    fn set_name(&mut self, name: &str);

    /// Attach a tag to every native handle fronted by this provider
    ///
    /// # Arguments
    ///
    /// * `tag_id` - 64-bit tag identifier
    /// * `data` - Tag payload; must not be empty
    fn set_tag(&mut self, tag_id: u64, data: &[u8]);

    /// Format a name and assign it, truncating to the fixed buffer capacity
    ///
    /// Behaves exactly like [`set_name`](DebugMarkable::set_name) after
    /// rendering `args`. A rendering longer than
    /// [`MARKER_NAME_CAPACITY`]` - 1` bytes is truncated, never rejected.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use std::sync::Arc;
    /// # use nebula_gfx::nebula::marker::{DebugMarkable, MarkerDevice, ObjectMarker, ObjectType};
    /// # fn annotate(device: &Arc<dyn MarkerDevice>, frame: u32) {
    /// let mut marker = ObjectMarker::new(device, ObjectType::Image);
    /// marker.set_name_formatted(format_args!("swapchain image {}", frame));
    /// # }
    /// ```
    fn set_name_formatted(&mut self, args: fmt::Arguments<'_>) {
        self.set_name(&format_marker_name(args));
    }
}

/// Render `args` into a buffer capped at `MARKER_NAME_CAPACITY - 1` bytes
///
/// Truncation happens at a UTF-8 character boundary; overflowing output is
/// discarded.
pub(crate) fn format_marker_name(args: fmt::Arguments<'_>) -> String {
    let mut writer = TruncatingWriter {
        buffer: String::new(),
        remaining: MARKER_NAME_CAPACITY - 1,
    };
    // Writing to a String cannot fail; overflow is handled by the writer
    let _ = writer.write_fmt(args);
    writer.buffer
}

/// fmt::Write sink that drops output past a fixed byte budget
struct TruncatingWriter {
    buffer: String,
    remaining: usize,
}

impl fmt::Write for TruncatingWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.remaining == 0 {
            return Ok(());
        }

        if s.len() <= self.remaining {
            self.buffer.push_str(s);
            self.remaining -= s.len();
        } else {
            // Cut at the last character boundary that fits the budget
            let mut end = self.remaining;
            while !s.is_char_boundary(end) {
                end -= 1;
            }
            self.buffer.push_str(&s[..end]);
            self.remaining = 0;
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "markable_tests.rs"]
mod tests;

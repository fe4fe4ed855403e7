/// ObjectMarker - marker provider for wrappers fronting exactly one handle

use std::sync::Arc;

use crate::marker::{DebugMarkable, MarkerDevice, MarkerWorker, ObjectType, RawHandle};

/// Marker provider for a single native handle
///
/// Embedded by wrapper types that own exactly one native handle (buffers,
/// images, fences, ...). Composite wrappers that front several handles use
/// [`MarkerGroup`](crate::marker::MarkerGroup) instead; the split makes
/// mixing single-handle and delegate operations a compile error rather than a
/// runtime contract violation.
pub struct ObjectMarker {
    worker: MarkerWorker,
}

impl ObjectMarker {
    /// Create a provider bound to a device and object type
    ///
    /// No handle is tracked yet; call
    /// [`set_handle`](ObjectMarker::set_handle) once the native object
    /// exists.
    pub fn new(device: &Arc<dyn MarkerDevice>, object_type: ObjectType) -> Self {
        Self {
            worker: MarkerWorker::new(device, object_type),
        }
    }

    /// Replace the tracked native handle
    ///
    /// `Some -> None` and `None -> Some` transitions are allowed; assigning a
    /// second handle while one is tracked is a programming error.
    pub fn set_handle(&mut self, handle: Option<RawHandle>) {
        self.worker.set_handle(handle);
    }

    /// Returns the tracked native handle
    pub fn handle(&self) -> Option<RawHandle> {
        self.worker.handle()
    }

    /// Returns the cached name ("" if never set)
    pub fn name(&self) -> &str {
        self.worker.name()
    }

    /// Returns the cached tag as (identifier, payload bytes)
    pub fn tag(&self) -> (u64, &[u8]) {
        self.worker.tag()
    }
}

impl DebugMarkable for ObjectMarker {
    fn set_name(&mut self, name: &str) {
        self.worker.set_name(name, false);
    }

    fn set_tag(&mut self, tag_id: u64, data: &[u8]) {
        self.worker.set_tag(tag_id, data, false);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "object_marker_tests.rs"]
mod tests;

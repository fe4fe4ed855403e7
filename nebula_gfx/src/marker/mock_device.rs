/// Mock MarkerDevice for unit tests (no GPU required)
///
/// Records every driver call so provider and worker tests can verify exactly
/// which calls reached the "driver", with toggleable extension support and an
/// optional failure mode for exercising the error-logging path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::marker::{MarkerDevice, ObjectType, RawHandle};

// ============================================================================
// Recorded calls
// ============================================================================

/// One driver call recorded by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerCall {
    Name {
        object_type: ObjectType,
        handle: RawHandle,
        name: String,
    },
    Tag {
        object_type: ObjectType,
        handle: RawHandle,
        tag_id: u64,
        data: Vec<u8>,
    },
}

// ============================================================================
// Mock device
// ============================================================================

pub struct MockMarkerDevice {
    markers_supported: bool,
    fail_calls: AtomicBool,
    calls: Mutex<Vec<MarkerCall>>,
}

impl MockMarkerDevice {
    pub fn new(markers_supported: bool) -> Self {
        Self {
            markers_supported,
            fail_calls: AtomicBool::new(false),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make subsequent driver calls fail with a backend error
    pub fn set_fail_calls(&self, fail: bool) {
        self.fail_calls.store(fail, Ordering::Relaxed);
    }

    /// Snapshot of all recorded calls, in issue order
    pub fn calls(&self) -> Vec<MarkerCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl MarkerDevice for MockMarkerDevice {
    fn debug_markers_supported(&self) -> bool {
        self.markers_supported
    }

    fn set_object_name(
        &self,
        object_type: ObjectType,
        handle: RawHandle,
        name: &str,
    ) -> Result<()> {
        if self.fail_calls.load(Ordering::Relaxed) {
            return Err(Error::BackendError("mock name call failure".to_string()));
        }

        self.calls.lock().unwrap().push(MarkerCall::Name {
            object_type,
            handle,
            name: name.to_string(),
        });
        Ok(())
    }

    fn set_object_tag(
        &self,
        object_type: ObjectType,
        handle: RawHandle,
        tag_id: u64,
        data: &[u8],
    ) -> Result<()> {
        if self.fail_calls.load(Ordering::Relaxed) {
            return Err(Error::BackendError("mock tag call failure".to_string()));
        }

        self.calls.lock().unwrap().push(MarkerCall::Tag {
            object_type,
            handle,
            tag_id,
            data: data.to_vec(),
        });
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_device_tests.rs"]
mod tests;

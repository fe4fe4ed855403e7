/// MarkerGroup - marker provider mirroring one identity across many handles

use std::sync::{Arc, Weak};

use crate::marker::{DebugMarkable, MarkerDevice, MarkerWorker, ObjectType, RawHandle};

/// Marker provider for composite wrappers fronting several native handles
///
/// All registered handles carry one logical name/tag: every set operation
/// fans out to every delegate, and a delegate added after metadata was
/// assigned inherits the current values. Delegates are kept in registration
/// order and addressed by their raw handle.
///
/// Wrappers that own exactly one handle use
/// [`ObjectMarker`](crate::marker::ObjectMarker) instead.
pub struct MarkerGroup {
    /// Non-owning device back-reference, used to create new delegates
    device: Weak<dyn MarkerDevice>,
    /// Object type shared by every delegate
    object_type: ObjectType,
    /// Delegate workers in registration order
    workers: Vec<MarkerWorker>,
}

impl MarkerGroup {
    /// Create an empty group bound to a device and object type
    pub fn new(device: &Arc<dyn MarkerDevice>, object_type: ObjectType) -> Self {
        Self {
            device: Arc::downgrade(device),
            object_type,
            workers: Vec::new(),
        }
    }

    /// Register a native handle with the group
    ///
    /// Creates a delegate worker for `handle`. If other delegates already
    /// exist, the first delegate's current name and (non-empty) tag are
    /// copied onto the new one so every handle keeps carrying identical
    /// metadata.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is null, if it is already registered, or if the
    /// device has been dropped.
    pub fn add_delegate(&mut self, handle: RawHandle) {
        assert!(handle != 0, "delegate handle must not be null");
        debug_assert!(
            self.workers.iter().all(|w| w.handle() != Some(handle)),
            "delegate handle {handle:#x} is already registered"
        );

        let device = self
            .device
            .upgrade()
            .expect("marker device was dropped while a marker group still references it");

        let mut worker = MarkerWorker::new(&device, self.object_type);
        worker.set_handle(Some(handle));

        if let Some(first) = self.workers.first() {
            worker.set_name(first.name(), false);

            let (tag_id, tag_data) = first.tag();
            if !tag_data.is_empty() {
                worker.set_tag(tag_id, tag_data, false);
            }
        }

        self.workers.push(worker);
    }

    /// Drop a handle previously registered with [`add_delegate`](MarkerGroup::add_delegate)
    ///
    /// Removes exactly the delegate matching `handle`; the others are left
    /// untouched.
    ///
    /// # Panics
    ///
    /// Panics if no delegate tracks `handle`.
    pub fn remove_delegate(&mut self, handle: RawHandle) {
        let Some(index) = self.workers.iter().position(|w| w.handle() == Some(handle)) else {
            panic!("delegate handle {handle:#x} is not registered");
        };

        self.workers.remove(index);
    }

    /// Number of registered delegates
    pub fn delegate_count(&self) -> usize {
        self.workers.len()
    }

    /// Returns the group's name ("" if never set or no delegates exist)
    pub fn name(&self) -> &str {
        self.workers.first().map(MarkerWorker::name).unwrap_or("")
    }

    /// Returns the group's tag as (identifier, payload bytes)
    ///
    /// The payload is empty if no tag was ever set or no delegates exist.
    pub fn tag(&self) -> (u64, &[u8]) {
        self.workers.first().map(MarkerWorker::tag).unwrap_or((0, &[]))
    }
}

impl DebugMarkable for MarkerGroup {
    fn set_name(&mut self, name: &str) {
        for worker in &mut self.workers {
            worker.set_name(name, false);
        }
    }

    fn set_tag(&mut self, tag_id: u64, data: &[u8]) {
        for worker in &mut self.workers {
            worker.set_tag(tag_id, data, false);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "marker_group_tests.rs"]
mod tests;

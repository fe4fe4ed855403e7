/// MarkerWorker - name/tag cache for a single native handle

use std::sync::{Arc, Weak};

use crate::gfx_error;
use crate::marker::{MarkerDevice, ObjectType, RawHandle};

/// Name and tag cache for one native handle
///
/// Owned by a marker provider, never used directly by wrapper types. The
/// worker caches the last name and tag it was given and, when the device
/// reported debug-marker support at construction time and a handle is
/// assigned, forwards changed values to the driver.
///
/// The device reference is non-owning. A worker whose device has been dropped
/// keeps caching values but panics as soon as a driver call would be issued;
/// callers must keep the device alive for as long as markers are applied.
pub struct MarkerWorker {
    /// Non-owning device back-reference
    device: Weak<dyn MarkerDevice>,
    /// Extension support, queried once at construction
    markers_supported: bool,
    /// Cached object name ("" until first set)
    name: String,
    /// Cached tag payload (empty until first set)
    tag_data: Vec<u8>,
    /// Cached tag identifier
    tag_id: u64,
    /// Tracked native handle
    handle: Option<RawHandle>,
    /// Type of the object the handle refers to
    object_type: ObjectType,
}

impl MarkerWorker {
    /// Create a worker bound to a device and object type
    ///
    /// The device's debug-marker support is queried here and cached for the
    /// worker's lifetime.
    pub fn new(device: &Arc<dyn MarkerDevice>, object_type: ObjectType) -> Self {
        Self {
            device: Arc::downgrade(device),
            markers_supported: device.debug_markers_supported(),
            name: String::new(),
            tag_data: Vec::new(),
            tag_id: 0,
            handle: None,
            object_type,
        }
    }

    /// Returns the cached name ("" if never set)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cached tag as (identifier, payload bytes)
    ///
    /// The payload is empty if no tag was ever set.
    pub fn tag(&self) -> (u64, &[u8]) {
        (self.tag_id, &self.tag_data)
    }

    /// Returns the tracked native handle
    pub fn handle(&self) -> Option<RawHandle> {
        self.handle
    }

    /// Returns the object type the worker was created with
    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    /// Update the cached name and forward it to the driver
    ///
    /// If `name` equals the cached value and `force` is false, no driver call
    /// is issued. The driver call also requires extension support and an
    /// assigned handle; without either, the update is cache-only.
    ///
    /// # Arguments
    ///
    /// * `name` - New object name
    /// * `force` - Reissue the driver call even for an unchanged name
    pub fn set_name(&mut self, name: &str, force: bool) {
        if self.name == name && !force {
            return;
        }

        self.name.clear();
        self.name.push_str(name);

        if let Some(handle) = self.handle {
            self.apply_name(handle);
        }
    }

    /// Update the cached tag and forward it to the driver
    ///
    /// Skip logic matches [`set_name`](MarkerWorker::set_name): an unchanged
    /// (identifier, payload) pair without `force` issues no driver call.
    ///
    /// # Arguments
    ///
    /// * `tag_id` - 64-bit tag identifier
    /// * `data` - Tag payload; must not be empty
    /// * `force` - Reissue the driver call even for an unchanged tag
    pub fn set_tag(&mut self, tag_id: u64, data: &[u8], force: bool) {
        assert!(!data.is_empty(), "marker tag payload must not be empty");

        if self.tag_id == tag_id && self.tag_data == data && !force {
            return;
        }

        self.tag_id = tag_id;
        self.tag_data.clear();
        self.tag_data.extend_from_slice(data);

        if let Some(handle) = self.handle {
            self.apply_tag(handle);
        }
    }

    /// Replace the tracked native handle
    ///
    /// `Some -> None` and `None -> Some` transitions are allowed. Assigning a
    /// second handle while one is tracked is a programming error.
    pub fn set_handle(&mut self, handle: Option<RawHandle>) {
        assert!(
            self.handle.is_none() || handle.is_none(),
            "marker worker already tracks a native handle; clear it before assigning a new one"
        );
        debug_assert!(
            handle != Some(0),
            "a null handle is represented by None, not Some(0)"
        );

        self.handle = handle;
    }

    /// Issue the driver name call for `handle`, if the extension is available
    fn apply_name(&self, handle: RawHandle) {
        if !self.markers_supported {
            return;
        }

        let device = self.upgrade_device();
        if let Err(e) = device.set_object_name(self.object_type, handle, &self.name) {
            gfx_error!(
                "nebula::marker",
                "Failed to assign debug name {:?} to {:?} handle {:#x}: {}",
                self.name,
                self.object_type,
                handle,
                e
            );
        }
    }

    /// Issue the driver tag call for `handle`, if the extension is available
    fn apply_tag(&self, handle: RawHandle) {
        if !self.markers_supported {
            return;
        }

        let device = self.upgrade_device();
        if let Err(e) = device.set_object_tag(self.object_type, handle, self.tag_id, &self.tag_data)
        {
            gfx_error!(
                "nebula::marker",
                "Failed to attach debug tag {:#x} to {:?} handle {:#x}: {}",
                self.tag_id,
                self.object_type,
                handle,
                e
            );
        }
    }

    /// Upgrade the device back-reference, failing fast if it expired
    fn upgrade_device(&self) -> Arc<dyn MarkerDevice> {
        self.device
            .upgrade()
            .expect("marker device was dropped while a marker worker still references it")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;

/// MarkerDevice trait - driver boundary for debug name/tag assignment

use crate::error::Result;
use crate::marker::ObjectType;

/// Raw value of a native graphics handle
///
/// Both dispatchable and non-dispatchable Vulkan handles fit in 64 bits;
/// backends convert their typed handles to this form before registering them
/// with a marker provider.
pub type RawHandle = u64;

/// Driver boundary for debug-marker metadata
///
/// Implemented by backend device wrappers (e.g. VulkanMarkerDevice). Marker
/// providers hold this as a non-owning `Weak` reference: the device must
/// outlive the providers created against it, and a provider that needs to
/// issue a driver call after the device is gone fails fast.
///
/// A device that reports `debug_markers_supported() == false` is never asked
/// to issue a call by the marker layer; implementations may still choose to
/// make direct calls on it a silent no-op.
pub trait MarkerDevice: Send + Sync {
    /// Whether the debug-marker extension was enabled on this device
    ///
    /// Queried once when a marker worker is constructed and cached there.
    fn debug_markers_supported(&self) -> bool;

    /// Assign a human-readable name to a native handle
    ///
    /// # Arguments
    ///
    /// * `object_type` - Type of the object the handle refers to
    /// * `handle` - Raw native handle value
    /// * `name` - UTF-8 name; the backend appends the NUL terminator the
    ///   driver expects
    fn set_object_name(&self, object_type: ObjectType, handle: RawHandle, name: &str)
        -> Result<()>;

    /// Attach an opaque tag to a native handle
    ///
    /// # Arguments
    ///
    /// * `object_type` - Type of the object the handle refers to
    /// * `handle` - Raw native handle value
    /// * `tag_id` - 64-bit tag identifier
    /// * `data` - Tag payload bytes (never empty; enforced by the caller)
    fn set_object_tag(
        &self,
        object_type: ObjectType,
        handle: RawHandle,
        tag_id: u64,
        data: &[u8],
    ) -> Result<()>;
}

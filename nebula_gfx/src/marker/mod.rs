/// Marker module - debug name/tag metadata for native graphics handles

// Module declarations
pub mod device;
pub mod object_type;
pub mod markable;
pub mod worker;
pub mod object_marker;
pub mod marker_group;

#[cfg(test)]
pub mod mock_device;

// Re-exports
pub use device::{MarkerDevice, RawHandle};
pub use object_type::ObjectType;
pub use markable::{DebugMarkable, MARKER_NAME_CAPACITY};
pub use worker::MarkerWorker;
pub use object_marker::ObjectMarker;
pub use marker_group::MarkerGroup;

/*!
# Nebula GFX

Core types for the Nebula graphics abstraction layer.

This crate provides the backend-agnostic debug-marker metadata layer: wrapper
objects around native graphics-API handles embed a marker provider, give it a
human-readable name and an opaque tag, and the provider forwards that metadata
to the driver through the [`marker::MarkerDevice`] trait when the device
reports debug-marker support. Backend implementations (Vulkan, ...) supply the
concrete device type.

## Architecture

- **MarkerDevice**: driver boundary trait for issuing name/tag calls
- **MarkerWorker**: name/tag cache for a single native handle
- **ObjectMarker**: provider for wrappers that front exactly one handle
- **MarkerGroup**: provider for composite wrappers that front several handles
- **DebugMarkable**: uniform set operations shared by both providers

## Example

```no_run
use std::sync::Arc;
use nebula_gfx::nebula::marker::{DebugMarkable, MarkerDevice, ObjectMarker, ObjectType};

struct Buffer {
    marker: ObjectMarker,
}

fn annotate(device: &Arc<dyn MarkerDevice>) {
    let mut buffer = Buffer {
        marker: ObjectMarker::new(device, ObjectType::Buffer),
    };
    buffer.marker.set_handle(Some(0x5600_0000_1234));
    buffer.marker.set_name("mesh vertex buffer");
    buffer.marker.set_tag(1, &[0xAA, 0xBB]);
}
```
*/

// Internal modules
mod error;
pub mod log;
pub mod marker;

// Main nebula namespace module
pub mod nebula {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
        // Note: gfx_* macros are NOT re-exported here - they live at the crate root
    }

    // Marker sub-module with all debug-marker types
    pub mod marker {
        pub use crate::marker::*;
    }
}

/*!
# Nebula GFX - Vulkan Backend

Vulkan implementation of the Nebula debug-marker layer.

This crate provides the [`VulkanMarkerDevice`] implementing the
`nebula_gfx::marker::MarkerDevice` trait with the Ash library: object names
and tags registered with marker providers reach the driver through
`VK_EXT_debug_marker`, where tools like RenderDoc pick them up. It also
routes `VK_EXT_debug_utils` validation messages through the Nebula logging
system.
*/

// Vulkan implementation modules
mod vulkan_debug;
mod vulkan_marker_device;

pub use vulkan_marker_device::VulkanMarkerDevice;

// Re-export debug utilities
pub use vulkan_debug::{create_debug_messenger, destroy_debug_messenger, vulkan_debug_callback};

/// VulkanMarkerDevice - Vulkan implementation of the MarkerDevice trait

use std::ffi::CString;

use ash::vk;
use nebula_gfx::gfx_info;
use nebula_gfx::nebula::marker::{MarkerDevice, ObjectType, RawHandle};
use nebula_gfx::nebula::{Error, Result};

/// Vulkan marker device
///
/// Issues `VK_EXT_debug_marker` calls on behalf of the marker layer. The
/// device-owning code creates one of these next to the logical device and
/// hands it (behind `Arc<dyn MarkerDevice>`) to every marker provider it
/// constructs.
///
/// When the extension was not enabled at device creation, every call is a
/// silent no-op and names/tags stay cached on the provider side.
pub struct VulkanMarkerDevice {
    /// VK_EXT_debug_marker function table (present only when the extension was enabled)
    debug_marker: Option<ash::ext::debug_marker::Device>,
}

impl VulkanMarkerDevice {
    /// Check whether the physical device offers `VK_EXT_debug_marker`
    ///
    /// Call this before device creation to decide whether to put the
    /// extension into the enabled-extension list.
    pub fn extension_supported(
        instance: &ash::Instance,
        physical_device: vk::PhysicalDevice,
    ) -> bool {
        let extensions = unsafe { instance.enumerate_device_extension_properties(physical_device) };
        match extensions {
            Ok(extensions) => extensions.iter().any(|ext| {
                ext.extension_name_as_c_str()
                    .map_or(false, |name| name == ash::ext::debug_marker::NAME)
            }),
            Err(_) => false,
        }
    }

    /// Create a marker device for `device`
    ///
    /// # Arguments
    ///
    /// * `instance` - Vulkan instance the device was created from
    /// * `device` - Logical device to issue marker calls on
    /// * `extension_enabled` - Whether `VK_EXT_debug_marker` was enabled at
    ///   device creation; the extension function table is loaded only then
    pub fn new(instance: &ash::Instance, device: &ash::Device, extension_enabled: bool) -> Self {
        let debug_marker = if extension_enabled {
            gfx_info!(
                "nebula::vulkan",
                "VK_EXT_debug_marker enabled, object names will reach the driver"
            );
            Some(ash::ext::debug_marker::Device::new(instance, device))
        } else {
            gfx_info!(
                "nebula::vulkan",
                "VK_EXT_debug_marker not enabled, object names stay local"
            );
            None
        };

        Self { debug_marker }
    }
}

impl MarkerDevice for VulkanMarkerDevice {
    fn debug_markers_supported(&self) -> bool {
        self.debug_marker.is_some()
    }

    fn set_object_name(&self, object_type: ObjectType, handle: RawHandle, name: &str)
        -> Result<()> {
        // Extension off: naming stays local
        let Some(debug_marker) = &self.debug_marker else {
            return Ok(());
        };

        // The driver expects a NUL-terminated string
        let object_name = CString::new(name).map_err(|_| {
            Error::InvalidName(format!("name {:?} contains an interior NUL byte", name))
        })?;

        let name_info = vk::DebugMarkerObjectNameInfoEXT::default()
            .object_type(map_object_type(object_type))
            .object(handle)
            .object_name(&object_name);

        unsafe { debug_marker.debug_marker_set_object_name(&name_info) }
            .map_err(|e| Error::BackendError(format!("vkDebugMarkerSetObjectNameEXT failed: {}", e)))
    }

    fn set_object_tag(
        &self,
        object_type: ObjectType,
        handle: RawHandle,
        tag_id: u64,
        data: &[u8],
    ) -> Result<()> {
        let Some(debug_marker) = &self.debug_marker else {
            return Ok(());
        };

        let tag_info = vk::DebugMarkerObjectTagInfoEXT::default()
            .object_type(map_object_type(object_type))
            .object(handle)
            .tag_name(tag_id)
            .tag(data);

        unsafe {
            (debug_marker.fp().debug_marker_set_object_tag_ext)(debug_marker.device(), &tag_info)
        }
        .result()
        .map_err(|e| Error::BackendError(format!("vkDebugMarkerSetObjectTagEXT failed: {}", e)))
    }
}

/// Map the framework object type onto the debug-report enumeration
fn map_object_type(object_type: ObjectType) -> vk::DebugReportObjectTypeEXT {
    match object_type {
        ObjectType::Unknown => vk::DebugReportObjectTypeEXT::UNKNOWN,
        ObjectType::Instance => vk::DebugReportObjectTypeEXT::INSTANCE,
        ObjectType::PhysicalDevice => vk::DebugReportObjectTypeEXT::PHYSICAL_DEVICE,
        ObjectType::Device => vk::DebugReportObjectTypeEXT::DEVICE,
        ObjectType::Queue => vk::DebugReportObjectTypeEXT::QUEUE,
        ObjectType::Semaphore => vk::DebugReportObjectTypeEXT::SEMAPHORE,
        ObjectType::CommandBuffer => vk::DebugReportObjectTypeEXT::COMMAND_BUFFER,
        ObjectType::Fence => vk::DebugReportObjectTypeEXT::FENCE,
        ObjectType::DeviceMemory => vk::DebugReportObjectTypeEXT::DEVICE_MEMORY,
        ObjectType::Buffer => vk::DebugReportObjectTypeEXT::BUFFER,
        ObjectType::Image => vk::DebugReportObjectTypeEXT::IMAGE,
        ObjectType::Event => vk::DebugReportObjectTypeEXT::EVENT,
        ObjectType::QueryPool => vk::DebugReportObjectTypeEXT::QUERY_POOL,
        ObjectType::BufferView => vk::DebugReportObjectTypeEXT::BUFFER_VIEW,
        ObjectType::ImageView => vk::DebugReportObjectTypeEXT::IMAGE_VIEW,
        ObjectType::ShaderModule => vk::DebugReportObjectTypeEXT::SHADER_MODULE,
        ObjectType::PipelineCache => vk::DebugReportObjectTypeEXT::PIPELINE_CACHE,
        ObjectType::PipelineLayout => vk::DebugReportObjectTypeEXT::PIPELINE_LAYOUT,
        ObjectType::RenderPass => vk::DebugReportObjectTypeEXT::RENDER_PASS,
        ObjectType::Pipeline => vk::DebugReportObjectTypeEXT::PIPELINE,
        ObjectType::DescriptorSetLayout => vk::DebugReportObjectTypeEXT::DESCRIPTOR_SET_LAYOUT,
        ObjectType::Sampler => vk::DebugReportObjectTypeEXT::SAMPLER,
        ObjectType::DescriptorPool => vk::DebugReportObjectTypeEXT::DESCRIPTOR_POOL,
        ObjectType::DescriptorSet => vk::DebugReportObjectTypeEXT::DESCRIPTOR_SET,
        ObjectType::Framebuffer => vk::DebugReportObjectTypeEXT::FRAMEBUFFER,
        ObjectType::CommandPool => vk::DebugReportObjectTypeEXT::COMMAND_POOL,
        ObjectType::Surface => vk::DebugReportObjectTypeEXT::SURFACE_KHR,
        ObjectType::Swapchain => vk::DebugReportObjectTypeEXT::SWAPCHAIN_KHR,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "vulkan_marker_device_tests.rs"]
mod tests;

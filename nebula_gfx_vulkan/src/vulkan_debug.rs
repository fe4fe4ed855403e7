/// Vulkan validation diagnostics - routes VK_EXT_debug_utils messages
/// through the Nebula logging system
///
/// The callback translates message severity onto the log severity levels, so
/// a custom Logger installed on the core crate sees driver diagnostics next
/// to the layer's own messages.

use std::ffi::CStr;

use ash::vk;
use nebula_gfx::nebula::{Error, Result};
use nebula_gfx::{gfx_debug, gfx_error, gfx_info, gfx_warn};

/// Vulkan debug messenger callback
///
/// This function is called by Vulkan validation layers when they detect
/// issues. Messages are forwarded to the global logger with a severity
/// matching the driver's.
pub unsafe extern "system" fn vulkan_debug_callback(
    message_severity: vk::DebugUtilsMessageSeverityFlagsEXT,
    message_type: vk::DebugUtilsMessageTypeFlagsEXT,
    p_callback_data: *const vk::DebugUtilsMessengerCallbackDataEXT,
    _user_data: *mut std::os::raw::c_void,
) -> vk::Bool32 {
    // Get callback data
    let callback_data = *p_callback_data;
    let message_id_name = if callback_data.p_message_id_name.is_null() {
        "Unknown"
    } else {
        CStr::from_ptr(callback_data.p_message_id_name)
            .to_str()
            .unwrap_or("Invalid UTF-8")
    };
    let message = if callback_data.p_message.is_null() {
        "No message"
    } else {
        CStr::from_ptr(callback_data.p_message)
            .to_str()
            .unwrap_or("Invalid UTF-8")
    };

    // Determine message type
    let type_str = if message_type.contains(vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION) {
        "Validation"
    } else if message_type.contains(vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE) {
        "Performance"
    } else {
        "General"
    };

    // Forward with matching severity
    if message_severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::ERROR) {
        gfx_error!("nebula::vulkan", "[{}] {}: {}", type_str, message_id_name, message);
    } else if message_severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::WARNING) {
        gfx_warn!("nebula::vulkan", "[{}] {}: {}", type_str, message_id_name, message);
    } else if message_severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::INFO) {
        gfx_info!("nebula::vulkan", "[{}] {}: {}", type_str, message_id_name, message);
    } else {
        gfx_debug!("nebula::vulkan", "[{}] {}: {}", type_str, message_id_name, message);
    }

    vk::FALSE // Don't abort Vulkan execution
}

/// Create a debug messenger that reports through the logging system
///
/// # Arguments
///
/// * `debug_utils` - VK_EXT_debug_utils instance function table
///
/// # Errors
///
/// Returns an error if the driver refuses to create the messenger.
pub fn create_debug_messenger(
    debug_utils: &ash::ext::debug_utils::Instance,
) -> Result<vk::DebugUtilsMessengerEXT> {
    let create_info = vk::DebugUtilsMessengerCreateInfoEXT::default()
        .message_severity(
            vk::DebugUtilsMessageSeverityFlagsEXT::ERROR
                | vk::DebugUtilsMessageSeverityFlagsEXT::WARNING
                | vk::DebugUtilsMessageSeverityFlagsEXT::INFO
                | vk::DebugUtilsMessageSeverityFlagsEXT::VERBOSE,
        )
        .message_type(
            vk::DebugUtilsMessageTypeFlagsEXT::GENERAL
                | vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION
                | vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE,
        )
        .pfn_user_callback(Some(vulkan_debug_callback));

    unsafe { debug_utils.create_debug_utils_messenger(&create_info, None) }
        .map_err(|e| Error::InitializationFailed(format!("Failed to create debug messenger: {}", e)))
}

/// Destroy a messenger created with [`create_debug_messenger`]
///
/// # Safety
///
/// The messenger must have been created from the same instance and must not
/// be used afterwards.
pub unsafe fn destroy_debug_messenger(
    debug_utils: &ash::ext::debug_utils::Instance,
    messenger: vk::DebugUtilsMessengerEXT,
) {
    debug_utils.destroy_debug_utils_messenger(messenger, None);
}

/// ObjectType - backend-agnostic object-type enumeration for debug markers

/// Type of the native object a marker refers to
///
/// Mirrors the driver-side debug-report object-type enumeration; backends map
/// these variants onto their own constants (e.g. `VkDebugReportObjectTypeEXT`
/// in the Vulkan backend).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Unknown,
    Instance,
    PhysicalDevice,
    Device,
    Queue,
    Semaphore,
    CommandBuffer,
    Fence,
    DeviceMemory,
    Buffer,
    Image,
    Event,
    QueryPool,
    BufferView,
    ImageView,
    ShaderModule,
    PipelineCache,
    PipelineLayout,
    RenderPass,
    Pipeline,
    DescriptorSetLayout,
    Sampler,
    DescriptorPool,
    DescriptorSet,
    Framebuffer,
    CommandPool,
    Surface,
    Swapchain,
}

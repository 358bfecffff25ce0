//! Vulkan vertex input layout for the parsed buffers.
//!
//! Every component array is its own tightly packed `f32` stream, bound to its
//! own binding, so each [`FixedBuffer`](crate::obj::FixedBuffer) can be copied
//! into a vertex buffer without any interleaving.

use ash::vk;

use crate::obj::MeshData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeStream {
    PositionX,
    PositionY,
    PositionZ,
    PositionW,
    NormalX,
    NormalY,
    NormalZ,
    TextureU,
    TextureV,
}

impl AttributeStream {
    pub const ALL: [Self; 9] = [
        Self::PositionX,
        Self::PositionY,
        Self::PositionZ,
        Self::PositionW,
        Self::NormalX,
        Self::NormalY,
        Self::NormalZ,
        Self::TextureU,
        Self::TextureV,
    ];

    /// Binding and shader location of the stream.
    pub fn binding(self) -> u32 {
        self as u32
    }

    pub fn data(self, mesh: &MeshData) -> &[f32] {
        match self {
            Self::PositionX => &mesh.positions.x,
            Self::PositionY => &mesh.positions.y,
            Self::PositionZ => &mesh.positions.z,
            Self::PositionW => &mesh.positions.w,
            Self::NormalX => &mesh.normals.x,
            Self::NormalY => &mesh.normals.y,
            Self::NormalZ => &mesh.normals.z,
            Self::TextureU => &mesh.texture_coordinates.u,
            Self::TextureV => &mesh.texture_coordinates.v,
        }
    }

    pub fn size_in_bytes(self, mesh: &MeshData) -> vk::DeviceSize {
        size_of_val(self.data(mesh)) as vk::DeviceSize
    }

    pub fn binding_description(self) -> vk::VertexInputBindingDescription {
        vk::VertexInputBindingDescription::default()
            .binding(self.binding())
            .stride(size_of::<f32>() as u32)
            .input_rate(vk::VertexInputRate::VERTEX)
    }

    pub fn attribute_description(self) -> vk::VertexInputAttributeDescription {
        vk::VertexInputAttributeDescription::default()
            .binding(self.binding())
            .location(self.binding())
            .format(vk::Format::R32_SFLOAT)
            .offset(0)
    }
}

pub fn binding_descriptions() -> [vk::VertexInputBindingDescription; 9] {
    AttributeStream::ALL.map(AttributeStream::binding_description)
}

pub fn attribute_descriptions() -> [vk::VertexInputAttributeDescription; 9] {
    AttributeStream::ALL.map(AttributeStream::attribute_description)
}

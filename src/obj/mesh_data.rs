mod fixed_buffer;

use std::num::NonZeroU32;

pub use fixed_buffer::FixedBuffer;

use super::{MeshSizes, ObjParsingErrorDetail};

/// One corner of a face, as the three 1-based indices written in the file.
///
/// `texture` and `normal` hold [`FaceVertex::ABSENT`] when the face does not
/// name them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct FaceVertex {
    pub position: u32,
    pub texture: u32,
    pub normal: u32,
}

impl FaceVertex {
    pub const ABSENT: u32 = 0;

    pub fn new(position: u32, texture: Option<u32>, normal: Option<u32>) -> Self {
        Self {
            position,
            texture: texture.unwrap_or(Self::ABSENT),
            normal: normal.unwrap_or(Self::ABSENT),
        }
    }

    pub fn texture_index(&self) -> Option<NonZeroU32> {
        NonZeroU32::new(self.texture)
    }

    pub fn normal_index(&self) -> Option<NonZeroU32> {
        NonZeroU32::new(self.normal)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Positions {
    pub x: FixedBuffer<f32>,
    pub y: FixedBuffer<f32>,
    pub z: FixedBuffer<f32>,
    pub w: FixedBuffer<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Normals {
    pub x: FixedBuffer<f32>,
    pub y: FixedBuffer<f32>,
    pub z: FixedBuffer<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextureCoordinates {
    pub u: FixedBuffer<f32>,
    pub v: FixedBuffer<f32>,
}

/// Every face's corners back to back, plus how many corners each face has.
#[derive(Debug, Clone, PartialEq)]
pub struct Faces {
    pub vertices: FixedBuffer<FaceVertex>,
    pub sizes: FixedBuffer<u32>,
}

/// The parsed mesh as struct-of-arrays buffers, each sized exactly from
/// [`MeshSizes`].
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub positions: Positions,
    pub normals: Normals,
    pub texture_coordinates: TextureCoordinates,
    pub faces: Faces,
}

impl Default for MeshData {
    fn default() -> Self {
        Self {
            positions: Positions {
                x: FixedBuffer::unallocated("position x"),
                y: FixedBuffer::unallocated("position y"),
                z: FixedBuffer::unallocated("position z"),
                w: FixedBuffer::unallocated("position w"),
            },
            normals: Normals {
                x: FixedBuffer::unallocated("normal x"),
                y: FixedBuffer::unallocated("normal y"),
                z: FixedBuffer::unallocated("normal z"),
            },
            texture_coordinates: TextureCoordinates {
                u: FixedBuffer::unallocated("texture u"),
                v: FixedBuffer::unallocated("texture v"),
            },
            faces: Faces {
                vertices: FixedBuffer::unallocated("face vertices"),
                sizes: FixedBuffer::unallocated("face sizes"),
            },
        }
    }
}

impl MeshData {
    /// Allocates every array once. On failure the arrays allocated so far stay
    /// in `self` and are freed with it.
    pub(crate) fn allocate(&mut self, sizes: &MeshSizes) -> Result<(), ObjParsingErrorDetail> {
        self.positions.allocate(sizes.positions)?;
        self.normals.allocate(sizes.normals)?;
        self.texture_coordinates.allocate(sizes.texture_coordinates)?;
        self.faces.allocate(sizes.faces, sizes.flat_faces)
    }

    pub fn release(&mut self) {
        self.positions.release();
        self.normals.release();
        self.texture_coordinates.release();
        self.faces.release();
    }
}

impl Positions {
    fn allocate(&mut self, count: usize) -> Result<(), ObjParsingErrorDetail> {
        self.x.allocate(count)?;
        self.y.allocate(count)?;
        self.z.allocate(count)?;
        self.w.allocate(count)
    }

    pub(crate) fn push(&mut self, [x, y, z, w]: [f32; 4]) -> Result<(), ObjParsingErrorDetail> {
        self.x.push(x)?;
        self.y.push(y)?;
        self.z.push(z)?;
        self.w.push(w)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<[f32; 4]> {
        Some([
            *self.x.get(index)?,
            *self.y.get(index)?,
            *self.z.get(index)?,
            *self.w.get(index)?,
        ])
    }

    pub fn release(&mut self) {
        self.x.release();
        self.y.release();
        self.z.release();
        self.w.release();
    }
}

impl Normals {
    fn allocate(&mut self, count: usize) -> Result<(), ObjParsingErrorDetail> {
        self.x.allocate(count)?;
        self.y.allocate(count)?;
        self.z.allocate(count)
    }

    pub(crate) fn push(&mut self, [x, y, z]: [f32; 3]) -> Result<(), ObjParsingErrorDetail> {
        self.x.push(x)?;
        self.y.push(y)?;
        self.z.push(z)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<[f32; 3]> {
        Some([
            *self.x.get(index)?,
            *self.y.get(index)?,
            *self.z.get(index)?,
        ])
    }

    pub fn release(&mut self) {
        self.x.release();
        self.y.release();
        self.z.release();
    }
}

impl TextureCoordinates {
    fn allocate(&mut self, count: usize) -> Result<(), ObjParsingErrorDetail> {
        self.u.allocate(count)?;
        self.v.allocate(count)
    }

    pub(crate) fn push(&mut self, [u, v]: [f32; 2]) -> Result<(), ObjParsingErrorDetail> {
        self.u.push(u)?;
        self.v.push(v)
    }

    pub fn len(&self) -> usize {
        self.u.len()
    }

    pub fn is_empty(&self) -> bool {
        self.u.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<[f32; 2]> {
        Some([*self.u.get(index)?, *self.v.get(index)?])
    }

    pub fn release(&mut self) {
        self.u.release();
        self.v.release();
    }
}

impl Faces {
    fn allocate(&mut self, faces: usize, flat_faces: usize) -> Result<(), ObjParsingErrorDetail> {
        self.vertices.allocate(flat_faces)?;
        self.sizes.allocate(faces)
    }

    /// Number of faces.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Start of each face in [`Faces::vertices`].
    pub fn offsets(&self) -> impl Iterator<Item = usize> + '_ {
        self.sizes.iter().scan(0usize, |offset, &size| {
            let start = *offset;
            *offset += size as usize;
            Some(start)
        })
    }

    /// The corners of each face, in file order.
    pub fn iter(&self) -> impl Iterator<Item = &[FaceVertex]> + '_ {
        self.offsets()
            .zip(self.sizes.iter())
            .map_while(|(start, &size)| self.vertices.get(start..start + size as usize))
    }

    /// Walks the preceding sizes, so this is linear in `index`.
    pub fn get(&self, index: usize) -> Option<&[FaceVertex]> {
        self.iter().nth(index)
    }

    pub fn release(&mut self) {
        self.vertices.release();
        self.sizes.release();
    }
}

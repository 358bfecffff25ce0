//! Reads Wavefront `.obj` files into flat struct-of-arrays buffers that can be
//! uploaded to the GPU as they are.
//!
//! A file is read twice. The first pass only counts positions, normals,
//! texture coordinates, faces and face corners. Every buffer is then
//! allocated once at exactly that size, and the second pass decodes each line
//! into them. Nothing grows while decoding.
//!
//! ```no_run
//! let read = obj_reader::read_obj("models/cube.obj")?;
//! for face in read.mesh.data.faces.iter() {
//!     println!("{} corners", face.len());
//! }
//! # Ok::<(), obj_reader::ObjReadFailure>(())
//! ```
//!
//! Only absolute indices are supported. Groups, objects, materials, polylines
//! and smoothing groups are recognized but ignored.

pub mod config;
pub mod obj;
#[cfg(feature = "vulkan")]
pub mod upload;

pub use config::{ErrorPolicy, ObjReaderConfig};
pub use obj::{
    read_obj, release, DeclarationKind, Diagnostic, DiagnosticKind, ErrorKind, FaceVertex,
    IndexFormat, MeshData, MeshSizes, ObjFile, ObjMesh, ObjParsingError, ObjParsingErrorDetail,
    ObjRead, ObjReadFailure, ObjReadResult, ObjReader,
};

mod decode;
mod declaration;
mod error;
mod face;
mod handle_unrecognized_line;
mod line_reader;
mod mesh_data;
mod normal;
mod sizes;
mod texture;
mod vertex;

pub use declaration::DeclarationKind;
pub use error::{Diagnostic, DiagnosticKind, ErrorKind, ObjParsingError, ObjParsingErrorDetail};
pub use face::IndexFormat;
pub use mesh_data::{
    FaceVertex, Faces, FixedBuffer, MeshData, Normals, Positions, TextureCoordinates,
};
pub use sizes::MeshSizes;
pub use vertex::DEFAULT_W;

use std::{
    fs::File,
    io::{BufRead, BufReader, Seek},
    path::Path,
};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::ObjReaderConfig;
use decode::get_data;
use line_reader::LineReader;
use sizes::get_sizes;

pub struct ObjFile<'a>(pub &'a str);

/// Counts and buffers of one parsed file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjMesh {
    pub sizes: MeshSizes,
    pub data: MeshData,
}

impl ObjMesh {
    /// Frees every buffer. Safe on a mesh from a failed read, and safe to
    /// call more than once.
    pub fn release(&mut self) {
        self.data.release();
    }
}

/// Frees a mesh. Dropping it does the same.
pub fn release(mesh: ObjMesh) {
    drop(mesh);
}

#[derive(Debug)]
pub struct ObjRead {
    pub mesh: ObjMesh,
    pub diagnostics: Vec<Diagnostic>,
}

/// A read that stopped on a fatal error.
///
/// `partial` holds whatever was decoded before the error. It is not a
/// complete mesh and is only handed back so it can be inspected or released.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct ObjReadFailure {
    #[source]
    pub error: ObjParsingError,
    pub partial: ObjMesh,
    pub diagnostics: Vec<Diagnostic>,
}

impl ObjReadFailure {
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}

pub type ObjReadResult = Result<ObjRead, ObjReadFailure>;

/// Reads `.obj` files in two passes: one to count, one to fill buffers
/// allocated once from those counts.
#[derive(Debug, Clone, Default)]
pub struct ObjReader {
    config: ObjReaderConfig,
}

impl ObjReader {
    pub fn new(config: ObjReaderConfig) -> Self {
        Self { config }
    }

    pub fn read(&self, path: impl AsRef<Path>) -> ObjReadResult {
        self.read_path(path.as_ref())
    }

    #[instrument(level = "debug", skip(self))]
    fn read_path(&self, path: &Path) -> ObjReadResult {
        if !self.config.has_recognized_extension(path) {
            let detail = ObjParsingErrorDetail::WrongExtension {
                path: path.to_owned(),
                expected: self.config.extensions.join(", "),
            };
            return Err(ObjReadFailure::before_reading(detail.into()));
        }

        let file = File::open(path).map_err(|err| {
            ObjReadFailure::before_reading(ObjParsingErrorDetail::FailedToOpenFile(err).into())
        })?;

        // The file is closed when the reader is dropped, whichever way this returns.
        self.read_from(BufReader::new(file))
    }

    /// Reads from any rewindable stream. The extension check does not apply.
    pub fn read_from<R: BufRead + Seek>(&self, reader: R) -> ObjReadResult {
        let mut mesh = ObjMesh::default();
        let mut diagnostics = Vec::new();

        match self.parse(reader, &mut mesh, &mut diagnostics) {
            Ok(()) => Ok(ObjRead { mesh, diagnostics }),
            Err(error) => Err(ObjReadFailure {
                error,
                partial: mesh,
                diagnostics,
            }),
        }
    }

    fn parse<R: BufRead + Seek>(
        &self,
        reader: R,
        mesh: &mut ObjMesh,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<(), ObjParsingError> {
        let mut lines = LineReader::new(reader, self.config.max_line_length);

        mesh.sizes = get_sizes(&mut lines)?;
        debug!(
            positions = mesh.sizes.positions,
            normals = mesh.sizes.normals,
            texture_coordinates = mesh.sizes.texture_coordinates,
            faces = mesh.sizes.faces,
            flat_faces = mesh.sizes.flat_faces,
            "sizing pass done"
        );

        lines.rewind()?;
        mesh.data.allocate(&mesh.sizes)?;
        get_data(&mut lines, &mesh.sizes, &self.config, &mut mesh.data, diagnostics)?;

        debug!(diagnostics = diagnostics.len(), "decoding pass done");
        Ok(())
    }
}

impl ObjReadFailure {
    fn before_reading(error: ObjParsingError) -> Self {
        Self {
            error,
            partial: ObjMesh::default(),
            diagnostics: Vec::new(),
        }
    }
}

/// Reads `path` with the default configuration.
pub fn read_obj(path: impl AsRef<Path>) -> ObjReadResult {
    ObjReader::default().read(path)
}

impl TryFrom<ObjFile<'_>> for ObjRead {
    type Error = ObjReadFailure;

    fn try_from(file_name: ObjFile) -> Result<Self, Self::Error> {
        read_obj(file_name.0)
    }
}

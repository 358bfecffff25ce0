use std::io::BufRead;

use tracing::{trace, warn};

use super::{
    declaration::DeclarationKind,
    face::parse_face_line,
    handle_unrecognized_line::{handle_unrecognized_line, handle_unsupported_line},
    line_reader::LineReader,
    normal::parse_normal_line,
    texture::parse_texture_line,
    vertex::{parse_vertex_line, DEFAULT_W},
    Diagnostic, DiagnosticKind, MeshData, MeshSizes, ObjParsingError, ObjParsingErrorDetail,
};
use crate::config::{ErrorPolicy, ObjReaderConfig};

/// Second pass: decodes every line into buffers already allocated from
/// `sizes`.
///
/// On error the buffers keep everything decoded before the failing line.
pub(crate) fn get_data<R: BufRead>(
    lines: &mut LineReader<R>,
    sizes: &MeshSizes,
    config: &ObjReaderConfig,
    data: &mut MeshData,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<(), ObjParsingError> {
    let mut pass = DecodingPass {
        sizes,
        config,
        data,
        diagnostics,
    };

    while let Some((line_number, line)) = lines.next_line()? {
        pass.decode_line(line_number, &line)
            .map_err(|detail| ObjParsingError::at_line(line_number, &line, detail))?;
    }

    Ok(())
}

struct DecodingPass<'a> {
    sizes: &'a MeshSizes,
    config: &'a ObjReaderConfig,
    data: &'a mut MeshData,
    diagnostics: &'a mut Vec<Diagnostic>,
}

impl DecodingPass<'_> {
    fn decode_line(&mut self, line_number: usize, line: &str) -> Result<(), ObjParsingErrorDetail> {
        if line.trim().is_empty() {
            return Ok(());
        }

        let kind = DeclarationKind::classify(line);
        let body = kind.body(line);

        match kind {
            DeclarationKind::VertexPosition => {
                let position = parse_vertex_line(&mut body.split_ascii_whitespace());
                let position =
                    self.recover_numeric(position, line_number, line, [0., 0., 0., DEFAULT_W])?;
                self.data.positions.push(position)
            }
            DeclarationKind::VertexNormal => {
                let normal = parse_normal_line(&mut body.split_ascii_whitespace());
                let normal = self.recover_numeric(normal, line_number, line, [0.; 3])?;
                self.data.normals.push(normal)
            }
            DeclarationKind::VertexTexture => {
                let texture = parse_texture_line(&mut body.split_ascii_whitespace());
                let texture = self.recover_numeric(texture, line_number, line, [0.; 2])?;
                self.data.texture_coordinates.push(texture)
            }
            DeclarationKind::Face => self.decode_face(line_number, line, body),
            DeclarationKind::Comment => Ok(()),
            DeclarationKind::Unrecognized => {
                handle_unrecognized_line(line_number, line, self.diagnostics);
                Ok(())
            }
            kind => {
                debug_assert!(kind.is_unsupported());
                handle_unsupported_line(line_number, kind);
                Ok(())
            }
        }
    }

    fn decode_face(
        &mut self,
        line_number: usize,
        line: &str,
        body: &str,
    ) -> Result<(), ObjParsingErrorDetail> {
        let vertex_count = match parse_face_line(body, self.sizes, &mut self.data.faces) {
            Ok(vertex_count) => vertex_count,
            Err(detail) if self.is_skippable(&detail, self.config.face_line_policy) => {
                self.skip_line(line_number, line, &detail);
                return Ok(());
            }
            Err(detail) => return Err(detail),
        };

        if vertex_count < 3 {
            warn!(line = line_number, vertex_count, "degenerate face");
            self.diagnostics.push(Diagnostic::new(
                line_number,
                line,
                DiagnosticKind::DegenerateFace { vertex_count },
            ));
        }
        trace!(line = line_number, vertex_count, "face decoded");
        Ok(())
    }

    /// Under [`ErrorPolicy::Skip`] a malformed numeric line still takes its
    /// slot, filled with `placeholder`, so that the 1-based indices of the
    /// following lines keep naming the right element.
    fn recover_numeric<const N: usize>(
        &mut self,
        decoded: Result<[f32; N], ObjParsingErrorDetail>,
        line_number: usize,
        line: &str,
        placeholder: [f32; N],
    ) -> Result<[f32; N], ObjParsingErrorDetail> {
        match decoded {
            Ok(values) => Ok(values),
            Err(detail) if self.is_skippable(&detail, self.config.numeric_line_policy) => {
                self.skip_line(line_number, line, &detail);
                Ok(placeholder)
            }
            Err(detail) => Err(detail),
        }
    }

    fn is_skippable(&self, detail: &ObjParsingErrorDetail, policy: ErrorPolicy) -> bool {
        policy == ErrorPolicy::Skip && detail.kind().is_skippable()
    }

    fn skip_line(&mut self, line_number: usize, line: &str, detail: &ObjParsingErrorDetail) {
        warn!(line = line_number, error = %detail, "malformed line skipped");
        self.diagnostics.push(Diagnostic::new(
            line_number,
            line,
            DiagnosticKind::SkippedLine {
                error: detail.kind(),
                reason: detail.to_string(),
            },
        ));
    }
}

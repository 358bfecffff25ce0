mod face_format;
mod parse_face_components;

use std::str::SplitAsciiWhitespace;

pub use face_format::IndexFormat;
use parse_face_components::parse_face_component;

use super::{mesh_data::Faces, MeshSizes, ObjParsingErrorDetail};

/// Splits the body of a face line into its corners. Both passes go through
/// here so they always agree on how many corners a face has.
pub(crate) fn face_components(body: &str) -> SplitAsciiWhitespace<'_> {
    body.split_ascii_whitespace()
}

/// Appends every corner of the face to the flat face array and the corner
/// count to the face sizes. Returns the corner count.
///
/// A line is all or nothing: if any corner fails, the corners already
/// appended for this line are removed again.
pub fn parse_face_line(
    body: &str,
    sizes: &MeshSizes,
    faces: &mut Faces,
) -> Result<u32, ObjParsingErrorDetail> {
    let start = faces.vertices.len();
    push_face(body, sizes, faces).inspect_err(|_| faces.vertices.truncate(start))
}

fn push_face(
    body: &str,
    sizes: &MeshSizes,
    faces: &mut Faces,
) -> Result<u32, ObjParsingErrorDetail> {
    let format = IndexFormat::detect(body);

    let mut vertex_count = 0;
    for component in face_components(body) {
        let vertex = parse_face_component(component, format, sizes)?;
        faces.vertices.push(vertex)?;
        vertex_count += 1;
    }

    faces.sizes.push(vertex_count)?;
    Ok(vertex_count)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::obj::{FaceVertex, MeshData};

    fn allocated(faces: usize, flat_faces: usize) -> (MeshSizes, MeshData) {
        let sizes = MeshSizes {
            positions: 8,
            normals: 8,
            texture_coordinates: 8,
            faces,
            flat_faces,
        };
        let mut data = MeshData::default();
        data.allocate(&sizes).unwrap();
        (sizes, data)
    }

    #[test]
    fn quad_with_every_index() {
        let (sizes, mut data) = allocated(1, 4);
        let count = parse_face_line("1/1/1 2/2/1 3/3/1 4/4/1", &sizes, &mut data.faces).unwrap();
        assert_eq!(count, 4);
        assert_eq!(data.faces.sizes.as_slice(), &[4]);
        assert_eq!(data.faces.vertices[3], FaceVertex::new(4, Some(4), Some(1)));
    }

    #[test]
    fn failed_line_leaves_nothing_behind() {
        let (sizes, mut data) = allocated(2, 6);
        parse_face_line("1 2 3", &sizes, &mut data.faces).unwrap();
        let err = parse_face_line("4 5 6/6", &sizes, &mut data.faces).unwrap_err();
        assert!(matches!(err, ObjParsingErrorDetail::MismatchedFaceFormat { .. }));
        assert_eq!(data.faces.vertices.len(), 3);
        assert_eq!(data.faces.sizes.as_slice(), &[3]);
    }

    #[test]
    fn degenerate_faces_are_still_stored() {
        let (sizes, mut data) = allocated(2, 2);
        assert_eq!(parse_face_line("1 2", &sizes, &mut data.faces).unwrap(), 2);
        assert_eq!(parse_face_line("", &sizes, &mut data.faces).unwrap(), 0);
        assert_eq!(data.faces.sizes.as_slice(), &[2, 0]);
    }

    #[test]
    fn overflowing_the_counted_size_is_refused() {
        let (sizes, mut data) = allocated(1, 3);
        let err = parse_face_line("1 2 3 4", &sizes, &mut data.faces).unwrap_err();
        assert!(matches!(err, ObjParsingErrorDetail::CapacityExceeded { .. }));
        assert!(data.faces.vertices.is_empty());
    }
}

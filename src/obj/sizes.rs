use std::io::BufRead;

use tracing::debug;

use super::{
    declaration::DeclarationKind, face::face_components, line_reader::LineReader,
    ObjParsingError,
};

/// Element counts of a file, gathered before anything is allocated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeshSizes {
    pub positions: usize,
    pub normals: usize,
    pub texture_coordinates: usize,
    pub faces: usize,
    /// Vertices of all faces together, i.e. the length of the flat face array.
    pub flat_faces: usize,
}

/// First pass: classifies every line and counts what the second pass will
/// have to store. Lines that cannot be classified are skipped, they do not
/// stop the count.
pub(crate) fn get_sizes<R: BufRead>(
    lines: &mut LineReader<R>,
) -> Result<MeshSizes, ObjParsingError> {
    let mut sizes = MeshSizes::default();

    while let Some((line_number, line)) = lines.next_line()? {
        if line.trim().is_empty() {
            continue;
        }
        match DeclarationKind::classify(&line) {
            DeclarationKind::VertexPosition => sizes.positions += 1,
            DeclarationKind::VertexNormal => sizes.normals += 1,
            DeclarationKind::VertexTexture => sizes.texture_coordinates += 1,
            DeclarationKind::Face => {
                sizes.faces += 1;
                sizes.flat_faces += face_components(DeclarationKind::Face.body(&line)).count();
            }
            DeclarationKind::Unrecognized => {
                debug!(line = line_number, "unrecognized line while sizing");
            }
            _ => {}
        }
    }

    Ok(sizes)
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    fn sizes_of(input: &str) -> MeshSizes {
        get_sizes(&mut LineReader::new(Cursor::new(input), 1024)).unwrap()
    }

    #[test]
    fn counts_every_kind() {
        let sizes = sizes_of(
            "# cube\n\
             mtllib cube.mtl\n\
             o cube\n\
             v 0 0 0\n\
             v 1 0 0\n\
             v 1 1 0 1\n\
             v 0 1 0\n\
             vt 0 0\n\
             vt 1 0\n\
             vn 0 0 1\n\
             usemtl red\n\
             s off\n\
             f 1/1/1 2/2/1 3/1/1 4/2/1\n\
             f 1//1 2//1 3//1\n",
        );
        assert_eq!(
            sizes,
            MeshSizes {
                positions: 4,
                normals: 1,
                texture_coordinates: 2,
                faces: 2,
                flat_faces: 7,
            }
        );
    }

    #[test]
    fn garbage_does_not_disturb_the_count() {
        let sizes = sizes_of("v 1 2 3\nthis is not obj\n#nospace\nv 4 5 6\n\x01\x02\nf 1 2\n");
        assert_eq!(sizes.positions, 2);
        assert_eq!(sizes.faces, 1);
        assert_eq!(sizes.flat_faces, 2);
    }

    #[test]
    fn sizing_does_not_validate_numbers() {
        let sizes = sizes_of("v a b c\nvn\nvn \nf x y z\n");
        assert_eq!(sizes.positions, 1);
        // "vn" alone does not carry the tag's trailing space.
        assert_eq!(sizes.normals, 1);
        assert_eq!(sizes.flat_faces, 3);
    }

    #[test]
    fn empty_input() {
        assert_eq!(sizes_of(""), MeshSizes::default());
        assert_eq!(sizes_of("\n\n   \n"), MeshSizes::default());
    }
}

use rs42::extensions::PipeLine;

use crate::obj::{FaceVertex, MeshSizes, ObjParsingErrorDetail};

use super::IndexFormat;

/// Decodes one corner (`1`, `1/2`, `1//3` or `1/2/3`) under the line's
/// format, checking every index against the counts of the sizing pass.
pub fn parse_face_component(
    component: &str,
    format: IndexFormat,
    sizes: &MeshSizes,
) -> Result<FaceVertex, ObjParsingErrorDetail> {
    let mismatch = || ObjParsingErrorDetail::MismatchedFaceFormat {
        format,
        component: component.to_owned(),
    };

    let (position, texture, normal) = match format {
        IndexFormat::Position => (component, None, None),
        IndexFormat::PositionTexture => {
            let (position, texture) = component.split_once('/').ok_or_else(mismatch)?;
            (position, Some(texture), None)
        }
        IndexFormat::PositionNormal => {
            let (position, normal) = component.split_once("//").ok_or_else(mismatch)?;
            (position, None, Some(normal))
        }
        IndexFormat::PositionTextureNormal => {
            let mut sub_components = component.splitn(3, '/');
            match (
                sub_components.next(),
                sub_components.next(),
                sub_components.next(),
            ) {
                (Some(position), Some(texture), Some(normal)) => {
                    (position, Some(texture), Some(normal))
                }
                _ => return Err(mismatch()),
            }
        }
    };

    let sub_components = [Some(position), texture, normal];
    if sub_components
        .iter()
        .flatten()
        .any(|sub_component| sub_component.is_empty() || sub_component.contains('/'))
    {
        return Err(mismatch());
    }

    FaceVertex {
        position: parse_index(position, sizes.positions, |index, count| {
            ObjParsingErrorDetail::FaceGeometryDoesNotExist { index, count }
        })?,
        texture: texture
            .map(|texture| {
                parse_index(texture, sizes.texture_coordinates, |index, count| {
                    ObjParsingErrorDetail::FaceTextureDoesNotExist { index, count }
                })
            })
            .transpose()?
            .unwrap_or(FaceVertex::ABSENT),
        normal: normal
            .map(|normal| {
                parse_index(normal, sizes.normals, |index, count| {
                    ObjParsingErrorDetail::FaceNormalDoesNotExist { index, count }
                })
            })
            .transpose()?
            .unwrap_or(FaceVertex::ABSENT),
    }
    .pipe(Ok)
}

fn parse_index(
    sub_component: &str,
    count: usize,
    does_not_exist: impl FnOnce(u32, usize) -> ObjParsingErrorDetail,
) -> Result<u32, ObjParsingErrorDetail> {
    if sub_component.starts_with('-') {
        return Err(ObjParsingErrorDetail::RelativeIndexNotSupported);
    }
    let index = sub_component
        .parse::<u32>()
        .map_err(ObjParsingErrorDetail::InvalidSubComponentInFace)?;
    if index == 0 {
        return Err(ObjParsingErrorDetail::FaceSubComponentCanNotBe0);
    }
    if index as usize > count {
        return Err(does_not_exist(index, count));
    }
    Ok(index)
}

#[cfg(test)]
mod test {
    use super::*;

    const SIZES: MeshSizes = MeshSizes {
        positions: 10,
        normals: 5,
        texture_coordinates: 5,
        faces: 0,
        flat_faces: 0,
    };

    fn parse(component: &str, format: IndexFormat) -> Result<FaceVertex, ObjParsingErrorDetail> {
        parse_face_component(component, format, &SIZES)
    }

    #[test]
    fn every_format() {
        assert_eq!(
            parse("7", IndexFormat::Position).unwrap(),
            FaceVertex::new(7, None, None)
        );
        assert_eq!(
            parse("7/2", IndexFormat::PositionTexture).unwrap(),
            FaceVertex::new(7, Some(2), None)
        );
        assert_eq!(
            parse("7//3", IndexFormat::PositionNormal).unwrap(),
            FaceVertex::new(7, None, Some(3))
        );
        assert_eq!(
            parse("7/2/3", IndexFormat::PositionTextureNormal).unwrap(),
            FaceVertex::new(7, Some(2), Some(3))
        );
    }

    #[test]
    fn component_must_follow_the_line_format() {
        for (component, format) in [
            ("7/2", IndexFormat::Position),
            ("7", IndexFormat::PositionTexture),
            ("7//3", IndexFormat::PositionTexture),
            ("7/2/3", IndexFormat::PositionTexture),
            ("7/2", IndexFormat::PositionNormal),
            ("7/2/3", IndexFormat::PositionNormal),
            ("7//3", IndexFormat::PositionTextureNormal),
            ("7/2", IndexFormat::PositionTextureNormal),
            ("7/2/3/4", IndexFormat::PositionTextureNormal),
        ] {
            assert!(
                matches!(
                    parse(component, format),
                    Err(ObjParsingErrorDetail::MismatchedFaceFormat { .. })
                ),
                "{component} as {format}"
            );
        }
    }

    #[test]
    fn invalid_indices() {
        assert!(matches!(
            parse("0", IndexFormat::Position),
            Err(ObjParsingErrorDetail::FaceSubComponentCanNotBe0)
        ));
        assert!(matches!(
            parse("-1", IndexFormat::Position),
            Err(ObjParsingErrorDetail::RelativeIndexNotSupported)
        ));
        assert!(matches!(
            parse("1/-1", IndexFormat::PositionTexture),
            Err(ObjParsingErrorDetail::RelativeIndexNotSupported)
        ));
        assert!(matches!(
            parse("a", IndexFormat::Position),
            Err(ObjParsingErrorDetail::InvalidSubComponentInFace(_))
        ));
        assert!(matches!(
            parse("1.5", IndexFormat::Position),
            Err(ObjParsingErrorDetail::InvalidSubComponentInFace(_))
        ));
    }

    #[test]
    fn indices_past_the_counted_elements() {
        assert!(matches!(
            parse("11", IndexFormat::Position),
            Err(ObjParsingErrorDetail::FaceGeometryDoesNotExist { index: 11, count: 10 })
        ));
        assert!(matches!(
            parse("1/6", IndexFormat::PositionTexture),
            Err(ObjParsingErrorDetail::FaceTextureDoesNotExist { index: 6, count: 5 })
        ));
        assert!(matches!(
            parse("1//6", IndexFormat::PositionNormal),
            Err(ObjParsingErrorDetail::FaceNormalDoesNotExist { index: 6, count: 5 })
        ));
        assert_eq!(
            parse("10/5/5", IndexFormat::PositionTextureNormal).unwrap(),
            FaceVertex::new(10, Some(5), Some(5))
        );
    }
}

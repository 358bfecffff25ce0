use rs42::extensions::PipeLine;

use super::ObjParsingErrorDetail;

/// `w` of a position written with only three components.
pub const DEFAULT_W: f32 = 1.0;

pub fn parse_vertex_line<'a>(
    components: &mut impl Iterator<Item = &'a str>,
) -> Result<[f32; 4], ObjParsingErrorDetail> {
    let mut vertex = [0., 0., 0., DEFAULT_W];

    for elem in vertex.iter_mut().take(3) {
        let Some(str) = components.next() else {
            return Err(ObjParsingErrorDetail::NotEnoughComponentsInVertex);
        };
        *elem = parse_vertex_component(str)?;
    }

    if let Some(str) = components.next() {
        vertex[3] = parse_vertex_component(str)?;
    }

    if components.next().is_some() {
        return Err(ObjParsingErrorDetail::TooManyComponentsInVertex);
    }

    Ok(vertex)
}

fn parse_vertex_component(str: &str) -> Result<f32, ObjParsingErrorDetail> {
    str.parse::<f32>()
        .map_err(ObjParsingErrorDetail::InvalidComponentInVertex)?
        .pipe(Ok)
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(line: &str) -> Result<[f32; 4], ObjParsingErrorDetail> {
        parse_vertex_line(&mut line.split_ascii_whitespace())
    }

    #[test]
    fn w_defaults_to_one() {
        assert_eq!(parse("1 2 3").unwrap(), [1., 2., 3., 1.]);
        assert_eq!(parse("1 2 3 0.5").unwrap(), [1., 2., 3., 0.5]);
        assert_eq!(parse("-1.5e2 0 .25").unwrap(), [-150., 0., 0.25, 1.]);
    }

    #[test]
    fn wrong_arity() {
        assert!(matches!(
            parse("1 2"),
            Err(ObjParsingErrorDetail::NotEnoughComponentsInVertex)
        ));
        assert!(matches!(
            parse(""),
            Err(ObjParsingErrorDetail::NotEnoughComponentsInVertex)
        ));
        assert!(matches!(
            parse("1 2 3 4 5"),
            Err(ObjParsingErrorDetail::TooManyComponentsInVertex)
        ));
    }

    #[test]
    fn invalid_component() {
        assert!(matches!(
            parse("1 two 3"),
            Err(ObjParsingErrorDetail::InvalidComponentInVertex(_))
        ));
        assert!(matches!(
            parse("1 2 3 w"),
            Err(ObjParsingErrorDetail::InvalidComponentInVertex(_))
        ));
    }
}

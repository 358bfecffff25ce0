use super::ObjParsingErrorDetail;

pub fn parse_normal_line<'a>(
    components: &mut impl Iterator<Item = &'a str>,
) -> Result<[f32; 3], ObjParsingErrorDetail> {
    let mut normal = [0.; 3];

    for elem in normal.iter_mut() {
        *elem = components.next().map_or_else(
            || Err(ObjParsingErrorDetail::NotEnoughComponentsInNormal),
            parse_normal_component,
        )?;
    }

    if components.next().is_some() {
        return Err(ObjParsingErrorDetail::TooManyComponentsInNormal);
    }

    // Stored as written. Normalizing is left to whoever consumes the buffers.
    Ok(normal)
}

fn parse_normal_component(str: &str) -> Result<f32, ObjParsingErrorDetail> {
    str.parse::<f32>()
        .map_err(ObjParsingErrorDetail::InvalidComponentInNormal)
}

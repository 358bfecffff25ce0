use super::ObjParsingErrorDetail;

pub fn parse_texture_line<'a>(
    components: &mut impl Iterator<Item = &'a str>,
) -> Result<[f32; 2], ObjParsingErrorDetail> {
    let mut texture = [0.; 2];

    for elem in texture.iter_mut() {
        *elem = components.next().map_or_else(
            || Err(ObjParsingErrorDetail::NotEnoughComponentsInTexture),
            parse_texture_component,
        )?;
    }

    if components.next().is_some() {
        return Err(ObjParsingErrorDetail::TooManyComponentsInTexture);
    }

    Ok(texture)
}

// Values outside [0, 1] are kept: they mean the texture repeats.
fn parse_texture_component(str: &str) -> Result<f32, ObjParsingErrorDetail> {
    str.parse::<f32>()
        .map_err(ObjParsingErrorDetail::InvalidComponentInTexture)
}

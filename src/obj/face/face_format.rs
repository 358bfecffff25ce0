use std::fmt::{self, Display};

/// Which indices the corners of a face carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexFormat {
    /// `f 1 2 3`
    Position,
    /// `f 1/1 2/2 3/3`
    PositionTexture,
    /// `f 1//1 2//2 3//3`
    PositionNormal,
    /// `f 1/1/1 2/2/2 3/3/3`
    PositionTextureNormal,
}

impl IndexFormat {
    /// Decides the format of a whole face line from its first corner.
    ///
    /// `components` is the line without its `f ` tag. Only the slashes of the
    /// first corner are looked at; every other corner on the line is expected
    /// to follow the same format.
    pub fn detect(components: &str) -> Self {
        let mut slash_seen = false;
        let mut previous_was_slash = false;
        let mut in_component = false;

        for byte in components.bytes() {
            match byte {
                b'/' if previous_was_slash => return Self::PositionNormal,
                b'/' if slash_seen => return Self::PositionTextureNormal,
                b'/' => {
                    slash_seen = true;
                    previous_was_slash = true;
                    in_component = true;
                }
                byte if byte.is_ascii_whitespace() => {
                    if in_component {
                        break;
                    }
                }
                byte => {
                    if byte.is_ascii_digit() {
                        previous_was_slash = false;
                    }
                    in_component = true;
                }
            }
        }

        if slash_seen {
            Self::PositionTexture
        } else {
            Self::Position
        }
    }
}

impl Display for IndexFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Position => "position",
            Self::PositionTexture => "position/texture",
            Self::PositionNormal => "position//normal",
            Self::PositionTextureNormal => "position/texture/normal",
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn detect_every_format() {
        assert_eq!(IndexFormat::detect("1/2/3 4/5/6"), IndexFormat::PositionTextureNormal);
        assert_eq!(IndexFormat::detect("1//3 2//4"), IndexFormat::PositionNormal);
        assert_eq!(IndexFormat::detect("1/2 3/4"), IndexFormat::PositionTexture);
        assert_eq!(IndexFormat::detect("1 2 3"), IndexFormat::Position);
    }

    #[test]
    fn single_corner_lines() {
        assert_eq!(IndexFormat::detect("12/7"), IndexFormat::PositionTexture);
        assert_eq!(IndexFormat::detect("12"), IndexFormat::Position);
        assert_eq!(IndexFormat::detect(""), IndexFormat::Position);
    }

    #[test]
    fn only_the_first_corner_counts() {
        assert_eq!(IndexFormat::detect("1 2/2 3//3"), IndexFormat::Position);
        assert_eq!(IndexFormat::detect("1/1 2/2/2"), IndexFormat::PositionTexture);
        assert_eq!(IndexFormat::detect("  1//1 2/2"), IndexFormat::PositionNormal);
    }
}

/// Kind of a line, decided by its leading tag only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Comment,
    VertexPosition,
    VertexTexture,
    VertexNormal,
    VertexParameter,
    Face,
    Line,
    MaterialLib,
    UseMaterial,
    Object,
    Group,
    SmoothingGroup,
    Unrecognized,
}

// First match wins. Every tag carries its trailing space, so "v " can never
// shadow "vt " or "vn ".
const DECLARATION_TAGS: [(&str, DeclarationKind); 12] = [
    ("# ", DeclarationKind::Comment),
    ("v ", DeclarationKind::VertexPosition),
    ("vt ", DeclarationKind::VertexTexture),
    ("vn ", DeclarationKind::VertexNormal),
    ("vp ", DeclarationKind::VertexParameter),
    ("f ", DeclarationKind::Face),
    ("l ", DeclarationKind::Line),
    ("mtllib ", DeclarationKind::MaterialLib),
    ("usemtl ", DeclarationKind::UseMaterial),
    ("o ", DeclarationKind::Object),
    ("g ", DeclarationKind::Group),
    ("s ", DeclarationKind::SmoothingGroup),
];

impl DeclarationKind {
    pub fn classify(line: &str) -> Self {
        DECLARATION_TAGS
            .iter()
            .find(|(tag, _)| line.as_bytes().starts_with(tag.as_bytes()))
            .map_or(Self::Unrecognized, |&(_, kind)| kind)
    }

    pub fn tag(self) -> Option<&'static str> {
        DECLARATION_TAGS
            .iter()
            .find(|&&(_, kind)| kind == self)
            .map(|&(tag, _)| tag)
    }

    /// Known tags that are read past without touching the buffers.
    pub fn is_unsupported(self) -> bool {
        matches!(
            self,
            Self::VertexParameter
                | Self::Line
                | Self::MaterialLib
                | Self::UseMaterial
                | Self::Object
                | Self::Group
                | Self::SmoothingGroup
        )
    }

    /// The part of `line` after this kind's tag.
    pub(crate) fn body(self, line: &str) -> &str {
        self.tag()
            .and_then(|tag| line.get(tag.len()..))
            .unwrap_or(line)
    }
}

use std::{
    collections::TryReserveError,
    error::Error as StdError,
    fmt::{self, Debug, Display},
    io,
    num::{ParseFloatError, ParseIntError},
    path::PathBuf,
};

use thiserror::Error;

use super::face::IndexFormat;

/// Longest slice of an offending line kept inside an error.
const MAX_QUOTED_LINE_LEN: usize = 80;

pub struct ObjParsingError {
    line: Option<(usize, String)>,
    detail: ObjParsingErrorDetail,
}

#[derive(Debug, Error)]
pub enum ObjParsingErrorDetail {
    #[error("\"{}\" has no recognized extension (expected: {expected})", .path.display())]
    WrongExtension { path: PathBuf, expected: String },
    #[error("failed to open file: {0}")]
    FailedToOpenFile(#[source] io::Error),
    #[error("failed to read file: {0}")]
    FailedToReadFile(#[source] io::Error),
    #[error("line is longer than {max} bytes")]
    LineTooLong { max: usize },

    #[error("failed to allocate the {buffer} buffer: {source}")]
    AllocationFailure {
        buffer: &'static str,
        source: TryReserveError,
    },
    #[error("{buffer} buffer is already full ({capacity} elements)")]
    CapacityExceeded {
        buffer: &'static str,
        capacity: usize,
    },

    #[error("vertex needs at least 3 components")]
    NotEnoughComponentsInVertex,
    #[error("vertex has more than 4 components")]
    TooManyComponentsInVertex,
    #[error("invalid vertex component: {0}")]
    InvalidComponentInVertex(#[source] ParseFloatError),

    #[error("normal needs 3 components")]
    NotEnoughComponentsInNormal,
    #[error("normal has more than 3 components")]
    TooManyComponentsInNormal,
    #[error("invalid normal component: {0}")]
    InvalidComponentInNormal(#[source] ParseFloatError),

    #[error("texture coordinate needs 2 components")]
    NotEnoughComponentsInTexture,
    #[error("texture coordinate has more than 2 components")]
    TooManyComponentsInTexture,
    #[error("invalid texture coordinate component: {0}")]
    InvalidComponentInTexture(#[source] ParseFloatError),

    #[error("\"{component}\" does not match the {format} format of this face")]
    MismatchedFaceFormat {
        format: IndexFormat,
        component: String,
    },
    #[error("invalid face index: {0}")]
    InvalidSubComponentInFace(#[source] ParseIntError),
    #[error("face indices start at 1")]
    FaceSubComponentCanNotBe0,
    #[error("relative (negative) face indices are not supported")]
    RelativeIndexNotSupported,
    #[error("face references position {index} but the file only has {count}")]
    FaceGeometryDoesNotExist { index: u32, count: usize },
    #[error("face references texture coordinate {index} but the file only has {count}")]
    FaceTextureDoesNotExist { index: u32, count: usize },
    #[error("face references normal {index} but the file only has {count}")]
    FaceNormalDoesNotExist { index: u32, count: usize },
}

/// Coarse classification of everything that can go wrong while reading a
/// file, fatal or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    WrongExtension,
    CannotOpen,
    ReadFailure,
    LineTooLong,
    MalformedNumericLine,
    MalformedFaceLine,
    DegenerateFace,
    UnrecognizedLine,
    AllocationFailure,
    /// The sizing and decoding passes disagree. Never expected.
    InternalConsistency,
}

impl ErrorKind {
    /// Whether an [`ErrorPolicy::Skip`](crate::ErrorPolicy::Skip) may turn
    /// an error of this kind into a diagnostic.
    pub fn is_skippable(self) -> bool {
        matches!(self, Self::MalformedNumericLine | Self::MalformedFaceLine)
    }
}

impl ObjParsingErrorDetail {
    pub fn kind(&self) -> ErrorKind {
        use ObjParsingErrorDetail as D;

        match self {
            D::WrongExtension { .. } => ErrorKind::WrongExtension,
            D::FailedToOpenFile(_) => ErrorKind::CannotOpen,
            D::FailedToReadFile(_) => ErrorKind::ReadFailure,
            D::LineTooLong { .. } => ErrorKind::LineTooLong,
            D::AllocationFailure { .. } => ErrorKind::AllocationFailure,
            D::CapacityExceeded { .. } => ErrorKind::InternalConsistency,
            D::NotEnoughComponentsInVertex
            | D::TooManyComponentsInVertex
            | D::InvalidComponentInVertex(_)
            | D::NotEnoughComponentsInNormal
            | D::TooManyComponentsInNormal
            | D::InvalidComponentInNormal(_)
            | D::NotEnoughComponentsInTexture
            | D::TooManyComponentsInTexture
            | D::InvalidComponentInTexture(_) => ErrorKind::MalformedNumericLine,
            D::MismatchedFaceFormat { .. }
            | D::InvalidSubComponentInFace(_)
            | D::FaceSubComponentCanNotBe0
            | D::RelativeIndexNotSupported
            | D::FaceGeometryDoesNotExist { .. }
            | D::FaceTextureDoesNotExist { .. }
            | D::FaceNormalDoesNotExist { .. } => ErrorKind::MalformedFaceLine,
        }
    }
}

impl ObjParsingError {
    pub(crate) fn at_line(line_number: usize, line: &str, detail: ObjParsingErrorDetail) -> Self {
        Self {
            line: Some((line_number, quote_line(line))),
            detail,
        }
    }

    pub fn line_number(&self) -> Option<usize> {
        self.line.as_ref().map(|(number, _)| *number)
    }

    pub fn line_content(&self) -> Option<&str> {
        self.line.as_ref().map(|(_, content)| content.as_str())
    }

    pub fn detail(&self) -> &ObjParsingErrorDetail {
        &self.detail
    }

    pub fn kind(&self) -> ErrorKind {
        self.detail.kind()
    }
}

impl From<ObjParsingErrorDetail> for ObjParsingError {
    fn from(detail: ObjParsingErrorDetail) -> Self {
        Self { line: None, detail }
    }
}

impl Debug for ObjParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line.as_ref() {
            return write!(
                f,
                "ObjParsingError {{\n\tline: {}\n\tline_content: \"{}\"\n\tdetails: {:?}\n}}",
                line.0, line.1, self.detail,
            );
        }
        write!(f, "ObjParsingError({:?})", self.detail)
    }
}

impl Display for ObjParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line.as_ref() {
            Some((number, content)) => write!(f, "line {number} (\"{content}\"): {}", self.detail),
            None => Display::fmt(&self.detail, f),
        }
    }
}

impl StdError for ObjParsingError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.detail)
    }
}

/// A recoverable problem found while reading. Parsing went on past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub content: String,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A face with fewer than 3 vertices. It is still stored.
    DegenerateFace { vertex_count: u32 },
    UnrecognizedLine,
    /// A malformed line dropped because its policy is
    /// [`ErrorPolicy::Skip`](crate::ErrorPolicy::Skip).
    SkippedLine { error: ErrorKind, reason: String },
}

impl Diagnostic {
    pub(crate) fn new(line: usize, content: &str, kind: DiagnosticKind) -> Self {
        Self {
            line,
            content: quote_line(content),
            kind,
        }
    }

    pub fn error_kind(&self) -> ErrorKind {
        match self.kind {
            DiagnosticKind::DegenerateFace { .. } => ErrorKind::DegenerateFace,
            DiagnosticKind::UnrecognizedLine => ErrorKind::UnrecognizedLine,
            DiagnosticKind::SkippedLine { error, .. } => error,
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::DegenerateFace { vertex_count } => write!(
                f,
                "line {}: face has only {vertex_count} vertices",
                self.line
            ),
            DiagnosticKind::UnrecognizedLine => {
                write!(f, "line {}: unrecognized line \"{}\"", self.line, self.content)
            }
            DiagnosticKind::SkippedLine { reason, .. } => {
                write!(f, "line {}: skipped: {reason}", self.line)
            }
        }
    }
}

fn quote_line(line: &str) -> String {
    if line.len() <= MAX_QUOTED_LINE_LEN {
        return line.to_owned();
    }
    let mut end = MAX_QUOTED_LINE_LEN;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &line[..end])
}

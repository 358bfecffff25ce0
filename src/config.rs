use std::path::Path;

/// Longest line content accepted by default, in bytes.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 65535;

pub const DEFAULT_EXTENSION: &str = "obj";

/// What to do with a line that matches its tag but cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop reading and fail.
    #[default]
    Abort,
    /// Record a diagnostic and keep going.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjReaderConfig {
    pub max_line_length: usize,
    /// Accepted file extensions, without the dot. Compared case-insensitively.
    pub extensions: Vec<String>,
    /// Applies to `v`, `vn` and `vt` lines.
    pub numeric_line_policy: ErrorPolicy,
    /// Applies to `f` lines.
    pub face_line_policy: ErrorPolicy,
}

impl Default for ObjReaderConfig {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            extensions: vec![DEFAULT_EXTENSION.to_owned()],
            numeric_line_policy: ErrorPolicy::Abort,
            face_line_policy: ErrorPolicy::Abort,
        }
    }
}

impl ObjReaderConfig {
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_numeric_line_policy(mut self, policy: ErrorPolicy) -> Self {
        self.numeric_line_policy = policy;
        self
    }

    pub fn with_face_line_policy(mut self, policy: ErrorPolicy) -> Self {
        self.face_line_policy = policy;
        self
    }

    /// Compares the end of the file name, so a bare `.obj` is accepted too.
    pub fn has_recognized_extension(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            return false;
        };
        self.extensions.iter().any(|accepted| {
            let suffix_len = accepted.len() + 1;
            file_name.len() >= suffix_len
                && file_name
                    .get(file_name.len() - suffix_len..)
                    .and_then(|suffix| suffix.strip_prefix('.'))
                    .is_some_and(|extension| extension.eq_ignore_ascii_case(accepted))
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn extension_is_case_insensitive() {
        let config = ObjReaderConfig::default();
        assert!(config.has_recognized_extension(Path::new("models/cube.obj")));
        assert!(config.has_recognized_extension(Path::new("CUBE.OBJ")));
        assert!(!config.has_recognized_extension(Path::new("cube.obj.bak")));
        assert!(!config.has_recognized_extension(Path::new("cube")));
        assert!(!config.has_recognized_extension(Path::new("cubeobj")));
    }

    #[test]
    fn hidden_file_with_only_the_extension() {
        let config = ObjReaderConfig::default();
        assert!(config.has_recognized_extension(Path::new(".obj")));
        assert!(config.has_recognized_extension(Path::new("models/.OBJ")));
        assert!(!config.has_recognized_extension(Path::new("obj")));
    }

    #[test]
    fn custom_extensions() {
        let config = ObjReaderConfig::default().with_extensions(["wobj", "Mesh"]);
        assert!(config.has_recognized_extension(Path::new("a.mesh")));
        assert!(!config.has_recognized_extension(Path::new("a.obj")));
    }
}

use std::fmt;

/// An absolute path in the tree, held as its non-empty segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VfsPath {
    segments: Vec<String>,
}

impl VfsPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse an absolute path. A leading slash is optional.
    pub fn parse(raw: &str) -> Self {
        Self::root().join(raw)
    }

    /// Join raw input onto this path.
    ///
    /// Input starting with `/` replaces the base. Empty segments are dropped;
    /// `.` and `..` are kept as ordinary names.
    pub fn join(&self, raw: &str) -> Self {
        let mut segments = if raw.starts_with('/') { Vec::new() } else { self.segments.clone() };
        segments.extend(raw.split('/').filter(|s| !s.is_empty()).map(str::to_string));
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// The containing directory; `None` at root.
    pub fn parent(&self) -> Option<VfsPath> {
        let (_, rest) = self.segments.split_last()?;
        Some(Self { segments: rest.to_vec() })
    }

    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Whether `self` is `other` or lies beneath it.
    pub fn starts_with(&self, other: &VfsPath) -> bool {
        self.segments.starts_with(&other.segments)
    }
}

impl fmt::Display for VfsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

//! Fully-qualified field paths
//!
//! A [`FieldPath`] is the location of a value relative to the session root,
//! rendered as `schedule.wednesday.start` or `bands[2]`. Key segments hold
//! the display name (alias already applied), so the rendered path is what
//! ends up in `ValidationError::param`.

use std::fmt;

use smallvec::SmallVec;

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object member, by display name.
    Key(String),
    /// Array element.
    Index(usize),
}

/// Location of a field inside the root value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: SmallVec<[PathSegment; 4]>,
}

impl FieldPath {
    /// The empty path, pointing at the root itself.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path extended by an object key.
    #[must_use]
    pub fn key(&self, name: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.segments.push(PathSegment::Key(name.into()));
        next
    }

    /// Returns a new path extended by an array index.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.segments.push(PathSegment::Index(index));
        next
    }

    /// Whether this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The segments from the root outwards.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The last segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(name) if i == 0 => f.write_str(name)?,
                PathSegment::Key(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl From<&str> for FieldPath {
    fn from(name: &str) -> Self {
        Self::root().key(name)
    }
}

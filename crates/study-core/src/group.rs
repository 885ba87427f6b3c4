//! Groups of parts sharing one geometry reference

use crate::part::GeometryRef;

/// Derived partition of the catalog by shared geometry
///
/// Members are indices into the owning catalog's part list, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub geometry: GeometryRef,
    pub(crate) members: Vec<usize>,
    pub(crate) name: String,
}

impl Group {
    pub(crate) fn new(geometry: GeometryRef) -> Self {
        let name = geometry.display_name().to_string();
        Self {
            geometry,
            members: Vec::new(),
            name,
        }
    }

    /// File stem of the geometry reference, or the full reference when
    /// another group of the same catalog has the same stem
    pub fn display_name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

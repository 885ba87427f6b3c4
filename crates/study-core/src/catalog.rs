//! Part catalog of an assembly
//!
//! The catalog is validated once at load and immutable afterwards. Groups are
//! derived from it at load time and never stored anywhere else.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::group::Group;
use crate::part::{GeometryRef, Part};

/// Errors that make a catalog unusable
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog contains no parts")]
    Empty,

    #[error("Duplicate part id: {0}")]
    DuplicatePartId(String),

    #[error("Part with empty id")]
    EmptyPartId,

    #[error("Part '{0}' has an empty geometry reference")]
    EmptyGeometryRef(String),

    #[error("Part '{0}' has a non-finite position, rotation or direction")]
    NonFinite(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}

/// On-disk catalog description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Assembly title shown in the header
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    pub parts: Vec<Part>,
}

/// Validated, ordered part collection with derived groups
#[derive(Debug, Clone)]
pub struct Catalog {
    title: String,
    category: Option<String>,
    parts: Vec<Part>,
    part_index: HashMap<String, usize>,
    groups: Vec<Group>,
    group_index: HashMap<GeometryRef, usize>,
}

impl Catalog {
    /// Validate a part sequence and derive its groups
    pub fn from_parts(parts: Vec<Part>) -> Result<Self, CatalogError> {
        Self::build(String::new(), None, parts)
    }

    /// Parse a catalog from RON text
    pub fn from_ron_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            ron::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::build(file.title, file.category, file.parts)
    }

    /// Load a catalog from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;
        let catalog = Self::from_ron_str(&content)?;
        tracing::info!(
            "Loaded catalog '{}' from {:?}: {} parts in {} groups",
            catalog.title,
            path,
            catalog.parts.len(),
            catalog.groups.len()
        );
        Ok(catalog)
    }

    fn build(
        title: String,
        category: Option<String>,
        parts: Vec<Part>,
    ) -> Result<Self, CatalogError> {
        if parts.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut part_index = HashMap::with_capacity(parts.len());
        let mut groups: Vec<Group> = Vec::new();
        let mut group_index: HashMap<GeometryRef, usize> = HashMap::new();

        for (i, part) in parts.iter().enumerate() {
            if part.id.is_empty() {
                return Err(CatalogError::EmptyPartId);
            }
            if part.geometry.as_str().is_empty() {
                return Err(CatalogError::EmptyGeometryRef(part.id.clone()));
            }
            if !part.is_finite() {
                return Err(CatalogError::NonFinite(part.id.clone()));
            }
            if part_index.insert(part.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicatePartId(part.id.clone()));
            }

            let group = *group_index.entry(part.geometry.clone()).or_insert_with(|| {
                groups.push(Group::new(part.geometry.clone()));
                groups.len() - 1
            });
            groups[group].members.push(i);
        }
        disambiguate_names(&mut groups);

        Ok(Self {
            title,
            category,
            parts,
            part_index,
            groups,
            group_index,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// All parts in catalog order
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Always false for a loaded catalog
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn part(&self, id: &str) -> Option<&Part> {
        self.part_index.get(id).map(|&i| &self.parts[i])
    }

    pub fn contains_part(&self, id: &str) -> bool {
        self.part_index.contains_key(id)
    }

    /// Groups in order of first appearance
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, geometry: &GeometryRef) -> Option<&Group> {
        self.group_index.get(geometry).map(|&i| &self.groups[i])
    }

    /// Group containing the given part
    pub fn group_of(&self, part_id: &str) -> Option<&Group> {
        self.part(part_id).and_then(|p| self.group(&p.geometry))
    }

    /// Parts of a group in catalog order
    pub fn group_parts<'a>(&'a self, group: &'a Group) -> impl Iterator<Item = &'a Part> + 'a {
        group.members.iter().map(move |&i| &self.parts[i])
    }

    /// First part of the group in catalog order
    pub fn representative(&self, geometry: &GeometryRef) -> Option<&Part> {
        self.group(geometry)
            .and_then(|g| g.members.first())
            .map(|&i| &self.parts[i])
    }
}

/// Fall back to the full reference for groups whose stems collide
fn disambiguate_names(groups: &mut [Group]) {
    let mut stems: HashMap<&str, usize> = HashMap::new();
    for group in groups.iter() {
        *stems.entry(group.geometry.display_name()).or_default() += 1;
    }
    let colliding: Vec<usize> = groups
        .iter()
        .enumerate()
        .filter(|(_, g)| stems.get(g.geometry.display_name()).is_some_and(|&n| n > 1))
        .map(|(i, _)| i)
        .collect();

    for i in colliding {
        tracing::debug!(
            "Group name '{}' is ambiguous, using '{}'",
            groups[i].name,
            groups[i].geometry
        );
        groups[i].name = groups[i].geometry.as_str().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Part> {
        vec![
            Part::new("link_L", "/models/Link.glb"),
            Part::new("base_plate", "/models/BasePlate.glb"),
            Part::new("link_R", "/models/Link.glb"),
        ]
    }

    #[test]
    fn test_groups_follow_first_appearance() {
        let catalog = Catalog::from_parts(sample()).unwrap();

        let names: Vec<&str> = catalog.groups().iter().map(|g| g.display_name()).collect();
        assert_eq!(names, vec!["Link", "BasePlate"]);

        let link = catalog.group(&"/models/Link.glb".into()).unwrap();
        let ids: Vec<&str> = catalog.group_parts(link).map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["link_L", "link_R"]);
    }

    #[test]
    fn test_colliding_stems_use_full_ref() {
        let catalog = Catalog::from_parts(vec![
            Part::new("front_pin", "/a/Pin.glb"),
            Part::new("gear", "/models/Gear.glb"),
            Part::new("rear_pin", "/b/Pin.glb"),
            Part::new("front_pin_2", "/a/Pin.glb"),
        ])
        .unwrap();

        let names: Vec<&str> = catalog.groups().iter().map(|g| g.display_name()).collect();
        assert_eq!(names, vec!["/a/Pin.glb", "Gear", "/b/Pin.glb"]);
        assert_eq!(catalog.group_of("front_pin_2").unwrap().display_name(), "/a/Pin.glb");
    }

    #[test]
    fn test_every_part_in_exactly_one_group() {
        let catalog = Catalog::from_parts(sample()).unwrap();
        let total: usize = catalog.groups().iter().map(|g| g.len()).sum();
        assert_eq!(total, catalog.len());
        for part in catalog.parts() {
            assert_eq!(catalog.group_of(&part.id).unwrap().geometry, part.geometry);
        }
    }

    #[test]
    fn test_representative_is_first_in_catalog_order() {
        let catalog = Catalog::from_parts(sample()).unwrap();
        let rep = catalog.representative(&"/models/Link.glb".into()).unwrap();
        assert_eq!(rep.id, "link_L");
    }

    #[test]
    fn test_rejects_duplicates() {
        let parts = vec![Part::new("p1", "G"), Part::new("p1", "H")];
        assert_eq!(
            Catalog::from_parts(parts).unwrap_err(),
            CatalogError::DuplicatePartId("p1".to_string())
        );
    }

    #[test]
    fn test_rejects_empty_and_malformed() {
        assert_eq!(Catalog::from_parts(vec![]).unwrap_err(), CatalogError::Empty);
        assert_eq!(
            Catalog::from_parts(vec![Part::new("", "G")]).unwrap_err(),
            CatalogError::EmptyPartId
        );
        assert_eq!(
            Catalog::from_parts(vec![Part::new("p", "")]).unwrap_err(),
            CatalogError::EmptyGeometryRef("p".to_string())
        );
        let nan = Part::new("p", "G").with_explode_direction([f32::NAN, 0.0, 0.0]);
        assert_eq!(
            Catalog::from_parts(vec![nan]).unwrap_err(),
            CatalogError::NonFinite("p".to_string())
        );
    }

    #[test]
    fn test_from_ron_str() {
        let content = r#"(
            title: "Precision Assembly",
            category: Some("Mechanical Engineering"),
            parts: [
                (
                    id: "base_plate",
                    geometry: "/models/BasePlate.glb",
                    rest: (xyz: (0.0, 0.0, 0.0), rpy: (0.0, 0.0, 0.0)),
                    explode_direction: (0.0, -0.2, 0.0),
                    description: Some("Base of the assembly"),
                ),
                (
                    id: "pin_01",
                    geometry: "/models/Pin.glb",
                    rest: (xyz: (0.0052, 0.0585, 0.0024), rpy: (3.1416, -1.5402, 3.1416)),
                    explode_direction: (0.2, 0.2, 0.2),
                ),
            ],
        )"#;

        let catalog = Catalog::from_ron_str(content).unwrap();
        assert_eq!(catalog.title(), "Precision Assembly");
        assert_eq!(catalog.category(), Some("Mechanical Engineering"));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.part("pin_01").unwrap().description, None);
        assert_eq!(
            catalog.part("base_plate").unwrap().description.as_deref(),
            Some("Base of the assembly")
        );
    }

    #[test]
    fn test_bundled_assembly() {
        let catalog =
            Catalog::from_ron_str(include_str!("../../../assets/precision_assembly.ron")).unwrap();
        assert_eq!(catalog.len(), 19);
        assert_eq!(catalog.groups().len(), 8);

        let pins = catalog.group(&"/models/Pin.glb".into()).unwrap();
        assert_eq!(pins.len(), 10);
        assert_eq!(catalog.representative(&pins.geometry).unwrap().id, "pin_01");
    }

    #[test]
    fn test_from_ron_str_parse_error() {
        assert!(matches!(
            Catalog::from_ron_str("not a catalog"),
            Err(CatalogError::Parse(_))
        ));
    }
}

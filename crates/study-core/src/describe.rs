//! Part description lookup

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Descriptive text for a part, or a placeholder when none can be obtained
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartDescription {
    Available { title: String, description: String },
    Unavailable,
}

impl PartDescription {
    pub fn is_available(&self) -> bool {
        matches!(self, PartDescription::Available { .. })
    }

    /// Description text, or the given fallback for `Unavailable`
    pub fn text_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            PartDescription::Available { description, .. } => description,
            PartDescription::Unavailable => fallback,
        }
    }
}

/// Source of part descriptions (local catalog, remote service, ...)
///
/// Implementations never fail: anything that goes wrong is reported as
/// [`PartDescription::Unavailable`].
pub trait PartDescriber {
    fn describe(&self, part_id: &str) -> PartDescription;
}

/// Describes parts from the `description` field of the catalog
pub struct CatalogDescriber {
    catalog: Arc<Catalog>,
}

impl CatalogDescriber {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl PartDescriber for CatalogDescriber {
    fn describe(&self, part_id: &str) -> PartDescription {
        let Some(part) = self.catalog.part(part_id) else {
            return PartDescription::Unavailable;
        };
        match (&part.description, self.catalog.group_of(part_id)) {
            (Some(description), Some(group)) => PartDescription::Available {
                title: group.display_name().to_string(),
                description: description.clone(),
            },
            _ => PartDescription::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::Part;

    #[test]
    fn test_catalog_describer() {
        let catalog = Catalog::from_parts(vec![
            Part::new("gear", "/models/BaseGear.glb").with_description("Main drive gear"),
            Part::new("pin", "/models/Pin.glb"),
        ])
        .unwrap();
        let describer = CatalogDescriber::new(Arc::new(catalog));

        assert_eq!(
            describer.describe("gear"),
            PartDescription::Available {
                title: "BaseGear".to_string(),
                description: "Main drive gear".to_string(),
            }
        );
        assert_eq!(describer.describe("pin"), PartDescription::Unavailable);
        assert_eq!(describer.describe("missing"), PartDescription::Unavailable);
        assert_eq!(describer.describe("pin").text_or("n/a"), "n/a");
    }
}

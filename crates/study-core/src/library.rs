//! Model library browsing: search, category grouping and favorites

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Category filter value that matches every entry
pub const ALL_CATEGORIES: &str = "All Categories";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// One browsable model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub id: String,
    pub name: String,
    /// Geometry file of the model
    pub file_name: String,
    pub category: String,
    /// Number of parts in the model
    pub parts: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LibraryError {
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to parse library: {0}")]
    Parse(String),
}

/// Models available for study, in display order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelLibrary {
    models: Vec<ModelEntry>,
    #[serde(default)]
    favorites: Vec<String>,
}

impl ModelLibrary {
    pub fn new(models: Vec<ModelEntry>) -> Self {
        Self {
            models,
            favorites: Vec::new(),
        }
    }

    /// Parse a library from RON text
    ///
    /// Favorites naming models that are not in the library are dropped.
    pub fn from_ron_str(content: &str) -> Result<Self, LibraryError> {
        let mut library: Self =
            ron::from_str(content).map_err(|e| LibraryError::Parse(e.to_string()))?;
        let models = &library.models;
        library
            .favorites
            .retain(|id| models.iter().any(|m| &m.id == id));
        Ok(library)
    }

    /// Load a library from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LibraryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LibraryError::Io(e.to_string()))?;
        let library = Self::from_ron_str(&content)?;
        tracing::info!(
            "Loaded model library from {:?}: {} models, {} favorites",
            path,
            library.models.len(),
            library.favorites.len()
        );
        Ok(library)
    }

    pub fn models(&self) -> &[ModelEntry] {
        &self.models
    }

    pub fn model(&self, id: &str) -> Option<&ModelEntry> {
        self.models.iter().find(|m| m.id == id)
    }

    /// Entries whose name or category contains `term` (case-insensitive)
    /// and whose category equals `category`, unless it is [`ALL_CATEGORIES`]
    pub fn search(&self, term: &str, category: &str) -> Vec<&ModelEntry> {
        let term = term.to_lowercase();
        self.models
            .iter()
            .filter(|m| {
                m.name.to_lowercase().contains(&term) || m.category.to_lowercase().contains(&term)
            })
            .filter(|m| category == ALL_CATEGORIES || m.category == category)
            .collect()
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for model in &self.models {
            if !categories.contains(&model.category.as_str()) {
                categories.push(&model.category);
            }
        }
        categories
    }

    /// Entries grouped by category, both in order of first appearance
    pub fn group_by_category(&self) -> Vec<(&str, Vec<&ModelEntry>)> {
        self.categories()
            .into_iter()
            .map(|c| (c, self.models.iter().filter(|m| m.category == c).collect()))
            .collect()
    }

    /// Add or remove a favorite, returning whether it is now a favorite
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, LibraryError> {
        if self.model(id).is_none() {
            return Err(LibraryError::UnknownModel(id.to_string()));
        }

        if let Some(pos) = self.favorites.iter().position(|f| f == id) {
            self.favorites.remove(pos);
            Ok(false)
        } else {
            self.favorites.push(id.to_string());
            Ok(true)
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|f| f == id)
    }

    /// Favorite entries in the order they were added
    pub fn favorites(&self) -> Vec<&ModelEntry> {
        self.favorites.iter().filter_map(|id| self.model(id)).collect()
    }
}

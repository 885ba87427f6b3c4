//! Assembly Study Core Data Structures
//!
//! This crate contains the in-memory model of a 3D assembly study session:
//! - Part: component instance with rest pose and explode direction
//! - Catalog: validated part collection with derived groups
//! - AssemblyViewState: explode/select/visibility/focus session state
//! - PartDescriber: lookup seam for part descriptions
//! - ModelLibrary: browsable list of models

pub mod catalog;
pub mod describe;
pub mod group;
pub mod library;
pub mod part;
pub mod types;
pub mod view_state;

pub use catalog::*;
pub use describe::*;
pub use group::*;
pub use library::*;
pub use part::*;
pub use types::*;
pub use view_state::*;

//! Metadata types describing entities and their fields
//!
//! All types use 'static lifetimes so every entity can expose its metadata as
//! compile-time constants. The frontend builds CRUD tables and forms from it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::a001_customer::aggregate::Customer;
//! use contracts::domain::common::EntityRecord;
//!
//! let meta = Customer::entity_metadata_info();
//! println!("Entity: {}", meta.ui.element_name);
//!
//! for field in Customer::field_metadata() {
//!     println!("{}: {}", field.name, field.ui.label);
//! }
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::FieldKind;
pub use types::{EntityMetadataInfo, EntityUiMetadata, FieldMetadata, FieldUiMetadata};
pub use validation::ValidationRules;

//! Create/edit form for any `EntityRecord`
//!
//! - view_model.rs: drafts, validation and the save command
//! - view.rs: one input per form field, chosen by `FieldKind`

mod view;
mod view_model;

pub use view::{entity_form_view, photo_data_url};
pub use view_model::EntityFormViewModel;

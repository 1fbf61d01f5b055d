//! Metadata-driven CRUD screens shared by every entity
//!
//! - `api` - REST calls for `/{collection}` resources
//! - `list` - server-paginated table with row actions
//! - `form` - modal create/edit form built from the field metadata

pub mod api;
pub mod form;
pub mod list;

pub use form::entity_form_view;
pub use list::{entity_list_view, ListOptions, RowAction, RowActionArgs};

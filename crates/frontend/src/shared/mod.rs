pub mod api_utils;
pub mod charts;
pub mod components;
pub mod crud;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod page_frame;
pub mod theme;
pub mod toast;

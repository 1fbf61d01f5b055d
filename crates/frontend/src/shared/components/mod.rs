pub mod confirm_dialog;
pub mod date_range_filter;
pub mod page_header;
pub mod pagination_controls;
pub mod search_dropdown;
pub mod stat_card;
pub mod table;

pub use confirm_dialog::ConfirmDialog;
pub use date_range_filter::DateRangeFilter;
pub use page_header::PageHeader;
pub use pagination_controls::{PaginationControls, REPORT_PAGE_SIZES};
pub use search_dropdown::SearchDropdown;
pub use stat_card::StatCard;

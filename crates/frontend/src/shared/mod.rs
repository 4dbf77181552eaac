pub mod components;
pub mod crud;
pub mod data_table;
pub mod date_utils;
pub mod form_dialog;
pub mod icons;
pub mod list_utils;
pub mod page_frame;
pub mod page_standard;
pub mod store_context;
pub mod toast;

pub mod badge;
pub mod input;
pub mod select;
pub mod textarea;

pub use badge::{status_variant, Badge, StatusBadge};
pub use input::{Input, NumberInput};
pub use select::Select;
pub use textarea::Textarea;

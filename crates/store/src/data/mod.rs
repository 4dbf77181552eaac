pub mod seed;
pub mod tables;

pub use seed::load_seed;
pub use tables::Tables;

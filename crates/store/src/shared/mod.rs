pub mod config;
pub mod error;
pub mod format;
pub mod id_gen;
pub mod repository;
pub mod validation;

//! Data access layer for the role directory

pub mod role_repository;

pub use role_repository::RoleRepository;

//! Business logic layer for the role directory

pub mod directory_service;

pub use directory_service::DirectoryService;

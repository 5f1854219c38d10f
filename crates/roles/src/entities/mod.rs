//! Domain entities for the role directory

pub mod membership;
pub mod role;

pub use membership::Membership;
pub use role::Role;

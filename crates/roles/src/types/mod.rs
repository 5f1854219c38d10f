//! Shared types for the role directory

pub mod errors;
pub mod requests;
pub mod responses;

pub use errors::{RoleError, RoleResult};
pub use requests::{require_name, NotifyRequest};
pub use responses::{MemberList, Notification};

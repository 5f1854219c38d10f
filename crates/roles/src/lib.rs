//! # Rollcall Roles Crate
//!
//! Core business logic for the chat-scoped role directory: members
//! self-register into named roles, list who is in a role, and broadcast a
//! message to everyone in a role.
//!
//! ## Architecture
//!
//! - **Entities**: Domain models (Role, Membership)
//! - **Repositories**: Data access layer owning the persisted relations
//! - **Services**: The directory use-case layer (validation, lookup,
//!   notification fan-out)
//! - **Types**: Error taxonomy, request parsing, result types
//!
//! The transport adapter hands in `(chat_id, user_id, username, role_name,
//! text)` tuples and renders the plain results coming back; nothing in this
//! crate knows about the transport.

pub mod entities;
pub mod repositories;
pub mod services;
pub mod types;

pub use entities::{Membership, Role};
pub use repositories::RoleRepository;
pub use services::DirectoryService;
pub use types::{MemberList, Notification, NotifyRequest, RoleError, RoleResult};

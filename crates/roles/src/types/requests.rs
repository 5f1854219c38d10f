//! Request parsing for the role directory.
//!
//! Parsing is kept pure and ahead of any service call so the core carries no
//! dependency on the transport's argument-extraction convention.

use crate::types::{RoleError, RoleResult};

/// A parsed notification request: target role plus message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyRequest {
    /// Role name, the first whitespace-delimited token of the input
    pub role: String,
    /// Message body, internal whitespace and newlines preserved
    pub body: String,
}

impl NotifyRequest {
    /// Parse a raw notification string.
    ///
    /// The first whitespace-delimited token is the role name; everything
    /// after it is the body. Fails with `EmptyInput` when no token is
    /// present and `MissingBody` when the role token has no text after it.
    pub fn parse(raw: &str) -> RoleResult<Self> {
        let input = raw.trim_start();
        if input.is_empty() {
            return Err(RoleError::EmptyInput);
        }

        let Some((role, rest)) = input.split_once(char::is_whitespace) else {
            return Err(RoleError::MissingBody);
        };

        let body = rest.trim_start();
        if body.is_empty() {
            return Err(RoleError::MissingBody);
        }

        Ok(Self {
            role: role.to_string(),
            body: body.to_string(),
        })
    }
}

/// Validate and trim a raw role name, rejecting blank input.
pub fn require_name(raw: &str) -> RoleResult<&str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(RoleError::EmptyInput);
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_role_and_body() {
        let req = NotifyRequest::parse("team Meeting at 18:00").unwrap();
        assert_eq!(req.role, "team");
        assert_eq!(req.body, "Meeting at 18:00");
    }

    #[test]
    fn parse_preserves_internal_whitespace_and_newlines() {
        let req = NotifyRequest::parse("team line one\nline  two").unwrap();
        assert_eq!(req.body, "line one\nline  two");
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(matches!(
            NotifyRequest::parse("   "),
            Err(RoleError::EmptyInput)
        ));
    }

    #[test]
    fn parse_rejects_role_without_body() {
        assert!(matches!(
            NotifyRequest::parse("team"),
            Err(RoleError::MissingBody)
        ));
        assert!(matches!(
            NotifyRequest::parse("team   "),
            Err(RoleError::MissingBody)
        ));
    }

    #[test]
    fn require_name_trims() {
        assert_eq!(require_name("  designers  ").unwrap(), "designers");
        assert!(matches!(require_name(" \t"), Err(RoleError::EmptyInput)));
    }
}

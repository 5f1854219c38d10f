//! Formatting-neutral result types handed back to the adapter.

use serde::{Deserialize, Serialize};

/// Membership listing with empty handles filtered out.
///
/// `hidden` counts members whose stored username is empty, so a consumer can
/// still distinguish "role has zero members" from "members exist but nobody
/// is visible".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberList {
    /// Non-empty mention handles
    pub handles: Vec<String>,
    /// Count of members whose handle is empty
    pub hidden: usize,
}

impl MemberList {
    /// Build a member list from raw stored usernames.
    pub fn from_usernames(usernames: Vec<String>) -> Self {
        let total = usernames.len();
        let handles: Vec<String> = usernames.into_iter().filter(|u| !u.is_empty()).collect();
        let hidden = total - handles.len();
        Self { handles, hidden }
    }

    /// True when no member has a visible handle.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// A prepared notification: message body plus the mention handles to ping.
///
/// The adapter formats and sends this; the core never performs the send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Message body as given by the requester
    pub body: String,
    /// Mention handles of every member with a non-empty username
    pub mentions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_list_filters_and_counts_hidden() {
        let list = MemberList::from_usernames(vec![
            "alice".to_string(),
            String::new(),
            "bob".to_string(),
        ]);
        assert_eq!(list.handles, vec!["alice", "bob"]);
        assert_eq!(list.hidden, 1);
        assert!(!list.is_empty());
    }

    #[test]
    fn member_list_all_hidden_is_empty() {
        let list = MemberList::from_usernames(vec![String::new(), String::new()]);
        assert!(list.is_empty());
        assert_eq!(list.hidden, 2);
    }
}

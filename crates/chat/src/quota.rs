use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuotaError {
    #[error("message is empty")]
    Empty,
    #[error("daily message limit of {limit} reached")]
    DailyLimitReached { limit: u32 },
    #[error("message is {len} characters; limit is {limit}")]
    TooLong { len: usize, limit: usize },
}

/// Local copy of the server's chat counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatQuota {
    #[serde(default)]
    pub messages_sent: u32,
    pub message_per_day: u32,
    pub message_char_limit: usize,
}

impl ChatQuota {
    pub fn new(message_per_day: u32, message_char_limit: usize) -> Self {
        Self {
            messages_sent: 0,
            message_per_day,
            message_char_limit,
        }
    }

    /// Check a draft against the mirrored limits.
    pub fn check(&self, draft: &str) -> Result<(), QuotaError> {
        if self.messages_sent >= self.message_per_day {
            return Err(QuotaError::DailyLimitReached {
                limit: self.message_per_day,
            });
        }
        if draft.trim().is_empty() {
            return Err(QuotaError::Empty);
        }
        let len = draft.chars().count();
        if len > self.message_char_limit {
            return Err(QuotaError::TooLong {
                len,
                limit: self.message_char_limit,
            });
        }
        Ok(())
    }

    pub fn can_submit(&self, draft: &str) -> bool {
        self.check(draft).is_ok()
    }

    /// Count a message the server accepted.
    pub fn record_sent(&mut self) {
        self.messages_sent = self.messages_sent.saturating_add(1);
        if self.messages_sent >= self.message_per_day {
            tracing::debug!(limit = self.message_per_day, "chat daily limit reached");
        }
    }

    pub fn remaining_messages(&self) -> u32 {
        self.message_per_day.saturating_sub(self.messages_sent)
    }

    /// Characters left for `draft`; zero once the draft is at or over the limit.
    pub fn remaining_chars(&self, draft: &str) -> usize {
        self.message_char_limit.saturating_sub(draft.chars().count())
    }

    /// Adopt the server's counters. The server is authoritative, so this may
    /// move `messages_sent` down as well as up (e.g. after a daily reset).
    pub fn sync(&mut self, server: ChatQuota) {
        if *self != server {
            tracing::debug!(
                local_sent = self.messages_sent,
                server_sent = server.messages_sent,
                "chat quota resynced from server"
            );
        }
        *self = server;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_server_limits() {
        let quota: ChatQuota =
            serde_json::from_str(r#"{"messagesSent": 2, "messagePerDay": 5, "messageCharLimit": 200}"#)
                .unwrap();
        assert_eq!(quota.messages_sent, 2);
        assert_eq!(quota.remaining_messages(), 3);
    }

    #[test]
    fn missing_sent_counter_defaults_to_zero() {
        let quota: ChatQuota =
            serde_json::from_str(r#"{"messagePerDay": 5, "messageCharLimit": 200}"#).unwrap();
        assert_eq!(quota.messages_sent, 0);
    }

    #[test]
    fn blocks_after_daily_limit() {
        let mut quota = ChatQuota::new(2, 100);
        assert!(quota.can_submit("hi"));
        quota.record_sent();
        quota.record_sent();
        assert_eq!(
            quota.check("hi"),
            Err(QuotaError::DailyLimitReached { limit: 2 })
        );
        assert_eq!(quota.remaining_messages(), 0);
    }

    #[test]
    fn length_limit_counts_characters_not_bytes() {
        let quota = ChatQuota::new(10, 3);
        assert!(quota.can_submit("çğü"));
        assert_eq!(
            quota.check("abcd"),
            Err(QuotaError::TooLong { len: 4, limit: 3 })
        );
        assert_eq!(quota.remaining_chars("ab"), 1);
        assert_eq!(quota.remaining_chars("abcdef"), 0);
    }

    #[test]
    fn blank_drafts_are_rejected() {
        let quota = ChatQuota::new(10, 100);
        assert_eq!(quota.check("   "), Err(QuotaError::Empty));
    }

    #[test]
    fn zero_quota_blocks_everything() {
        let quota = ChatQuota::new(0, 100);
        assert!(!quota.can_submit("hello"));
    }

    #[test]
    fn server_sync_wins_even_when_lower() {
        let mut quota = ChatQuota::new(5, 100);
        for _ in 0..5 {
            quota.record_sent();
        }
        assert!(!quota.can_submit("hi"));

        quota.sync(ChatQuota::new(5, 100));
        assert!(quota.can_submit("hi"));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: submission is allowed iff both bounds hold.
            #[test]
            fn can_submit_matches_bounds(
                sent in 0u32..20,
                per_day in 0u32..20,
                limit in 1usize..50,
                draft in "[a-z]{1,60}"
            ) {
                let quota = ChatQuota { messages_sent: sent, message_per_day: per_day, message_char_limit: limit };
                let expected = sent < per_day && draft.chars().count() <= limit;
                prop_assert_eq!(quota.can_submit(&draft), expected);
            }
        }
    }
}

//! User payloads.

use serde::{Deserialize, Serialize};

/// A user object as embedded in messages, members, and reaction lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User snowflake.
    pub id: String,
    /// Account name.
    pub username: String,
    /// Avatar hash.
    pub avatar: Option<String>,
    /// Four-digit discriminator.
    pub discriminator: String,
    /// Public account flags.
    pub public_flags: u64,
    /// Bot marker, only present on payloads that include it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(bot: Option<bool>) -> User {
        User {
            id: "80351110224678912".to_owned(),
            username: "nelly".to_owned(),
            avatar: None,
            discriminator: "1337".to_owned(),
            public_flags: 0,
            bot,
        }
    }

    #[test]
    fn bot_flag_is_omitted_when_absent() {
        let json = serde_json::to_value(user(None)).expect("serialize");
        assert!(json.get("bot").is_none());
        assert!(json.get("avatar").is_some_and(serde_json::Value::is_null));
    }

    #[test]
    fn bot_flag_is_written_when_present() {
        let json = serde_json::to_value(user(Some(true))).expect("serialize");
        assert_eq!(json.get("bot"), Some(&serde_json::Value::Bool(true)));
    }
}

//! Key filter selecting chat-session entries.
//!
//! Chat sessions live under a fixed path segment and are stored as
//! `.json` documents. Plain substring and suffix checks, no regex, and
//! the storage order of the input is preserved.

/// Path segment identifying chat-session entries.
const CHAT_SESSIONS_SEGMENT: &str = "/chatSessions/";

/// Suffix of chat-session document keys.
const SESSION_SUFFIX: &str = ".json";

/// Whether a store key names a chat-session document.
#[must_use]
pub fn is_chat_session_key(key: &str) -> bool {
    key.contains(CHAT_SESSIONS_SEGMENT) && key.ends_with(SESSION_SUFFIX)
}

/// Retains the chat-session keys, in input order.
#[must_use]
pub fn filter_session_keys(keys: Vec<String>) -> Vec<String> {
    keys.into_iter().filter(|k| is_chat_session_key(k)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_key() {
        assert!(is_chat_session_key("/User/chatSessions/abc.json"));
    }

    #[test]
    fn test_segment_alone_is_not_enough() {
        assert!(!is_chat_session_key("/User/chatSessions/abc.json.bak"));
        assert!(!is_chat_session_key("/User/chatSessions/notes.md"));
    }

    #[test]
    fn test_suffix_alone_is_not_enough() {
        assert!(!is_chat_session_key("/User/settings.json"));
        assert!(!is_chat_session_key("chatSessions.json"));
    }

    #[test]
    fn test_order_preserved() {
        let keys = vec![
            "/b/chatSessions/2.json".to_string(),
            "/a/settings.json".to_string(),
            "/a/chatSessions/1.json".to_string(),
        ];
        let filtered = filter_session_keys(keys);
        assert_eq!(
            filtered,
            vec![
                "/b/chatSessions/2.json".to_string(),
                "/a/chatSessions/1.json".to_string(),
            ]
        );
    }
}

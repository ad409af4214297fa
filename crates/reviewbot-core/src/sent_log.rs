// Seen-messages set used to suppress duplicate notifications

/// Append-only record of message texts already delivered to the chat.
///
/// Owned by the poll loop for the process lifetime; nothing is ever evicted
/// or persisted. The set stays tiny (a handful of distinct texts per run), so
/// a Vec with a linear scan is plenty and keeps insertion order.
#[derive(Debug, Default)]
pub struct SentLog {
    messages: Vec<String>,
}

impl SentLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message unless an equal one was already sent.
    ///
    /// Returns `true` when the message is new (and now recorded), `false`
    /// when it was seen before and must not be re-sent.
    pub fn insert(&mut self, message: &str) -> bool {
        if self.contains(message) {
            return false;
        }
        self.messages.push(message.to_string());
        true
    }

    /// Whether an equal message was already sent
    pub fn contains(&self, message: &str) -> bool {
        self.messages.iter().any(|sent| sent == message)
    }

    /// Number of distinct messages sent so far
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

//! Structured agent reasoning log entries and the bounded feed that holds them.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// One reasoning step attributed to a named agent.
///
/// Produced only by the orchestration service; the timestamp is stamped at
/// extraction time, so re-running an operation yields fresh timestamps over
/// identical text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentLog {
    pub agent: String,
    pub action: String,
    pub observation: String,
    pub timestamp: String,
}

impl AgentLog {
    /// Create an entry stamped with the current wall-clock time.
    pub fn now(
        agent: impl Into<String>,
        action: impl Into<String>,
        observation: impl Into<String>,
    ) -> Self {
        Self {
            agent: agent.into(),
            action: action.into(),
            observation: observation.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }
}

/// Newest-first bounded feed of agent log entries.
///
/// Each operation prepends its batch; the buffer never exceeds its capacity
/// (50 by default), dropping the oldest entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogBuffer {
    entries: VecDeque<AgentLog>,
    capacity: usize,
}

impl LogBuffer {
    pub const DEFAULT_CAPACITY: usize = 50;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Prepend a batch, preserving its internal order at the front.
    pub fn prepend_batch(&mut self, batch: Vec<AgentLog>) {
        for entry in batch.into_iter().rev() {
            self.entries.push_front(entry);
        }
        self.entries.truncate(self.capacity);
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &AgentLog> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(agent: &str) -> AgentLog {
        AgentLog::now(agent, "a", "o")
    }

    #[test]
    fn batch_order_is_preserved_at_the_front() {
        let mut buffer = LogBuffer::new();
        buffer.prepend_batch(vec![entry("old-1"), entry("old-2")]);
        buffer.prepend_batch(vec![entry("new-1"), entry("new-2")]);

        let agents: Vec<&str> = buffer.iter().map(|l| l.agent.as_str()).collect();
        assert_eq!(agents, vec!["new-1", "new-2", "old-1", "old-2"]);
    }

    #[test]
    fn buffer_never_exceeds_capacity() {
        let mut buffer = LogBuffer::new();
        for i in 0..30 {
            buffer.prepend_batch(vec![entry(&format!("batch-{i}-a")), entry(&format!("batch-{i}-b"))]);
        }
        assert_eq!(buffer.len(), LogBuffer::DEFAULT_CAPACITY);

        // Newest batch survives at the front.
        assert_eq!(buffer.iter().next().unwrap().agent, "batch-29-a");
    }

    #[test]
    fn small_capacity_drops_oldest() {
        let mut buffer = LogBuffer::with_capacity(3);
        buffer.prepend_batch(vec![entry("a"), entry("b")]);
        buffer.prepend_batch(vec![entry("c"), entry("d")]);

        let agents: Vec<&str> = buffer.iter().map(|l| l.agent.as_str()).collect();
        assert_eq!(agents, vec!["c", "d", "a"]);
    }
}

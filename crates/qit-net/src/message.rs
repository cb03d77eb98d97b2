//! Messages exchanged between computers.

use std::fmt;

use chrono::{DateTime, Utc};
use qit_sim::Complex;

/// Prefix marking a classical message that describes a shared entangled state.
pub const ENTANGLED_PREFIX: &str = "ENTANGLED:";

/// Message body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Free-form classical text.
    Classical(String),
    /// Raw amplitudes, opaque to the network.
    Quantum(Vec<Complex>),
}

/// A queued message between two registered computers.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub from: String,
    pub to: String,
    pub payload: Payload,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(from: impl Into<String>, to: impl Into<String>, payload: Payload) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            payload,
            timestamp: Utc::now(),
        }
    }

    pub fn is_quantum(&self) -> bool {
        matches!(self.payload, Payload::Quantum(_))
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} -> {} at {}] ",
            self.from,
            self.to,
            self.timestamp.format("%H:%M:%S%.3f")
        )?;
        match &self.payload {
            Payload::Classical(text) => write!(f, "classical: {text}"),
            Payload::Quantum(amps) => write!(f, "quantum state ({} amplitudes)", amps.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let msg = Message::new("alice", "bob", Payload::Classical("hi".into()));
        let text = msg.to_string();
        assert!(text.starts_with("[alice -> bob at "));
        assert!(text.ends_with("classical: hi"));
        assert!(!msg.is_quantum());

        let msg = Message::new("alice", "bob", Payload::Quantum(vec![Complex::ONE; 4]));
        assert!(msg.to_string().ends_with("quantum state (4 amplitudes)"));
        assert!(msg.is_quantum());
    }
}

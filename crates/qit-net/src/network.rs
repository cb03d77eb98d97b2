//! Registry of named computers with a FIFO message queue.

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use qit_sim::{Complex, QuantumComputer};

use crate::error::{NetError, NetResult};
use crate::message::{ENTANGLED_PREFIX, Message, Payload};

/// A network of quantum computers exchanging classical text and raw
/// quantum-state payloads.
///
/// The network owns every registered computer. Messages are queued in send
/// order and applied only when [`deliver`](Self::deliver)ed.
pub struct QuantumNetwork<R = StdRng> {
    computers: FxHashMap<String, QuantumComputer<R>>,
    queue: VecDeque<Message>,
    inboxes: FxHashMap<String, Vec<String>>,
}

impl<R> Default for QuantumNetwork<R> {
    fn default() -> Self {
        Self {
            computers: FxHashMap::default(),
            queue: VecDeque::new(),
            inboxes: FxHashMap::default(),
        }
    }
}

impl<R: Rng> QuantumNetwork<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a computer under its own name.
    pub fn register(&mut self, computer: QuantumComputer<R>) -> NetResult<()> {
        let name = computer.name().to_string();
        if self.computers.contains_key(&name) {
            return Err(NetError::DuplicateComputer(name));
        }
        info!("Registered quantum computer: {}", computer);
        self.inboxes.insert(name.clone(), Vec::new());
        self.computers.insert(name, computer);
        Ok(())
    }

    /// Remove a computer and its inbox. Queued messages are kept.
    pub fn unregister(&mut self, name: &str) -> Option<QuantumComputer<R>> {
        self.inboxes.remove(name);
        let removed = self.computers.remove(name);
        if removed.is_some() {
            info!("Unregistered quantum computer: {name}");
        }
        removed
    }

    pub fn has_computer(&self, name: &str) -> bool {
        self.computers.contains_key(name)
    }

    pub fn computer(&self, name: &str) -> Option<&QuantumComputer<R>> {
        self.computers.get(name)
    }

    pub fn computer_mut(&mut self, name: &str) -> Option<&mut QuantumComputer<R>> {
        self.computers.get_mut(name)
    }

    /// Like [`computer`](Self::computer), failing with
    /// [`NetError::UnknownComputer`].
    pub fn require(&self, name: &str) -> NetResult<&QuantumComputer<R>> {
        self.computers
            .get(name)
            .ok_or_else(|| NetError::UnknownComputer(name.to_string()))
    }

    pub fn require_mut(&mut self, name: &str) -> NetResult<&mut QuantumComputer<R>> {
        self.computers
            .get_mut(name)
            .ok_or_else(|| NetError::UnknownComputer(name.to_string()))
    }

    /// Registered computer names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.computers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered computers, sorted by name.
    pub fn computers(&self) -> Vec<&QuantumComputer<R>> {
        self.names()
            .into_iter()
            .filter_map(|name| self.computers.get(name))
            .collect()
    }

    fn check_endpoints(&self, from: &str, to: &str) -> NetResult<()> {
        if !self.has_computer(from) {
            return Err(NetError::UnknownSender(from.to_string()));
        }
        if !self.has_computer(to) {
            return Err(NetError::UnknownReceiver(to.to_string()));
        }
        Ok(())
    }

    /// Queue a classical message and append it to the receiver's inbox.
    pub fn send_classical(&mut self, from: &str, to: &str, text: &str) -> NetResult<()> {
        self.check_endpoints(from, to)?;
        self.queue
            .push_back(Message::new(from, to, Payload::Classical(text.to_string())));
        self.inboxes
            .entry(to.to_string())
            .or_default()
            .push(text.to_string());
        debug!("Classical message sent from {from} to {to}: {text}");
        Ok(())
    }

    /// Queue a raw quantum-state payload.
    pub fn send_quantum_state(
        &mut self,
        from: &str,
        to: &str,
        state: Vec<Complex>,
    ) -> NetResult<()> {
        self.check_endpoints(from, to)?;
        debug!("Quantum message sent from {from} to {to} ({} amplitudes)", state.len());
        self.queue.push_back(Message::new(from, to, Payload::Quantum(state)));
        Ok(())
    }

    /// Snapshot the sender's state and queue it for `to`.
    pub fn transmit_state(&mut self, from: &str, to: &str) -> NetResult<()> {
        self.check_endpoints(from, to)?;
        let state = self
            .computer(from)
            .map(QuantumComputer::state)
            .ok_or_else(|| NetError::UnknownSender(from.to_string()))?;
        self.send_quantum_state(from, to, state)
    }

    /// Announce a shared entangled state as an `ENTANGLED:<bits>` classical
    /// message.
    pub fn send_entangled(&mut self, from: &str, to: &str, bits: &str) -> NetResult<()> {
        self.send_classical(from, to, &format!("{ENTANGLED_PREFIX}{bits}"))
    }

    /// Pop the oldest queued message.
    pub fn receive(&mut self) -> Option<Message> {
        self.queue.pop_front()
    }

    /// Apply a message to its receiver.
    ///
    /// Quantum payloads replace the receiver's state wholesale; a length
    /// mismatch fails and leaves the receiver untouched. Classical messages
    /// were already filed in the inbox when sent.
    pub fn deliver(&mut self, message: &Message) -> NetResult<()> {
        let receiver = self
            .computers
            .get_mut(&message.to)
            .ok_or_else(|| NetError::UnknownReceiver(message.to.clone()))?;
        if let Payload::Quantum(state) = &message.payload {
            receiver.set_state(state)?;
            debug!("Delivered quantum state from {} to {}", message.from, message.to);
        }
        Ok(())
    }

    /// Classical messages received by `name`, oldest first.
    pub fn classical_messages(&self, name: &str) -> &[String] {
        self.inboxes.get(name).map_or(&[], Vec::as_slice)
    }

    pub fn clear_messages(&mut self, name: &str) {
        if let Some(inbox) = self.inboxes.get_mut(name) {
            inbox.clear();
        }
    }

    /// Number of queued, unreceived messages.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qit_sim::SimError;

    fn network() -> QuantumNetwork {
        let mut net = QuantumNetwork::new();
        net.register(QuantumComputer::seeded("alice", 2, 1).unwrap()).unwrap();
        net.register(QuantumComputer::seeded("bob", 2, 2).unwrap()).unwrap();
        net
    }

    #[test]
    fn test_register_and_list() {
        let net = network();
        assert_eq!(net.names(), vec!["alice", "bob"]);
        assert!(net.has_computer("alice"));
        assert!(!net.has_computer("carol"));
        assert_eq!(net.computers().len(), 2);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut net = network();
        let err = net
            .register(QuantumComputer::seeded("alice", 1, 0).unwrap())
            .unwrap_err();
        assert_eq!(err, NetError::DuplicateComputer("alice".into()));
        assert_eq!(net.computer("alice").unwrap().num_qubits(), 2);
    }

    #[test]
    fn test_unregister() {
        let mut net = network();
        let bob = net.unregister("bob").unwrap();
        assert_eq!(bob.name(), "bob");
        assert!(net.unregister("bob").is_none());
        assert!(net.classical_messages("bob").is_empty());
    }

    #[test]
    fn test_classical_messages() {
        let mut net = network();
        net.send_classical("alice", "bob", "hello").unwrap();
        net.send_entangled("alice", "bob", "01").unwrap();

        assert_eq!(net.classical_messages("bob"), &["hello", "ENTANGLED:01"]);
        assert!(net.classical_messages("alice").is_empty());
        assert_eq!(net.queue_len(), 2);

        net.clear_messages("bob");
        assert!(net.classical_messages("bob").is_empty());
        assert_eq!(net.queue_len(), 2);
    }

    #[test]
    fn test_unknown_endpoints() {
        let mut net = network();
        assert_eq!(
            net.send_classical("carol", "bob", "x"),
            Err(NetError::UnknownSender("carol".into()))
        );
        assert_eq!(
            net.send_classical("alice", "carol", "x"),
            Err(NetError::UnknownReceiver("carol".into()))
        );
        assert_eq!(net.queue_len(), 0);
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut net = network();
        net.send_classical("alice", "bob", "first").unwrap();
        net.transmit_state("bob", "alice").unwrap();

        let first = net.receive().unwrap();
        assert_eq!(first.payload, Payload::Classical("first".into()));
        let second = net.receive().unwrap();
        assert!(second.is_quantum());
        assert_eq!(second.from, "bob");
        assert!(net.receive().is_none());
    }

    #[test]
    fn test_transmit_and_deliver_state() {
        let mut net = network();
        {
            let alice = net.computer_mut("alice").unwrap();
            alice.apply_hadamard(0).unwrap();
            alice.apply_cnot(0, 1).unwrap();
        }
        net.transmit_state("alice", "bob").unwrap();

        // Nothing changes until delivery.
        assert_eq!(net.computer("bob").unwrap().state()[0], Complex::ONE);

        let msg = net.receive().unwrap();
        net.deliver(&msg).unwrap();
        assert_eq!(
            net.computer("bob").unwrap().state(),
            net.computer("alice").unwrap().state()
        );
    }

    #[test]
    fn test_deliver_size_mismatch() {
        let mut net = network();
        net.register(QuantumComputer::seeded("carol", 3, 3).unwrap()).unwrap();
        net.transmit_state("carol", "bob").unwrap();

        let msg = net.receive().unwrap();
        let err = net.deliver(&msg).unwrap_err();
        assert_eq!(
            err,
            NetError::Sim(SimError::SizeMismatch {
                expected: 4,
                got: 8
            })
        );
        assert_eq!(net.computer("bob").unwrap().state()[0], Complex::ONE);
    }

    #[test]
    fn test_require_mut() {
        let mut net = network();
        assert!(net.require_mut("alice").is_ok());
        assert!(matches!(
            net.require_mut("zed"),
            Err(NetError::UnknownComputer(_))
        ));
    }
}

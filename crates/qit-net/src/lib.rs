//! `qit-net`: in-process message passing between quantum computers.
//!
//! A [`QuantumNetwork`] owns named [`qit_sim::QuantumComputer`]s and queues
//! messages between them: classical text, or raw amplitude vectors that the
//! receiver adopts with `set_state` on delivery.
//!
//! ```rust
//! use qit_net::QuantumNetwork;
//! use qit_sim::QuantumComputer;
//!
//! let mut net = QuantumNetwork::new();
//! net.register(QuantumComputer::seeded("alice", 1, 1).unwrap()).unwrap();
//! net.register(QuantumComputer::seeded("bob", 1, 2).unwrap()).unwrap();
//!
//! net.computer_mut("alice").unwrap().apply_pauli_x(0).unwrap();
//! net.transmit_state("alice", "bob").unwrap();
//!
//! let msg = net.receive().unwrap();
//! net.deliver(&msg).unwrap();
//! assert_eq!(net.computer("bob").unwrap().probability_of_zero(0).unwrap(), 0.0);
//! ```

pub mod error;
pub mod message;
pub mod network;

pub use error::{NetError, NetResult};
pub use message::{Message, Payload};
pub use network::QuantumNetwork;

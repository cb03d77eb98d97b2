//! Interactive command loop.

use std::io::{self, BufRead, Write};

use console::style;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info};

use qit_net::{NetError, QuantumNetwork};
use qit_sim::{CircuitBuilder, QuantumComputer, SimError};

use crate::command::{Command, CommandError, HELP};
use crate::config::Config;
use crate::demo;

/// Prompt written before each line is read.
pub const PROMPT: &str = "qit> ";

/// Failure while executing a parsed command.
///
/// Engine and network errors are reported to the user and the loop carries
/// on; only I/O errors end the session.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Net(#[from] NetError),

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive session state: the network of computers plus configuration.
pub struct Shell {
    network: QuantumNetwork,
    config: Config,
    created: u64,
}

impl Shell {
    pub fn new(config: Config) -> Self {
        Self {
            network: QuantumNetwork::new(),
            config,
            created: 0,
        }
    }

    pub fn network(&self) -> &QuantumNetwork {
        &self.network
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read commands from `input` until `quit` or end of input.
    pub fn run<I: BufRead, W: Write>(&mut self, mut input: I, out: &mut W) -> io::Result<()> {
        let mut line = String::new();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(());
            }

            if self.handle_line(&line, out)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Parse and execute one line, reporting any failure to `out`.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => return Ok(Flow::Continue),
            Err(CommandError::Unknown(verb)) => {
                writeln!(out, "Unknown command: {verb}")?;
                writeln!(out, "Type 'help' for available commands.")?;
                return Ok(Flow::Continue);
            }
            Err(e) => {
                writeln!(out, "{e}")?;
                return Ok(Flow::Continue);
            }
        };

        debug!(?command, "Dispatching command");
        match self.execute(command, out) {
            Ok(flow) => Ok(flow),
            Err(ShellError::Io(e)) => Err(e),
            Err(e) => {
                writeln!(out, "{} {e}", style("Error:").red().bold())?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Execute a parsed command.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow, ShellError> {
        match command {
            Command::Help => print_help(out)?,

            Command::Create { name, qubits } => {
                let computer = QuantumComputer::with_config(
                    name.as_str(),
                    qubits,
                    self.next_rng(),
                    &self.config.engine,
                )?;
                self.network.register(computer)?;
                self.created += 1;
                info!("Created computer {name} with {qubits} qubits");
                writeln!(
                    out,
                    "Created quantum computer '{}' with {qubits} qubits.",
                    style(&name).green()
                )?;
            }

            Command::List => {
                let computers = self.network.computers();
                if computers.is_empty() {
                    writeln!(out, "No quantum computers created yet.")?;
                } else {
                    writeln!(out, "Quantum Computers:")?;
                    for computer in computers {
                        writeln!(out, "  - {computer}")?;
                    }
                }
            }

            Command::Show { name } => {
                let computer = self.network.require(&name)?;
                writeln!(out, "State of {}:", style(&name).green())?;
                write!(out, "{}", computer.state_string())?;
            }

            Command::Hadamard { name, qubit } => {
                self.network.require_mut(&name)?.apply_hadamard(qubit)?;
                writeln!(out, "Applied Hadamard gate to {name} qubit {qubit}")?;
            }

            Command::PauliX { name, qubit } => {
                self.network.require_mut(&name)?.apply_pauli_x(qubit)?;
                writeln!(out, "Applied Pauli-X gate to {name} qubit {qubit}")?;
            }

            Command::PauliZ { name, qubit } => {
                self.network.require_mut(&name)?.apply_pauli_z(qubit)?;
                writeln!(out, "Applied Pauli-Z gate to {name} qubit {qubit}")?;
            }

            Command::Cnot {
                name,
                control,
                target,
            } => {
                self.network
                    .require_mut(&name)?
                    .apply_cnot(control, target)?;
                writeln!(
                    out,
                    "Applied CNOT gate to {name} (control: {control}, target: {target})"
                )?;
            }

            Command::Measure { name, qubit } => {
                let outcome = self.network.require_mut(&name)?.measure(qubit)?;
                writeln!(
                    out,
                    "Measured qubit {qubit} of {name}: {}",
                    style(outcome).yellow().bold()
                )?;
            }

            Command::Reset { name } => {
                self.network.require_mut(&name)?.reset();
                writeln!(out, "Reset quantum computer '{name}' to |0...0> state")?;
            }

            Command::Entangle {
                name,
                first,
                second,
            } => {
                let computer = self.network.require_mut(&name)?;
                let mut circuit = CircuitBuilder::new(computer);
                circuit.bell_pair(first, second)?;
                write!(out, "{}", circuit.log())?;
            }

            Command::Send { from, to } => {
                self.network.transmit_state(&from, &to)?;
                writeln!(out, "Queued state of {from} for {to}")?;
            }

            Command::Message { from, to, text } => {
                self.network.send_classical(&from, &to, &text)?;
                writeln!(out, "Sent message from {from} to {to}")?;
            }

            Command::Inbox { name } => {
                self.network.require(&name)?;
                let messages = self.network.classical_messages(&name);
                if messages.is_empty() {
                    writeln!(out, "No messages for {name}.")?;
                } else {
                    writeln!(out, "Inbox for {name}:")?;
                    for (i, text) in messages.iter().enumerate() {
                        writeln!(out, "  {}. {text}", i + 1)?;
                    }
                }
            }

            Command::Receive => match self.network.receive() {
                None => writeln!(out, "No messages in queue.")?,
                Some(message) => {
                    self.network.deliver(&message)?;
                    writeln!(out, "Delivered {message}")?;
                }
            },

            Command::Demo => demo::run(self, out)?,

            Command::Quit => {
                writeln!(out, "Goodbye!")?;
                return Ok(Flow::Quit);
            }
        }

        Ok(Flow::Continue)
    }

    /// Seeded sessions give computer `k` the seed `seed + k`.
    fn next_rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(self.created)),
            None => StdRng::from_entropy(),
        }
    }
}

/// Print the banner shown when an interactive session starts.
pub fn print_welcome<W: Write>(out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(50);
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "  {}", style("QUANTUM COMPUTER SIMULATOR").cyan().bold())?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Simulates quantum computers and protocols")?;
    writeln!(out, "Type 'help' for available commands")?;
    writeln!(out, "Type 'demo' to run a demonstration")?;
    writeln!(out, "Type 'quit' to exit")?;
    writeln!(out)
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    let rule = "-".repeat(50);
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "AVAILABLE COMMANDS:")?;
    writeln!(out, "{rule}")?;
    for (usage, description) in HELP {
        writeln!(out, "{usage:<29}{description}")?;
    }
    writeln!(out, "{rule}")?;
    writeln!(out)
}

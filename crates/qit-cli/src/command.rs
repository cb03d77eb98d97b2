//! Shell command parsing.

use std::str::FromStr;

use thiserror::Error;

/// Help table: usage line and description, in display order.
pub const HELP: &[(&str, &str)] = &[
    ("create <name> <qubits>", "Create a quantum computer"),
    ("list", "List all quantum computers"),
    ("show <name>", "Show quantum state"),
    ("hadamard <name> <qubit>", "Apply Hadamard gate"),
    ("cnot <name> <ctl> <tgt>", "Apply CNOT gate"),
    ("x <name> <qubit>", "Apply Pauli-X gate"),
    ("z <name> <qubit>", "Apply Pauli-Z gate"),
    ("measure <name> <qubit>", "Measure a qubit"),
    ("reset <name>", "Reset to |0...0> state"),
    ("entangle <name> <q1> <q2>", "Create Bell pair"),
    ("send <from> <to>", "Queue a copy of a computer's state"),
    ("message <from> <to> <text>", "Send a classical message"),
    ("inbox <name>", "Show received classical messages"),
    ("receive", "Deliver the oldest queued message"),
    ("demo", "Run the demonstration script"),
    ("help", "Show this help"),
    ("(q)uit", "Exit program"),
];

const CREATE: &str = "create <name> <num_qubits>";
const SHOW: &str = "show <computer_name>";
const HADAMARD: &str = "hadamard <computer_name> <qubit_index>";
const PAULI_X: &str = "x <computer_name> <qubit_index>";
const PAULI_Z: &str = "z <computer_name> <qubit_index>";
const CNOT: &str = "cnot <computer_name> <control> <target>";
const MEASURE: &str = "measure <computer_name> <qubit_index>";
const RESET: &str = "reset <computer_name>";
const ENTANGLE: &str = "entangle <computer_name> <qubit1> <qubit2>";
const SEND: &str = "send <from> <to>";
const MESSAGE: &str = "message <from> <to> <text...>";
const INBOX: &str = "inbox <computer_name>";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Create { name: String, qubits: usize },
    List,
    Show { name: String },
    Hadamard { name: String, qubit: usize },
    PauliX { name: String, qubit: usize },
    PauliZ { name: String, qubit: usize },
    Cnot { name: String, control: usize, target: usize },
    Measure { name: String, qubit: usize },
    Reset { name: String },
    Entangle { name: String, first: usize, second: usize },
    Send { from: String, to: String },
    Message { from: String, to: String, text: String },
    Inbox { name: String },
    Receive,
    Demo,
    Quit,
}

/// Input that does not form a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty input")]
    Empty,

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid number '{value}'. Usage: {usage}")]
    InvalidNumber { value: String, usage: &'static str },

    #[error("Unknown command: {0}")]
    Unknown(String),
}

fn index(value: &str, usage: &'static str) -> Result<usize, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidNumber {
        value: value.to_string(),
        usage,
    })
}

fn name_and_qubit(args: &[&str], usage: &'static str) -> Result<(String, usize), CommandError> {
    match args {
        [name, qubit] => Ok((name.to_string(), index(qubit, usage)?)),
        _ => Err(CommandError::Usage(usage)),
    }
}

fn name_and_pair(
    args: &[&str],
    usage: &'static str,
) -> Result<(String, usize, usize), CommandError> {
    match args {
        [name, a, b] => Ok((name.to_string(), index(a, usage)?, index(b, usage)?)),
        _ => Err(CommandError::Usage(usage)),
    }
}

fn single_name(args: &[&str], usage: &'static str) -> Result<String, CommandError> {
    match args {
        [name] => Ok(name.to_string()),
        _ => Err(CommandError::Usage(usage)),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parse a whitespace-separated line. The verb is case-insensitive;
    /// names are kept as typed.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((verb, args)) = tokens.split_first() else {
            return Err(CommandError::Empty);
        };

        let command = match verb.to_lowercase().as_str() {
            "help" => Command::Help,
            "h" if args.is_empty() => Command::Help,
            "list" => Command::List,
            "receive" => Command::Receive,
            "demo" => Command::Demo,
            "quit" | "q" | "exit" => Command::Quit,
            "create" => {
                let (name, qubits) = name_and_qubit(args, CREATE)?;
                Command::Create { name, qubits }
            }
            "show" => Command::Show {
                name: single_name(args, SHOW)?,
            },
            "hadamard" | "h" => {
                let (name, qubit) = name_and_qubit(args, HADAMARD)?;
                Command::Hadamard { name, qubit }
            }
            "x" => {
                let (name, qubit) = name_and_qubit(args, PAULI_X)?;
                Command::PauliX { name, qubit }
            }
            "z" => {
                let (name, qubit) = name_and_qubit(args, PAULI_Z)?;
                Command::PauliZ { name, qubit }
            }
            "cnot" => {
                let (name, control, target) = name_and_pair(args, CNOT)?;
                Command::Cnot {
                    name,
                    control,
                    target,
                }
            }
            "measure" => {
                let (name, qubit) = name_and_qubit(args, MEASURE)?;
                Command::Measure { name, qubit }
            }
            "reset" => Command::Reset {
                name: single_name(args, RESET)?,
            },
            "entangle" => {
                let (name, first, second) = name_and_pair(args, ENTANGLE)?;
                Command::Entangle {
                    name,
                    first,
                    second,
                }
            }
            "send" => match args {
                [from, to] => Command::Send {
                    from: from.to_string(),
                    to: to.to_string(),
                },
                _ => return Err(CommandError::Usage(SEND)),
            },
            "message" => match args {
                [from, to, text @ ..] if !text.is_empty() => Command::Message {
                    from: from.to_string(),
                    to: to.to_string(),
                    text: text.join(" "),
                },
                _ => return Err(CommandError::Usage(MESSAGE)),
            },
            "inbox" => Command::Inbox {
                name: single_name(args, INBOX)?,
            },
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

//! Scripted demonstration session.

use std::io::{self, Write};

use console::style;

use crate::shell::{PROMPT, Shell};

/// Bell pair on `alice`, transfer of its state to `bob`, then measurement.
pub const SCRIPT: &[&str] = &[
    "create alice 2",
    "create bob 2",
    "entangle alice 0 1",
    "show alice",
    "send alice bob",
    "message alice bob bell pair on its way",
    "receive",
    "show bob",
    "measure bob 0",
    "measure bob 1",
    "show bob",
    "inbox bob",
    "reset alice",
    "list",
];

/// Echo and execute each scripted line against `shell`.
///
/// Command failures are reported inline, as in an interactive session.
pub fn run<W: Write>(shell: &mut Shell, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", style("Running demonstration").cyan().bold())?;
    for line in SCRIPT {
        writeln!(out, "{PROMPT}{line}")?;
        shell.handle_line(line, out)?;
    }
    writeln!(out, "{}", style("Demonstration complete").cyan().bold())
}

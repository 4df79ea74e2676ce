//! crates/cli/src/command_formatter.rs
//!
//! Adapting an external command into a [`ConfigurableFormatter`].

use std::io::{self, Write as _};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::trace;

use catalog::{Configuration, ConfigurableFormatter, FormatFailure};

/// Runs an external program as the black-box formatter.
///
/// Per invocation the configuration is serialized to a temporary JSON
/// file whose path becomes the program's last argument; the source text
/// is piped to stdin and the formatted text read from stdout. A non-zero
/// exit status or non-UTF-8 output is a [`FormatFailure`].
///
/// The search engine requires the adapted command to be a pure function
/// of the config file and stdin; a command that consults anything else
/// (mtimes, network, randomness) will derail both caching and parallel
/// candidate scoring.
pub struct CommandFormatter {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandFormatter {
    /// Creates an adapter around `program`, passing `args` before the
    /// config-file path on every invocation.
    #[must_use]
    pub fn new(program: PathBuf, args: Vec<String>) -> Self {
        Self { program, args }
    }
}

impl ConfigurableFormatter for CommandFormatter {
    fn format(&self, config: &Configuration, source: &str) -> Result<String, FormatFailure> {
        let mut config_file = tempfile::NamedTempFile::new()?;
        serde_json::to_writer(&mut config_file, config)
            .map_err(|e| FormatFailure::Rejected(format!("cannot serialize configuration: {e}")))?;
        config_file.flush()?;

        trace!(program = %self.program.display(), "invoking formatter");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(config_file.path())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        let mut stdin = child.stdin.take().expect("stdin was configured as piped");
        let (write_result, output) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || {
                let result = stdin.write_all(source.as_bytes());
                drop(stdin);
                result
            });
            let output = child.wait_with_output();
            (writer.join(), output)
        });

        let output = output?;
        if !output.status.success() {
            return Err(FormatFailure::Rejected(format!(
                "formatter exited with {}",
                output.status
            )));
        }
        match write_result {
            Ok(Ok(())) => {}
            // The command may legitimately stop reading once it has seen
            // enough input; only non-pipe errors count against it.
            Ok(Err(error)) if error.kind() == io::ErrorKind::BrokenPipe => {}
            Ok(Err(error)) => return Err(FormatFailure::Io(error)),
            Err(_) => {
                return Err(FormatFailure::Rejected(
                    "stdin writer thread panicked".to_string(),
                ));
            }
        }
        String::from_utf8(output.stdout).map_err(|_| FormatFailure::InvalidOutput)
    }
}

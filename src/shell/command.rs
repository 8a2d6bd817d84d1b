//! External command execution.
//!
//! Every process toolprep spawns goes through a [`CommandRunner`]. Runners
//! never fail: a command that cannot be started, exits non-zero, or times
//! out is reported as an unsuccessful [`CommandResult`] with the reason in
//! `stderr`.

use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// How often a timed command is polled for completion.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How long to keep reading output after a timed-out command was killed.
const DRAIN_GRACE: Duration = Duration::from_millis(500);

/// A command to execute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommandLine {
    /// Program followed by its arguments. Preferred form.
    Argv(Vec<String>),
    /// A string handed to the platform shell. Only for pipelines.
    Shell(String),
}

impl CommandLine {
    /// Build an argument-vector command.
    pub fn argv<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Argv(parts.into_iter().map(Into::into).collect())
    }

    /// Build a shell command.
    pub fn shell(command: impl Into<String>) -> Self {
        Self::Shell(command.into())
    }

    /// The executable this command resolves to first.
    pub fn program(&self) -> &str {
        match self {
            Self::Argv(parts) => parts.first().map(String::as_str).unwrap_or(""),
            Self::Shell(command) => command.split_whitespace().next().unwrap_or(""),
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argv(parts) => write!(f, "{}", parts.join(" ")),
            Self::Shell(command) => write!(f, "{}", command),
        }
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or never started).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error, or the synthesized reason the command never ran.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Create the result for an executable that could not be located.
    pub fn not_found(program: &str) -> Self {
        Self::failure(
            None,
            String::new(),
            format!("Command not found: {}", program),
            Duration::ZERO,
        )
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Timeout (None = wait forever).
    pub timeout: Option<Duration>,
}

/// Executes external commands.
pub trait CommandRunner {
    /// Run a command to completion and capture its output.
    fn run(&self, command: &CommandLine) -> CommandResult;
}

/// Runner that spawns real processes.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    options: CommandOptions,
}

impl SystemRunner {
    /// Create a runner with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner with explicit options.
    pub fn with_options(options: CommandOptions) -> Self {
        Self { options }
    }

    /// The options this runner applies to every command.
    pub fn options(&self) -> &CommandOptions {
        &self.options
    }

    fn build(&self, command: &CommandLine) -> Option<Command> {
        let mut cmd = match command {
            CommandLine::Argv(parts) => {
                let (program, args) = parts.split_first()?;
                let mut cmd = Command::new(program);
                cmd.args(args);
                cmd
            }
            CommandLine::Shell(line) => {
                let mut cmd = Command::new(shell_program());
                cmd.arg(shell_flag()).arg(line);
                cmd
            }
        };

        if let Some(cwd) = &self.options.cwd {
            cmd.current_dir(cwd);
        }

        // A timed command gets its own process group so a timeout can take
        // down everything it spawned, not just the direct child.
        #[cfg(unix)]
        if self.options.timeout.is_some() {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }

        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        Some(cmd)
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandLine) -> CommandResult {
        tracing::debug!("Running: {}", command);
        let start = Instant::now();

        let Some(mut cmd) = self.build(command) else {
            return CommandResult::not_found("<empty command>");
        };

        let child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Executable not found: {}", command.program());
                return CommandResult::not_found(command.program());
            }
            Err(e) => {
                return CommandResult::failure(
                    None,
                    String::new(),
                    format!("Failed to start '{}': {}", command.program(), e),
                    start.elapsed(),
                );
            }
        };

        let result = wait_for(child, self.options.timeout, start);
        tracing::debug!(
            "Finished: {} (exit {:?}, {:?})",
            command,
            result.exit_code,
            result.duration
        );
        result
    }
}

/// Read a pipe to the end on its own thread.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<Receiver<String>> {
    let mut pipe = pipe?;
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        let _ = tx.send(String::from_utf8_lossy(&buf).to_string());
    });
    Some(rx)
}

/// Collect a reader's output. After a timeout, a grandchild may still hold
/// the pipe open, so the reader is abandoned once `grace` runs out.
fn collect(reader: Option<Receiver<String>>, grace: Option<Duration>) -> String {
    let Some(rx) = reader else {
        return String::new();
    };
    match grace {
        Some(limit) => rx.recv_timeout(limit).unwrap_or_default(),
        None => rx.recv().unwrap_or_default(),
    }
}

/// Kill a timed-out child together with its process group.
fn kill_tree(child: &mut Child) {
    #[cfg(unix)]
    if let Ok(pid) = libc::pid_t::try_from(child.id()) {
        // SAFETY: kill(2) only takes plain integers. The child was spawned
        // as leader of its own group, so -pid names that group.
        unsafe {
            libc::kill(-pid, libc::SIGKILL);
        }
    }
    let _ = child.kill();
}

/// Wait for a child, draining both pipes so a chatty process cannot block.
fn wait_for(mut child: Child, timeout: Option<Duration>, start: Instant) -> CommandResult {
    let stdout_reader = drain(child.stdout.take());
    let stderr_reader = drain(child.stderr.take());

    let mut timed_out = false;
    let status = match timeout {
        None => child.wait(),
        Some(limit) => loop {
            match child.try_wait() {
                Ok(Some(status)) => break Ok(status),
                Ok(None) if start.elapsed() >= limit => {
                    timed_out = true;
                    tracing::debug!("Killing process group {} after {:?}", child.id(), limit);
                    kill_tree(&mut child);
                    break child.wait();
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => break Err(e),
            }
        },
    };

    let grace = timed_out.then_some(DRAIN_GRACE);
    let stdout = collect(stdout_reader, grace);
    let mut stderr = collect(stderr_reader, grace);
    let duration = start.elapsed();

    match status {
        Ok(_) if timed_out => {
            if let Some(limit) = timeout {
                stderr.push_str(&format!("Timed out after {:?}", limit));
            }
            CommandResult::failure(None, stdout, stderr, duration)
        }
        Ok(status) if status.success() => CommandResult::success(stdout, stderr, duration),
        Ok(status) => CommandResult::failure(status.code(), stdout, stderr, duration),
        Err(e) => {
            stderr.push_str(&format!("Failed to wait for command: {}", e));
            CommandResult::failure(None, stdout, stderr, duration)
        }
    }
}

fn shell_program() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        "/bin/sh".to_string()
    }
}

/// Get the flag to pass commands to the shell.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}

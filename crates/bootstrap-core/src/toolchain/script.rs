//! Streamed external command runs
//!
//! `conan search` and the formatting-setup script run through tokio with
//! their output echoed line by line, under a timeout so a hung child
//! cannot wedge the flow.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

use super::ToolError;

/// Upper bound for a streamed child process.
const STREAM_TIMEOUT: Duration = Duration::from_secs(120);

/// Relative path of the formatting-setup script inside the project.
pub const FORMAT_SETUP_SCRIPT: &str = "scripts/clang_formatting/main.py";

/// Locate a Python interpreter: python3 first, then python.
pub fn find_python() -> Result<&'static str, ToolError> {
    for candidate in ["python3", "python"] {
        let found = std::process::Command::new("which")
            .arg(candidate)
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false);
        if found {
            return Ok(candidate);
        }
    }
    Err(ToolError::MissingInterpreter)
}

/// Search conancenter for `name`, echoing the client's output.
pub async fn search_packages(name: &str) -> Result<()> {
    stream_command("conan", &["search", name, "-r", "conancenter"], None).await
}

/// Run the formatting-setup script against the project root with the
/// interpreter found by [`find_python`].
pub async fn run_format_setup(python: &str, root: &Path) -> Result<()> {
    stream_command(python, &[FORMAT_SETUP_SCRIPT, "."], Some(root)).await
}

/// Spawn a child, stream stdout/stderr to the terminal, enforce the timeout.
async fn stream_command(program: &str, args: &[&str], cwd: Option<&Path>) -> Result<()> {
    let rendered = format!("{} {}", program, args.join(" "));
    println!();
    println!("{} {}", "Running:".dimmed(), rendered.yellow());
    println!();

    let mut command = TokioCommand::new(program);
    command.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }
    let mut child = command.spawn().map_err(|e| ToolError::CommandFailed {
        command: rendered.clone(),
        details: e.to_string(),
    })?;

    let stdout = child.stdout.take().expect("Failed to capture stdout");
    let stderr = child.stderr.take().expect("Failed to capture stderr");

    let mut stdout_reader = BufReader::new(stdout).lines();
    let mut stderr_reader = BufReader::new(stderr).lines();

    let output_task = async {
        loop {
            tokio::select! {
                line = stdout_reader.next_line() => {
                    match line {
                        Ok(Some(line)) => println!("  {}", line),
                        Ok(None) => break,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stdout:".red(), e);
                            break;
                        }
                    }
                }
                line = stderr_reader.next_line() => {
                    match line {
                        Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                        Ok(None) => {}
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stderr:".red(), e);
                        }
                    }
                }
            }
        }
    };

    if timeout(STREAM_TIMEOUT, output_task).await.is_err() {
        let _ = child.kill().await;
        println!();
        anyhow::bail!("{} timed out after {} seconds", rendered, STREAM_TIMEOUT.as_secs());
    }

    match timeout(Duration::from_secs(5), child.wait()).await {
        Ok(Ok(status)) => {
            println!();
            if status.success() {
                Ok(())
            } else {
                Err(ToolError::CommandFailed {
                    command: rendered,
                    details: format!("exit code {}", status.code().unwrap_or(-1)),
                }
                .into())
            }
        }
        Ok(Err(e)) => anyhow::bail!("Failed to wait for {}: {}", rendered, e),
        Err(_) => {
            let _ = child.kill().await;
            anyhow::bail!("{} did not exit cleanly", rendered)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn streamed_command_reports_success() {
        stream_command("sh", &["-c", "echo hello"], None).await.unwrap();
    }

    #[tokio::test]
    async fn streamed_command_surfaces_exit_code() {
        let err = stream_command("sh", &["-c", "exit 3"], None).await.unwrap_err();
        assert!(err.to_string().contains("exit code 3"));
    }

    #[tokio::test]
    async fn missing_binary_is_a_command_failure() {
        let err = stream_command("definitely-not-a-binary-xyz", &[], None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed"));
    }
}

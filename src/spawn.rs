//! Detached command launching

use dwmbar_core::{SpawnError, Spawner};
use std::process::Stdio;
use tokio::process::Command;

/// Runs a command line through `sh -c` and forgets about it.
///
/// The child gets its own process group so a Ctrl-C aimed at the bar does
/// not take it down, and its handle is dropped right away; tokio reaps it
/// when it exits. Must be called from within the runtime.
#[derive(Debug, Default)]
pub struct CommandSpawner;

impl Spawner for CommandSpawner {
    fn spawn(&mut self, command: &str) -> Result<(), SpawnError> {
        Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .process_group(0)
            .spawn()
            .map(drop)
            .map_err(|source| SpawnError {
                command: command.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spawn_does_not_wait() {
        let started = std::time::Instant::now();
        CommandSpawner.spawn("sleep 5").unwrap();
        assert!(started.elapsed() < std::time::Duration::from_secs(2));
    }
}

//! # Player Launcher
//!
//! Executes `Effect::Play` by handing the URL to an external player
//! (`[player].command` in config, e.g. `mpv --really-quiet`). Stdio is nulled
//! so the player cannot scribble over the TUI, and the event loop never
//! blocks on it: child handles are kept and reaped with `try_wait()` on every
//! loop tick.

use log::{debug, info, warn};
use std::process::{Child, Command, Stdio};

/// Split the configured command on whitespace and append the URL.
pub fn player_argv(command: &str, url: &str) -> Option<Vec<String>> {
    let mut argv: Vec<String> = command.split_whitespace().map(str::to_string).collect();
    if argv.is_empty() {
        return None;
    }
    argv.push(url.to_string());
    Some(argv)
}

pub struct PlayerLauncher {
    command: Option<String>,
    children: Vec<Child>,
}

impl PlayerLauncher {
    pub fn new(command: Option<String>) -> Self {
        Self {
            command,
            children: Vec::new(),
        }
    }

    /// Launch the player. Returns a status message replacing the reducer's
    /// when playback could not be handed off.
    pub fn launch(&mut self, url: &str) -> Option<String> {
        let Some(argv) = self
            .command
            .as_deref()
            .and_then(|cmd| player_argv(cmd, url))
        else {
            info!("No player configured, showing URL: {}", url);
            return Some(format!("Play: {}", url));
        };

        match Command::new(&argv[0])
            .args(&argv[1..])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => {
                info!("Started {} (pid {}) for {}", argv[0], child.id(), url);
                self.children.push(child);
                None
            }
            Err(e) => {
                warn!("Failed to start player {}: {}", argv[0], e);
                Some(format!("Player failed: {}", e))
            }
        }
    }

    /// Collect players that have exited. Never blocks.
    pub fn reap(&mut self) {
        self.children.retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                debug!("Player pid {} exited with {}", child.id(), status);
                false
            }
            Ok(None) => true,
            Err(e) => {
                warn!("Failed to poll player pid {}: {}", child.id(), e);
                false
            }
        });
    }

    /// Players started and not yet reaped.
    pub fn running(&self) -> usize {
        self.children.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_argv_appends_url() {
        assert_eq!(
            player_argv("mpv  --really-quiet", "https://cdn.example/v1.mp4"),
            Some(vec![
                "mpv".to_string(),
                "--really-quiet".to_string(),
                "https://cdn.example/v1.mp4".to_string(),
            ])
        );
    }

    #[test]
    fn test_blank_command_is_none() {
        assert_eq!(player_argv("   ", "u"), None);
    }

    #[test]
    fn test_no_command_shows_url() {
        let mut launcher = PlayerLauncher::new(None);
        assert_eq!(
            launcher.launch("https://cdn.example/v1.mp4").as_deref(),
            Some("Play: https://cdn.example/v1.mp4")
        );
        assert_eq!(launcher.running(), 0);
    }

    #[test]
    fn test_missing_binary_reports_failure() {
        let mut launcher = PlayerLauncher::new(Some("definitely-not-a-player-binary-xyz".to_string()));
        let status = launcher.launch("u");
        assert!(status.is_some_and(|s| s.starts_with("Player failed")));
        assert_eq!(launcher.running(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_exited_players_are_reaped() {
        let mut launcher = PlayerLauncher::new(Some("true".to_string()));
        let mut pids = Vec::new();
        for _ in 0..5 {
            assert_eq!(launcher.launch("u"), None);
            pids.push(launcher.children.last().map(Child::id).unwrap());
        }
        assert_eq!(launcher.running(), 5);

        let deadline = Instant::now() + Duration::from_secs(5);
        while launcher.running() > 0 && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(20));
            launcher.reap();
        }
        assert_eq!(launcher.running(), 0);

        // A reaped pid no longer shows up as a zombie
        #[cfg(target_os = "linux")]
        for pid in pids {
            let state = std::fs::read_to_string(format!("/proc/{pid}/stat")).unwrap_or_default();
            let zombie = state
                .rsplit_once(')')
                .is_some_and(|(_, rest)| rest.trim_start().starts_with('Z'));
            assert!(!zombie, "pid {pid} left as zombie");
        }
    }
}

//! Starting executables picked from the listing.

use std::{
    io,
    path::Path,
    process::{Child, Command, Stdio},
};

pub trait Launcher {
    /// Fire and forget: the child is not waited on and its output is discarded.
    fn launch(&mut self, path: &Path) -> io::Result<()>;

    /// Collects children that have exited. Called once per frame.
    fn reap(&mut self) {}
}

/// Spawns the program directly (no shell) in its own directory.
#[derive(Debug, Default)]
pub struct ProcessLauncher {
    children: Vec<Child>,
}

impl ProcessLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Children spawned but not yet reaped.
    pub fn running(&self) -> usize {
        self.children.len()
    }
}

impl Launcher for ProcessLauncher {
    fn launch(&mut self, path: &Path) -> io::Result<()> {
        let mut cmd = Command::new(path);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        if let Some(parent) = path.parent() {
            cmd.current_dir(parent);
        }
        let child = cmd.spawn()?;
        log::info!("launched {} (pid {})", path.display(), child.id());
        self.children.push(child);
        Ok(())
    }

    fn reap(&mut self) {
        self.children.retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                log::debug!("child pid {} exited: {status}", child.id());
                false
            }
            Ok(None) => true,
            Err(err) => {
                log::warn!("child pid {} status: {err}", child.id());
                false
            }
        });
    }
}

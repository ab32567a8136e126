//! Opening the saved report in the host's default viewer.
//!
//! Every launcher spawns the viewer and returns immediately; the child is never waited on.

use std::{
    path::Path,
    process::{Command, Stdio},
};

use anyhow::{Context, Result};
use enum_dispatch::enum_dispatch;

/// Something that can hand a file to a viewer.
#[enum_dispatch]
pub trait Launch {
    fn launch(&self, path: &Path) -> Result<()>;
}

/// `cmd /C start "" <path>`, the shell association used on Windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowsStart;

/// `open <path>` on macOS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacOpen;

/// `xdg-open <path>` on Linux and other Unix desktops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XdgOpen;

/// A user-configured viewer program, invoked as `<program> <path>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomCommand {
    pub program: String,
}

/// Never opens anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disabled;

impl Launch for WindowsStart {
    fn launch(&self, path: &Path) -> Result<()> {
        // The empty string is the window title `start` expects before a quoted path.
        spawn_detached(Command::new("cmd").args(["/C", "start", ""]).arg(path))
    }
}

impl Launch for MacOpen {
    fn launch(&self, path: &Path) -> Result<()> {
        spawn_detached(Command::new("open").arg(path))
    }
}

impl Launch for XdgOpen {
    fn launch(&self, path: &Path) -> Result<()> {
        spawn_detached(Command::new("xdg-open").arg(path))
    }
}

impl Launch for CustomCommand {
    fn launch(&self, path: &Path) -> Result<()> {
        spawn_detached(Command::new(&self.program).arg(path))
    }
}

impl Launch for Disabled {
    fn launch(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}

#[enum_dispatch(Launch)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launcher {
    WindowsStart,
    MacOpen,
    XdgOpen,
    CustomCommand,
    Disabled,
}

impl Launcher {
    /// The default opener for the platform this binary was built for.
    pub fn for_host() -> Self {
        if cfg!(target_os = "windows") {
            Launcher::WindowsStart(WindowsStart)
        } else if cfg!(target_os = "macos") {
            Launcher::MacOpen(MacOpen)
        } else {
            Launcher::XdgOpen(XdgOpen)
        }
    }

    pub fn custom(program: impl Into<String>) -> Self {
        Launcher::CustomCommand(CustomCommand {
            program: program.into(),
        })
    }

    pub fn disabled() -> Self {
        Launcher::Disabled(Disabled)
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Launcher::Disabled(_))
    }
}

fn spawn_detached(command: &mut Command) -> Result<()> {
    let program = command.get_program().to_string_lossy().into_owned();
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to launch '{}'", program))?;
    Ok(())
}

// src/exec/runner.rs

//! Launches the child inside the wrapper shell and waits for it.

use std::fs::{File, OpenOptions};
use std::io;
use std::os::fd::{AsFd, FromRawFd, RawFd};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use anyhow::Context;
use nix::errno::Errno;
use nix::fcntl::{FcntlArg, fcntl};
use tokio::process::Command;
use tokio::sync::oneshot;
use tracing::{debug, info};

use crate::errors::{CmdTimerError, Result};
use crate::exec::request::{ExecutionRequest, OpenMode, RedirectTarget, Redirection};
use crate::timer::StatusRecorder;
use crate::types::ChildStatus;

/// Resolve a program name the way `execvp` would: names containing a `/`
/// are taken as paths, everything else is searched on `PATH`.
pub fn resolve_program(name: &str) -> Result<PathBuf> {
    if name.contains('/') {
        let path = PathBuf::from(name);
        return if path.is_file() {
            Ok(path)
        } else {
            Err(CmdTimerError::CommandNotFound(name.to_string()))
        };
    }

    let search = std::env::var_os("PATH").unwrap_or_default();
    std::env::split_paths(&search)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
        .ok_or_else(|| CmdTimerError::CommandNotFound(name.to_string()))
}

fn is_executable(path: &Path) -> bool {
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// Where one of the child's standard descriptors points.
#[derive(Debug)]
enum Endpoint {
    /// The wrapper's own descriptor 0, 1 or 2.
    Parent(u8),
    File(File),
}

impl Endpoint {
    fn try_clone(&self) -> io::Result<Self> {
        match self {
            Endpoint::Parent(fd) => Ok(Endpoint::Parent(*fd)),
            Endpoint::File(file) => Ok(Endpoint::File(file.try_clone()?)),
        }
    }

    fn into_stdio(self, slot: u8) -> io::Result<Stdio> {
        match self {
            Endpoint::Parent(fd) if fd == slot => Ok(Stdio::inherit()),
            Endpoint::Parent(0) => Ok(Stdio::from(io::stdin().as_fd().try_clone_to_owned()?)),
            Endpoint::Parent(1) => Ok(Stdio::from(io::stdout().as_fd().try_clone_to_owned()?)),
            Endpoint::Parent(_) => Ok(Stdio::from(io::stderr().as_fd().try_clone_to_owned()?)),
            Endpoint::File(file) => Ok(Stdio::from(file)),
        }
    }
}

/// Resolved standard streams for the child.
#[derive(Debug)]
pub struct StdioPlan {
    slots: [Endpoint; 3],
}

impl StdioPlan {
    /// Apply `redirects` in order, opening files as needed.
    pub fn resolve(redirects: &[Redirection]) -> anyhow::Result<Self> {
        let mut slots = [Endpoint::Parent(0), Endpoint::Parent(1), Endpoint::Parent(2)];

        for redirect in redirects {
            let slot = usize::from(redirect.fd);
            let endpoint = match redirect.target {
                RedirectTarget::Descriptor(src) if src <= 2 => slots[src as usize]
                    .try_clone()
                    .with_context(|| format!("duplicating descriptor {src}"))?,
                RedirectTarget::Descriptor(src) => Endpoint::File(
                    dup_descriptor(src)
                        .with_context(|| format!("duplicating inherited descriptor {src}"))?,
                ),
                RedirectTarget::Path(ref path) => Endpoint::File(
                    open_for(path, redirect.mode)
                        .with_context(|| format!("opening {path:?} for descriptor {}", redirect.fd))?,
                ),
            };
            slots[slot] = endpoint;
        }

        Ok(Self { slots })
    }

    fn into_stdio(self) -> io::Result<(Stdio, Stdio, Stdio)> {
        let [stdin, stdout, stderr] = self.slots;
        Ok((stdin.into_stdio(0)?, stdout.into_stdio(1)?, stderr.into_stdio(2)?))
    }
}

/// Duplicate one of the wrapper's own descriptors. The copy shares the
/// open file description, so offsets and contents are left alone.
fn dup_descriptor(src: u32) -> nix::Result<File> {
    let raw = RawFd::try_from(src).map_err(|_| Errno::EBADF)?;
    let fd = fcntl(raw, FcntlArg::F_DUPFD_CLOEXEC(3))?;
    // SAFETY: `fd` was just returned by F_DUPFD_CLOEXEC and nothing else owns it.
    Ok(unsafe { File::from_raw_fd(fd) })
}

fn open_for(path: &Path, mode: OpenMode) -> io::Result<File> {
    match mode {
        OpenMode::Read => File::open(path),
        OpenMode::Write => OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path),
        OpenMode::Append => OpenOptions::new().append(true).create(true).open(path),
    }
}

/// Runs one [`ExecutionRequest`] to completion.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    request: ExecutionRequest,
}

impl ProcessRunner {
    pub fn new(request: ExecutionRequest) -> Self {
        Self { request }
    }

    /// Launch the child, fire `handoff` as soon as it exists, then wait for it
    /// and record its status.
    ///
    /// Any error returned before `handoff` fires means nothing was launched.
    pub async fn run(
        self,
        handoff: oneshot::Sender<()>,
        recorder: StatusRecorder,
    ) -> Result<ChildStatus> {
        let request = self.request;

        let shell = resolve_program(&request.shell)?;
        resolve_program(&request.command)?;
        let (stdin, stdout, stderr) = StdioPlan::resolve(&request.redirects)?.into_stdio()?;
        let script = request.script();

        debug!(shell = %shell.display(), %script, "launching child");

        let mut child = Command::new(&shell)
            .arg("-c")
            .arg(&script)
            .stdin(stdin)
            .stdout(stdout)
            .stderr(stderr)
            .spawn()
            .map_err(|source| CmdTimerError::Launch {
                command: request.command.clone(),
                source,
            })?;

        info!(pid = child.id(), command = %request.command, "child launched");
        if handoff.send(()).is_err() {
            debug!("coordinator stopped listening for the launch handoff");
        }

        let status = child
            .wait()
            .await
            .with_context(|| format!("waiting for {}", request.command))?;
        let status = ChildStatus::from_exit_status(status);

        info!(command = %request.command, %status, "child exited");
        recorder.record(status);
        Ok(status)
    }
}

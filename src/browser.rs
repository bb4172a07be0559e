//! Opening the song listing in the desktop browser once the server is up

use std::{io, net::SocketAddr, process::Command};

/// URL of the song listing for a server bound to `addr`.
///
/// A wildcard bind address is not reachable from a browser, so it becomes `localhost`.
pub fn listing_url(addr: SocketAddr) -> String {
    if addr.ip().is_unspecified() {
        format!("http://localhost:{}/songs", addr.port())
    } else {
        format!("http://{addr}/songs")
    }
}

#[cfg(target_os = "macos")]
fn launcher(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn launcher(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn launcher(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

/// Hands `url` to the platform's default browser
pub fn open(url: &str) -> io::Result<()> {
    let status = launcher(url).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("browser launcher exited with {status}")))
    }
}

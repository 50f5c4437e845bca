//! Platform adapters for the desktop.
//!
//! Both adapters shell out to the tools every desktop already ships:
//! `osascript` on macOS, `gsettings`/`notify-send` on Linux and PowerShell
//! on Windows.

use listing::{Result, WallpaperError};
use std::path::Path;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::collaborators::{Notification, Notifier, WallpaperSetter};

/// Run a command to completion; a non-zero exit becomes its stderr.
async fn run_command(program: &str, args: &[&str]) -> std::result::Result<(), String> {
    debug!("Running {} {:?}", program, args);
    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|e| format!("cannot run {program}: {e}"))?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(format!("{program} exited with {}: {}", output.status, stderr.trim()))
    }
}

/// Quote a value for an AppleScript string literal.
fn applescript_quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Quote a value for a PowerShell single-quoted string.
fn powershell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Sets the wallpaper on every display of the current desktop.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemWallpaper;

impl SystemWallpaper {
    async fn apply_path(&self, path: &str) -> std::result::Result<(), String> {
        if cfg!(target_os = "macos") {
            let script = format!(
                "tell application \"System Events\" to tell every desktop to set picture to {}",
                applescript_quote(path)
            );
            run_command("osascript", &["-e", &script]).await
        } else if cfg!(target_os = "windows") {
            let script = format!(
                "Add-Type -TypeDefinition 'using System.Runtime.InteropServices; \
                 public class Wallpaper {{ [DllImport(\"user32.dll\", CharSet = CharSet.Unicode)] \
                 public static extern int SystemParametersInfo(int action, int param, string file, int flags); }}'; \
                 [void][Wallpaper]::SystemParametersInfo(20, 0, {}, 3)",
                powershell_quote(path)
            );
            run_command("powershell", &["-NoProfile", "-NonInteractive", "-Command", &script]).await
        } else {
            let uri = format!("file://{path}");
            run_command(
                "gsettings",
                &["set", "org.gnome.desktop.background", "picture-uri", &uri],
            )
            .await?;
            // Older GNOME releases have no dark variant.
            if let Err(e) = run_command(
                "gsettings",
                &["set", "org.gnome.desktop.background", "picture-uri-dark", &uri],
            )
            .await
            {
                debug!("Dark wallpaper not set: {}", e);
            }
            Ok(())
        }
    }
}

impl WallpaperSetter for SystemWallpaper {
    async fn apply(&self, path: &Path) -> Result<()> {
        let absolute = std::path::absolute(path)?;
        let shown = absolute.to_string_lossy().into_owned();

        self.apply_path(&shown)
            .await
            .map_err(|reason| WallpaperError::Apply {
                path: absolute.clone(),
                reason,
            })?;

        info!("Wallpaper set to {}", shown);
        Ok(())
    }
}

/// Shows a native notification, or logs it where none is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemNotifier;

impl Notifier for SystemNotifier {
    async fn notify(&self, notification: &Notification) -> Result<()> {
        let outcome = if cfg!(target_os = "macos") {
            let script = format!(
                "display notification {} with title {} subtitle {}",
                applescript_quote(&notification.message),
                applescript_quote(&notification.title),
                applescript_quote(&notification.subtitle),
            );
            run_command("osascript", &["-e", &script]).await
        } else if cfg!(target_os = "linux") {
            let body = format!("{}\n{}", notification.subtitle, notification.message);
            run_command("notify-send", &["--app-name=wallfetch", &notification.title, &body]).await
        } else {
            info!(
                "{}: {} ({}) {}",
                notification.title, notification.message, notification.subtitle, notification.link
            );
            Ok(())
        };

        outcome.map_err(|reason| {
            warn!("Notification failed: {}", reason);
            WallpaperError::Notify(reason)
        })
    }
}

/// Drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    async fn notify(&self, notification: &Notification) -> Result<()> {
        debug!("Notification suppressed: {}", notification.message);
        Ok(())
    }
}

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

/// Resolve the application home directory into an absolute path.
///
/// - `Some(path)`: a leading `~` is expanded to the user's home, relative
///   paths are anchored at the current working directory.
/// - `None`: `<platform base>/<default_subdir>`, where the platform base is
///   `%APPDATA%` on Windows and `$HOME` elsewhere.
///
/// When `create` is set the directory (and its parents) is created.
pub fn resolve_home_dir(
    configured: Option<String>,
    default_subdir: &str,
    create: bool,
) -> Result<PathBuf> {
    let resolved = match configured {
        Some(raw) if raw.starts_with('~') => {
            let user_home = platform_user_home()?;
            absolutize(&expand_tilde(&raw, &user_home))?
        }
        Some(raw) => absolutize(Path::new(&raw))?,
        None => platform_base()?.join(default_subdir),
    };

    if create {
        std::fs::create_dir_all(&resolved)
            .with_context(|| format!("failed to create home dir '{}'", resolved.display()))?;
    }

    Ok(resolved)
}

fn platform_user_home() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| anyhow!("cannot determine the user's home directory"))
}

#[cfg(target_os = "windows")]
fn platform_base() -> Result<PathBuf> {
    dirs::data_dir().ok_or_else(|| anyhow!("cannot determine %APPDATA%"))
}

#[cfg(not(target_os = "windows"))]
fn platform_base() -> Result<PathBuf> {
    platform_user_home()
}

/// Expand `~` and `~/...` against `home`. `~user` forms are left untouched.
fn expand_tilde(raw: &str, home: &Path) -> PathBuf {
    if raw == "~" {
        return home.to_path_buf();
    }
    match raw
        .strip_prefix("~/")
        .or_else(|| raw.strip_prefix("~\\"))
    {
        Some(rest) => home.join(rest),
        None => PathBuf::from(raw),
    }
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("cannot read current directory")?;
    Ok(cwd.join(path))
}

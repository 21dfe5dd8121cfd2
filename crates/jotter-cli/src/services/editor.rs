// crates/jotter-cli/src/services/editor.rs - External editor integration

use anyhow::{anyhow, Result};
use std::env;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Launches the user's editor on note files.
pub struct EditorService;

impl EditorService {
    /// Resolve the editor command line.
    ///
    /// Precedence: the config file's `[editor] command`, then
    /// `JOTTER_EDITOR`, then `EDITOR`, then a platform default.
    pub fn resolve_command(configured: Option<&str>) -> String {
        if let Some(command) = configured {
            if !command.trim().is_empty() {
                return command.to_string();
            }
        }

        env::var("JOTTER_EDITOR")
            .or_else(|_| env::var("EDITOR"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "vi".to_string()
                }
            })
    }

    /// Open a file in the resolved editor and wait for it to exit.
    ///
    /// The command line is split on whitespace so values like
    /// `code --wait` work. A nonzero editor exit is reported on stderr but
    /// not treated as a failure; the note on disk is whatever the editor
    /// left behind.
    pub fn open_file(path: &Path, configured: Option<&str>) -> Result<()> {
        let editor = Self::resolve_command(configured);
        let mut parts = editor.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| anyhow!("editor command is empty"))?;

        debug!(editor = %editor, path = %path.display(), "launching editor");

        let status = Command::new(program)
            .args(parts)
            .arg(path)
            .status()
            .map_err(|e| {
                anyhow!(
                    "failed to launch editor '{}': {}\n\
                     Set JOTTER_EDITOR or EDITOR to a command on your PATH.",
                    editor,
                    e
                )
            })?;

        if !status.success() {
            eprintln!("editor '{}' exited with status {:?}", editor, status.code());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_command_takes_precedence() {
        assert_eq!(
            EditorService::resolve_command(Some("nano")),
            "nano".to_string()
        );
    }

    #[test]
    fn test_blank_configured_command_is_ignored() {
        // Falls through to the environment or the platform default; either
        // way the result is never the blank string itself.
        let resolved = EditorService::resolve_command(Some("   "));
        assert!(!resolved.trim().is_empty());
    }
}

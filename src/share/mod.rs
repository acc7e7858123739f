//! Hand an exported file to the host's email program.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const SHARE_MIME: &str = "text/csv";
pub const SHARE_SUBJECT: &str = "Sleep Logger Output";
pub const SHARE_BODY: &str = "Attached is your Sleep Logger log. Enjoy.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub path: PathBuf,
    pub mime: &'static str,
    pub subject: &'static str,
    pub body: &'static str,
}

impl ShareRequest {
    pub fn csv(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            mime: SHARE_MIME,
            subject: SHARE_SUBJECT,
            body: SHARE_BODY,
        }
    }
}

pub trait Sharer {
    fn share(&self, req: &ShareRequest) -> AppResult<()>;
}

/// Runs an xdg-email compatible program:
/// `<program> --subject S --body B --attach FILE`.
pub struct CommandSharer {
    pub program: String,
}

impl CommandSharer {
    pub fn args(req: &ShareRequest) -> Vec<String> {
        vec![
            "--subject".to_string(),
            req.subject.to_string(),
            "--body".to_string(),
            req.body.to_string(),
            "--attach".to_string(),
            req.path.display().to_string(),
        ]
    }
}

impl Sharer for CommandSharer {
    fn share(&self, req: &ShareRequest) -> AppResult<()> {
        let status = Command::new(&self.program)
            .args(Self::args(req))
            .status()
            .map_err(|e| AppError::Share(format!("cannot run '{}': {}", self.program, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(AppError::Share(format!(
                "'{}' exited with {}",
                self.program, status
            )))
        }
    }
}

/// Fallback when no email program is configured.
pub struct PrintSharer;

impl Sharer for PrintSharer {
    fn share(&self, req: &ShareRequest) -> AppResult<()> {
        info(format!("Subject: {}", req.subject));
        info(format!("Body   : {}", req.body));
        info(format!("Attach : {} ({})", req.path.display(), req.mime));
        Ok(())
    }
}

pub fn sharer_for(command: Option<&str>) -> Box<dyn Sharer> {
    match command {
        Some(program) if !program.trim().is_empty() => Box::new(CommandSharer {
            program: program.trim().to_string(),
        }),
        _ => Box::new(PrintSharer),
    }
}

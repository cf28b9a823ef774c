use crate::constants::output::FILE_MODE;
use crate::errors::MergeError;
use crate::services::logger::Logger;
use crate::utils::fs_atomic::atomic_write_text_file;
use crate::utils::json_io::{read_json_object, render_pretty, DocumentRole};
use crate::utils::merge::{merge_objects, MergeOptions};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    pub original: PathBuf,
    pub patch: PathBuf,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    Written { original: PathBuf, patch: PathBuf },
    DryRun { rendered: String },
}

pub struct App {
    pub logger: Logger,
    options: MergeOptions,
}

impl App {
    pub fn new(logger: Logger, options: MergeOptions) -> Self {
        Self { logger, options }
    }

    /// Reads both documents, merges the patch into the original and either writes the
    /// result back over the original (atomically) or hands it back for a dry run.
    /// Nothing is written unless every earlier step succeeded.
    pub fn run(&self, request: &MergeRequest) -> Result<MergeOutcome, MergeError> {
        let logger = self.logger.child("merge");

        let original = read_json_object(&request.original, DocumentRole::Original)?;
        logger.debug(
            "read original",
            Some(&json!({
                "path": request.original.display().to_string(),
                "keys": original.len(),
            })),
        );
        let patch = read_json_object(&request.patch, DocumentRole::Patch)?;
        logger.debug(
            "read patch",
            Some(&json!({
                "path": request.patch.display().to_string(),
                "keys": patch.len(),
            })),
        );

        let merged = merge_objects(&original, &patch, &self.options);
        let rendered = render_pretty(&Value::Object(merged))?;

        if request.dry_run {
            logger.info("dry run, original left untouched", None);
            return Ok(MergeOutcome::DryRun { rendered });
        }

        let write_error = |err: std::io::Error| {
            MergeError::write(format!(
                "failed to write result to {}: {}",
                request.original.display(),
                err
            ))
            .with_path(&request.original)
        };
        // Symlinked originals are updated through the link; the link itself stays.
        let target = fs::canonicalize(&request.original).map_err(write_error)?;
        atomic_write_text_file(&target, &rendered, FILE_MODE).map_err(write_error)?;
        logger.info(
            "merged document written",
            Some(&json!({
                "original": request.original.display().to_string(),
                "patch": request.patch.display().to_string(),
                "bytes": rendered.len(),
            })),
        );

        Ok(MergeOutcome::Written {
            original: request.original.clone(),
            patch: request.patch.clone(),
        })
    }
}

impl MergeOutcome {
    /// Line printed to stdout on success.
    pub fn summary(&self) -> String {
        match self {
            MergeOutcome::Written { original, patch } => format!(
                "Successfully merged {} into {}",
                patch.display(),
                original.display()
            ),
            MergeOutcome::DryRun { rendered } => rendered.clone(),
        }
    }
}

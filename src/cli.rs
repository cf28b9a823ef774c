use crate::app::MergeRequest;
use crate::services::logger::LogLevel;
use crate::utils::merge::MergeOptions;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "json-merger")]
#[command(about = "Deep-merge a JSON patch document into an original JSON document, in place")]
#[command(version)]
pub struct Cli {
    /// JSON object to merge into; overwritten with the merged result
    #[arg(value_name = "ORIGINAL")]
    pub original: PathBuf,

    /// JSON object whose values take precedence
    #[arg(value_name = "PATCH")]
    pub patch: PathBuf,

    /// Field used to match array elements, in priority order (repeatable; default: name, id, refId)
    #[arg(short = 'k', long = "key", value_name = "NAME")]
    pub keys: Vec<String>,

    /// Print the merged document to stdout instead of overwriting ORIGINAL
    #[arg(long)]
    pub dry_run: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors and skip the success message
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn merge_options(&self) -> MergeOptions {
        if self.keys.is_empty() {
            MergeOptions::default()
        } else {
            MergeOptions::new(self.keys.iter().cloned())
        }
    }

    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_verbosity(self.quiet, self.verbose)
    }

    pub fn request(&self) -> MergeRequest {
        MergeRequest {
            original: self.original.clone(),
            patch: self.patch.clone(),
            dry_run: self.dry_run,
        }
    }
}

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::{debug, info};

use crate::chain::FilterChain;
use crate::error::{Result, TranscodeError};
use crate::transcoder::quote;

/// Binary invoked when no other program is configured
pub const DEFAULT_PROGRAM: &str = "ffmpeg";

/// One transcoder invocation: `-i <input> -vf <chain> -c:a copy <output>`.
///
/// Video is re-encoded through the filter chain; audio is stream-copied.
#[derive(Debug, Clone)]
pub struct TranscodeCommand {
    program: String,
    input: PathBuf,
    output: PathBuf,
    filter_chain: String,
}

impl TranscodeCommand {
    pub fn new<I, O>(input: I, output: O, chain: &FilterChain) -> Self
    where
        I: Into<PathBuf>,
        O: Into<PathBuf>,
    {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            input: input.into(),
            output: output.into(),
            filter_chain: chain.as_expression(),
        }
    }

    /// Use a different transcoder binary (a name on `PATH` or a full path)
    pub fn with_program<S: Into<String>>(mut self, program: S) -> Self {
        self.program = program.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn filter_chain(&self) -> &str {
        &self.filter_chain
    }

    /// Arguments passed to the program, excluding the program itself
    pub fn args(&self) -> Vec<OsString> {
        vec![
            "-i".into(),
            self.input.clone().into_os_string(),
            "-vf".into(),
            self.filter_chain.clone().into(),
            "-c:a".into(),
            "copy".into(),
            self.output.clone().into_os_string(),
        ]
    }

    /// The full command, quoted for a POSIX shell. For display only.
    pub fn command_line(&self) -> String {
        let args = self.args();
        let words = std::iter::once(self.program.clone())
            .chain(args.iter().map(|arg| arg.to_string_lossy().into_owned()));
        quote::join(words)
    }

    /// Run the transcoder to completion with inherited stdio.
    ///
    /// A non-zero exit status is an error. Nothing is retried.
    pub async fn run(&self) -> Result<()> {
        info!("Running {} on {:?}", self.program, self.input);
        debug!("Command line: {}", self.command_line());

        let status = Command::new(&self.program)
            .args(self.args())
            .status()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => TranscodeError::ProgramNotFound {
                    program: self.program.clone(),
                },
                _ => TranscodeError::SpawnFailed {
                    program: self.program.clone(),
                    reason: e.to_string(),
                },
            })?;

        if !status.success() {
            return Err(TranscodeError::Failed {
                program: self.program.clone(),
                status: status.to_string(),
            }
            .into());
        }

        info!("{} finished, output written to {:?}", self.program, self.output);
        Ok(())
    }
}

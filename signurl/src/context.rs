use signurl_core::{Context, OsEnv};
use signurl_file_read_tokio::TokioFileRead;

/// Context reading key files with tokio and env vars from the process.
pub fn default_context() -> Context {
    Context::new().with_file_read(TokioFileRead).with_env(OsEnv)
}

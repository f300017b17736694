//! JSON trace sink for session diagnostics (discarded transcripts, capture
//! degradation) so problems can be triaged after the fact without a UI.

use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_subscriber::fmt::time::UtcTime;

use crate::config::AppConfig;

const TRACE_PATH_ENV: &str = "HUBVOICE_TRACE_LOG";
const TRACE_FILE_NAME: &str = "hubvoice_trace.jsonl";

static INSTALLED: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Install the global JSON trace subscriber when the config opts in.
///
/// Returns the path of the trace sink, or `None` when tracing is disabled or
/// the sink could not be set up. Calling this more than once is fine; only
/// the first successful call installs a subscriber.
pub fn init_tracing(config: &AppConfig) -> Option<PathBuf> {
    if !config.tracing_enabled() {
        return None;
    }
    INSTALLED
        .get_or_init(|| install_subscriber(trace_path()))
        .clone()
}

fn trace_path() -> PathBuf {
    env::var_os(TRACE_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join(TRACE_FILE_NAME))
}

fn install_subscriber(path: PathBuf) -> Option<PathBuf> {
    let file = File::options().create(true).append(true).open(&path).ok()?;
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_writer(file)
        .with_current_span(false)
        .with_span_list(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok()?;
    Some(path)
}

use std::sync::Arc;

/// Events emitted during page generation for progress reporting
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Episodes are being requested from the API
    FetchingEpisodes { url: String },

    /// The API answered with a list of episodes
    EpisodesFetched { count: usize },

    /// Episodes were projected and split into the page sections
    PageBuilt {
        latest_count: usize,
        all_count: usize,
    },

    /// The page was written to the output directory
    PageWritten {
        path: String,
        /// False if the content on disk was already identical
        changed: bool,
        content_hash: String,
    },

    /// A generation cycle failed; the previous output was kept
    GenerationFailed { error: String },

    /// Waiting for the next regeneration in watch mode
    WaitingForRegeneration { seconds: u64 },
}

/// Trait for reporting progress events during page generation.
///
/// Implementations can use this to display spinners, log messages,
/// or collect statistics.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event
    fn report(&self, event: ProgressEvent);
}

/// A shared reference to a progress reporter
pub type SharedProgressReporter = Arc<dyn ProgressReporter>;

/// A no-op progress reporter that silently ignores all events.
/// Useful for tests or quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: ProgressEvent) {}
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedProgressReporter {
        Arc::new(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_reporter_handles_all_events() {
        let reporter = NoopReporter::shared();

        reporter.report(ProgressEvent::FetchingEpisodes {
            url: "http://localhost:3333/episodes".to_string(),
        });
        reporter.report(ProgressEvent::EpisodesFetched { count: 12 });
        reporter.report(ProgressEvent::PageBuilt {
            latest_count: 2,
            all_count: 10,
        });
        reporter.report(ProgressEvent::PageWritten {
            path: "out/index.html".to_string(),
            changed: true,
            content_hash: "sha256:abc123".to_string(),
        });
        reporter.report(ProgressEvent::GenerationFailed {
            error: "HTTP error 500".to_string(),
        });
        reporter.report(ProgressEvent::WaitingForRegeneration { seconds: 28_800 });
    }
}

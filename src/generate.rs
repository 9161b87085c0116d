// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;
use std::time::Duration;

use crate::api::{EpisodesQuery, episodes_url, fetch_episodes_from};
use crate::episode::project_all;
use crate::error::GenerateError;
use crate::http::HttpClient;
use crate::page::{DEFAULT_REVALIDATE, HomePage, WriteSummary, write_page};
use crate::progress::{ProgressEvent, SharedProgressReporter};

/// Base URL of the episodes API when none is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Options for generating the home page
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Base URL of the episodes API
    pub api_url: String,
    /// Query sent to the episodes collection
    pub query: EpisodesQuery,
    /// Interval after which the page is regenerated
    pub revalidate: Duration,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            query: EpisodesQuery::default(),
            revalidate: DEFAULT_REVALIDATE,
        }
    }
}

/// Counters for a watch session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchSummary {
    pub cycles: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Fetch episodes and build the home page data
///
/// Runs in two stages: an async fetch from the API, then a pure projection
/// of the raw episodes. Any malformed episode fails the whole page.
pub async fn generate_home_page<C: HttpClient + ?Sized>(
    client: &C,
    options: &GenerateOptions,
    reporter: &SharedProgressReporter,
) -> Result<HomePage, GenerateError> {
    let url = episodes_url(&options.api_url, &options.query)?;
    reporter.report(ProgressEvent::FetchingEpisodes {
        url: url.to_string(),
    });

    let raws = fetch_episodes_from(client, &url, options.query.limit).await?;
    reporter.report(ProgressEvent::EpisodesFetched { count: raws.len() });

    let episodes = project_all(&raws)?;
    let page = HomePage::from_episodes(episodes, options.revalidate);

    reporter.report(ProgressEvent::PageBuilt {
        latest_count: page.latest_episodes.len(),
        all_count: page.all_episodes.len(),
    });

    Ok(page)
}

/// Run one full generation cycle and write the result to `output_dir`
///
/// Nothing is written unless fetching and projection both succeed, so a
/// failed cycle keeps the previously generated page.
pub async fn regenerate<C: HttpClient + ?Sized>(
    client: &C,
    options: &GenerateOptions,
    output_dir: &Path,
    reporter: &SharedProgressReporter,
) -> Result<WriteSummary, GenerateError> {
    let page = generate_home_page(client, options, reporter).await?;
    let summary = write_page(output_dir, &page)?;

    reporter.report(ProgressEvent::PageWritten {
        path: summary.page_path.display().to_string(),
        changed: summary.changed(),
        content_hash: summary.content_hash.clone(),
    });

    Ok(summary)
}

/// Regenerate the page every `options.revalidate`
///
/// Failed cycles are reported and skipped. Runs `max_cycles` cycles, or
/// forever when `None`.
pub async fn watch<C: HttpClient + ?Sized>(
    client: &C,
    options: &GenerateOptions,
    output_dir: &Path,
    reporter: &SharedProgressReporter,
    max_cycles: Option<usize>,
) -> WatchSummary {
    let mut summary = WatchSummary::default();

    loop {
        summary.cycles += 1;

        match regenerate(client, options, output_dir, reporter).await {
            Ok(_) => summary.succeeded += 1,
            Err(e) => {
                reporter.report(ProgressEvent::GenerationFailed {
                    error: e.to_string(),
                });
                summary.failed += 1;
            }
        }

        if max_cycles.is_some_and(|max| summary.cycles >= max) {
            return summary;
        }

        reporter.report(ProgressEvent::WaitingForRegeneration {
            seconds: options.revalidate.as_secs(),
        });
        tokio::time::sleep(options.revalidate).await;
    }
}

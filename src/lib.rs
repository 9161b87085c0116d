pub mod api;
pub mod episode;
pub mod error;
pub mod generate;
pub mod http;
pub mod page;
pub mod progress;

// Re-export main types for convenience
pub use api::{
    EpisodesQuery, RawEpisode, RawFile, SortOrder, fetch_episodes, fetch_episodes_from,
};
pub use episode::{
    DisplayEpisode, format_duration, format_published_date, partition, project,
};
pub use error::{FetchError, FormatError, GenerateError, OutputError};
pub use generate::{
    DEFAULT_API_URL, GenerateOptions, WatchSummary, generate_home_page, regenerate, watch,
};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use page::{HomePage, WriteSummary, render_home_page, write_page};
pub use progress::{NoopReporter, ProgressEvent, ProgressReporter, SharedProgressReporter};

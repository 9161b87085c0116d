mod format;
mod partition;
mod project;

pub use format::{
    format_duration, format_published_date, format_short_date, parse_duration,
    parse_published_date,
};
pub use partition::{LATEST_EPISODE_COUNT, partition, partition_at};
pub use project::{DisplayEpisode, project, project_all};

mod fetch;
mod raw;

pub use fetch::{
    DEFAULT_EPISODE_LIMIT, EpisodesQuery, SortOrder, episodes_url, fetch_episodes,
    fetch_episodes_from,
};
pub use raw::{RawEpisode, RawFile};

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::time::Duration;

use serde::Serialize;

use crate::episode::{DisplayEpisode, partition};

/// How long a generated page stays fresh before it is rebuilt
pub const DEFAULT_REVALIDATE: Duration = Duration::from_secs(60 * 60 * 8);

/// Everything the home page template needs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub latest_episodes: Vec<DisplayEpisode>,
    pub all_episodes: Vec<DisplayEpisode>,
    /// Regeneration interval in seconds
    pub revalidate: u64,
}

impl HomePage {
    /// Build the page from projected episodes, newest first
    pub fn from_episodes(episodes: Vec<DisplayEpisode>, revalidate: Duration) -> Self {
        let (latest_episodes, all_episodes) = partition(episodes);

        Self {
            latest_episodes,
            all_episodes,
            revalidate: revalidate.as_secs(),
        }
    }

    /// Total number of episodes on the page
    pub fn episode_count(&self) -> usize {
        self.latest_episodes.len() + self.all_episodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_display(id: &str) -> DisplayEpisode {
        DisplayEpisode {
            id: id.to_string(),
            title: format!("Episode {id}"),
            thumbnail: format!("https://example.com/{id}.jpg"),
            members: "Host".to_string(),
            published_at: "10 mai 21".to_string(),
            duration: 60.0,
            duration_as_string: "00:01:00".to_string(),
            url: format!("https://example.com/{id}.mp3"),
        }
    }

    #[test]
    fn from_episodes_splits_latest_two() {
        let episodes = ["e", "d", "c", "b", "a"].map(make_display).to_vec();
        let page = HomePage::from_episodes(episodes, DEFAULT_REVALIDATE);

        let latest: Vec<_> = page.latest_episodes.iter().map(|e| e.id.as_str()).collect();
        let all: Vec<_> = page.all_episodes.iter().map(|e| e.id.as_str()).collect();

        assert_eq!(latest, ["e", "d"]);
        assert_eq!(all, ["c", "b", "a"]);
        assert_eq!(page.episode_count(), 5);
    }

    #[test]
    fn from_episodes_with_single_episode() {
        let page = HomePage::from_episodes(vec![make_display("only")], DEFAULT_REVALIDATE);

        assert_eq!(page.latest_episodes.len(), 1);
        assert!(page.all_episodes.is_empty());
    }

    #[test]
    fn revalidate_defaults_to_eight_hours() {
        let page = HomePage::from_episodes(vec![], DEFAULT_REVALIDATE);
        assert_eq!(page.revalidate, 28_800);
    }

    #[test]
    fn serializes_as_page_props() {
        let page = HomePage::from_episodes(
            vec![make_display("a"), make_display("b"), make_display("c")],
            DEFAULT_REVALIDATE,
        );
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["latestEpisodes"].as_array().unwrap().len(), 2);
        assert_eq!(json["allEpisodes"].as_array().unwrap().len(), 1);
        assert_eq!(json["allEpisodes"][0]["id"], "c");
        assert_eq!(json["revalidate"], 28_800);
    }
}

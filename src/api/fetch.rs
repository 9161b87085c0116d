// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use url::Url;

use crate::error::FetchError;
use crate::http::HttpClient;

use super::raw::RawEpisode;

/// Number of episodes requested from the API per generation cycle
pub const DEFAULT_EPISODE_LIMIT: usize = 12;

/// Path of the episodes collection, relative to the API base URL
const EPISODES_PATH: &str = "episodes";

/// Sort direction understood by the episodes API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Query parameters sent with the episodes request
#[derive(Debug, Clone)]
pub struct EpisodesQuery {
    /// Maximum number of episodes to return (`_limit`)
    pub limit: usize,
    /// Field to sort by (`_sort`)
    pub sort: String,
    /// Sort direction (`_order`)
    pub order: SortOrder,
}

impl Default for EpisodesQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_EPISODE_LIMIT,
            sort: "published_at".to_string(),
            order: SortOrder::Desc,
        }
    }
}

/// Build the episodes collection URL for an API base URL
pub fn episodes_url(api_url: &str, query: &EpisodesQuery) -> Result<Url, FetchError> {
    let mut base = Url::parse(api_url)?;

    // Without a trailing slash `join` would replace the last path segment
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    let mut url = base.join(EPISODES_PATH)?;
    url.query_pairs_mut()
        .append_pair("_limit", &query.limit.to_string())
        .append_pair("_sort", &query.sort)
        .append_pair("_order", query.order.as_str());

    Ok(url)
}

/// Fetch the newest episodes from the API
///
/// Builds the episodes URL from `api_url` and `query`, then fetches it.
pub async fn fetch_episodes<C: HttpClient + ?Sized>(
    client: &C,
    api_url: &str,
    query: &EpisodesQuery,
) -> Result<Vec<RawEpisode>, FetchError> {
    let url = episodes_url(api_url, query)?;
    fetch_episodes_from(client, &url, query.limit).await
}

/// Fetch episodes from an already built collection URL
///
/// Performs a single GET request. The API is trusted to sort the collection,
/// but never more than `limit` episodes are returned.
pub async fn fetch_episodes_from<C: HttpClient + ?Sized>(
    client: &C,
    url: &Url,
    limit: usize,
) -> Result<Vec<RawEpisode>, FetchError> {
    let response = client
        .get(url.as_str())
        .await
        .map_err(|e| FetchError::RequestFailed {
            url: url.to_string(),
            source: e,
        })?;

    if response.status >= 400 {
        return Err(FetchError::HttpStatus {
            url: url.to_string(),
            status: response.status,
        });
    }

    let mut episodes: Vec<RawEpisode> =
        serde_json::from_slice(&response.body).map_err(|e| FetchError::DecodeFailed {
            url: url.to_string(),
            source: e,
        })?;
    episodes.truncate(limit);

    Ok(episodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use crate::http::HttpResponse;
    use async_trait::async_trait;
    use bytes::Bytes;

    struct MockHttpClient {
        body: String,
        status: u16,
        requested: Mutex<Vec<String>>,
    }

    impl MockHttpClient {
        fn new(body: &str, status: u16) -> Self {
            Self {
                body: body.to_string(),
                status,
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HttpClient for MockHttpClient {
        async fn get(&self, url: &str) -> Result<HttpResponse, reqwest::Error> {
            self.requested.lock().unwrap().push(url.to_string());
            Ok(HttpResponse {
                status: self.status,
                body: Bytes::from(self.body.clone()),
            })
        }
    }

    fn episode_json(id: &str) -> String {
        format!(
            r#"{{
                "id": "{id}",
                "title": "Episode {id}",
                "members": "Host",
                "published_at": "2021-05-10T00:00:00.000Z",
                "thumbnail": "https://example.com/{id}.jpg",
                "description": "",
                "file": {{ "url": "https://example.com/{id}.mp3", "duration": "60" }}
            }}"#
        )
    }

    #[test]
    fn episodes_url_contains_query_parameters() {
        let url = episodes_url("http://localhost:3333", &EpisodesQuery::default()).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3333/episodes?_limit=12&_sort=published_at&_order=desc"
        );
    }

    #[test]
    fn episodes_url_keeps_base_path() {
        let query = EpisodesQuery::default();

        let without_slash = episodes_url("https://example.com/api", &query).unwrap();
        let with_slash = episodes_url("https://example.com/api/", &query).unwrap();

        assert_eq!(without_slash.path(), "/api/episodes");
        assert_eq!(with_slash.path(), "/api/episodes");
    }

    #[test]
    fn episodes_url_rejects_invalid_base() {
        let result = episodes_url("not a url", &EpisodesQuery::default());
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn sort_order_renders_lowercase() {
        assert_eq!(SortOrder::Asc.as_str(), "asc");
        assert_eq!(SortOrder::Desc.as_str(), "desc");
    }

    #[tokio::test]
    async fn fetch_decodes_episodes_in_order() {
        let body = format!("[{},{}]", episode_json("second"), episode_json("first"));
        let client = MockHttpClient::new(&body, 200);

        let episodes = fetch_episodes(&client, "http://localhost:3333", &EpisodesQuery::default())
            .await
            .unwrap();

        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[0].id, "second");
        assert_eq!(episodes[1].id, "first");

        let requested = client.requested.lock().unwrap();
        assert_eq!(requested.len(), 1);
        assert!(requested[0].contains("_limit=12"));
    }

    #[tokio::test]
    async fn fetch_never_exceeds_limit() {
        let body = format!(
            "[{},{},{}]",
            episode_json("a"),
            episode_json("b"),
            episode_json("c")
        );
        let client = MockHttpClient::new(&body, 200);
        let query = EpisodesQuery {
            limit: 2,
            ..Default::default()
        };

        let episodes = fetch_episodes(&client, "http://localhost:3333", &query)
            .await
            .unwrap();

        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[1].id, "b");
    }

    #[tokio::test]
    async fn fetch_fails_on_http_error() {
        let client = MockHttpClient::new("Internal Server Error", 500);

        let result =
            fetch_episodes(&client, "http://localhost:3333", &EpisodesQuery::default()).await;

        match result.unwrap_err() {
            FetchError::HttpStatus { status, .. } => assert_eq!(status, 500),
            other => panic!("Expected HttpStatus error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_fails_on_malformed_body() {
        let client = MockHttpClient::new(r#"{"episodes": []}"#, 200);

        let result =
            fetch_episodes(&client, "http://localhost:3333", &EpisodesQuery::default()).await;

        assert!(matches!(result, Err(FetchError::DecodeFailed { .. })));
    }

    #[tokio::test]
    async fn fetch_from_requests_exact_url() {
        let client = MockHttpClient::new(&format!("[{}]", episode_json("a")), 200);
        let url = Url::parse("https://example.com/api/episodes?_limit=5").unwrap();

        let episodes = fetch_episodes_from(&client, &url, 5).await.unwrap();

        assert_eq!(episodes.len(), 1);
        let requested = client.requested.lock().unwrap();
        assert_eq!(*requested, ["https://example.com/api/episodes?_limit=5"]);
    }

    #[tokio::test]
    async fn fetch_accepts_empty_collection() {
        let client = MockHttpClient::new("[]", 200);

        let episodes = fetch_episodes(&client, "http://localhost:3333", &EpisodesQuery::default())
            .await
            .unwrap();

        assert!(episodes.is_empty());
    }
}

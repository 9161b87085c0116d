// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Deserializer};

/// An episode exactly as the episodes API returns it
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawEpisode {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    pub members: String,
    pub published_at: String,
    pub file: RawFile,
}

/// The audio file attached to a raw episode
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawFile {
    /// Duration in seconds, kept as text until projection validates it
    #[serde(deserialize_with = "duration_as_text")]
    pub duration: String,
    pub url: String,
}

/// Accept the duration either as a numeric string or as a bare JSON number
fn duration_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Duration {
        Number(serde_json::Number),
        Text(String),
    }

    Ok(match Duration::deserialize(deserializer)? {
        Duration::Number(n) => n.to_string(),
        Duration::Text(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_EPISODE: &str = r#"{
        "id": "a-importancia-da-contribuicao-em-open-source",
        "title": "Faladev #30 | A importância da contribuição em Open Source",
        "members": "Diego Fernandes, João Pedro, Diego Haz e Bruno Lemos",
        "published_at": "2021-01-22 13:00:00",
        "thumbnail": "https://example.com/opensource.jpg",
        "description": "<p>Nesse episódio do Faladev...</p>",
        "file": {
            "url": "https://example.com/opensource.m4a",
            "type": "audio/x-m4a",
            "duration": "3981"
        }
    }"#;

    #[test]
    fn decodes_api_episode() {
        let episode: RawEpisode = serde_json::from_str(SAMPLE_EPISODE).unwrap();

        assert_eq!(episode.id, "a-importancia-da-contribuicao-em-open-source");
        assert_eq!(
            episode.members,
            "Diego Fernandes, João Pedro, Diego Haz e Bruno Lemos"
        );
        assert_eq!(episode.published_at, "2021-01-22 13:00:00");
        assert_eq!(episode.file.duration, "3981");
        assert_eq!(episode.file.url, "https://example.com/opensource.m4a");
    }

    #[test]
    fn accepts_numeric_duration() {
        let json = SAMPLE_EPISODE.replace(r#""duration": "3981""#, r#""duration": 3981"#);
        let episode: RawEpisode = serde_json::from_str(&json).unwrap();

        assert_eq!(episode.file.duration, "3981");
    }

    #[test]
    fn description_is_optional() {
        let json = r#"{
            "id": "ep",
            "title": "Ep",
            "members": "Someone",
            "published_at": "2021-05-10T00:00:00.000Z",
            "thumbnail": "https://example.com/ep.jpg",
            "file": { "url": "https://example.com/ep.mp3", "duration": "60" }
        }"#;
        let episode: RawEpisode = serde_json::from_str(json).unwrap();

        assert!(episode.description.is_empty());
    }

    #[test]
    fn rejects_missing_file() {
        let json = r#"{
            "id": "ep",
            "title": "Ep",
            "members": "Someone",
            "published_at": "2021-05-10T00:00:00.000Z",
            "thumbnail": "https://example.com/ep.jpg"
        }"#;

        assert!(serde_json::from_str::<RawEpisode>(json).is_err());
    }
}

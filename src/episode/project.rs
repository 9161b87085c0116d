// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Serialize, Serializer};

use crate::api::RawEpisode;
use crate::error::FormatError;

use super::format::{format_duration, format_published_date, parse_duration};

/// A render-ready episode with formatted date and duration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEpisode {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub members: String,
    /// Short localized publish date, e.g. `10 mai 21`
    pub published_at: String,
    /// Duration in seconds, exactly as the API's numeric value
    #[serde(serialize_with = "seconds_as_number")]
    pub duration: f64,
    /// Duration as `HH:MM:SS`, derived from `duration`
    pub duration_as_string: String,
    /// Playback URL of the audio file
    pub url: String,
}

impl DisplayEpisode {
    /// Project a raw API episode into its display form
    pub fn from_raw(raw: &RawEpisode) -> Result<Self, FormatError> {
        let published_at =
            format_published_date(&raw.published_at).map_err(|reason| FormatError::InvalidDate {
                episode_id: raw.id.clone(),
                value: raw.published_at.clone(),
                reason,
            })?;

        let duration =
            parse_duration(&raw.file.duration).ok_or_else(|| FormatError::InvalidDuration {
                episode_id: raw.id.clone(),
                value: raw.file.duration.clone(),
            })?;

        Ok(Self {
            id: raw.id.clone(),
            title: raw.title.clone(),
            thumbnail: raw.thumbnail.clone(),
            members: raw.members.clone(),
            published_at,
            duration,
            duration_as_string: format_duration(duration),
            url: raw.file.url.clone(),
        })
    }
}

/// Write whole seconds as JSON integers so `5400` stays `5400`, not `5400.0`
fn seconds_as_number<S>(seconds: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if seconds.fract() == 0.0 && *seconds >= 0.0 && *seconds <= u64::MAX as f64 {
        serializer.serialize_u64(*seconds as u64)
    } else {
        serializer.serialize_f64(*seconds)
    }
}

/// Project a single raw episode
pub fn project(raw: &RawEpisode) -> Result<DisplayEpisode, FormatError> {
    DisplayEpisode::from_raw(raw)
}

/// Project every raw episode, keeping order
///
/// The first malformed episode aborts the whole projection so a page is
/// never rendered from partially valid data.
pub fn project_all(raws: &[RawEpisode]) -> Result<Vec<DisplayEpisode>, FormatError> {
    raws.iter().map(project).collect()
}

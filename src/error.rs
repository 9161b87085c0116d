// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when fetching episodes from the API
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP request failed for {url}: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to decode episodes from {url}: {source}")]
    DecodeFailed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur when projecting a raw episode into its display form
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Episode '{episode_id}' has an invalid publish date '{value}': {reason}")]
    InvalidDate {
        episode_id: String,
        value: String,
        reason: String,
    },

    #[error("Episode '{episode_id}' has a non-numeric duration '{value}'")]
    InvalidDuration { episode_id: String, value: String },
}

/// Errors that can occur when writing the generated page to disk
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read existing file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move {from} into place at {to}: {source}")]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize page props: {0}")]
    JsonSerializeFailed(#[from] serde_json::Error),
}

/// Top-level errors for a page generation cycle
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

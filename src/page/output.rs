// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::OutputError;

use super::home::HomePage;
use super::render::{render_home_page, render_props};

/// File name of the rendered home page
pub const PAGE_FILENAME: &str = "index.html";

/// File name of the serialized page props
pub const PROPS_FILENAME: &str = "props.json";

/// Whether a file on disk was replaced during a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Written,
    Unchanged,
}

/// Outcome of writing a generated page to the output directory
#[derive(Debug, Clone)]
pub struct WriteSummary {
    pub page_path: PathBuf,
    pub props_path: PathBuf,
    pub page: FileStatus,
    pub props: FileStatus,
    /// Hash of the rendered HTML, as `sha256:<hex>`
    pub content_hash: String,
}

impl WriteSummary {
    /// True if any file was replaced
    pub fn changed(&self) -> bool {
        self.page == FileStatus::Written || self.props == FileStatus::Written
    }
}

/// Compute the content hash used to detect unchanged output
pub fn content_hash(data: &[u8]) -> String {
    format!("sha256:{:x}", Sha256::digest(data))
}

/// Render the page and write `index.html` and `props.json`
///
/// Everything is rendered before the first file is touched. Each file is
/// written to a `.partial` sibling and renamed into place, so readers only
/// ever see the previous or the new version.
pub fn write_page(output_dir: &Path, page: &HomePage) -> Result<WriteSummary, OutputError> {
    let html = render_home_page(page);
    let props = render_props(page)?;

    std::fs::create_dir_all(output_dir).map_err(|e| OutputError::CreateDirectoryFailed {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let page_path = output_dir.join(PAGE_FILENAME);
    let props_path = output_dir.join(PROPS_FILENAME);

    let page_status = write_if_changed(&page_path, html.as_bytes())?;
    let props_status = write_if_changed(&props_path, props.as_bytes())?;

    Ok(WriteSummary {
        page_path,
        props_path,
        page: page_status,
        props: props_status,
        content_hash: content_hash(html.as_bytes()),
    })
}

fn write_if_changed(path: &Path, contents: &[u8]) -> Result<FileStatus, OutputError> {
    match std::fs::read(path) {
        Ok(existing) if content_hash(&existing) == content_hash(contents) => {
            return Ok(FileStatus::Unchanged);
        }
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(OutputError::ReadFailed {
                path: path.to_path_buf(),
                source: e,
            });
        }
    }

    write_atomically(path, contents)?;
    Ok(FileStatus::Written)
}

fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), OutputError> {
    let partial_path = partial_path(path);

    std::fs::write(&partial_path, contents).map_err(|e| OutputError::WriteFailed {
        path: partial_path.clone(),
        source: e,
    })?;

    std::fs::rename(&partial_path, path).map_err(|e| {
        let _ = std::fs::remove_file(&partial_path);
        OutputError::RenameFailed {
            from: partial_path.clone(),
            to: path.to_path_buf(),
            source: e,
        }
    })
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}

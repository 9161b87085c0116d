// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::episode::DisplayEpisode;
use crate::error::OutputError;

use super::home::HomePage;

/// Edge length of the episode cover images, in pixels
const THUMBNAIL_SIZE: u32 = 192;

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Home | Podcastr</title>
</head>
<body>
"#;

const DOCUMENT_TAIL: &str = "</body>\n</html>\n";

/// Render the home page as a standalone HTML document
///
/// The latest episodes are listed with cover, title, members, date and
/// duration. The all-episodes section is emitted as an empty placeholder.
pub fn render_home_page(page: &HomePage) -> String {
    let mut html = String::from(DOCUMENT_HEAD);

    html.push_str("<div class=\"homepage\">\n");
    html.push_str("  <section class=\"latestEpisodes\">\n");
    html.push_str("    <h2>Últimos Episódios</h2>\n");
    html.push_str("    <ul>\n");
    for episode in &page.latest_episodes {
        render_latest_episode(&mut html, episode);
    }
    html.push_str("    </ul>\n");
    html.push_str("  </section>\n");
    html.push_str("  <section class=\"allEpisodes\">\n");
    html.push_str("  </section>\n");
    html.push_str("</div>\n");

    html.push_str(DOCUMENT_TAIL);
    html
}

fn render_latest_episode(html: &mut String, episode: &DisplayEpisode) {
    html.push_str(&format!("      <li id=\"{}\">\n", attr(&episode.id)));
    html.push_str(&format!(
        "        <img width=\"{size}\" height=\"{size}\" src=\"{}\" alt=\"{}\" style=\"object-fit: cover\">\n",
        attr(&episode.thumbnail),
        attr(&episode.title),
        size = THUMBNAIL_SIZE,
    ));
    html.push_str("        <div class=\"episodeDetails\">\n");
    html.push_str(&format!(
        "          <a href=\"{}\">{}</a>\n",
        attr(&episode.url),
        text(&episode.title)
    ));
    html.push_str(&format!("          <p>{}</p>\n", text(&episode.members)));
    html.push_str(&format!(
        "          <span>{}</span>\n",
        text(&episode.published_at)
    ));
    html.push_str(&format!(
        "          <span>{}</span>\n",
        text(&episode.duration_as_string)
    ));
    html.push_str("        </div>\n");
    html.push_str(&format!(
        "        <a class=\"play\" href=\"{}\"><img src=\"play-green.svg\" alt=\"Tocar episódio\"></a>\n",
        attr(&episode.url)
    ));
    html.push_str("      </li>\n");
}

/// Render the page props as pretty-printed JSON
pub fn render_props(page: &HomePage) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(page)?)
}

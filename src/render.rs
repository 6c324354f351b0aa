//! Pure text rendering for search results and recommendations. Kept free of
//! I/O so the CLI (or any other frontend) can print, pipe, or test it.

use crate::clients::entities::{RecommendedTrack, Track};
use crate::clients::errors::Result;

/// Numbered pick list for one slot's search results, 1-based.
pub fn numbered_results(tracks: &[Track]) -> String {
    tracks
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{:>2}. {} – {}", i + 1, t.title, t.artist.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Aligned title / artist / popularity summary table.
pub fn summary_table(tracks: &[RecommendedTrack]) -> String {
    let title_w = tracks
        .iter()
        .map(|t| t.name.len())
        .chain(["title".len()])
        .max()
        .unwrap_or(0);
    let artist_w = tracks
        .iter()
        .map(|t| t.artist.name.len())
        .chain(["artist".len()])
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(tracks.len() + 2);
    lines.push(format!(
        "{:<title_w$}  {:<artist_w$}  popularity",
        "title", "artist"
    ));
    lines.push("-".repeat(title_w + artist_w + 14));
    for t in tracks {
        lines.push(format!(
            "{:<title_w$}  {:<artist_w$}  {:>10}",
            t.name, t.artist.name, t.popularity
        ));
    }
    lines.join("\n")
}

/// One markdown link per track, pointing at its external catalog page.
pub fn link_lines(tracks: &[RecommendedTrack]) -> String {
    tracks
        .iter()
        .map(|t| format!("🎵 [{} – {}]({})", t.name, t.artist.name, t.external_url))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON for machine consumption.
pub fn to_json(tracks: &[RecommendedTrack]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tracks)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::entities::Artist;

    fn sample() -> Vec<RecommendedTrack> {
        vec![
            RecommendedTrack {
                name: "Nightcall".to_string(),
                artist: Artist {
                    name: "Kavinsky".to_string(),
                },
                popularity: 78,
                preview_url: Some("https://p.scdn.co/mp3-preview/abc".to_string()),
                external_url: "https://open.spotify.com/track/kavinsky1".to_string(),
            },
            RecommendedTrack {
                name: "Go".to_string(),
                artist: Artist {
                    name: "Moby".to_string(),
                },
                popularity: 4,
                preview_url: None,
                external_url: "https://open.spotify.com/track/moby1".to_string(),
            },
        ]
    }

    #[test]
    fn numbered_results_are_one_based() {
        let tracks = vec![
            Track {
                id: "t1".to_string(),
                title: "One More Time".to_string(),
                artist: Artist {
                    name: "Daft Punk".to_string(),
                },
            },
            Track {
                id: "t2".to_string(),
                title: "Around the World".to_string(),
                artist: Artist {
                    name: "Daft Punk".to_string(),
                },
            },
        ];
        let listing = numbered_results(&tracks);
        assert_eq!(
            listing,
            " 1. One More Time – Daft Punk\n 2. Around the World – Daft Punk"
        );
    }

    #[test]
    fn table_has_header_and_one_row_per_track() {
        let table = summary_table(&sample());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("title"));
        assert!(lines[0].contains("artist"));
        assert!(lines[0].contains("popularity"));
        assert!(lines[2].contains("Nightcall"));
        assert!(lines[2].contains("78"));
        assert!(lines[3].contains("Moby"));
    }

    #[test]
    fn link_lines_are_markdown_links() {
        let links = link_lines(&sample());
        assert_eq!(
            links,
            "🎵 [Nightcall – Kavinsky](https://open.spotify.com/track/kavinsky1)\n\
             🎵 [Go – Moby](https://open.spotify.com/track/moby1)"
        );
    }

    #[test]
    fn json_output_round_trips_fields() {
        let json = to_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "Nightcall");
        assert_eq!(value[0]["popularity"], 78);
        assert_eq!(value[1]["preview_url"], serde_json::Value::Null);
    }
}

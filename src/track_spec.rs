use serde::Deserialize;

/// One named audio track the user wants extracted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackSpec {
    /// Position of the track; the source stream is `ordinal + 1`.
    #[serde(rename = "rownum")]
    pub ordinal: i64,
    /// Base name of the extracted audio file.
    #[serde(rename = "typeName")]
    pub label: String,
}

impl TrackSpec {
    /// Wraps on overflow; ffmpeg rejects the resulting selector.
    pub fn stream_index(&self) -> i64 {
        self.ordinal.wrapping_add(1)
    }
}

/// Parse a line like `[{'rownum': 1, 'typeName': 'english'}]`.
///
/// Single quotes are accepted as string delimiters. The result is stably
/// sorted by ordinal; duplicate or out-of-range ordinals are passed through.
pub fn parse_track_specs(text: &str) -> Result<Vec<TrackSpec>, serde_json::Error> {
    let normalized = text.trim().replace('\'', "\"");
    let mut specs: Vec<TrackSpec> = serde_json::from_str(&normalized)?;
    specs.sort_by_key(|spec| spec.ordinal);
    Ok(specs)
}

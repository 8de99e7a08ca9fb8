//! JSON output of extracted channels

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::extractors::Channel;

/// Output file written when no path is given
pub const DEFAULT_OUTPUT: &str = "channels.json";

/// Pretty JSON (2-space indent) with a trailing newline
pub fn channels_to_json(channels: &[Channel]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(channels)?;
    json.push('\n');
    Ok(json)
}

/// Create or truncate `path` and write the channels as a JSON array
pub fn write_channels(path: &Path, channels: &[Channel]) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, channels)?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|e| Error::io(path, e))?;

    info!(path = %path.display(), channels = channels.len(), "wrote channels");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::parse_channels;

    const MINIMAL_PAGE: &str = r#"
    <div class="channels-item">
        <div class="channel_title">My Channel</div>
        <div class="channel-users-count">1000</div>
        <div class="arating">4.5</div>
        <div class="item _3"><span class="js-err">3.2%</span></div>
        <div class="current_price">$50</div>
        <div class="item _2"><span class="js-view">10000</span></div>
    </div>
    "#;

    #[test]
    fn test_end_to_end_json() {
        let channels = parse_channels(MINIMAL_PAGE);
        let json = channels_to_json(&channels).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "title": "My Channel",
                "subscribers": "1000",
                "views": "10000",
                "rating": "4.5",
                "er": "3.2%",
                "full_price": "$50"
            }])
        );

        let decoded: Vec<Channel> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, channels);
    }

    #[test]
    fn test_key_order_and_indent() {
        let json = channels_to_json(&[Channel::default()]).unwrap();
        let expected = "[\n  {\n    \"title\": \"\",\n    \"subscribers\": \"\",\n    \"views\": \"\",\n    \"rating\": \"\",\n    \"er\": \"\",\n    \"full_price\": \"\"\n  }\n]\n";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_empty_list_is_array() {
        assert_eq!(channels_to_json(&[]).unwrap(), "[]\n");
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);
        std::fs::write(&path, "x".repeat(4096)).unwrap();

        let channels = parse_channels(MINIMAL_PAGE);
        write_channels(&path, &channels).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, channels_to_json(&channels).unwrap());
    }

    #[test]
    fn test_write_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");

        write_channels(&first, &parse_channels(MINIMAL_PAGE)).unwrap();
        write_channels(&second, &parse_channels(MINIMAL_PAGE)).unwrap();

        assert_eq!(std::fs::read(first).unwrap(), std::fs::read(second).unwrap());
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join(DEFAULT_OUTPUT);
        let err = write_channels(&path, &[]).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}

// src/output.rs
// =============================================================================
// Turns the collected image records into the JSON document we print and save.
//
// Format: a JSON array, four-space indentation, one object per image:
//   {
//       "imageUrl": "logo.png",
//       "sourceUrl": "https://example.com/",
//       "depth": 0
//   }
// =============================================================================

use anyhow::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

use crate::error::CrawlError;
use crate::scrape::ImageRecord;

pub fn to_json(records: &[ImageRecord]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;

    Ok(String::from_utf8(buf)?)
}

pub async fn write_json(path: &Path, json: &str) -> std::result::Result<(), CrawlError> {
    tokio::fs::write(path, json)
        .await
        .map_err(|source| CrawlError::Persistence {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ImageRecord> {
        vec![
            ImageRecord {
                image_url: Some("a.png".to_string()),
                source_url: "https://example.com/".to_string(),
                depth: 0,
            },
            ImageRecord {
                image_url: Some("https://cdn.example.com/b.jpg".to_string()),
                source_url: "https://example.com/b".to_string(),
                depth: 1,
            },
        ]
    }

    #[test]
    fn test_json_layout() {
        let json = to_json(&sample()[..1]).unwrap();
        let expected = "[\n    {\n        \"imageUrl\": \"a.png\",\n        \"sourceUrl\": \"https://example.com/\",\n        \"depth\": 0\n    }\n]";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_json_layout_without_image_url() {
        let record = ImageRecord {
            image_url: None,
            source_url: "https://example.com/".to_string(),
            depth: 0,
        };
        let json = to_json(&[record]).unwrap();
        let expected = "[\n    {\n        \"sourceUrl\": \"https://example.com/\",\n        \"depth\": 0\n    }\n]";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_json_parses_back_to_records() {
        let records = sample();
        let parsed: Vec<ImageRecord> = serde_json::from_str(&to_json(&records).unwrap()).unwrap();
        assert_eq!(parsed, records);
    }

    #[tokio::test]
    async fn test_write_json_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("images.json");

        let json = to_json(&sample()).unwrap();
        write_json(&path, &json).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), json);
    }

    #[tokio::test]
    async fn test_write_json_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("images.json");

        let err = write_json(&path, "[]").await.unwrap_err();
        match err {
            CrawlError::Persistence { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error {:?}", other),
        }
    }
}

use chrono::{DateTime, NaiveDateTime, Utc};
use clap::Parser;
use serde::{Deserialize, Deserializer};

/// Install the latest git-lfs-synology release into ~/.git-lfs-synology
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {}

/// GitHub release information
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRelease {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Publication time, absent for draft releases
    #[serde(default, deserialize_with = "deserialize_published_at")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assets: Vec<GitHubAsset>,
}

/// GitHub release asset information
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubAsset {
    pub name: String,
    pub browser_download_url: String,
    #[serde(default)]
    pub size: u64,
    /// Content digest in GitHub's "algorithm:hex" form, e.g. "sha256:ab12..."
    #[serde(default)]
    pub digest: Option<String>,
}

impl GitHubRelease {
    /// Human readable label, falling back to the tag when the release is unnamed
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.tag_name,
        }
    }
}

/// Parse an ISO-8601 timestamp. Timestamps without an offset are taken as UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(parsed) => Ok(parsed.with_timezone(&Utc)),
        Err(rfc_err) => value
            .parse::<NaiveDateTime>()
            .map(|naive| naive.and_utc())
            .map_err(|_| rfc_err),
    }
}

fn deserialize_published_at<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|value| {
        parse_timestamp(&value)
            .map_err(|e| serde::de::Error::custom(format!("invalid published_at '{value}': {e}")))
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn parse_releases(json: &str) -> Vec<GitHubRelease> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_github_release_list() {
        let releases = parse_releases(
            r#"[
  {
    "tag_name": "v0.2.0",
    "name": "Release 0.2.0",
    "published_at": "2024-06-15T10:00:00Z",
    "draft": false,
    "assets": [
      {
        "name": "git-lfs-synology.linux-x86_64.zip",
        "browser_download_url": "https://example.com/linux.zip",
        "size": 1024,
        "digest": "sha256:abc123"
      }
    ]
  }
]"#,
        );
        assert_eq!(releases.len(), 1);
        let release = &releases[0];
        assert_eq!(release.tag_name, "v0.2.0");
        assert_eq!(release.display_name(), "Release 0.2.0");
        assert_eq!(
            release.published_at,
            Some(Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap())
        );
        assert_eq!(release.assets[0].name, "git-lfs-synology.linux-x86_64.zip");
        assert_eq!(release.assets[0].size, 1024);
        assert_eq!(release.assets[0].digest.as_deref(), Some("sha256:abc123"));
    }

    #[test]
    fn test_parse_release_with_naive_timestamp() {
        let releases = parse_releases(
            r#"[{"tag_name": "v1", "published_at": "2023-01-01T00:00:00", "assets": []}]"#,
        );
        assert_eq!(
            releases[0].published_at,
            Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_draft_release_without_timestamp() {
        let releases = parse_releases(
            r#"[{"tag_name": "draft", "name": null, "published_at": null, "assets": []}]"#,
        );
        assert!(releases[0].published_at.is_none());
        assert_eq!(releases[0].display_name(), "draft");
    }

    #[test]
    fn test_parse_asset_without_optional_fields() {
        let releases = parse_releases(
            r#"[{"tag_name": "v1", "published_at": "2023-01-01T00:00:00Z",
                 "assets": [{"name": "a.zip", "browser_download_url": "https://x/a.zip"}]}]"#,
        );
        let asset = &releases[0].assets[0];
        assert_eq!(asset.size, 0);
        assert!(asset.digest.is_none());
    }

    #[test]
    fn test_parse_invalid_timestamp_fails() {
        let result: Result<Vec<GitHubRelease>, _> = serde_json::from_str(
            r#"[{"tag_name": "v1", "published_at": "yesterday", "assets": []}]"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_timestamp_with_offset() {
        let parsed = parse_timestamp("2024-06-15T12:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_with_fraction() {
        let parsed = parse_timestamp("2024-06-15T10:00:00.250").unwrap();
        assert_eq!(parsed.timestamp(), 1718445600);
    }
}

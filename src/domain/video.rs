use serde::{de, Deserialize, Deserializer, Serialize};

use super::null_as_default;

/// A video as returned by `GET /api/videos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub video_id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: String,
    /// The backend pre-formats this as `"1,234"`; plain numbers are accepted too.
    #[serde(default, deserialize_with = "string_or_number")]
    pub views: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_date: String,
    #[serde(default)]
    pub url: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!(
            "expected a string or number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_views_as_formatted_string() {
        let video: Video =
            serde_json::from_value(json!({"video_id": "v1", "title": "t", "views": "1,234"}))
                .unwrap();
        assert_eq!(video.views, "1,234");
    }

    #[test]
    fn test_views_as_number() {
        let video: Video =
            serde_json::from_value(json!({"video_id": "v1", "title": "t", "views": 987}))
                .unwrap();
        assert_eq!(video.views, "987");
    }

    #[test]
    fn test_views_rejects_objects() {
        let result: Result<Video, _> =
            serde_json::from_value(json!({"video_id": "v1", "title": "t", "views": {}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_null_text_fields_default() {
        let video: Video = serde_json::from_value(json!({
            "video_id": "v1",
            "title": "t",
            "description": null,
            "duration": null,
            "published_date": null
        }))
        .unwrap();
        assert!(video.description.is_empty());
        assert!(video.duration.is_empty());
        assert!(video.published_date.is_empty());
    }
}

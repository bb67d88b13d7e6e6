use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Custom deserializer for post timestamps.
///
/// Accepts Unix epoch seconds (integer or float), RFC3339 strings and naive
/// `YYYY-MM-DD HH:MM[:SS]` strings read as UTC. `null` reads as absent.
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => {
            let seconds = match n.as_i64() {
                Some(seconds) => seconds,
                None => n
                    .as_f64()
                    .map(|f| f.trunc() as i64)
                    .ok_or_else(|| D::Error::custom("invalid timestamp"))?,
            };
            DateTime::from_timestamp(seconds, 0)
                .map(Some)
                .ok_or_else(|| D::Error::custom("timestamp out of range"))
        }
        Value::String(s) => parse_timestamp_str(&s).map(Some).map_err(D::Error::custom),
        _ => Err(D::Error::custom("timestamp must be a number or string")),
    }
}

fn parse_timestamp_str(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(ts) = s.parse::<DateTime<Utc>>() {
        return Ok(ts);
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("invalid timestamp '{}'", s))
}

/// Deserializes an optional field, treating any value of the wrong shape as absent.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use crate::models::{Post, Tag};

    #[test]
    fn test_timestamp_epoch_seconds() {
        let post: Post = serde_json::from_str(r#"{"timestamp": 1000}"#).unwrap();
        assert_eq!(post.timestamp, DateTime::from_timestamp(1000, 0));
    }

    #[test]
    fn test_timestamp_float_seconds() {
        let post: Post = serde_json::from_str(r#"{"timestamp": 1000.75}"#).unwrap();
        assert_eq!(post.timestamp, DateTime::from_timestamp(1000, 0));
    }

    #[test]
    fn test_timestamp_strings() {
        let rfc: Post = serde_json::from_str(r#"{"timestamp": "2019-03-04T05:06:07Z"}"#).unwrap();
        let naive: Post = serde_json::from_str(r#"{"timestamp": "2019-03-04 05:06:07"}"#).unwrap();
        let minutes: Post = serde_json::from_str(r#"{"timestamp": "2019-03-04 05:06"}"#).unwrap();

        assert_eq!(rfc.timestamp, naive.timestamp);
        assert_eq!(rfc.timestamp.unwrap().timestamp() - 7, minutes.timestamp.unwrap().timestamp());
    }

    #[test]
    fn test_timestamp_missing_or_null_is_absent() {
        let missing: Post = serde_json::from_str(r#"{"title": "x"}"#).unwrap();
        let null: Post = serde_json::from_str(r#"{"timestamp": null}"#).unwrap();
        assert!(missing.timestamp.is_none());
        assert!(null.timestamp.is_none());
    }

    #[test]
    fn test_timestamp_malformed_is_an_error() {
        assert!(serde_json::from_str::<Post>(r#"{"timestamp": "yesterday"}"#).is_err());
        assert!(serde_json::from_str::<Post>(r#"{"timestamp": [1, 2]}"#).is_err());
    }

    #[test]
    fn test_lenient_fields_of_wrong_shape_read_as_absent() {
        let json = r#"{
            "timestamp": 1000,
            "title": 42,
            "data": "not a list",
            "attachments": {"data": []},
            "tags": 0.0
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert!(post.title.is_none());
        assert!(post.data.is_none());
        assert!(post.attachments.is_none());
        assert!(post.tags.is_none());
    }

    #[test]
    fn test_tags_accept_names_and_objects() {
        let post: Post =
            serde_json::from_str(r#"{"timestamp": 1, "tags": ["Ann", {"name": "Bob"}]}"#).unwrap();
        let tags = post.tags.unwrap();
        assert_eq!(
            tags,
            vec![Tag::Name("Ann".to_string()), Tag::Object { name: "Bob".to_string() }]
        );
        assert_eq!(tags[1].name(), "Bob");
    }

    #[test]
    fn test_nested_attachment_fields() {
        let json = r#"{
            "timestamp": 1,
            "attachments": [{"data": [{"external_context": {"url": "https://example.com"}}]}]
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        let item = post.first_attachment().unwrap();
        let context = item.external_context.as_ref().unwrap();
        assert_eq!(context.url.as_deref(), Some("https://example.com"));
        assert!(item.media.is_none());
    }
}

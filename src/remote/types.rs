use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A lodging listing owned by the signed-in host.
///
/// The console never edits a stay's fields. It only lists stays and deletes
/// whole records.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Stay {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub guest_number: u32,
    #[serde(default)]
    pub images: Vec<ImageRef>,
}

/// Reference to one stay image. Backends send either a bare string or an
/// object with a `url` field; both land here as the reference text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "RawImageRef", into = "String")]
pub struct ImageRef(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawImageRef {
    Bare(String),
    Object { url: String },
}

impl From<RawImageRef> for ImageRef {
    fn from(raw: RawImageRef) -> Self {
        match raw {
            RawImageRef::Bare(url) | RawImageRef::Object { url } => ImageRef(url),
        }
    }
}

impl From<ImageRef> for String {
    fn from(image: ImageRef) -> Self {
        image.0
    }
}

impl From<&str> for ImageRef {
    fn from(url: &str) -> Self {
        ImageRef(url.to_string())
    }
}

impl ImageRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment, used as the slide caption.
    pub fn file_name(&self) -> &str {
        self.0
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(&self.0)
    }
}

/// A guest's booking against one stay.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub guest: Guest,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    pub username: String,
}

/// Identifiers are opaque to the console. Numeric ids are kept as text.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stay_accepts_bare_and_object_images() {
        let json = r#"{
            "id": 7,
            "name": "Loft",
            "description": "Sunny",
            "address": "1 Main St",
            "guest_number": 2,
            "images": ["a.jpg", {"url": "https://cdn.example.com/b.jpg"}]
        }"#;
        let stay: Stay = serde_json::from_str(json).unwrap();
        assert_eq!(stay.id, "7");
        assert_eq!(stay.images.len(), 2);
        assert_eq!(stay.images[0].as_str(), "a.jpg");
        assert_eq!(stay.images[1].file_name(), "b.jpg");
    }

    #[test]
    fn stay_missing_optional_fields_default() {
        let stay: Stay = serde_json::from_str(r#"{"id": "s1", "name": "Cabin"}"#).unwrap();
        assert!(stay.images.is_empty());
        assert_eq!(stay.guest_number, 0);
        assert_eq!(stay.description, "");
    }

    #[test]
    fn reservation_parses_iso_dates() {
        let json = r#"{
            "id": 1,
            "guest": {"username": "ana"},
            "checkin_date": "2024-05-01",
            "checkout_date": "2024-05-04"
        }"#;
        let reservation: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(reservation.guest.username, "ana");
        assert_eq!(
            reservation.checkout_date,
            NaiveDate::from_ymd_opt(2024, 5, 4).unwrap()
        );
    }

    #[test]
    fn image_ref_serializes_as_plain_string() {
        let image = ImageRef::from("a.jpg");
        assert_eq!(serde_json::to_string(&image).unwrap(), "\"a.jpg\"");
    }
}

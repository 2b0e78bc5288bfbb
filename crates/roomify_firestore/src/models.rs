//! Document models for the Firestore REST v1 API
//!
//! Firestore documents carry their payload as a map of typed values. Only
//! the value kinds a booking actually uses are modelled here; anything else
//! in a document is rejected as malformed rather than silently dropped.

use crate::client::FirestoreError;
use roomify_common::models::{Booking, NewBooking};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A Firestore field value. Externally tagged, matching the REST wire union
/// (`{"stringValue": "..."}` / `{"timestampValue": "..."}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    StringValue(String),
    TimestampValue(String),
}

/// A Firestore document as sent and received over REST.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Full resource name; absent on documents being created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub fields: BTreeMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

impl Document {
    /// Builds the document payload for a new booking. Field names match the
    /// booking document shape shared by every client of the namespace.
    pub fn from_new_booking(booking: &NewBooking, created_at: &str) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(
            "userName".to_string(),
            Value::StringValue(booking.user_name.clone()),
        );
        fields.insert("date".to_string(), Value::StringValue(booking.date.clone()));
        fields.insert("time".to_string(), Value::StringValue(booking.time.clone()));
        fields.insert("room".to_string(), Value::StringValue(booking.room.clone()));
        fields.insert(
            "createdAt".to_string(),
            Value::StringValue(created_at.to_string()),
        );

        Document {
            name: None,
            fields,
            create_time: None,
            update_time: None,
        }
    }

    /// Converts a stored document into a Booking. The document id is the
    /// last segment of the resource name.
    pub fn into_booking(self) -> Result<Booking, FirestoreError> {
        let id = self
            .name
            .as_deref()
            .and_then(|name| name.rsplit('/').next())
            .map(str::to_string)
            .ok_or_else(|| {
                FirestoreError::MalformedDocument("document has no resource name".to_string())
            })?;

        let created_at = match self.fields.get("createdAt") {
            Some(Value::StringValue(value)) | Some(Value::TimestampValue(value)) => value.clone(),
            // Old documents written before the client stamped createdAt
            // fall back to the server-side creation time.
            None => self.create_time.clone().ok_or_else(|| {
                FirestoreError::MalformedDocument("document has no creation time".to_string())
            })?,
        };

        Ok(Booking {
            id,
            user_name: self.string_field("userName")?,
            date: self.string_field("date")?,
            time: self.string_field("time")?,
            room: self.string_field("room")?,
            created_at,
        })
    }

    fn string_field(&self, key: &str) -> Result<String, FirestoreError> {
        match self.fields.get(key) {
            Some(Value::StringValue(value)) => Ok(value.clone()),
            _ => Err(FirestoreError::MalformedDocument(format!(
                "missing string field '{}'",
                key
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_document() -> Document {
        let new_booking = NewBooking {
            user_name: "Ana".to_string(),
            date: "2024-06-01".to_string(),
            time: "09:00".to_string(),
            room: "Sala A".to_string(),
        };
        let mut document = Document::from_new_booking(&new_booking, "2024-05-30T12:00:00+00:00");
        document.name = Some(
            "projects/p/databases/(default)/documents/artifacts/ns/public/data/roomify_bookings/abc123"
                .to_string(),
        );
        document
    }

    #[test]
    fn round_trips_a_booking_document() {
        let booking = stored_document().into_booking().unwrap();

        assert_eq!(booking.id, "abc123");
        assert_eq!(booking.user_name, "Ana");
        assert_eq!(booking.date, "2024-06-01");
        assert_eq!(booking.time, "09:00");
        assert_eq!(booking.room, "Sala A");
        assert_eq!(booking.created_at, "2024-05-30T12:00:00+00:00");
    }

    #[test]
    fn serializes_values_with_the_wire_tags() {
        let document = Document::from_new_booking(
            &NewBooking {
                user_name: "Ana".to_string(),
                date: "2024-06-01".to_string(),
                time: "09:00".to_string(),
                room: "Sala A".to_string(),
            },
            "2024-05-30T12:00:00+00:00",
        );

        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(json["fields"]["userName"]["stringValue"], "Ana");
        assert_eq!(json["fields"]["createdAt"]["stringValue"], "2024-05-30T12:00:00+00:00");
        assert!(json.get("name").is_none(), "unset name must not serialize");
    }

    #[test]
    fn rejects_documents_missing_required_fields() {
        let mut document = stored_document();
        document.fields.remove("room");

        let err = document.into_booking().unwrap_err();
        assert!(err.to_string().contains("room"));
    }

    #[test]
    fn falls_back_to_server_create_time() {
        let mut document = stored_document();
        document.fields.remove("createdAt");
        document.create_time = Some("2024-05-30T12:34:56Z".to_string());

        let booking = document.into_booking().unwrap();
        assert_eq!(booking.created_at, "2024-05-30T12:34:56Z");
    }
}

//! BookingStore implementation over the Firestore client.

use crate::client::{FirestoreClient, FirestoreError};
use crate::models::Document;
use chrono::Utc;
use roomify_common::models::{Booking, NewBooking};
use roomify_common::services::{BookingStore, BoxFuture, BoxedError};
use roomify_config::FirestoreConfig;

fn boxed(err: FirestoreError) -> BoxedError {
    BoxedError(Box::new(err))
}

/// The Firestore-backed booking store.
pub struct FirestoreBookingStore {
    client: FirestoreClient,
}

impl FirestoreBookingStore {
    pub fn new(client: FirestoreClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: FirestoreConfig) -> Self {
        Self::new(FirestoreClient::new(config))
    }
}

impl BookingStore for FirestoreBookingStore {
    type Error = BoxedError;

    fn list_bookings(&self, namespace: &str) -> BoxFuture<'_, Vec<Booking>, Self::Error> {
        let namespace = namespace.to_owned();
        Box::pin(async move {
            let documents = self
                .client
                .list_documents(&namespace)
                .await
                .map_err(boxed)?;
            documents
                .into_iter()
                .map(|document| document.into_booking().map_err(boxed))
                .collect()
        })
    }

    fn find_booking(
        &self,
        namespace: &str,
        date: &str,
        time: &str,
        room: &str,
    ) -> BoxFuture<'_, Option<Booking>, Self::Error> {
        let namespace = namespace.to_owned();
        let (date, time, room) = (date.to_owned(), time.to_owned(), room.to_owned());
        Box::pin(async move {
            let documents = self
                .client
                .query_documents(&namespace, &date, &time, &room)
                .await
                .map_err(boxed)?;
            documents
                .into_iter()
                .next()
                .map(|document| document.into_booking().map_err(boxed))
                .transpose()
        })
    }

    fn create_booking(
        &self,
        namespace: &str,
        booking: NewBooking,
    ) -> BoxFuture<'_, Booking, Self::Error> {
        let namespace = namespace.to_owned();
        Box::pin(async move {
            let created_at = Utc::now().to_rfc3339();
            let document = Document::from_new_booking(&booking, &created_at);
            let created = self
                .client
                .create_document(&namespace, &document)
                .await
                .map_err(boxed)?;
            created.into_booking().map_err(boxed)
        })
    }
}

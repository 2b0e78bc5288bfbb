// File: crates/roomify_booking/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::{
    AvailabilityQuery, AvailabilityResponse, BookingsResponse, SlotCatalogResponse,
};
use crate::logic::{BookSlotRequest, BookingResponse, SlotStatus};
use roomify_common::models::Booking;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::get_slots_handler,
        crate::handlers::get_availability_handler,
        crate::handlers::book_slot_handler,
        crate::handlers::list_bookings_handler
    ),
    components(
        schemas(
            SlotCatalogResponse,
            AvailabilityQuery,
            AvailabilityResponse,
            SlotStatus,
            BookSlotRequest,
            BookingResponse,
            BookingsResponse,
            Booking
        )
    ),
    tags(
        (name = "Booking", description = "Room booking API")
    ),
    servers(
        (url = "/api", description = "Booking API server")
    )
)]
pub struct BookingApiDoc;

// --- File: crates/roomify_booking/src/catalog.rs ---
//! The fixed grid of bookable slots and rooms.

/// First bookable hour of the working day.
pub const DAY_START_HOUR: u32 = 8;
/// Last bookable hour; the `18:00` slot itself is included, `18:30` is not.
pub const DAY_END_HOUR: u32 = 18;
/// Slot granularity in minutes.
pub const SLOT_STEP_MINUTES: u32 = 30;

/// The fixed set of bookable rooms.
pub const ROOMS: [&str; 2] = ["Sala de Reunião 2º andar", "Sala de Reunião 8º andar"];

/// Produces the ordered list of bookable `HH:MM` labels for a working day:
/// `08:00` through `18:00` in 30-minute steps, 21 slots in total.
pub fn generate_time_slots() -> Vec<String> {
    let mut slots = Vec::new();
    for hour in DAY_START_HOUR..=DAY_END_HOUR {
        for minute in (0..60).step_by(SLOT_STEP_MINUTES as usize) {
            if hour == DAY_END_HOUR && minute > 0 {
                continue;
            }
            slots.push(format!("{:02}:{:02}", hour, minute));
        }
    }
    slots
}

/// The fixed room enumeration.
pub fn rooms() -> &'static [&'static str] {
    &ROOMS
}

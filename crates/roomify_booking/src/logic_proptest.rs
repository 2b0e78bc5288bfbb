#[cfg(test)]
mod tests {
    use crate::catalog::generate_time_slots;
    use crate::logic::is_slot_booked;
    use chrono::NaiveTime;
    use proptest::prelude::*;

    proptest! {
        // Every catalog slot parses as a time of day on the half hour,
        // inside the 08:00..=18:00 window.
        #[test]
        fn test_every_slot_is_on_the_half_hour(index in 0usize..21) {
            let slots = generate_time_slots();
            let slot = &slots[index];

            let time = NaiveTime::parse_from_str(slot, "%H:%M")
                .expect("slot must parse as HH:MM");
            let start = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
            let end = NaiveTime::from_hms_opt(18, 0, 0).unwrap();

            prop_assert!(time >= start && time <= end);
            prop_assert!(time.format("%M").to_string() == "00"
                || time.format("%M").to_string() == "30");
        }

        // Catalog order is strictly increasing, so the grid renders in day
        // order without sorting.
        #[test]
        fn test_catalog_is_strictly_increasing(index in 1usize..21) {
            let slots = generate_time_slots();
            let earlier = NaiveTime::parse_from_str(&slots[index - 1], "%H:%M").unwrap();
            let later = NaiveTime::parse_from_str(&slots[index], "%H:%M").unwrap();

            prop_assert!(earlier < later);
        }

        // The conflict checker never reports a conflict against an empty
        // booking set, whatever the inputs.
        #[test]
        fn test_empty_set_never_conflicts(
            date in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
            time in "[0-2][0-9]:[0-5][0-9]",
            room in ".{0,32}",
        ) {
            prop_assert!(!is_slot_booked(&date, &time, &room, &[]));
        }
    }
}

// libs/appointment-cell/src/services/slots.rs

/// Canonical daily grid of bookable time labels: 09:00 through 17:00
/// inclusive at 30-minute increments. Identical for every date and every
/// dentist.
pub const SLOT_GRID: [&str; 17] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "12:00", "12:30", "13:00", "13:30",
    "14:00", "14:30", "15:00", "15:30", "16:00", "16:30", "17:00",
];

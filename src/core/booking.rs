//! # Booking Workflow
//!
//! Collects and validates renter details, quotes a total price and emits a
//! finalized [`Booking`]. Validation is all-at-once (every violated field gets
//! a message, not fail-fast); pricing bills inclusive of both the pickup and
//! the return calendar day, so a same-day rental is one day.
//!
//! Dates and times are kept as raw entry strings on the draft and parsed with
//! chrono at validation/quote time — the form never blocks typing.

use chrono::{NaiveDate, NaiveTime};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::catalog::Car;

/// Form fields, in the order they are checked. The first violated field is the
/// one the form scrolls to and focuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Phone,
    Nic,
    PickupDate,
    PickupTime,
    ReturnDate,
    HoldVehicle,
    Guarantor,
}

/// A field-keyed validation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

fn err(field: Field, message: &str) -> FieldError {
    FieldError {
        field,
        message: message.to_string(),
    }
}

/// In-progress form state. Exists only while the booking screen is active;
/// discarded on navigation away or superseded by a [`Booking`] on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub nic: String,
    /// `YYYY-MM-DD` as entered.
    pub pickup_date: String,
    /// 24-hour `HH:MM` as entered.
    pub pickup_time: String,
    /// `YYYY-MM-DD` as entered.
    pub return_date: String,
    pub has_guarantor: bool,
    pub has_hold_vehicle: bool,
}

impl BookingDraft {
    fn pickup(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.pickup_date.trim(), "%Y-%m-%d").ok()
    }

    fn ret(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.return_date.trim(), "%Y-%m-%d").ok()
    }

    fn time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(self.pickup_time.trim(), "%H:%M").ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    Ongoing,
    Completed,
}

impl BookingStatus {
    pub fn label(self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Ongoing => "Ongoing",
            BookingStatus::Completed => "Completed",
        }
    }
}

/// Finalized rental record. Every field except `status` is immutable once
/// created; `status` only ever moves Confirmed → Cancelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub car_name: String,
    pub dates: String,
    pub status: BookingStatus,
    pub price: String,
    pub total_amount: i64,
    pub image: String,
    pub pickup_time: String,
    pub location: String,
    pub mileage_limit: String,
}

/// Validate a draft against the given "today". Empty result = valid.
///
/// Every rule is checked; failures accumulate in field order so the caller can
/// focus the first one.
pub fn validate(draft: &BookingDraft, today: NaiveDate) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if draft.first_name.trim().is_empty() {
        errors.push(err(Field::FirstName, "First Name is required"));
    }
    if draft.last_name.trim().is_empty() {
        errors.push(err(Field::LastName, "Last Name is required"));
    }

    let digits = draft.phone.chars().filter(|c| c.is_ascii_digit()).count();
    if draft.phone.trim().is_empty() {
        errors.push(err(Field::Phone, "Phone number is required"));
    } else if digits < 9 {
        errors.push(err(Field::Phone, "Enter a valid phone number (min 9 digits)"));
    }

    if draft.nic.trim().is_empty() {
        errors.push(err(Field::Nic, "NIC/Passport is required"));
    }

    if draft.pickup_date.trim().is_empty() {
        errors.push(err(Field::PickupDate, "Pickup Date is required"));
    } else {
        match draft.pickup() {
            Some(pickup) if pickup < today => {
                errors.push(err(Field::PickupDate, "Date cannot be in the past"));
            }
            Some(_) => {}
            None => errors.push(err(Field::PickupDate, "Enter a valid date (YYYY-MM-DD)")),
        }
    }

    if draft.pickup_time.trim().is_empty() {
        errors.push(err(Field::PickupTime, "Pickup Time is required"));
    } else if draft.time().is_none() {
        errors.push(err(Field::PickupTime, "Enter a valid time (HH:MM)"));
    }

    if draft.return_date.trim().is_empty() {
        errors.push(err(Field::ReturnDate, "Return Date is required"));
    } else {
        match (draft.ret(), draft.pickup()) {
            (None, _) => errors.push(err(Field::ReturnDate, "Enter a valid date (YYYY-MM-DD)")),
            (Some(ret), Some(pickup)) if ret < pickup => {
                errors.push(err(Field::ReturnDate, "Return date cannot be before pickup"));
            }
            _ => {}
        }
    }

    if !draft.has_hold_vehicle {
        errors.push(err(Field::HoldVehicle, "Security requirement must be accepted"));
    }
    if !draft.has_guarantor {
        errors.push(err(Field::Guarantor, "Guarantor requirement must be accepted"));
    }

    errors
}

/// Billable days between two dates, inclusive of both endpoints.
/// Same-day rental = 1 day, pickup today / return tomorrow = 2 days.
pub fn rental_days(pickup: NaiveDate, ret: NaiveDate) -> i64 {
    ((ret - pickup).num_days() + 1).max(1)
}

/// Live price estimate while the form is being edited. Falls back to a single
/// day's rate while the dates are unparseable or reversed — submission in that
/// state is blocked by validation, this is display only.
pub fn quote_total(draft: &BookingDraft, price_per_day: i64) -> i64 {
    match (draft.pickup(), draft.ret()) {
        (Some(pickup), Some(ret)) if ret >= pickup => rental_days(pickup, ret) * price_per_day,
        _ => price_per_day,
    }
}

/// `LKR 18,000` style: currency code, space, integer amount with comma
/// thousands separators.
pub fn format_currency(currency: &str, amount: i64) -> String {
    format!("{} {}", currency, thousands(amount))
}

fn thousands(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if amount < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// 24-hour `HH:MM` → `2:05 PM`. Returns an empty string for unparseable input;
/// validation guarantees the submitted value parses.
pub fn format_time_12h(time24: &str) -> String {
    let time = match NaiveTime::parse_from_str(time24.trim(), "%H:%M") {
        Ok(t) => t,
        Err(_) => return String::new(),
    };
    // %l is space-padded; trim to match "2:05 PM" rather than " 2:05 PM"
    time.format("%l:%M %p").to_string().trim_start().to_string()
}

/// Generate a booking reference: `BK-<4 random digits>-VL`.
///
/// No collision check against existing bookings — weak uniqueness is an
/// accepted property of the reference format, not a defect.
pub fn new_booking_id() -> String {
    let n: u32 = rand::thread_rng().gen_range(1000..=9999);
    format!("BK-{}-VL", n)
}

/// Build the final record from a validated draft. Caller must have run
/// [`validate`] first; unparseable dates here would produce a one-day quote.
pub fn finalize(draft: &BookingDraft, car: &Car, location: &str) -> Booking {
    let total = quote_total(draft, car.price_per_day);
    Booking {
        id: new_booking_id(),
        car_name: car.name.clone(),
        dates: format!("{} - {}", draft.pickup_date.trim(), draft.return_date.trim()),
        status: BookingStatus::Confirmed,
        price: format_currency(&car.currency, total),
        total_amount: total,
        image: car.image_url.clone(),
        pickup_time: format_time_12h(&draft.pickup_time),
        location: location.to_string(),
        mileage_limit: car.mileage_limit.clone(),
    }
}

/// Set the booking with `id` to Cancelled. No-op when the id is absent;
/// idempotent on an already-cancelled booking.
pub fn cancel_booking(bookings: &mut [Booking], id: &str) {
    for booking in bookings.iter_mut() {
        if booking.id == id {
            booking.status = BookingStatus::Cancelled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{inventory, PICKUP_LOCATION};

    fn valid_draft() -> BookingDraft {
        BookingDraft {
            first_name: "Kasun".to_string(),
            last_name: "Perera".to_string(),
            phone: "077 123 4567".to_string(),
            nic: "991234567V".to_string(),
            pickup_date: "2025-03-10".to_string(),
            pickup_time: "14:05".to_string(),
            return_date: "2025-03-12".to_string(),
            has_guarantor: true,
            has_hold_vehicle: true,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate(&valid_draft(), today()).is_empty());
    }

    #[test]
    fn test_empty_draft_collects_every_field_error() {
        let errors = validate(&BookingDraft::default(), today());
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::FirstName,
                Field::LastName,
                Field::Phone,
                Field::Nic,
                Field::PickupDate,
                Field::PickupTime,
                Field::ReturnDate,
                Field::HoldVehicle,
                Field::Guarantor,
            ]
        );
    }

    #[test]
    fn test_phone_needs_nine_digits_ignoring_separators() {
        let mut draft = valid_draft();
        draft.phone = "07-712-345".to_string(); // 8 digits
        let errors = validate(&draft, today());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Phone);

        draft.phone = "0-7-7-1-2-3-4-5-6".to_string(); // 9 digits
        assert!(validate(&draft, today()).is_empty());
    }

    #[test]
    fn test_pickup_in_the_past_is_rejected() {
        let mut draft = valid_draft();
        draft.pickup_date = "2025-02-28".to_string();
        draft.return_date = "2025-03-12".to_string();
        let errors = validate(&draft, today());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::PickupDate);
        assert_eq!(errors[0].message, "Date cannot be in the past");
    }

    #[test]
    fn test_pickup_today_is_allowed() {
        let mut draft = valid_draft();
        draft.pickup_date = "2025-03-01".to_string();
        draft.return_date = "2025-03-01".to_string();
        assert!(validate(&draft, today()).is_empty());
    }

    #[test]
    fn test_return_before_pickup_is_rejected() {
        let mut draft = valid_draft();
        draft.return_date = "2025-03-09".to_string();
        let errors = validate(&draft, today());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::ReturnDate);
    }

    #[test]
    fn test_unchecked_acknowledgments_each_error() {
        let mut draft = valid_draft();
        draft.has_hold_vehicle = false;
        draft.has_guarantor = false;
        let fields: Vec<Field> = validate(&draft, today())
            .iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec![Field::HoldVehicle, Field::Guarantor]);
    }

    #[test]
    fn test_rental_days_inclusive() {
        let d = |day| NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
        assert_eq!(rental_days(d(10), d(10)), 1);
        assert_eq!(rental_days(d(10), d(11)), 2);
        assert_eq!(rental_days(d(10), d(12)), 3);
    }

    #[test]
    fn test_quote_falls_back_to_one_day() {
        let mut draft = valid_draft();
        draft.return_date = "not-a-date".to_string();
        assert_eq!(quote_total(&draft, 4500), 4500);

        draft.return_date = "2025-03-09".to_string(); // before pickup
        assert_eq!(quote_total(&draft, 4500), 4500);

        draft.return_date = "2025-03-12".to_string();
        assert_eq!(quote_total(&draft, 4500), 13_500);
    }

    #[test]
    fn test_format_currency_thousands_separators() {
        assert_eq!(format_currency("LKR", 4500), "LKR 4,500");
        assert_eq!(format_currency("LKR", 18_000), "LKR 18,000");
        assert_eq!(format_currency("LKR", 135), "LKR 135");
        assert_eq!(format_currency("LKR", 1_234_567), "LKR 1,234,567");
    }

    #[test]
    fn test_format_time_12h() {
        assert_eq!(format_time_12h("14:05"), "2:05 PM");
        assert_eq!(format_time_12h("00:30"), "12:30 AM");
        assert_eq!(format_time_12h("12:00"), "12:00 PM");
        assert_eq!(format_time_12h("09:07"), "9:07 AM");
        assert_eq!(format_time_12h("bogus"), "");
    }

    #[test]
    fn test_booking_id_format() {
        for _ in 0..50 {
            let id = new_booking_id();
            assert!(id.starts_with("BK-"));
            assert!(id.ends_with("-VL"));
            let n: u32 = id[3..7].parse().unwrap();
            assert!((1000..=9999).contains(&n));
        }
    }

    #[test]
    fn test_finalize_builds_confirmed_booking() {
        let car = &inventory()[0];
        let booking = finalize(&valid_draft(), car, PICKUP_LOCATION);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.total_amount, 13_500);
        assert_eq!(booking.price, "LKR 13,500");
        assert_eq!(booking.dates, "2025-03-10 - 2025-03-12");
        assert_eq!(booking.pickup_time, "2:05 PM");
        assert_eq!(booking.location, PICKUP_LOCATION);
        assert_eq!(booking.mileage_limit, "150 KM / Day");
    }

    #[test]
    fn test_cancel_booking_targets_only_the_matching_id() {
        let car = &inventory()[0];
        let mut bookings = vec![
            finalize(&valid_draft(), car, PICKUP_LOCATION),
            finalize(&valid_draft(), car, PICKUP_LOCATION),
        ];
        bookings[0].id = "BK-1111-VL".to_string();
        bookings[1].id = "BK-2222-VL".to_string();

        cancel_booking(&mut bookings, "BK-2222-VL");
        assert_eq!(bookings[0].status, BookingStatus::Confirmed);
        assert_eq!(bookings[1].status, BookingStatus::Cancelled);

        // Unknown id: nothing changes
        let before = bookings.clone();
        cancel_booking(&mut bookings, "BK-9999-VL");
        assert_eq!(bookings, before);

        // Idempotent on an already-cancelled entry
        cancel_booking(&mut bookings, "BK-2222-VL");
        assert_eq!(bookings[1].status, BookingStatus::Cancelled);
    }
}

//! # Vehicle Catalog
//!
//! The static fleet inventory plus the WhatsApp contact links. Catalog entries
//! are defined once at startup and never mutated; screens borrow them through
//! the selected-car slot on `App`.

use serde::{Deserialize, Serialize};

/// Fixed WhatsApp number for sales inquiries.
pub const CONTACT_PHONE: &str = "94766126754";

/// Fixed pickup location stamped onto every booking.
pub const PICKUP_LOCATION: &str = "Colombo 03 (Main Office)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transmission {
    Automatic,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
    Hybrid,
    Electric,
}

impl FuelType {
    pub fn label(self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Hybrid => "Hybrid",
            FuelType::Electric => "Electric",
        }
    }
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price_per_day: i64,
    pub currency: String,
    pub year: u16,
    pub features: Vec<String>,
    pub image_url: String,
    pub gallery: Vec<String>,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub seats: u8,
    pub description: String,
    /// Daily mileage allowance shown on pricing and receipts.
    pub mileage_limit: String,
}

/// The current fleet. A single vehicle today; the screens iterate regardless.
pub fn inventory() -> Vec<Car> {
    vec![Car {
        id: "1".to_string(),
        name: "Suzuki Wagon R FZ Safety".to_string(),
        category: "Compact Hybrid".to_string(),
        price_per_day: 4500,
        currency: "LKR".to_string(),
        year: 2018,
        features: vec![
            "Push Start".to_string(),
            "Safety Package".to_string(),
            "Climate Control".to_string(),
            "Bluetooth Audio".to_string(),
            "Reverse Camera".to_string(),
            "ABS".to_string(),
        ],
        image_url: "https://images.unsplash.com/photo-1549317661-bd32c8ce0db2?auto=format&fit=crop&q=80&w=1200".to_string(),
        gallery: vec![
            "https://images.unsplash.com/photo-1549317661-bd32c8ce0db2?auto=format&fit=crop&q=80&w=1200".to_string(),
            "https://images.unsplash.com/photo-1541899481282-d53bffe3c35d?auto=format&fit=crop&q=80&w=1200".to_string(),
            "https://images.unsplash.com/photo-1502877338535-766e1452684a?auto=format&fit=crop&q=80&w=1200".to_string(),
            "https://images.unsplash.com/photo-1485291571150-772bcfc10da5?auto=format&fit=crop&q=80&w=1200".to_string(),
            "https://images.unsplash.com/photo-1542282088-fe8426682b8f?auto=format&fit=crop&q=80&w=1200".to_string(),
        ],
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Hybrid,
        seats: 4,
        description: "The Suzuki Wagon R FZ Safety is the perfect city companion. \
            Featuring a highly efficient hybrid engine, advanced safety features \
            including collision mitigation, and a spacious interior despite its \
            compact footprint. Ideal for navigating busy streets with maximum fuel \
            economy and comfort."
            .to_string(),
        mileage_limit: "150 KM / Day".to_string(),
    }]
}

/// `wa.me` link asking about a specific vehicle.
pub fn whatsapp_inquiry_url(car: &Car) -> String {
    let message = format!(
        "Hello VL Rent a Car, I am interested in the {} {}. Is it available?",
        car.name, car.year
    );
    format!(
        "https://wa.me/{}?text={}",
        CONTACT_PHONE,
        urlencoding::encode(&message)
    )
}

/// `wa.me` link with the generic booking inquiry.
pub fn whatsapp_sales_url() -> String {
    format!(
        "https://wa.me/{}?text={}",
        CONTACT_PHONE,
        urlencoding::encode("I am willing to book a car")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_is_well_formed() {
        let cars = inventory();
        assert!(!cars.is_empty());
        for car in &cars {
            assert!(car.price_per_day > 0);
            assert!(car.seats > 0);
            assert_eq!(car.currency.len(), 3);
        }
    }

    #[test]
    fn test_whatsapp_inquiry_url_encodes_car_name() {
        let cars = inventory();
        let url = whatsapp_inquiry_url(&cars[0]);
        assert!(url.starts_with("https://wa.me/94766126754?text="));
        assert!(url.contains("Suzuki%20Wagon%20R%20FZ%20Safety%202018"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_whatsapp_sales_url_is_generic() {
        let url = whatsapp_sales_url();
        assert_eq!(
            url,
            "https://wa.me/94766126754?text=I%20am%20willing%20to%20book%20a%20car"
        );
    }
}

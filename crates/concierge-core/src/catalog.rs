//! Room Catalog
//!
//! The hotel's three room types. Read-only, defined at compile time.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// A bookable room type
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Room {
    pub id: &'static str,
    pub name: &'static str,
    /// Nightly rate in USD
    pub price: Decimal,
    /// Maximum guests
    pub capacity: u8,
    pub view: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

impl Room {
    /// e.g. `"$80 / night"`
    pub fn rate_label(&self) -> String {
        format!("${} / night", self.price.normalize())
    }

    /// e.g. `"Up to 2 Guests"`
    pub fn capacity_label(&self) -> String {
        format!("Up to {} Guests", self.capacity)
    }

    /// Per-card booking button text
    pub fn book_label(&self) -> String {
        format!("Book {}", self.name)
    }
}

static ROOMS: [Room; 3] = [
    Room {
        id: "standard",
        name: "Standard Room",
        price: dec!(80),
        capacity: 2,
        view: "Garden View",
        image: "https://images.unsplash.com/photo-1566665797739-1674de7a421a?auto=format&fit=crop&q=80&w=1074",
        description: "A cozy sanctuary featuring locally-inspired decor and a peaceful view of our tropical gardens.",
    },
    Room {
        id: "deluxe",
        name: "Deluxe Sea View Room",
        price: dec!(120),
        capacity: 2,
        view: "Sea View with Balcony",
        image: "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?auto=format&fit=crop&q=80&w=1170",
        description: "Wake up to the sounds of the Indian Ocean in this elegant room featuring a private balcony.",
    },
    Room {
        id: "family",
        name: "Family Suite",
        price: dec!(180),
        capacity: 4,
        view: "Sea View & Living Area",
        image: "https://images.unsplash.com/photo-1590490360182-c33d57733427?auto=format&fit=crop&q=80&w=1074",
        description: "The perfect space for families, offering panoramic ocean views and separate living quarters.",
    },
];

/// All rooms, in display order
pub fn rooms() -> &'static [Room] {
    &ROOMS
}

/// Look up a room by id
pub fn find(id: &str) -> Option<&'static Room> {
    ROOMS.iter().find(|r| r.id == id)
}

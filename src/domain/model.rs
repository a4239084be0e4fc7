use crate::domain::color::{Color, PaletteColor};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named entity with a mutable color. The name never changes once the
/// entity exists; the color is a palette string and is rewritten wholesale
/// on every update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub color: String,
}

impl Vehicle {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// Typed color for display. Stored strings that no longer parse fall
    /// back to blue rather than failing the render path.
    pub fn display_color(&self) -> Color {
        Color::parse(&self.color).unwrap_or(Color::Named(PaletteColor::Blue))
    }

    pub fn set_display_color(&mut self, color: Color) {
        self.color = color.palette_name().unwrap_or("blue").to_string();
    }
}

/// The persisted document: a wholesale-loaded, wholesale-saved list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehiclesDocument {
    pub vehicles: Vec<Vehicle>,
}

/// Both updated entities bundled together after a successful swap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwappedVehicles {
    pub vehicle1: Vehicle,
    pub vehicle2: Vehicle,
}

impl SwappedVehicles {
    pub fn new(vehicle1: Vehicle, vehicle2: Vehicle) -> Self {
        Self { vehicle1, vehicle2 }
    }

    pub fn into_pair(self) -> (Vehicle, Vehicle) {
        (self.vehicle1, self.vehicle2)
    }
}

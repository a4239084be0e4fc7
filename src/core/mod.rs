pub mod file_store;
pub mod mock_api;
pub mod repository;
pub mod usecases;
pub mod viewmodel;

pub use crate::domain::model::{SwappedVehicles, Vehicle, VehiclesDocument};
pub use crate::domain::ports::{SwapConfig, VehicleApi, VehicleRepository, VehicleStore};
pub use crate::utils::error::Result;

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{file::TomlConfig, CliConfig};
pub use crate::core::file_store::JsonFileStore;
pub use crate::core::mock_api::MockApi;
pub use crate::core::repository::ApiVehicleRepository;
pub use crate::core::usecases::{GetVehicles, SwapVehicleColors};
pub use crate::core::viewmodel::{Phase, VehicleViewModel, ViewEvent, ViewState};
pub use utils::error::{Result, SwapError};

use crate::domain::color::Color;
use crate::domain::model::{SwappedVehicles, Vehicle};
use crate::domain::response::ApiResponse;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Persistence port. Load returns the full entity list; save overwrites the
/// whole document. Load and decode failures surface as errors here, the
/// layers above translate them into response codes.
pub trait VehicleStore: Send + Sync {
    fn load(&self) -> impl std::future::Future<Output = Result<Vec<Vehicle>>> + Send;
    fn save(
        &self,
        vehicles: &[Vehicle],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Backend operation surface. Both calls suspend for the simulated network
/// delay and never raise; failures come back as non-2xx responses.
#[async_trait]
pub trait VehicleApi: Send + Sync {
    async fn get_vehicles(&self) -> ApiResponse<Vec<Vehicle>>;
    async fn update_vehicle_color(&self, name: &str, color: &str) -> ApiResponse<Vehicle>;
}

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn get_vehicles(&self) -> ApiResponse<Vec<Vehicle>>;
    async fn update_vehicle_color(&self, name: &str, color: Color) -> ApiResponse<Vehicle>;
    async fn swap_vehicle_colors(
        &self,
        vehicle1: &Vehicle,
        vehicle2: &Vehicle,
    ) -> ApiResponse<SwappedVehicles>;
}

#[async_trait]
pub trait GetVehiclesUseCase: Send + Sync {
    async fn execute(&self) -> ApiResponse<Vec<Vehicle>>;
}

#[async_trait]
pub trait SwapVehicleColorsUseCase: Send + Sync {
    async fn execute(
        &self,
        vehicle1: &Vehicle,
        vehicle2: &Vehicle,
    ) -> ApiResponse<SwappedVehicles>;
}

/// Configuration surface consumed when wiring the components together.
pub trait SwapConfig: Send + Sync {
    fn data_dir(&self) -> &str;
    fn api_delay(&self) -> Duration;
    fn swap_delay(&self) -> Duration;
    fn simulate_errors(&self) -> bool;
}

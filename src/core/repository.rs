use crate::domain::color::Color;
use crate::domain::model::{SwappedVehicles, Vehicle};
use crate::domain::ports::{VehicleApi, VehicleRepository};
use crate::domain::response::{ApiErrorKind, ApiResponse, HttpStatus};
use async_trait::async_trait;

/// Repository over the backend surface. Translates typed colors to their
/// palette strings and sequences the two updates that make up a swap.
pub struct ApiVehicleRepository<A: VehicleApi> {
    api: A,
}

impl<A: VehicleApi> ApiVehicleRepository<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A: VehicleApi> VehicleRepository for ApiVehicleRepository<A> {
    async fn get_vehicles(&self) -> ApiResponse<Vec<Vehicle>> {
        self.api.get_vehicles().await
    }

    async fn update_vehicle_color(&self, name: &str, color: Color) -> ApiResponse<Vehicle> {
        let color_name = match color.palette_name() {
            Some(color_name) => color_name,
            None => {
                return ApiResponse::failure_with_message(
                    HttpStatus::BadRequest,
                    ApiErrorKind::InvalidResponse,
                    format!("{} - Invalid color", HttpStatus::BadRequest.status_message()),
                )
            }
        };

        self.api.update_vehicle_color(name, color_name).await
    }

    // Sequential, not transactional. Both target colors come from the
    // pre-swap snapshot; a failure on the second update leaves the first
    // update in place with no rollback.
    async fn swap_vehicle_colors(
        &self,
        vehicle1: &Vehicle,
        vehicle2: &Vehicle,
    ) -> ApiResponse<SwappedVehicles> {
        let color1 = vehicle1.display_color();
        let color2 = vehicle2.display_color();

        let mut first = self.update_vehicle_color(&vehicle1.name, color2).await;
        let updated_vehicle1 = match (first.is_success(), first.data.take()) {
            (true, Some(vehicle)) => vehicle,
            _ => return first.carry_failure(),
        };

        let mut second = self.update_vehicle_color(&vehicle2.name, color1).await;
        let updated_vehicle2 = match (second.is_success(), second.data.take()) {
            (true, Some(vehicle)) => vehicle,
            _ => return second.carry_failure(),
        };

        ApiResponse::success(
            HttpStatus::Ok,
            SwappedVehicles::new(updated_vehicle1, updated_vehicle2),
        )
    }
}

use crate::domain::model::{SwappedVehicles, Vehicle};
use crate::domain::ports::{
    GetVehiclesUseCase, SwapVehicleColorsUseCase, VehicleRepository,
};
use crate::domain::response::ApiResponse;
use async_trait::async_trait;
use std::sync::Arc;

/// Pass-through to the repository. Exists as a seam for substituting test
/// doubles above the repository boundary.
pub struct GetVehicles<R: VehicleRepository> {
    repository: Arc<R>,
}

impl<R: VehicleRepository> GetVehicles<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: VehicleRepository> GetVehiclesUseCase for GetVehicles<R> {
    async fn execute(&self) -> ApiResponse<Vec<Vehicle>> {
        self.repository.get_vehicles().await
    }
}

pub struct SwapVehicleColors<R: VehicleRepository> {
    repository: Arc<R>,
}

impl<R: VehicleRepository> SwapVehicleColors<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: VehicleRepository> SwapVehicleColorsUseCase for SwapVehicleColors<R> {
    async fn execute(
        &self,
        vehicle1: &Vehicle,
        vehicle2: &Vehicle,
    ) -> ApiResponse<SwappedVehicles> {
        self.repository.swap_vehicle_colors(vehicle1, vehicle2).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color::Color;
    use crate::domain::response::{ApiErrorKind, HttpStatus};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRepository {
        get_calls: Mutex<usize>,
        swap_calls: Mutex<Vec<(String, String)>>,
        fail_swap: bool,
    }

    #[async_trait]
    impl VehicleRepository for RecordingRepository {
        async fn get_vehicles(&self) -> ApiResponse<Vec<Vehicle>> {
            *self.get_calls.lock().unwrap() += 1;
            ApiResponse::success(
                HttpStatus::Ok,
                vec![Vehicle::new("car", "blue"), Vehicle::new("truck", "yellow")],
            )
        }

        async fn update_vehicle_color(&self, name: &str, _color: Color) -> ApiResponse<Vehicle> {
            ApiResponse::success(HttpStatus::Ok, Vehicle::new(name, "blue"))
        }

        async fn swap_vehicle_colors(
            &self,
            vehicle1: &Vehicle,
            vehicle2: &Vehicle,
        ) -> ApiResponse<SwappedVehicles> {
            self.swap_calls
                .lock()
                .unwrap()
                .push((vehicle1.name.clone(), vehicle2.name.clone()));

            if self.fail_swap {
                return ApiResponse::failure(
                    HttpStatus::InternalServerError,
                    ApiErrorKind::NetworkError,
                );
            }

            let mut swapped1 = vehicle1.clone();
            let mut swapped2 = vehicle2.clone();
            std::mem::swap(&mut swapped1.color, &mut swapped2.color);
            ApiResponse::success(HttpStatus::Ok, SwappedVehicles::new(swapped1, swapped2))
        }
    }

    #[tokio::test]
    async fn test_get_vehicles_delegates_to_repository() {
        let repository = Arc::new(RecordingRepository::default());
        let use_case = GetVehicles::new(Arc::clone(&repository));

        let response = use_case.execute().await;

        assert_eq!(response.status_code, 200);
        assert_eq!(response.data.unwrap().len(), 2);
        assert_eq!(*repository.get_calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_swap_delegates_with_both_vehicles() {
        let repository = Arc::new(RecordingRepository::default());
        let use_case = SwapVehicleColors::new(Arc::clone(&repository));

        let car = Vehicle::new("car", "red");
        let truck = Vehicle::new("truck", "blue");
        let response = use_case.execute(&car, &truck).await;

        assert_eq!(response.status_code, 200);
        let swapped = response.data.unwrap();
        assert_eq!(swapped.vehicle1.color, "blue");
        assert_eq!(swapped.vehicle2.color, "red");
        assert_eq!(
            *repository.swap_calls.lock().unwrap(),
            vec![("car".to_string(), "truck".to_string())]
        );
    }

    #[tokio::test]
    async fn test_swap_surfaces_repository_failure_unchanged() {
        let repository = Arc::new(RecordingRepository {
            fail_swap: true,
            ..Default::default()
        });
        let use_case = SwapVehicleColors::new(Arc::clone(&repository));

        let car = Vehicle::new("car", "red");
        let truck = Vehicle::new("truck", "blue");
        let response = use_case.execute(&car, &truck).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(response.error, Some(ApiErrorKind::NetworkError));
    }
}

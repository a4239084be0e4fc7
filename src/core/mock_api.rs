use crate::domain::color::Color;
use crate::domain::model::Vehicle;
use crate::domain::ports::{VehicleApi, VehicleStore};
use crate::domain::response::{ApiErrorKind, ApiResponse, HttpStatus};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Simulated backend over a vehicle store. Every request suspends for a
/// fixed delay before touching the store. With `simulate_errors` enabled, a
/// request counter periodically forces an error status instead of consulting
/// the store at all.
pub struct MockApi<S: VehicleStore> {
    store: S,
    delay: Duration,
    simulate_errors: bool,
    request_count: AtomicU64,
}

impl<S: VehicleStore> MockApi<S> {
    pub fn new(store: S, delay: Duration, simulate_errors: bool) -> Self {
        Self {
            store,
            delay,
            simulate_errors,
            request_count: AtomicU64::new(0),
        }
    }

    fn next_request_number(&self) -> u64 {
        self.request_count.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn simulated_status_code(request_number: u64) -> u16 {
        match request_number % 10 {
            1 => HttpStatus::BadRequest.code(),
            2 => HttpStatus::Unauthorized.code(),
            3 => HttpStatus::NotFound.code(),
            4 => HttpStatus::InternalServerError.code(),
            5 => HttpStatus::ServiceUnavailable.code(),
            _ => HttpStatus::Ok.code(),
        }
    }

    fn error_response<T>(status_code: u16, operation: &str) -> ApiResponse<T> {
        let status =
            HttpStatus::from_code(status_code).unwrap_or(HttpStatus::InternalServerError);
        let error = match status_code {
            400..=499 => ApiErrorKind::InvalidResponse,
            _ => ApiErrorKind::NetworkError,
        };

        tracing::warn!(
            "❌ {} /vehicles: Status {} - {}",
            operation,
            status_code,
            status.description()
        );

        ApiResponse::failure(status, error)
    }

    fn store_failure<T>(operation: &str, error: crate::utils::error::SwapError) -> ApiResponse<T> {
        tracing::warn!("❌ {} /vehicles: store failure: {}", operation, error);
        ApiResponse::failure(HttpStatus::InternalServerError, ApiErrorKind::NetworkError)
    }
}

#[async_trait]
impl<S: VehicleStore> VehicleApi for MockApi<S> {
    async fn get_vehicles(&self) -> ApiResponse<Vec<Vehicle>> {
        let request_number = self.next_request_number();

        tokio::time::sleep(self.delay).await;

        if self.simulate_errors {
            let status_code = Self::simulated_status_code(request_number);
            if status_code != 200 {
                return Self::error_response(status_code, "GET");
            }
        }

        let vehicles = match self.store.load().await {
            Ok(vehicles) => vehicles,
            Err(e) => return Self::store_failure("GET", e),
        };

        if vehicles.is_empty() {
            return ApiResponse::failure(HttpStatus::NotFound, ApiErrorKind::VehicleNotFound);
        }

        tracing::info!(
            "📡 GET /vehicles: Status 200 - Returning {} vehicles",
            vehicles.len()
        );

        ApiResponse::success(HttpStatus::Ok, vehicles)
    }

    async fn update_vehicle_color(&self, name: &str, color: &str) -> ApiResponse<Vehicle> {
        let request_number = self.next_request_number();

        tokio::time::sleep(self.delay).await;

        if self.simulate_errors {
            let status_code = Self::simulated_status_code(request_number);
            if status_code != 200 {
                return Self::error_response(status_code, "PUT");
            }
        }

        let mut vehicles = match self.store.load().await {
            Ok(vehicles) => vehicles,
            Err(e) => return Self::store_failure("PUT", e),
        };

        let index = match vehicles.iter().position(|v| v.name == name) {
            Some(index) => index,
            None => {
                return ApiResponse::failure(HttpStatus::NotFound, ApiErrorKind::VehicleNotFound)
            }
        };

        if Color::parse(color).is_none() {
            return ApiResponse::failure_with_message(
                HttpStatus::BadRequest,
                ApiErrorKind::InvalidResponse,
                format!(
                    "{} - Invalid color name",
                    HttpStatus::BadRequest.status_message()
                ),
            );
        }

        vehicles[index].color = color.to_string();
        if let Err(e) = self.store.save(&vehicles).await {
            return Self::store_failure("PUT", e);
        }

        tracing::info!(
            "📝 PUT /vehicles: Status 200 - Updated vehicle '{}' color to '{}'",
            name,
            color
        );

        ApiResponse::success(HttpStatus::Ok, vehicles[index].clone())
    }
}

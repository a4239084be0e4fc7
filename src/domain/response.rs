use std::fmt;

/// Status codes the simulated backend can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpStatus {
    Ok,
    Created,
    Accepted,
    NoContent,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    Conflict,
    UnprocessableEntity,
    InternalServerError,
    BadGateway,
    ServiceUnavailable,
    GatewayTimeout,
}

impl HttpStatus {
    pub fn code(&self) -> u16 {
        match self {
            HttpStatus::Ok => 200,
            HttpStatus::Created => 201,
            HttpStatus::Accepted => 202,
            HttpStatus::NoContent => 204,
            HttpStatus::BadRequest => 400,
            HttpStatus::Unauthorized => 401,
            HttpStatus::Forbidden => 403,
            HttpStatus::NotFound => 404,
            HttpStatus::MethodNotAllowed => 405,
            HttpStatus::Conflict => 409,
            HttpStatus::UnprocessableEntity => 422,
            HttpStatus::InternalServerError => 500,
            HttpStatus::BadGateway => 502,
            HttpStatus::ServiceUnavailable => 503,
            HttpStatus::GatewayTimeout => 504,
        }
    }

    pub fn from_code(code: u16) -> Option<HttpStatus> {
        match code {
            200 => Some(HttpStatus::Ok),
            201 => Some(HttpStatus::Created),
            202 => Some(HttpStatus::Accepted),
            204 => Some(HttpStatus::NoContent),
            400 => Some(HttpStatus::BadRequest),
            401 => Some(HttpStatus::Unauthorized),
            403 => Some(HttpStatus::Forbidden),
            404 => Some(HttpStatus::NotFound),
            405 => Some(HttpStatus::MethodNotAllowed),
            409 => Some(HttpStatus::Conflict),
            422 => Some(HttpStatus::UnprocessableEntity),
            500 => Some(HttpStatus::InternalServerError),
            502 => Some(HttpStatus::BadGateway),
            503 => Some(HttpStatus::ServiceUnavailable),
            504 => Some(HttpStatus::GatewayTimeout),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HttpStatus::Ok => "OK - Request succeeded",
            HttpStatus::Created => "Created - Resource created successfully",
            HttpStatus::Accepted => "Accepted - Request accepted for processing",
            HttpStatus::NoContent => "No Content - Request succeeded but no content to return",
            HttpStatus::BadRequest => "Bad Request - Invalid request parameters",
            HttpStatus::Unauthorized => "Unauthorized - Authentication required",
            HttpStatus::Forbidden => "Forbidden - Access denied",
            HttpStatus::NotFound => "Not Found - Resource not found",
            HttpStatus::MethodNotAllowed => "Method Not Allowed - HTTP method not supported",
            HttpStatus::Conflict => "Conflict - Resource conflict",
            HttpStatus::UnprocessableEntity => "Unprocessable Entity - Validation failed",
            HttpStatus::InternalServerError => "Internal Server Error - Server error",
            HttpStatus::BadGateway => "Bad Gateway - Gateway error",
            HttpStatus::ServiceUnavailable => "Service Unavailable - Service temporarily unavailable",
            HttpStatus::GatewayTimeout => "Gateway Timeout - Request timeout",
        }
    }

    pub fn status_message(&self) -> String {
        format!("{} - {}", self.code(), self.description())
    }
}

/// Error tag carried alongside a failed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    VehicleNotFound,
    InvalidResponse,
    NetworkError,
}

impl ApiErrorKind {
    pub fn description(&self) -> &'static str {
        match self {
            ApiErrorKind::VehicleNotFound => "Vehicle not found",
            ApiErrorKind::InvalidResponse => "Invalid response from server",
            ApiErrorKind::NetworkError => "Network error occurred",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Outcome of a backend operation. Failures travel in this shape instead of
/// being raised across the store/backend/repository boundary.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub data: Option<T>,
    pub error: Option<ApiErrorKind>,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(status: HttpStatus, data: T) -> Self {
        Self {
            status_code: status.code(),
            data: Some(data),
            error: None,
            message: status.status_message(),
        }
    }

    pub fn failure(status: HttpStatus, error: ApiErrorKind) -> Self {
        Self {
            status_code: status.code(),
            data: None,
            error: Some(error),
            message: status.status_message(),
        }
    }

    pub fn failure_with_message(
        status: HttpStatus,
        error: ApiErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status_code: status.code(),
            data: None,
            error: Some(error),
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Forward a failed response under a different payload type, keeping the
    /// status code, error tag, and message.
    pub fn carry_failure<U>(self) -> ApiResponse<U> {
        ApiResponse {
            status_code: self.status_code,
            data: None,
            error: self.error,
            message: self.message,
        }
    }
}

use crate::domain::color::{Color, PaletteColor};
use crate::domain::model::Vehicle;
use crate::domain::ports::{GetVehiclesUseCase, SwapVehicleColorsUseCase};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

/// Notification sent to the view whenever a state field changes.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    LoadingChanged(bool),
    VehiclesChanged,
    ErrorChanged(Option<String>),
    StatusChanged(String),
    StatusCodeChanged(u16),
    DocumentChanged(String),
    AlertRaised(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Error,
    SwappingColors,
    ErrorWithAlert,
}

/// Everything the view renders, held in one place.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub vehicle1: Option<Vehicle>,
    pub vehicle2: Option<Vehicle>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub document_content: String,
    pub api_status: String,
    pub last_status_code: u16,
    pub alert_message: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            vehicle1: None,
            vehicle2: None,
            is_loading: false,
            error_message: None,
            document_content: String::new(),
            api_status: "Ready".to_string(),
            last_status_code: 0,
            alert_message: None,
        }
    }
}

impl ViewState {
    pub fn phase(&self) -> Phase {
        let bound = self.vehicle1.is_some() && self.vehicle2.is_some();

        if self.alert_message.is_some() {
            Phase::ErrorWithAlert
        } else if self.is_loading {
            if bound {
                Phase::SwappingColors
            } else {
                Phase::Loading
            }
        } else if self.error_message.is_some() {
            Phase::Error
        } else if bound {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    pub fn vehicle1_color(&self) -> Color {
        self.vehicle1
            .as_ref()
            .map(Vehicle::display_color)
            .unwrap_or(Color::Named(PaletteColor::Yellow))
    }

    pub fn vehicle2_color(&self) -> Color {
        self.vehicle2
            .as_ref()
            .map(Vehicle::display_color)
            .unwrap_or(Color::Named(PaletteColor::Red))
    }

    pub fn vehicle1_label(&self) -> String {
        self.vehicle1
            .as_ref()
            .map(|v| capitalize(&v.name))
            .unwrap_or_else(|| "Car".to_string())
    }

    pub fn vehicle2_label(&self) -> String {
        self.vehicle2
            .as_ref()
            .map(|v| capitalize(&v.name))
            .unwrap_or_else(|| "Truck".to_string())
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Drives the display state. Loads the two vehicles, swaps their colors on
/// request, and reports every field change over the event channel so a
/// single subscriber can re-render.
pub struct VehicleViewModel<G, W> {
    get_vehicles: G,
    swap_vehicle_colors: W,
    swap_delay: Duration,
    document_path: Option<PathBuf>,
    state: ViewState,
    events: mpsc::UnboundedSender<ViewEvent>,
}

impl<G, W> VehicleViewModel<G, W>
where
    G: GetVehiclesUseCase,
    W: SwapVehicleColorsUseCase,
{
    pub fn new(
        get_vehicles: G,
        swap_vehicle_colors: W,
        swap_delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<ViewEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let view_model = Self {
            get_vehicles,
            swap_vehicle_colors,
            swap_delay,
            document_path: None,
            state: ViewState::default(),
            events,
        };
        (view_model, receiver)
    }

    /// Point the view model at the persisted document so its raw text can be
    /// shown alongside the vehicles.
    pub fn with_document_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.document_path = Some(path.into());
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub async fn load_vehicles(&mut self) {
        self.set_loading(true);
        self.set_error(None);
        self.set_status("Loading vehicles...");

        let response = self.get_vehicles.execute().await;
        self.set_status_code(response.status_code);
        self.set_status(format!(
            "GET /vehicles - {} - {}",
            response.status_code, response.message
        ));

        let succeeded = response.is_success();
        match response.data {
            Some(vehicles) if succeeded => {
                if vehicles.len() < 2 {
                    self.set_error(Some("Expected at least 2 vehicles".to_string()));
                    self.set_status("GET /vehicles - Error: Expected at least 2 vehicles");
                    self.set_loading(false);
                    return;
                }
                self.bind_vehicles(vehicles[0].clone(), vehicles[1].clone());
                self.refresh_document_content();
            }
            _ => {
                self.set_error(Some(response.message.clone()));
                self.set_status(format!(
                    "GET /vehicles - {} - Error: {}",
                    response.status_code, response.message
                ));
            }
        }

        self.set_loading(false);
    }

    pub async fn swap_colors(&mut self) {
        let (vehicle1, vehicle2) =
            match (self.state.vehicle1.clone(), self.state.vehicle2.clone()) {
                (Some(vehicle1), Some(vehicle2)) => (vehicle1, vehicle2),
                _ => {
                    self.set_error(Some("Vehicles not loaded".to_string()));
                    self.set_status("Error: Vehicles not loaded");
                    return;
                }
            };

        self.set_loading(true);
        self.set_error(None);
        self.set_status("Swapping colors...");

        // Perceived-latency delay on top of the backend's own delay
        tokio::time::sleep(self.swap_delay).await;

        let response = self.swap_vehicle_colors.execute(&vehicle1, &vehicle2).await;
        self.set_status_code(response.status_code);
        self.set_status(format!("Status code - {}", response.status_code));

        let succeeded = response.is_success();
        match response.data {
            Some(swapped) if succeeded => {
                let (vehicle1, vehicle2) = swapped.into_pair();
                self.bind_vehicles(vehicle1, vehicle2);
                self.refresh_document_content();
            }
            _ => {
                self.set_error(Some(response.message.clone()));
                self.set_status(format!("Status code - {}", response.status_code));
                if !succeeded {
                    self.raise_alert(format!(
                        "API call failed with status code {}: {}",
                        response.status_code, response.message
                    ));
                }
            }
        }

        self.set_loading(false);
    }

    pub fn dismiss_alert(&mut self) {
        self.state.alert_message = None;
    }

    fn bind_vehicles(&mut self, vehicle1: Vehicle, vehicle2: Vehicle) {
        self.state.vehicle1 = Some(vehicle1);
        self.state.vehicle2 = Some(vehicle2);
        let _ = self.events.send(ViewEvent::VehiclesChanged);
    }

    fn set_loading(&mut self, value: bool) {
        self.state.is_loading = value;
        let _ = self.events.send(ViewEvent::LoadingChanged(value));
    }

    fn set_error(&mut self, value: Option<String>) {
        self.state.error_message = value.clone();
        let _ = self.events.send(ViewEvent::ErrorChanged(value));
    }

    fn set_status(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.state.api_status = value.clone();
        let _ = self.events.send(ViewEvent::StatusChanged(value));
    }

    fn set_status_code(&mut self, value: u16) {
        self.state.last_status_code = value;
        let _ = self.events.send(ViewEvent::StatusCodeChanged(value));
    }

    fn raise_alert(&mut self, message: String) {
        self.state.alert_message = Some(message.clone());
        let _ = self.events.send(ViewEvent::AlertRaised(message));
    }

    fn refresh_document_content(&mut self) {
        let content = match &self.document_path {
            Some(path) => std::fs::read_to_string(path)
                .unwrap_or_else(|_| "Unable to load JSON".to_string()),
            None => return,
        };
        self.state.document_content = content.clone();
        let _ = self.events.send(ViewEvent::DocumentChanged(content));
    }
}

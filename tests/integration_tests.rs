use anyhow::Result;
use color_swap::core::viewmodel::Phase;
use color_swap::domain::color::{Color, PaletteColor};
use color_swap::domain::model::{Vehicle, VehiclesDocument};
use color_swap::domain::ports::{VehicleApi, VehicleRepository, VehicleStore};
use color_swap::{
    ApiVehicleRepository, GetVehicles, JsonFileStore, MockApi, SwapVehicleColors, TomlConfig,
    VehicleViewModel,
};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn read_document(store: &JsonFileStore) -> Result<VehiclesDocument> {
    let raw = std::fs::read_to_string(store.document_path())?;
    Ok(serde_json::from_str(&raw)?)
}

#[tokio::test]
async fn test_first_load_seeds_the_document() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let store = JsonFileStore::new(temp_dir.path());
    let api = MockApi::new(store.clone(), Duration::ZERO, false);
    let repository = Arc::new(ApiVehicleRepository::new(api));
    let get_vehicles = GetVehicles::new(Arc::clone(&repository));
    let swap_colors = SwapVehicleColors::new(repository);
    let (mut view_model, _events) =
        VehicleViewModel::new(get_vehicles, swap_colors, Duration::ZERO);

    view_model.load_vehicles().await;

    let state = view_model.state();
    assert_eq!(state.phase(), Phase::Ready);
    assert_eq!(state.last_status_code, 200);
    assert_eq!(state.vehicle1_label(), "Car");
    assert_eq!(state.vehicle2_label(), "Truck");
    assert_eq!(state.vehicle1_color(), Color::Named(PaletteColor::Blue));
    assert_eq!(state.vehicle2_color(), Color::Named(PaletteColor::Yellow));

    // The seed document was written out with exactly the two entities
    let document = read_document(&store)?;
    assert_eq!(document.vehicles.len(), 2);
    assert_eq!(document.vehicles[0].name, "car");
    assert_eq!(document.vehicles[0].color, "blue");
    assert_eq!(document.vehicles[1].name, "truck");
    assert_eq!(document.vehicles[1].color, "yellow");

    Ok(())
}

#[tokio::test]
async fn test_swap_end_to_end_persists_exchanged_colors() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let store = JsonFileStore::new(temp_dir.path());
    store
        .save(&[Vehicle::new("car", "red"), Vehicle::new("truck", "blue")])
        .await?;

    let api = MockApi::new(store.clone(), Duration::ZERO, false);
    let repository = Arc::new(ApiVehicleRepository::new(api));
    let get_vehicles = GetVehicles::new(Arc::clone(&repository));
    let swap_colors = SwapVehicleColors::new(repository);
    let (mut view_model, _events) =
        VehicleViewModel::new(get_vehicles, swap_colors, Duration::ZERO);

    view_model.load_vehicles().await;
    view_model.swap_colors().await;

    let state = view_model.state();
    assert_eq!(state.phase(), Phase::Ready);
    assert_eq!(state.api_status, "Status code - 200");
    assert_eq!(state.vehicle1_color(), Color::Named(PaletteColor::Blue));
    assert_eq!(state.vehicle2_color(), Color::Named(PaletteColor::Red));

    let document = read_document(&store)?;
    assert_eq!(document.vehicles[0].color, "blue");
    assert_eq!(document.vehicles[1].color, "red");

    Ok(())
}

#[tokio::test]
async fn test_color_collision_is_repaired_on_load() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let store = JsonFileStore::new(temp_dir.path());
    store
        .save(&[Vehicle::new("car", "green"), Vehicle::new("truck", "green")])
        .await?;

    let api = MockApi::new(store.clone(), Duration::ZERO, false);
    let repository = Arc::new(ApiVehicleRepository::new(api));
    let get_vehicles = GetVehicles::new(Arc::clone(&repository));
    let swap_colors = SwapVehicleColors::new(repository);
    let (mut view_model, _events) =
        VehicleViewModel::new(get_vehicles, swap_colors, Duration::ZERO);

    view_model.load_vehicles().await;

    let state = view_model.state();
    assert_eq!(state.vehicle1_color(), Color::Named(PaletteColor::Green));
    assert_eq!(state.vehicle2_color(), Color::Named(PaletteColor::Yellow));

    let document = read_document(&store)?;
    assert_eq!(document.vehicles[1].color, "yellow");

    Ok(())
}

#[tokio::test]
async fn test_load_on_empty_document_is_not_found() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let store = JsonFileStore::new(temp_dir.path());
    store.save(&[]).await?;

    let api = MockApi::new(store.clone(), Duration::ZERO, false);
    let repository = Arc::new(ApiVehicleRepository::new(api));
    let get_vehicles = GetVehicles::new(Arc::clone(&repository));
    let swap_colors = SwapVehicleColors::new(repository);
    let (mut view_model, _events) =
        VehicleViewModel::new(get_vehicles, swap_colors, Duration::ZERO);

    view_model.load_vehicles().await;

    let state = view_model.state();
    assert_eq!(state.last_status_code, 404);
    assert_eq!(
        state.error_message.as_deref(),
        Some("404 - Not Found - Resource not found")
    );
    assert_eq!(state.phase(), Phase::Error);
    assert!(state.alert_message.is_none());

    Ok(())
}

#[tokio::test]
async fn test_swap_before_load_touches_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let store = JsonFileStore::new(temp_dir.path());
    let api = MockApi::new(store.clone(), Duration::ZERO, false);
    let repository = Arc::new(ApiVehicleRepository::new(api));
    let get_vehicles = GetVehicles::new(Arc::clone(&repository));
    let swap_colors = SwapVehicleColors::new(repository);
    let (mut view_model, _events) =
        VehicleViewModel::new(get_vehicles, swap_colors, Duration::ZERO);

    view_model.swap_colors().await;

    let state = view_model.state();
    assert_eq!(state.error_message.as_deref(), Some("Vehicles not loaded"));
    assert_eq!(state.api_status, "Error: Vehicles not loaded");

    // No backend call was made, so the document was never even bootstrapped
    assert!(!store.document_path().exists());

    Ok(())
}

#[tokio::test]
async fn test_unknown_color_update_leaves_document_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let store = JsonFileStore::new(temp_dir.path());
    let api = MockApi::new(store.clone(), Duration::ZERO, false);

    // Bootstrap through the backend
    assert_eq!(api.get_vehicles().await.status_code, 200);
    let before = read_document(&store)?;

    let response = api.update_vehicle_color("car", "fuchsia").await;
    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.message,
        "400 - Bad Request - Invalid request parameters - Invalid color name"
    );

    let after = read_document(&store)?;
    assert_eq!(after.vehicles, before.vehicles);

    Ok(())
}

#[tokio::test]
async fn test_repository_rejects_unmappable_color_before_backend() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let store = JsonFileStore::new(temp_dir.path());
    let repository = ApiVehicleRepository::new(MockApi::new(store.clone(), Duration::ZERO, false));

    let response = repository
        .update_vehicle_color(
            "car",
            Color::Custom {
                r: 120,
                g: 80,
                b: 60,
            },
        )
        .await;

    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.message,
        "400 - Bad Request - Invalid request parameters - Invalid color"
    );
    // Rejected before the backend ran, so no bootstrap happened
    assert!(!store.document_path().exists());

    Ok(())
}

#[tokio::test]
async fn test_toml_settings_drive_the_wiring() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let data_dir = temp_dir.path().join("state");

    let toml_content = format!(
        r#"
[app]
name = "color-swap"

[data]
dir = "{}"

[backend]
api_delay_ms = 0
swap_delay_ms = 0
"#,
        data_dir.display()
    );
    let config = TomlConfig::from_toml_str(&toml_content)?;

    use color_swap::domain::ports::SwapConfig;
    let store = JsonFileStore::new(config.data_dir());
    let api = MockApi::new(store.clone(), config.api_delay(), config.simulate_errors());
    let repository = Arc::new(ApiVehicleRepository::new(api));
    let get_vehicles = GetVehicles::new(Arc::clone(&repository));
    let swap_colors = SwapVehicleColors::new(repository);
    let (mut view_model, _events) =
        VehicleViewModel::new(get_vehicles, swap_colors, config.swap_delay());

    view_model.load_vehicles().await;

    assert_eq!(view_model.state().phase(), Phase::Ready);
    assert!(data_dir.join("vehicles.json").exists());

    Ok(())
}

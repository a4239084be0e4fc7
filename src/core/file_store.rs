use crate::domain::model::{Vehicle, VehiclesDocument};
use crate::domain::ports::VehicleStore;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const DOCUMENT_FILE_NAME: &str = "vehicles.json";
const CAR_NAME: &str = "car";
const TRUCK_NAME: &str = "truck";
const CAR_SEED_COLOR: &str = "blue";
const TRUCK_SEED_COLOR: &str = "yellow";

/// File-backed store for the vehicles document. The document is created with
/// two seed entities on first use and rewritten wholesale on every save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    document_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            document_path: data_dir.as_ref().join(DOCUMENT_FILE_NAME),
        }
    }

    pub fn document_path(&self) -> &Path {
        &self.document_path
    }

    fn seed_vehicles() -> Vec<Vehicle> {
        vec![
            Vehicle::new(CAR_NAME, CAR_SEED_COLOR),
            Vehicle::new(TRUCK_NAME, TRUCK_SEED_COLOR),
        ]
    }

    fn create_initial_document_if_needed(&self) -> Result<()> {
        if self.document_path.exists() {
            return Ok(());
        }

        self.write_document(&Self::seed_vehicles())?;
        tracing::info!(
            "📄 Created initial document at {}",
            self.document_path.display()
        );
        Ok(())
    }

    fn read_document(&self) -> Result<Vec<Vehicle>> {
        let content = fs::read_to_string(&self.document_path)?;
        let document: VehiclesDocument = serde_json::from_str(&content)?;
        Ok(document.vehicles)
    }

    // Write-to-temp then rename, so a crash mid-write cannot corrupt the
    // existing document.
    fn write_document(&self, vehicles: &[Vehicle]) -> Result<()> {
        let document = VehiclesDocument {
            vehicles: vehicles.to_vec(),
        };
        let encoded = serde_json::to_string_pretty(&document)?;

        if let Some(parent) = self.document_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let parent = self.document_path.parent().unwrap_or(Path::new("."));
        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(encoded.as_bytes())?;
        temp.flush()?;
        temp.persist(&self.document_path).map_err(|e| e.error)?;

        tracing::debug!("💾 Document saved to {}", self.document_path.display());
        Ok(())
    }

    // One-time post-load normalization: when the tracked pair landed on the
    // same color, the truck is reset to its seed color and the fix is
    // persisted before the caller sees the list.
    fn repair_color_collision(&self, vehicles: &mut Vec<Vehicle>) -> Result<()> {
        if vehicles.len() < 2 {
            return Ok(());
        }

        let car_color = vehicles
            .iter()
            .find(|v| v.name == CAR_NAME)
            .map(|v| v.color.clone());
        let truck_color = vehicles
            .iter()
            .find(|v| v.name == TRUCK_NAME)
            .map(|v| v.color.clone());

        let (car_color, truck_color) = match (car_color, truck_color) {
            (Some(car_color), Some(truck_color)) => (car_color, truck_color),
            _ => return Ok(()),
        };

        tracing::debug!(
            "📥 Loaded '{}' = '{}', '{}' = '{}'",
            CAR_NAME,
            car_color,
            TRUCK_NAME,
            truck_color
        );

        if car_color != truck_color {
            return Ok(());
        }

        if let Some(index) = vehicles.iter().position(|v| v.name == TRUCK_NAME) {
            vehicles[index].color = TRUCK_SEED_COLOR.to_string();
            self.write_document(vehicles)?;
            tracing::info!(
                "✅ Reset '{}' color to '{}' (was same as '{}')",
                TRUCK_NAME,
                TRUCK_SEED_COLOR,
                CAR_NAME
            );
        }

        Ok(())
    }
}

impl VehicleStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Vehicle>> {
        self.create_initial_document_if_needed()?;

        let mut vehicles = self.read_document()?;
        self.repair_color_collision(&mut vehicles)?;
        Ok(vehicles)
    }

    async fn save(&self, vehicles: &[Vehicle]) -> Result<()> {
        self.write_document(vehicles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SwapError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_bootstraps_missing_document() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());

        let vehicles = store.load().await.unwrap();

        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles[0].name, "car");
        assert_eq!(vehicles[0].color, "blue");
        assert_eq!(vehicles[1].name, "truck");
        assert_eq!(vehicles[1].color, "yellow");
        assert!(store.document_path().exists());
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());

        let vehicles = vec![Vehicle::new("car", "green"), Vehicle::new("truck", "pink")];
        store.save(&vehicles).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, vehicles);
    }

    #[tokio::test]
    async fn test_load_repairs_color_collision_and_persists() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());

        let vehicles = vec![Vehicle::new("car", "red"), Vehicle::new("truck", "red")];
        store.save(&vehicles).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded[0].color, "red");
        assert_eq!(loaded[1].color, "yellow");

        // The fix is written back before load returns
        let raw = std::fs::read_to_string(store.document_path()).unwrap();
        let document: VehiclesDocument = serde_json::from_str(&raw).unwrap();
        assert_eq!(document.vehicles[1].color, "yellow");
    }

    #[tokio::test]
    async fn test_collision_repair_only_touches_first_truck() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());

        let vehicles = vec![
            Vehicle::new("car", "red"),
            Vehicle::new("truck", "red"),
            Vehicle::new("truck", "red"),
        ];
        store.save(&vehicles).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded[1].color, "yellow");
        assert_eq!(loaded[2].color, "red");
    }

    #[tokio::test]
    async fn test_no_repair_without_both_tracked_names() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());

        let vehicles = vec![Vehicle::new("car", "red"), Vehicle::new("bus", "red")];
        store.save(&vehicles).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded[0].color, "red");
        assert_eq!(loaded[1].color, "red");
    }

    #[tokio::test]
    async fn test_load_fails_on_malformed_document() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());

        std::fs::write(store.document_path(), "not json").unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, SwapError::DecodeError(_)));
    }
}

use clap::Parser;
use color_swap::core::viewmodel::{Phase, ViewEvent, ViewState};
use color_swap::domain::ports::SwapConfig;
use color_swap::utils::{logger, validation::Validate};
use color_swap::{
    ApiVehicleRepository, CliConfig, GetVehicles, JsonFileStore, MockApi, SwapVehicleColors,
    TomlConfig, VehicleViewModel,
};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting color-swap CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let success = match &config.config {
        Some(path) => {
            let file_config = match TomlConfig::from_file(path) {
                Ok(file_config) => file_config,
                Err(e) => {
                    tracing::error!("❌ Failed to load configuration file: {}", e);
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            };

            if let Err(e) = file_config.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }

            run(&file_config, config.swaps, config.show_document).await
        }
        None => {
            if let Err(e) = config.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }

            run(&config, config.swaps, config.show_document).await
        }
    };

    if !success {
        std::process::exit(1);
    }

    Ok(())
}

async fn run<C: SwapConfig>(settings: &C, swaps: usize, show_document: bool) -> bool {
    let store = JsonFileStore::new(settings.data_dir());
    let document_path = store.document_path().to_path_buf();

    let api = MockApi::new(store, settings.api_delay(), settings.simulate_errors());
    let repository = Arc::new(ApiVehicleRepository::new(api));
    let get_vehicles = GetVehicles::new(Arc::clone(&repository));
    let swap_vehicle_colors = SwapVehicleColors::new(repository);

    let (view_model, mut events) =
        VehicleViewModel::new(get_vehicles, swap_vehicle_colors, settings.swap_delay());
    let mut view_model = view_model.with_document_path(document_path);

    view_model.load_vehicles().await;
    render_pending(view_model.state(), &mut events, show_document);

    if view_model.state().phase() != Phase::Ready {
        return false;
    }

    for _ in 0..swaps {
        view_model.swap_colors().await;
        render_pending(view_model.state(), &mut events, show_document);

        if view_model.state().alert_message.is_some() {
            view_model.dismiss_alert();
        }
    }

    let done = view_model.state().phase() == Phase::Ready;
    if done {
        let state = view_model.state();
        let (color1, color2) = color_name(state);
        tracing::info!("✅ All operations completed");
        println!(
            "✅ Done - {} is {}, {} is {}",
            state.vehicle1_label(),
            color1,
            state.vehicle2_label(),
            color2,
        );
    }
    done
}

fn color_name(state: &ViewState) -> (&'static str, &'static str) {
    (
        state.vehicle1_color().palette_name().unwrap_or("blue"),
        state.vehicle2_color().palette_name().unwrap_or("blue"),
    )
}

fn render_pending(
    state: &ViewState,
    events: &mut UnboundedReceiver<ViewEvent>,
    show_document: bool,
) {
    while let Ok(event) = events.try_recv() {
        match event {
            ViewEvent::VehiclesChanged => {
                let (color1, color2) = color_name(state);
                println!("🚗 {} is {}", state.vehicle1_label(), color1);
                println!("🚚 {} is {}", state.vehicle2_label(), color2);
            }
            ViewEvent::StatusChanged(status) => println!("📟 {}", status),
            ViewEvent::ErrorChanged(Some(message)) => eprintln!("❌ {}", message),
            ViewEvent::DocumentChanged(content) => {
                if show_document {
                    println!("📄 Document:\n{}", content);
                }
            }
            ViewEvent::AlertRaised(message) => eprintln!("🚨 {}", message),
            _ => {}
        }
    }
}

#![allow(non_snake_case)]

mod client;

use dioxus_logger::tracing::{self, Level};
use slideshow::shell::{bootstrap::bootstrap, Config};

fn main() {
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    #[cfg(not(target_arch = "wasm32"))]
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let shell = match bootstrap(config) {
        Ok(shell) => shell,
        Err(e) => {
            tracing::error!("Failed to start application: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = shell.mount(&client::DioxusHost) {
        tracing::error!("Failed to mount application: {}", e);
        std::process::exit(1);
    }
}

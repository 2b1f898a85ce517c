//! Opens the test window, cycles its clear color until it is closed, then
//! tears everything down.
//!
//! Takes no arguments. Set `WINDOW_APP_CONFIG` to a `.toml` or `.ron` file to
//! override the defaults.

use anim_engine::config::{AppConfig, Config, ConfigError};
use anim_engine::foundation::logging;
use anim_engine::graphics::VulkanBackend;
use anim_engine::window::{GlfwBackend, WindowSystem};

const CONFIG_ENV: &str = "WINDOW_APP_CONFIG";

fn load_config() -> Result<AppConfig, ConfigError> {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return Ok(AppConfig::default());
    };

    log::info!("Loading configuration from {}", path);
    let config = AppConfig::load_from_file(&path)?;
    config.validate()?;
    Ok(config)
}

fn main() {
    logging::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("main error: configuration error: {}", e);
            std::process::exit(-1);
        }
    };

    let mut system = WindowSystem::from_config(
        GlfwBackend::new(config.target_fps),
        VulkanBackend::new(),
        &config,
    );

    if let Err(e) = system.initialize(config.window.width, config.window.height, &config.window.title) {
        log::error!("main error: Window init error ({} step): {}", e.step(), e);
        drop(system);
        std::process::exit(-1);
    }

    system.run_loop();
    system.cleanup();
}

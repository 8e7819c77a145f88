use std::{error::Error, sync::Arc};

use iced::Size;
use tracing::info;

use jellyadmin::{
    api::{HttpClient, JellyfinApi},
    config::{default_datadir, Config, DEFAULT_FILE_NAME},
};
use jellyadmin_gui::{
    app::{feedback::LogFeedback, App},
    args::{parse_args, Arg},
    logger::{level_filter, parse_log_level, setup_logger},
    VERSION,
};

fn main() -> Result<(), Box<dyn Error>> {
    let mut config_path = None;
    let mut device_id = None;
    for arg in parse_args(std::env::args().collect(), VERSION)? {
        match arg {
            Arg::ConfigPath(path) => config_path = Some(path),
            Arg::DeviceId(id) => device_id = Some(id),
        }
    }

    let datadir = default_datadir()?;
    let config_path = config_path.unwrap_or_else(|| datadir.join(DEFAULT_FILE_NAME));
    let config = Config::from_file(&config_path).map_err(|e| {
        format!(
            "Failed to load configuration file {}: {}",
            config_path.display(),
            e
        )
    })?;

    let log_level = match parse_log_level()? {
        Some(level) => level,
        None => level_filter(config.log_level()?),
    };
    setup_logger(log_level, &datadir)?;

    let device_id = device_id
        .or_else(|| config.device_id.clone())
        .ok_or("No device to open, use --device <ID> or set device_id in the configuration")?;

    info!("Connecting to {}", config.server_url);
    let api: Arc<dyn JellyfinApi + Sync + Send> = Arc::new(HttpClient::new(
        &config.server_url,
        config.access_token.clone(),
    ));

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window_size(Size::new(600.0, 720.0))
        .run_with(move || App::new(api, device_id, Arc::new(LogFeedback)))?;

    Ok(())
}

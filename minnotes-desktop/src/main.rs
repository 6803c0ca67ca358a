mod settings;
mod ui;

use minnotes_core::{RestGateway, Session};

fn main() -> iced::Result {
    env_logger::init();

    let config = match settings::resolve_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            eprintln!("minnotes: {e}");
            std::process::exit(1);
        }
    };

    // Remember an env-supplied connection so later launches work without it.
    if !settings::settings_file_path().exists() {
        let snapshot = settings::AppSettings {
            store_url: config.url.clone(),
            store_key: config.api_key.clone(),
            store_table: config.table.clone(),
        };
        if let Err(e) = settings::save_settings(&snapshot) {
            log::warn!("could not persist settings: {e}");
        }
    }

    let gateway = match RestGateway::new(config) {
        Ok(gateway) => gateway,
        Err(e) => {
            log::error!("{e}");
            eprintln!("minnotes: {e}");
            std::process::exit(1);
        }
    };

    ui::app::run(Session::new(gateway))
}

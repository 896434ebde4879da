//! Binary entry point: read configuration, start file logging, fetch the users
//! once, and drive the Ratatui event loop until the user exits.
use anyhow::Context;
use log::info;
use user_table::{init_logging, run_app, App, Config, UsersClient};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    init_logging(&config)?;
    info!("starting with endpoint {}", config.endpoint);

    let client = UsersClient::new(&config)?;
    let mut app = App::new(Box::new(client));
    app.reload();

    run_app(&mut app)
}

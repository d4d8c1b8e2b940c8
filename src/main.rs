#[macro_use] extern crate clap;

#[macro_use] mod gl_log;
mod app;
mod config;
mod fps;
mod graphics;
mod input;
mod scenes;
mod window;

use log::error;

use config::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_args() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = app::run(config) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

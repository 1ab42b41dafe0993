pub mod coffee_machine;
pub mod config;
pub mod constants;
pub mod container;
pub mod cup_size;
pub mod errors;
pub mod menu;
pub mod statistics;

use std::io;

use coffee_machine::CoffeeMachine;
use config::{read_configuration, MachineConfiguration};
use constants::CONFIGURATION_FILE;
use log::{error, warn, LevelFilter};
use menu::Menu;
use simple_logger::SimpleLogger;

fn main() {
    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Warn).env().init() {
        eprintln!("Could not start the logger: {}", e);
    }

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| CONFIGURATION_FILE.to_string());
    let configuration = read_configuration(&path).unwrap_or_else(|e| {
        warn!("[MAIN] {} ({}), using the default inventory", e, path);
        MachineConfiguration::default()
    });

    let mut machine = CoffeeMachine::from_configuration(&configuration);
    let stdin = io::stdin();
    if let Err(e) = Menu::new(&mut machine, stdin.lock(), io::stdout()).run() {
        error!("[MAIN] Error while running the menu: {}", e);
    }
}

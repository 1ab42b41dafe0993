//! Lectura del inventario inicial de la maquina desde un archivo JSON
use log::{debug, info};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    constants::{INITIAL_COFFEE, INITIAL_CUPS_PER_SIZE, INITIAL_SUGAR},
    cup_size::CupSize,
    errors::CoffeeMakerError,
};

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JsonCups {
    #[serde(default)]
    pub small: u64,
    #[serde(default)]
    pub medium: u64,
    #[serde(default)]
    pub large: u64,
}

/// Inventario con el que arranca la maquina
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MachineConfiguration {
    pub coffee: u64,
    pub sugar: u64,
    pub cups: JsonCups,
}

impl Default for MachineConfiguration {
    fn default() -> Self {
        MachineConfiguration {
            coffee: INITIAL_COFFEE,
            sugar: INITIAL_SUGAR,
            cups: JsonCups {
                small: INITIAL_CUPS_PER_SIZE,
                medium: INITIAL_CUPS_PER_SIZE,
                large: INITIAL_CUPS_PER_SIZE,
            },
        }
    }
}

impl MachineConfiguration {
    pub fn cups_by_size(&self) -> BTreeMap<CupSize, u64> {
        BTreeMap::from([
            (CupSize::Small, self.cups.small),
            (CupSize::Medium, self.cups.medium),
            (CupSize::Large, self.cups.large),
        ])
    }
}

pub fn read_configuration<P: AsRef<Path>>(path: P) -> Result<MachineConfiguration, CoffeeMakerError> {
    let file = File::open(&path)?;
    let reader = BufReader::new(file);
    let configuration: MachineConfiguration = serde_json::from_reader(reader)?;
    debug!("[CONFIG] Read {:?}", configuration);
    info!("[CONFIG] Loaded configuration from {}", path.as_ref().display());
    Ok(configuration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, path::PathBuf};

    fn write_temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), name));
        fs::write(&path, contents).expect("could not write temp file");
        path
    }

    #[test]
    fn should_default_to_100_coffee_50_sugar_and_10_cups() {
        let configuration = MachineConfiguration::default();
        assert_eq!(100, configuration.coffee);
        assert_eq!(50, configuration.sugar);
        assert_eq!(
            vec![10, 10, 10],
            configuration.cups_by_size().values().copied().collect::<Vec<u64>>()
        );
    }

    #[test]
    fn should_read_the_configuration_from_a_file() {
        let path = write_temp_file(
            "machine-ok.json",
            r#"{"coffee": 30, "sugar": 4, "cups": {"small": 1, "medium": 2, "large": 3}}"#,
        );
        let configuration = read_configuration(&path).expect("should parse");
        fs::remove_file(&path).ok();

        assert_eq!(30, configuration.coffee);
        assert_eq!(4, configuration.sugar);
        let cups = configuration.cups_by_size();
        assert_eq!(Some(&1), cups.get(&CupSize::Small));
        assert_eq!(Some(&2), cups.get(&CupSize::Medium));
        assert_eq!(Some(&3), cups.get(&CupSize::Large));
    }

    #[test]
    fn should_treat_missing_cup_sizes_as_zero() {
        let path = write_temp_file(
            "machine-partial.json",
            r#"{"coffee": 30, "sugar": 4, "cups": {"large": 3}}"#,
        );
        let configuration = read_configuration(&path).expect("should parse");
        fs::remove_file(&path).ok();

        assert_eq!(0, configuration.cups.small);
        assert_eq!(3, configuration.cups.large);
    }

    #[test]
    fn should_fail_if_the_file_does_not_exist() {
        let result = read_configuration("this-file-does-not-exist.json");
        assert_eq!(Err(CoffeeMakerError::FileReaderError), result);
    }

    #[test]
    fn should_fail_with_negative_quantities() {
        let path = write_temp_file(
            "machine-negative.json",
            r#"{"coffee": -1, "sugar": 4, "cups": {}}"#,
        );
        let result = read_configuration(&path);
        fs::remove_file(&path).ok();

        assert_eq!(Err(CoffeeMakerError::FileReaderError), result);
    }
}

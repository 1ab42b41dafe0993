//! Maquina de cafe. Guarda el inventario y la seleccion del usuario, y sirve los pedidos.
use std::collections::BTreeMap;

use log::{debug, info, warn};

use crate::{
    config::MachineConfiguration,
    container::Container,
    cup_size::CupSize,
    errors::{CoffeeMakerError, MissingResource},
};

/// Vaso servido por la maquina, con lo que se uso para prepararlo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispensedCup {
    pub size: CupSize,
    pub sugar: u64,
    pub coffee: u64,
}

/// Representa a la maquina de cafe.
/// Tiene el contenedor de cafe (en Oz), el de azucar (en cucharadas) y uno de vasos por cada tamaño,
/// junto con el tamaño y el azucar que eligio el usuario para el proximo vaso.
pub struct CoffeeMachine {
    coffee: Container,
    sugar: Container,
    cups: BTreeMap<CupSize, Container>,
    selected_size: Option<CupSize>,
    selected_sugar: u64,
}

impl CoffeeMachine {
    /// Los tamaños que no esten en `cups` no se pueden elegir ni recargar.
    pub fn new(coffee: u64, sugar: u64, cups: BTreeMap<CupSize, u64>) -> CoffeeMachine {
        CoffeeMachine {
            coffee: Container::new(coffee),
            sugar: Container::new(sugar),
            cups: cups
                .into_iter()
                .map(|(size, quantity)| (size, Container::new(quantity)))
                .collect(),
            selected_size: None,
            selected_sugar: 0,
        }
    }

    pub fn from_configuration(configuration: &MachineConfiguration) -> CoffeeMachine {
        CoffeeMachine::new(
            configuration.coffee,
            configuration.sugar,
            configuration.cups_by_size(),
        )
    }

    pub fn select_cup_size(&mut self, size: &str) -> Result<CupSize, CoffeeMakerError> {
        let size = self.known_size(size)?;
        self.selected_size = Some(size);
        info!("[MACHINE] Selected cup {}", size);
        Ok(size)
    }

    pub fn select_sugar(&mut self, spoons: i64) -> Result<u64, CoffeeMakerError> {
        let spoons = u64::try_from(spoons).map_err(|_| CoffeeMakerError::InvalidSugar(spoons))?;
        self.selected_sugar = spoons;
        info!("[MACHINE] Selected {} spoons of sugar", spoons);
        Ok(spoons)
    }

    /// Sirve un vaso con la seleccion actual. Primero verifica que alcancen vasos, azucar y cafe,
    /// y recien despues descuenta. Si algo falta la maquina queda como estaba.
    /// El tamaño seleccionado siempre esta en `cups` (`select_cup_size` lo verifica),
    /// asi que el `InvalidCup` de la busqueda no deberia darse.
    pub fn dispense(&mut self) -> Result<DispensedCup, CoffeeMakerError> {
        let size = self
            .selected_size
            .ok_or(CoffeeMakerError::OutOfResources(MissingResource::NoSizeSelected))?;
        let coffee_required = size.coffee_required();

        let cups = self
            .cups
            .get_mut(&size)
            .ok_or_else(|| CoffeeMakerError::InvalidCup(size.to_string()))?;
        if !cups.has(1) {
            return Err(out_of(MissingResource::NoCups, size));
        }
        if !self.sugar.has(self.selected_sugar) {
            return Err(out_of(MissingResource::NoSugar, size));
        }
        if !self.coffee.has(coffee_required) {
            return Err(out_of(MissingResource::NoCoffee, size));
        }

        cups.consume(1);
        self.sugar.consume(self.selected_sugar);
        self.coffee.consume(coffee_required);
        debug!(
            "[MACHINE] Remains {} cups {}, {} sugar, {} coffee",
            size, cups.remaining, self.sugar.remaining, self.coffee.remaining
        );

        let cup = DispensedCup {
            size,
            sugar: self.selected_sugar,
            coffee: coffee_required,
        };
        self.reset_selection();
        info!("[MACHINE] Dispensed {:?}", cup);
        Ok(cup)
    }

    pub fn refill_coffee(&mut self, amount: i64) -> Result<u64, CoffeeMakerError> {
        let remaining = self
            .coffee
            .refill(valid_amount(amount)?)
            .ok_or(CoffeeMakerError::InvalidAmount(amount))?;
        info!("[MACHINE] Refilled coffee, there is {} Oz", remaining);
        Ok(remaining)
    }

    pub fn refill_sugar(&mut self, amount: i64) -> Result<u64, CoffeeMakerError> {
        let remaining = self
            .sugar
            .refill(valid_amount(amount)?)
            .ok_or(CoffeeMakerError::InvalidAmount(amount))?;
        info!("[MACHINE] Refilled sugar, there are {} spoons", remaining);
        Ok(remaining)
    }

    pub fn refill_cups(&mut self, size: &str, amount: i64) -> Result<u64, CoffeeMakerError> {
        let size = self.known_size(size)?;
        let quantity = valid_amount(amount)?;
        let cups = self
            .cups
            .get_mut(&size)
            .ok_or_else(|| CoffeeMakerError::InvalidCup(size.to_string()))?;
        let remaining = cups
            .refill(quantity)
            .ok_or(CoffeeMakerError::InvalidAmount(amount))?;
        info!("[MACHINE] Refilled cups {}, there are {}", size, remaining);
        Ok(remaining)
    }

    pub fn coffee_container(&self) -> &Container {
        &self.coffee
    }

    pub fn sugar_container(&self) -> &Container {
        &self.sugar
    }

    pub fn cups_by_size(&self) -> &BTreeMap<CupSize, Container> {
        &self.cups
    }

    pub fn selected_size(&self) -> Option<CupSize> {
        self.selected_size
    }

    pub fn selected_sugar(&self) -> u64 {
        self.selected_sugar
    }

    fn known_size(&self, name: &str) -> Result<CupSize, CoffeeMakerError> {
        let size: CupSize = name.parse()?;
        if !self.cups.contains_key(&size) {
            return Err(CoffeeMakerError::InvalidCup(name.to_string()));
        }
        Ok(size)
    }

    fn reset_selection(&mut self) {
        self.selected_size = None;
        self.selected_sugar = 0;
    }
}

#[cfg(test)]
impl CoffeeMachine {
    pub fn coffee(&self) -> u64 {
        self.coffee.remaining
    }

    pub fn sugar(&self) -> u64 {
        self.sugar.remaining
    }

    pub fn cups(&self, size: CupSize) -> Option<u64> {
        self.cups.get(&size).map(|container| container.remaining)
    }
}

fn out_of(missing: MissingResource, size: CupSize) -> CoffeeMakerError {
    warn!("[MACHINE] Could not dispense {} cup: {}", size, missing);
    CoffeeMakerError::OutOfResources(missing)
}

fn valid_amount(amount: i64) -> Result<u64, CoffeeMakerError> {
    u64::try_from(amount).map_err(|_| CoffeeMakerError::InvalidAmount(amount))
}

use std::fmt;

/// Recurso que falto al intentar servir un vaso
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingResource {
    NoSizeSelected,
    NoCups,
    NoSugar,
    NoCoffee,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoffeeMakerError {
    InvalidCup(String),
    InvalidSugar(i64),
    OutOfResources(MissingResource),
    InvalidAmount(i64),
    FileReaderError,
}

impl fmt::Display for MissingResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            MissingResource::NoSizeSelected => "no size selected",
            MissingResource::NoCups => "no cups",
            MissingResource::NoSugar => "no sugar",
            MissingResource::NoCoffee => "no coffee",
        };
        write!(f, "{}", message)
    }
}

impl fmt::Display for CoffeeMakerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoffeeMakerError::InvalidCup(size) => write!(f, "invalid cup size: {}", size),
            CoffeeMakerError::InvalidSugar(spoons) => {
                write!(f, "sugar can not be negative: {}", spoons)
            }
            CoffeeMakerError::OutOfResources(missing) => write!(f, "{}", missing),
            CoffeeMakerError::InvalidAmount(amount) => {
                write!(f, "invalid refill amount: {}", amount)
            }
            CoffeeMakerError::FileReaderError => write!(f, "could not read the configuration file"),
        }
    }
}

impl std::error::Error for CoffeeMakerError {}

impl From<std::io::Error> for CoffeeMakerError {
    fn from(_: std::io::Error) -> Self {
        CoffeeMakerError::FileReaderError
    }
}

impl From<serde_json::Error> for CoffeeMakerError {
    fn from(_: serde_json::Error) -> Self {
        CoffeeMakerError::FileReaderError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_show_which_resource_is_missing() {
        let error = CoffeeMakerError::OutOfResources(MissingResource::NoCups);
        assert_eq!("no cups", error.to_string());
        let error = CoffeeMakerError::OutOfResources(MissingResource::NoSizeSelected);
        assert_eq!("no size selected", error.to_string());
    }
}

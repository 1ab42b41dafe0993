//! Parametros de configuracion de la maquina de cafe

/// Cafe inicial (en Oz) si no hay archivo de configuracion
pub const INITIAL_COFFEE: u64 = 100;

/// Cucharadas de azucar iniciales si no hay archivo de configuracion
pub const INITIAL_SUGAR: u64 = 50;

/// Vasos iniciales de cada tamaño si no hay archivo de configuracion
pub const INITIAL_CUPS_PER_SIZE: u64 = 10;

/// Archivo de configuracion que se lee si no se indica otro por linea de comandos
pub const CONFIGURATION_FILE: &str = "machine.json";

/// Cafe (en Oz) que lleva un vaso pequeño
pub const SMALL_CUP_COFFEE: u64 = 3;

/// Cafe (en Oz) que lleva un vaso mediano
pub const MEDIUM_CUP_COFFEE: u64 = 5;

/// Cafe (en Oz) que lleva un vaso grande
pub const LARGE_CUP_COFFEE: u64 = 7;

//! Menu de consola. Traduce lo que escribe el usuario en llamadas a la maquina e imprime el resultado.
use std::io::{self, BufRead, Write};

use log::debug;

use crate::{coffee_machine::CoffeeMachine, cup_size::CupSize, statistics::status_report};

const INVALID_OPTION: &str = "Invalid option. Please try again.";
const INVALID_NUMBER: &str = "Invalid input. Please enter an integer.";

pub struct Menu<'a, R: BufRead, W: Write> {
    machine: &'a mut CoffeeMachine,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(machine: &'a mut CoffeeMachine, input: R, output: W) -> Menu<'a, R, W> {
        Menu { machine, input, output }
    }

    /// Muestra el menu hasta que el usuario elige salir o se termina la entrada
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;
            let option = match self.prompt("Choose an option: ")? {
                Some(option) => option,
                None => break,
            };
            debug!("[MENU] Option {}", option);
            match option.as_str() {
                "1" => self.select_size()?,
                "2" => self.select_sugar()?,
                "3" => self.dispense()?,
                "4" => self.refill()?,
                "5" => writeln!(self.output, "{}", status_report(self.machine))?,
                "6" => break,
                _ => writeln!(self.output, "{}", INVALID_OPTION)?,
            }
        }
        writeln!(self.output, "Thanks for using the coffee machine. Goodbye!")
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Coffee Vending Machine ---")?;
        writeln!(self.output, "1. Select cup size")?;
        writeln!(self.output, "2. Select sugar")?;
        writeln!(self.output, "3. Dispense coffee")?;
        writeln!(self.output, "4. Refill resources")?;
        writeln!(self.output, "5. Show machine status")?;
        writeln!(self.output, "6. Exit")
    }

    fn select_size(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nSelect the cup size:")?;
        for (number, size) in CupSize::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {} ({} Oz)", number + 1, size, size.coffee_required())?;
        }
        let size = match self.prompt("Enter the number: ")?.as_deref() {
            Some("1") => CupSize::Small,
            Some("2") => CupSize::Medium,
            Some("3") => CupSize::Large,
            _ => return writeln!(self.output, "{}", INVALID_OPTION),
        };
        match self.machine.select_cup_size(&size.to_string()) {
            Ok(size) => writeln!(self.output, "Cup selected: {}", size),
            Err(e) => writeln!(self.output, "Error: {}", e),
        }
    }

    fn select_sugar(&mut self) -> io::Result<()> {
        let spoons = match self.prompt_number("Enter the spoons of sugar: ")? {
            Some(spoons) => spoons,
            None => return Ok(()),
        };
        match self.machine.select_sugar(spoons) {
            Ok(spoons) => writeln!(self.output, "Spoons of sugar selected: {}", spoons),
            Err(e) => writeln!(self.output, "Error: {}", e),
        }
    }

    fn dispense(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nDispensing coffee...")?;
        match self.machine.dispense() {
            Ok(cup) => writeln!(
                self.output,
                "Your {} coffee ({} Oz, {} spoons of sugar) is ready!",
                cup.size, cup.coffee, cup.sugar
            ),
            Err(e) => writeln!(self.output, "Error: {}", e),
        }
    }

    fn refill(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nRefill resources:")?;
        writeln!(self.output, "1. Coffee")?;
        writeln!(self.output, "2. Sugar")?;
        writeln!(self.output, "3. Cups")?;
        let result = match self.prompt("Enter the resource to refill: ")?.as_deref() {
            Some("1") => match self.prompt_number("Coffee to refill (Oz): ")? {
                Some(amount) => self
                    .machine
                    .refill_coffee(amount)
                    .map(|remaining| format!("Coffee refilled. There are {} Oz.", remaining)),
                None => return Ok(()),
            },
            Some("2") => match self.prompt_number("Sugar to refill (spoons): ")? {
                Some(amount) => self
                    .machine
                    .refill_sugar(amount)
                    .map(|remaining| format!("Sugar refilled. There are {} spoons.", remaining)),
                None => return Ok(()),
            },
            Some("3") => {
                let size = self
                    .prompt("Cup size to refill (Small, Medium, Large): ")?
                    .unwrap_or_default();
                match self.prompt_number("Cups to refill: ")? {
                    Some(amount) => self.machine.refill_cups(&size, amount).map(|remaining| {
                        format!("{} cups refilled. There are {} units.", size, remaining)
                    }),
                    None => return Ok(()),
                }
            }
            _ => return writeln!(self.output, "{}", INVALID_OPTION),
        };
        match result {
            Ok(message) => writeln!(self.output, "{}", message),
            Err(e) => writeln!(self.output, "Error: {}", e),
        }
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Devuelve `None` si no se ingreso un entero (y ya se le aviso al usuario)
    fn prompt_number(&mut self, message: &str) -> io::Result<Option<i64>> {
        let line = self.prompt(message)?.unwrap_or_default();
        match line.parse::<i64>() {
            Ok(number) => Ok(Some(number)),
            Err(_) => {
                writeln!(self.output, "{}", INVALID_NUMBER)?;
                Ok(None)
            }
        }
    }
}

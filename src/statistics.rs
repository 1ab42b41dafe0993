//! Estado de la maquina para mostrar por pantalla
use crate::{coffee_machine::CoffeeMachine, container::Container};

pub fn status_report(machine: &CoffeeMachine) -> String {
    let mut statistics = String::from("--- Machine status | (remaining, consumed) ---\n");
    add_container_to_statistics_string(&mut statistics, "Coffee", "Oz", machine.coffee_container());
    add_container_to_statistics_string(&mut statistics, "Sugar", "spoons", machine.sugar_container());
    statistics.push_str("Cups:\n");
    for (size, cups) in machine.cups_by_size() {
        add_container_to_statistics_string(&mut statistics, &format!("  {}", size), "units", cups);
    }
    let selected_size = match machine.selected_size() {
        Some(size) => size.to_string(),
        None => String::from("none"),
    };
    statistics.push_str(&format!(
        "Selection: cup {}, {} spoons of sugar\n",
        selected_size,
        machine.selected_sugar()
    ));
    statistics.push_str("-----------------------------------------------");
    statistics
}

fn add_container_to_statistics_string(
    statistics: &mut String,
    name: &str,
    unit: &str,
    container: &Container,
) {
    statistics.push_str(&format!(
        "{}: {} {} ({} consumed)\n",
        name, container.remaining, unit, container.consumed
    ));
}

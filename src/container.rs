/// Contenedor de un recurso de la maquina (cafe, azucar o vasos de un tamaño).
/// Lleva lo que queda y lo consumido desde que arranco la maquina.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub remaining: u64,
    pub consumed: u64,
}

impl Container {
    pub fn new(initial_capacity: u64) -> Container {
        Container { remaining: initial_capacity, consumed: 0 }
    }

    pub fn has(&self, quantity: u64) -> bool {
        quantity <= self.remaining
    }

    /// Consume `quantity` del contenedor. Quien llama tiene que haber verificado antes con `has`.
    pub fn consume(&mut self, quantity: u64) {
        self.remaining -= quantity;
        self.consumed = self.consumed.saturating_add(quantity);
    }

    /// Devuelve lo que queda despues de recargar, o `None` si no entra (y no se toca nada).
    pub fn refill(&mut self, quantity: u64) -> Option<u64> {
        self.remaining = self.remaining.checked_add(quantity)?;
        Some(self.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_a_container_with_nothing_consumed() {
        let container = Container::new(10);
        assert_eq!(10, container.remaining);
        assert_eq!(0, container.consumed);
    }

    #[test]
    fn should_move_quantity_from_remaining_to_consumed() {
        let mut container = Container::new(10);
        container.consume(3);
        assert_eq!(7, container.remaining);
        assert_eq!(3, container.consumed);
    }

    #[test]
    fn should_tell_if_there_is_enough() {
        let container = Container::new(5);
        assert_eq!(true, container.has(5));
        assert_eq!(false, container.has(6));
    }

    #[test]
    fn should_refill_without_touching_consumed() {
        let mut container = Container::new(1);
        container.consume(1);
        assert_eq!(Some(4), container.refill(4));
        assert_eq!(1, container.consumed);
    }

    #[test]
    fn should_not_refill_past_the_capacity() {
        let mut container = Container::new(u64::MAX - 1);
        assert_eq!(None, container.refill(2));
        assert_eq!(u64::MAX - 1, container.remaining);
        assert_eq!(Some(u64::MAX), container.refill(1));
    }
}

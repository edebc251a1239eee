use super::Cell;

/// Trait for cellular automaton transition rules.
/// `Grid::step` is generic over it so the neighbor counting stays in one place.
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Rulestring in B/S notation
    fn description(&self) -> &'static str;

    /// Apply rule to compute next cell state
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell;
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn description(&self) -> &'static str {
        "B3/S23"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        current.evolve(neighbors)
    }
}

/// Get default rule (Conway's Life)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(ConwayRule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conway_rules() {
        let rule = ConwayRule;

        // Underpopulation
        assert_eq!(rule.evolve(Cell::Alive, 0), Cell::Dead);
        assert_eq!(rule.evolve(Cell::Alive, 1), Cell::Dead);

        // Survival
        assert_eq!(rule.evolve(Cell::Alive, 2), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Alive, 3), Cell::Alive);

        // Overpopulation
        assert_eq!(rule.evolve(Cell::Alive, 4), Cell::Dead);

        // Reproduction
        assert_eq!(rule.evolve(Cell::Dead, 3), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Dead, 4), Cell::Dead);
    }

    #[test]
    fn test_default_rule_is_conway() {
        let rule = default_rule();
        assert_eq!(rule.name(), "Conway");
        assert_eq!(rule.description(), "B3/S23");
    }
}

//! Pool availability overview
//!
//! Classifies every unit of a pool as free or committed (and to which rack),
//! from the current installation snapshot. Backs the availability displays.

use shared::models::{Installation, Pool, PrinterKind, Rack};
use std::collections::HashMap;

/// Where one unit currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitState {
    Free,
    Committed { rack: Rack },
}

/// One pool unit with its state
#[derive(Debug, Clone, Copy)]
pub struct UnitStatus {
    pub number: u8,
    pub state: UnitState,
}

/// Full classification of one pool
#[derive(Debug, Clone)]
pub struct PoolStatus {
    pub pool: Pool,
    pub units: Vec<UnitStatus>,
}

impl PoolStatus {
    pub fn free_count(&self) -> usize {
        self.units
            .iter()
            .filter(|u| u.state == UnitState::Free)
            .count()
    }

    pub fn committed_count(&self) -> usize {
        self.units.len() - self.free_count()
    }
}

/// Classify every unit of `pool` against the committed installations
pub fn pool_status(pool: Pool, installations: &[Installation]) -> PoolStatus {
    let mut committed: HashMap<u8, Rack> = HashMap::new();
    for inst in installations {
        match pool {
            Pool::Laptop => {
                committed.insert(inst.laptop, inst.rack);
            }
            Pool::Brother | Pool::Godex => {
                let kind = match pool {
                    Pool::Brother => PrinterKind::Brother,
                    _ => PrinterKind::Godex,
                };
                if inst.printer_type == Some(kind) {
                    if let Some(number) = inst.printer_number {
                        committed.insert(number, inst.rack);
                    }
                }
                if inst.second_printer_type == Some(kind) {
                    if let Some(number) = inst.second_printer_number {
                        committed.insert(number, inst.rack);
                    }
                }
            }
        }
    }

    let units = pool
        .numbers()
        .map(|number| UnitStatus {
            number,
            state: committed
                .get(&number)
                .map(|rack| UnitState::Committed { rack: *rack })
                .unwrap_or(UnitState::Free),
        })
        .collect();

    PoolStatus { pool, units }
}

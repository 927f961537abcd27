//! Committed occupancy and session-level exclusion
//!
//! The offered set for any pool excludes numbers committed to persisted
//! installations and, in bulk mode, numbers taken by other configuration
//! entries of the same in-progress session. Exclusion sets are rebuilt from
//! scratch on every query; nothing here is cached or diffed.

use super::session::RackConfig;
use shared::models::{Installation, PrinterKind, Rack};
use std::collections::HashSet;

/// One selectable number, with its disabled flag.
/// Occupied numbers stay in the list (rendered disabled), so paging always
/// operates over the full pool range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotOption {
    pub number: u8,
    pub taken: bool,
}

/// Snapshot of what the committed installations occupy
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    racks: HashSet<Rack>,
    laptops: HashSet<u8>,
    brother: HashSet<u8>,
    godex: HashSet<u8>,
}

impl Occupancy {
    /// Build the snapshot from the current committed installations.
    /// Printer numbers count whether assigned as primary or secondary.
    pub fn from_installations(installations: &[Installation]) -> Self {
        let mut occ = Self::default();
        for inst in installations {
            occ.racks.insert(inst.rack);
            occ.laptops.insert(inst.laptop);
            if let (Some(kind), Some(number)) = (inst.printer_type, inst.printer_number) {
                occ.printers_mut(kind).insert(number);
            }
            if let (Some(kind), Some(number)) = (inst.second_printer_type, inst.second_printer_number)
            {
                occ.printers_mut(kind).insert(number);
            }
        }
        occ
    }

    pub fn rack_taken(&self, rack: Rack) -> bool {
        self.racks.contains(&rack)
    }

    pub fn laptop_taken(&self, number: u8) -> bool {
        self.laptops.contains(&number)
    }

    pub fn printer_taken(&self, kind: PrinterKind, number: u8) -> bool {
        self.printers(kind).contains(&number)
    }

    pub(crate) fn laptops(&self) -> &HashSet<u8> {
        &self.laptops
    }

    pub(crate) fn printers(&self, kind: PrinterKind) -> &HashSet<u8> {
        match kind {
            PrinterKind::Brother => &self.brother,
            PrinterKind::Godex => &self.godex,
        }
    }

    fn printers_mut(&mut self, kind: PrinterKind) -> &mut HashSet<u8> {
        match kind {
            PrinterKind::Brother => &mut self.brother,
            PrinterKind::Godex => &mut self.godex,
        }
    }
}

/// Laptop numbers excluded for the entry at `exempt`: committed numbers plus
/// every other configuration entry's laptop. The exempt entry's own choice
/// stays selectable so it can be revisited and changed.
pub(crate) fn excluded_laptops(
    occupancy: &Occupancy,
    configs: &[RackConfig],
    exempt: Option<usize>,
) -> HashSet<u8> {
    let mut set = occupancy.laptops().clone();
    for (idx, config) in configs.iter().enumerate() {
        if Some(idx) == exempt {
            continue;
        }
        if let Some(laptop) = config.laptop {
            set.insert(laptop);
        }
    }
    set
}

/// Printer numbers of `kind` excluded for the entry at `exempt`: committed
/// numbers (primary and secondary alike) plus both printer fields of every
/// other configuration entry with a matching type.
pub(crate) fn excluded_printers(
    occupancy: &Occupancy,
    kind: PrinterKind,
    configs: &[RackConfig],
    exempt: Option<usize>,
) -> HashSet<u8> {
    let mut set = occupancy.printers(kind).clone();
    for (idx, config) in configs.iter().enumerate() {
        if Some(idx) == exempt {
            continue;
        }
        if config.printer.kind == Some(kind) {
            if let Some(number) = config.printer.number {
                set.insert(number);
            }
        }
        if config.second_printer.kind == Some(kind) {
            if let Some(number) = config.second_printer.number {
                set.insert(number);
            }
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Zone;

    fn installation(rack: &str, laptop: u8) -> Installation {
        Installation {
            id: 1,
            rack: rack.parse().unwrap(),
            laptop,
            printer_type: Some(PrinterKind::Brother),
            printer_number: Some(4),
            second_printer_type: Some(PrinterKind::Godex),
            second_printer_number: Some(9),
            event_id: None,
            user_id: None,
            username: None,
            date: None,
        }
    }

    #[test]
    fn snapshot_counts_both_printer_slots() {
        let occ = Occupancy::from_installations(&[installation("E15", 3)]);
        assert!(occ.rack_taken(Rack::new(Zone::E, 15).unwrap()));
        assert!(occ.laptop_taken(3));
        assert!(occ.printer_taken(PrinterKind::Brother, 4));
        assert!(occ.printer_taken(PrinterKind::Godex, 9));
        assert!(!occ.printer_taken(PrinterKind::Godex, 4));
    }

    #[test]
    fn exempt_entry_keeps_its_own_laptop_selectable() {
        let occ = Occupancy::default();
        let mut first = RackConfig::new("E12".parse().unwrap());
        first.laptop = Some(7);
        let mut second = RackConfig::new("E13".parse().unwrap());
        second.laptop = Some(8);
        let configs = [first, second];

        let for_first = excluded_laptops(&occ, &configs, Some(0));
        assert!(!for_first.contains(&7));
        assert!(for_first.contains(&8));

        let for_second = excluded_laptops(&occ, &configs, Some(1));
        assert!(for_second.contains(&7));
        assert!(!for_second.contains(&8));
    }

    #[test]
    fn printer_exclusion_matches_type_across_both_slots() {
        let occ = Occupancy::default();
        let mut other = RackConfig::new("D3".parse().unwrap());
        other.printer.kind = Some(PrinterKind::Brother);
        other.printer.number = Some(2);
        other.second_printer.kind = Some(PrinterKind::Godex);
        other.second_printer.number = Some(5);
        let configs = [RackConfig::new("D4".parse().unwrap()), other];

        let brother = excluded_printers(&occ, PrinterKind::Brother, &configs, Some(0));
        assert!(brother.contains(&2));
        assert!(!brother.contains(&5));

        let godex = excluded_printers(&occ, PrinterKind::Godex, &configs, Some(0));
        assert!(godex.contains(&5));
        assert!(!godex.contains(&2));
    }
}

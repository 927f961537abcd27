//! Wizard session state machine
//!
//! Ephemeral, single-user state of one open wizard dialog. The session owns
//! every selection made so far; presentation only renders the option lists
//! the session computes and calls one transition per tap. Closing the dialog
//! drops the session; nothing here is persisted.

use super::availability::{self, Occupancy, SlotOption};
use expo_client::ClientError;
use shared::models::{Event, InstallationDraft, Pool, PrinterKind, Rack, RackError, Zone, ZONES};
use thiserror::Error;

/// Creation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardMode {
    Single,
    Bulk,
}

/// State machine position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Mode,
    Event,
    Zone,
    Booth,
    Laptop,
    PrinterType,
    PrinterNumber,
    SecondPrinterType,
    SecondPrinterNumber,
    BulkConfig,
    BulkSummary,
}

/// Which of the two printer slots of a rack is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrinterField {
    Primary,
    Secondary,
}

/// Result of a forward transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAdvance {
    /// More steps follow
    Next,
    /// The flow is complete; the caller should submit
    ReadyToSubmit,
}

/// One printer choice: a family and a number within it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrinterSlot {
    pub kind: Option<PrinterKind>,
    pub number: Option<u8>,
}

impl PrinterSlot {
    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Per-rack configuration of a bulk session
#[derive(Debug, Clone)]
pub struct RackConfig {
    pub rack: Rack,
    pub laptop: Option<u8>,
    pub printer: PrinterSlot,
    pub second_printer: PrinterSlot,
}

impl RackConfig {
    pub fn new(rack: Rack) -> Self {
        Self {
            rack,
            laptop: None,
            printer: PrinterSlot::default(),
            second_printer: PrinterSlot::default(),
        }
    }

    /// A configuration is submittable once it has a laptop
    pub fn is_configured(&self) -> bool {
        self.laptop.is_some()
    }
}

fn join_racks(racks: &[Rack]) -> String {
    racks
        .iter()
        .map(Rack::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("expected step {expected:?}, session is at {actual:?}")]
    WrongStep { expected: WizardStep, actual: WizardStep },

    #[error("no zone selected")]
    NoZone,

    #[error(transparent)]
    Rack(#[from] RackError),

    #[error("rack {0} is already occupied")]
    RackOccupied(Rack),

    #[error("{pool:?} #{number} does not exist")]
    NoSuchNumber { pool: Pool, number: u8 },

    #[error("{pool:?} #{number} is not available")]
    Unavailable { pool: Pool, number: u8 },

    #[error("printer number chosen before a printer type")]
    NoPrinterKind,

    #[error("no racks selected")]
    NoRacksSelected,

    #[error("missing selection: {0}")]
    MissingSelection(&'static str),

    #[error("rack {0} has no laptop assigned")]
    ConfigIncomplete(Rack),

    #[error("racks missing a laptop: {}", join_racks(.0))]
    UnconfiguredRacks(Vec<Rack>),

    #[error("store error: {0}")]
    Store(#[from] ClientError),
}

/// In-progress wizard state
#[derive(Debug, Clone)]
pub struct WizardSession {
    mode: WizardMode,
    step: WizardStep,
    event_id: Option<i64>,
    zone: Option<Zone>,
    booth: Option<u8>,
    laptop: Option<u8>,
    printer: PrinterSlot,
    second_printer: PrinterSlot,
    /// Bulk: toggled booth numbers, in selection order
    booths: Vec<u8>,
    /// Bulk: one configuration per selected rack
    configs: Vec<RackConfig>,
    /// Bulk: which configuration is being edited
    cursor: usize,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    pub fn new() -> Self {
        Self {
            mode: WizardMode::Single,
            step: WizardStep::Mode,
            event_id: None,
            zone: None,
            booth: None,
            laptop: None,
            printer: PrinterSlot::default(),
            second_printer: PrinterSlot::default(),
            booths: Vec::new(),
            configs: Vec::new(),
            cursor: 0,
        }
    }

    pub fn mode(&self) -> WizardMode {
        self.mode
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn event_id(&self) -> Option<i64> {
        self.event_id
    }

    pub fn zone(&self) -> Option<Zone> {
        self.zone
    }

    pub fn selected_booths(&self) -> &[u8] {
        &self.booths
    }

    pub fn configs(&self) -> &[RackConfig] {
        &self.configs
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_config(&self) -> Option<&RackConfig> {
        self.configs.get(self.cursor)
    }

    /// Discard every selection and return to the first step
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn expect_step(&self, expected: WizardStep) -> Result<(), WizardError> {
        if self.step != expected {
            return Err(WizardError::WrongStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }

    // ========== Forward transitions ==========

    pub fn choose_mode(&mut self, mode: WizardMode) -> Result<(), WizardError> {
        self.expect_step(WizardStep::Mode)?;
        self.mode = mode;
        self.step = WizardStep::Event;
        Ok(())
    }

    /// Events offered at the event step: active and upcoming ones
    pub fn selectable_events<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events.iter().filter(|e| e.accepts_installations()).collect()
    }

    /// Pick an event, or `None` for an unattached installation
    pub fn choose_event(&mut self, event_id: Option<i64>) -> Result<(), WizardError> {
        self.expect_step(WizardStep::Event)?;
        self.event_id = event_id;
        self.step = WizardStep::Zone;
        Ok(())
    }

    /// Zones offered at the zone step: the selected event's zones, or the
    /// whole floor when no event is chosen or the event names none
    pub fn selectable_zones(&self, events: &[Event]) -> Vec<Zone> {
        if let Some(event_id) = self.event_id {
            if let Some(event) = events.iter().find(|e| e.id == event_id) {
                if !event.zones.is_empty() {
                    return event.zones.clone();
                }
            }
        }
        ZONES.to_vec()
    }

    pub fn choose_zone(&mut self, zone: Zone) -> Result<(), WizardError> {
        self.expect_step(WizardStep::Zone)?;
        self.zone = Some(zone);
        self.booth = None;
        self.booths.clear();
        self.step = WizardStep::Booth;
        Ok(())
    }

    /// Booths of the selected zone; racks with a committed installation are
    /// flagged taken
    pub fn booth_options(&self, occupancy: &Occupancy) -> Result<Vec<SlotOption>, WizardError> {
        let zone = self.zone.ok_or(WizardError::NoZone)?;
        Ok(zone
            .booth_numbers()
            .map(|number| {
                // booth numbers come straight from the zone interval
                let rack = Rack::new(zone, number).expect("zone yields only valid booths");
                SlotOption {
                    number,
                    taken: occupancy.rack_taken(rack),
                }
            })
            .collect())
    }

    fn checked_rack(&self, booth: u8, occupancy: &Occupancy) -> Result<Rack, WizardError> {
        let zone = self.zone.ok_or(WizardError::NoZone)?;
        let rack = Rack::new(zone, booth)?;
        if occupancy.rack_taken(rack) {
            return Err(WizardError::RackOccupied(rack));
        }
        Ok(rack)
    }

    /// Single mode: pick the one booth
    pub fn choose_booth(&mut self, booth: u8, occupancy: &Occupancy) -> Result<(), WizardError> {
        self.expect_step(WizardStep::Booth)?;
        self.checked_rack(booth, occupancy)?;
        self.booth = Some(booth);
        self.step = WizardStep::Laptop;
        Ok(())
    }

    /// Bulk mode: toggle a booth in or out of the selection
    pub fn toggle_booth(&mut self, booth: u8, occupancy: &Occupancy) -> Result<(), WizardError> {
        self.expect_step(WizardStep::Booth)?;
        if let Some(pos) = self.booths.iter().position(|b| *b == booth) {
            self.booths.remove(pos);
            return Ok(());
        }
        self.checked_rack(booth, occupancy)?;
        self.booths.push(booth);
        Ok(())
    }

    /// Bulk mode: create one empty configuration per selected booth and move
    /// to the per-rack editor
    pub fn begin_rack_configs(&mut self) -> Result<(), WizardError> {
        self.expect_step(WizardStep::Booth)?;
        let zone = self.zone.ok_or(WizardError::NoZone)?;
        if self.booths.is_empty() {
            return Err(WizardError::NoRacksSelected);
        }
        self.configs = self
            .booths
            .iter()
            .map(|booth| Rack::new(zone, *booth).map(RackConfig::new))
            .collect::<Result<_, _>>()?;
        self.cursor = 0;
        self.step = WizardStep::BulkConfig;
        Ok(())
    }

    // ========== Option lists ==========

    fn bulk_exempt(&self) -> Option<usize> {
        match self.mode {
            WizardMode::Single => None,
            WizardMode::Bulk => Some(self.cursor),
        }
    }

    /// Laptops offered for the selection currently being edited
    pub fn laptop_options(&self, occupancy: &Occupancy) -> Vec<SlotOption> {
        let excluded = availability::excluded_laptops(occupancy, &self.configs, self.bulk_exempt());
        Pool::Laptop
            .numbers()
            .map(|number| SlotOption {
                number,
                taken: excluded.contains(&number),
            })
            .collect()
    }

    fn printer_slot(&self, field: PrinterField) -> Option<&PrinterSlot> {
        match (self.mode, field) {
            (WizardMode::Single, PrinterField::Primary) => Some(&self.printer),
            (WizardMode::Single, PrinterField::Secondary) => Some(&self.second_printer),
            (WizardMode::Bulk, _) => {
                let config = self.configs.get(self.cursor)?;
                Some(match field {
                    PrinterField::Primary => &config.printer,
                    PrinterField::Secondary => &config.second_printer,
                })
            }
        }
    }

    /// Printers offered for one slot of the selection currently being edited
    pub fn printer_options(
        &self,
        field: PrinterField,
        occupancy: &Occupancy,
    ) -> Result<Vec<SlotOption>, WizardError> {
        let kind = self
            .printer_slot(field)
            .and_then(|slot| slot.kind)
            .ok_or(WizardError::NoPrinterKind)?;
        let excluded =
            availability::excluded_printers(occupancy, kind, &self.configs, self.bulk_exempt());
        Ok(Pool::from(kind)
            .numbers()
            .map(|number| SlotOption {
                number,
                taken: excluded.contains(&number),
            })
            .collect())
    }

    // ========== Single-mode equipment steps ==========

    fn check_laptop(&self, number: u8, occupancy: &Occupancy) -> Result<(), WizardError> {
        if !Pool::Laptop.contains(number) {
            return Err(WizardError::NoSuchNumber {
                pool: Pool::Laptop,
                number,
            });
        }
        let excluded = availability::excluded_laptops(occupancy, &self.configs, self.bulk_exempt());
        if excluded.contains(&number) {
            return Err(WizardError::Unavailable {
                pool: Pool::Laptop,
                number,
            });
        }
        Ok(())
    }

    fn check_printer(
        &self,
        kind: PrinterKind,
        number: u8,
        occupancy: &Occupancy,
    ) -> Result<(), WizardError> {
        let pool = Pool::from(kind);
        if !pool.contains(number) {
            return Err(WizardError::NoSuchNumber { pool, number });
        }
        let excluded =
            availability::excluded_printers(occupancy, kind, &self.configs, self.bulk_exempt());
        if excluded.contains(&number) {
            return Err(WizardError::Unavailable { pool, number });
        }
        Ok(())
    }

    pub fn choose_laptop(&mut self, number: u8, occupancy: &Occupancy) -> Result<(), WizardError> {
        self.expect_step(WizardStep::Laptop)?;
        self.check_laptop(number, occupancy)?;
        self.laptop = Some(number);
        self.step = WizardStep::PrinterType;
        Ok(())
    }

    /// Pick the first printer's family; `None` ("no printer") completes the
    /// flow
    pub fn choose_printer_kind(
        &mut self,
        kind: Option<PrinterKind>,
    ) -> Result<WizardAdvance, WizardError> {
        self.expect_step(WizardStep::PrinterType)?;
        match kind {
            None => {
                self.printer.clear();
                self.second_printer.clear();
                Ok(WizardAdvance::ReadyToSubmit)
            }
            Some(kind) => {
                if self.printer.kind != Some(kind) {
                    self.printer.number = None;
                }
                self.printer.kind = Some(kind);
                self.step = WizardStep::PrinterNumber;
                Ok(WizardAdvance::Next)
            }
        }
    }

    pub fn choose_printer_number(
        &mut self,
        number: u8,
        occupancy: &Occupancy,
    ) -> Result<(), WizardError> {
        self.expect_step(WizardStep::PrinterNumber)?;
        let kind = self.printer.kind.ok_or(WizardError::NoPrinterKind)?;
        self.check_printer(kind, number, occupancy)?;
        self.printer.number = Some(number);
        self.step = WizardStep::SecondPrinterType;
        Ok(())
    }

    /// Pick the optional second printer's family; `None` completes the flow
    pub fn choose_second_printer_kind(
        &mut self,
        kind: Option<PrinterKind>,
    ) -> Result<WizardAdvance, WizardError> {
        self.expect_step(WizardStep::SecondPrinterType)?;
        match kind {
            None => {
                self.second_printer.clear();
                Ok(WizardAdvance::ReadyToSubmit)
            }
            Some(kind) => {
                if self.second_printer.kind != Some(kind) {
                    self.second_printer.number = None;
                }
                self.second_printer.kind = Some(kind);
                self.step = WizardStep::SecondPrinterNumber;
                Ok(WizardAdvance::Next)
            }
        }
    }

    pub fn choose_second_printer_number(
        &mut self,
        number: u8,
        occupancy: &Occupancy,
    ) -> Result<WizardAdvance, WizardError> {
        self.expect_step(WizardStep::SecondPrinterNumber)?;
        let kind = self.second_printer.kind.ok_or(WizardError::NoPrinterKind)?;
        self.check_printer(kind, number, occupancy)?;
        self.second_printer.number = Some(number);
        Ok(WizardAdvance::ReadyToSubmit)
    }

    // ========== Bulk configuration editing ==========

    fn expect_bulk_config(&self) -> Result<(), WizardError> {
        self.expect_step(WizardStep::BulkConfig)
    }

    pub fn set_config_laptop(
        &mut self,
        number: u8,
        occupancy: &Occupancy,
    ) -> Result<(), WizardError> {
        self.expect_bulk_config()?;
        self.check_laptop(number, occupancy)?;
        self.configs[self.cursor].laptop = Some(number);
        Ok(())
    }

    /// Set one printer slot's family of the configuration being edited;
    /// changing family forgets the previously chosen number
    pub fn set_config_printer_kind(
        &mut self,
        field: PrinterField,
        kind: Option<PrinterKind>,
    ) -> Result<(), WizardError> {
        self.expect_bulk_config()?;
        let config = &mut self.configs[self.cursor];
        let slot = match field {
            PrinterField::Primary => &mut config.printer,
            PrinterField::Secondary => &mut config.second_printer,
        };
        match kind {
            None => slot.clear(),
            Some(kind) => {
                if slot.kind != Some(kind) {
                    slot.number = None;
                }
                slot.kind = Some(kind);
            }
        }
        Ok(())
    }

    pub fn set_config_printer_number(
        &mut self,
        field: PrinterField,
        number: u8,
        occupancy: &Occupancy,
    ) -> Result<(), WizardError> {
        self.expect_bulk_config()?;
        let kind = self
            .printer_slot(field)
            .and_then(|slot| slot.kind)
            .ok_or(WizardError::NoPrinterKind)?;
        self.check_printer(kind, number, occupancy)?;
        let config = &mut self.configs[self.cursor];
        match field {
            PrinterField::Primary => config.printer.number = Some(number),
            PrinterField::Secondary => config.second_printer.number = Some(number),
        }
        Ok(())
    }

    /// Move to the next rack's configuration, or to the summary after the
    /// last one. The current rack must have a laptop assigned.
    pub fn advance_config(&mut self) -> Result<(), WizardError> {
        self.expect_bulk_config()?;
        let config = &self.configs[self.cursor];
        if !config.is_configured() {
            return Err(WizardError::ConfigIncomplete(config.rack));
        }
        if self.cursor + 1 < self.configs.len() {
            self.cursor += 1;
        } else {
            self.step = WizardStep::BulkSummary;
        }
        Ok(())
    }

    /// Drop one configuration from the summary; removing the last one
    /// returns to booth selection with the selection cleared
    pub fn remove_config(&mut self, index: usize) -> Result<(), WizardError> {
        self.expect_step(WizardStep::BulkSummary)?;
        if index >= self.configs.len() {
            return Err(WizardError::MissingSelection("configuration"));
        }
        let removed = self.configs.remove(index);
        self.booths.retain(|b| *b != removed.rack.booth());
        if self.configs.is_empty() {
            self.booths.clear();
            self.step = WizardStep::Booth;
        } else if self.cursor >= self.configs.len() {
            self.cursor = self.configs.len() - 1;
        }
        Ok(())
    }

    /// Racks still missing a laptop
    pub fn unconfigured_racks(&self) -> Vec<Rack> {
        self.configs
            .iter()
            .filter(|c| !c.is_configured())
            .map(|c| c.rack)
            .collect()
    }

    // ========== Back transitions ==========

    /// Step back to the predecessor of the current step. In the bulk editor,
    /// back first walks the cursor down before leaving for booth selection.
    pub fn back(&mut self) {
        self.step = match self.step {
            WizardStep::Mode => WizardStep::Mode,
            WizardStep::Event => WizardStep::Mode,
            WizardStep::Zone => WizardStep::Event,
            WizardStep::Booth => WizardStep::Zone,
            WizardStep::Laptop => WizardStep::Booth,
            WizardStep::PrinterType => WizardStep::Laptop,
            WizardStep::PrinterNumber => WizardStep::PrinterType,
            WizardStep::SecondPrinterType => WizardStep::PrinterNumber,
            WizardStep::SecondPrinterNumber => WizardStep::SecondPrinterType,
            WizardStep::BulkConfig => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    WizardStep::BulkConfig
                } else {
                    WizardStep::Booth
                }
            }
            WizardStep::BulkSummary => {
                self.cursor = self.configs.len().saturating_sub(1);
                WizardStep::BulkConfig
            }
        };
    }

    // ========== Draft assembly ==========

    /// Assemble the single-mode create payload
    pub fn single_draft(&self) -> Result<InstallationDraft, WizardError> {
        let zone = self.zone.ok_or(WizardError::MissingSelection("zone"))?;
        let booth = self.booth.ok_or(WizardError::MissingSelection("booth"))?;
        let laptop = self.laptop.ok_or(WizardError::MissingSelection("laptop"))?;
        let rack = Rack::new(zone, booth)?;
        Ok(InstallationDraft {
            rack,
            laptop,
            printer_type: self.printer.kind.filter(|_| self.printer.number.is_some()),
            printer_number: self.printer.number.filter(|_| self.printer.kind.is_some()),
            second_printer_type: self
                .second_printer
                .kind
                .filter(|_| self.second_printer.number.is_some()),
            second_printer_number: self
                .second_printer
                .number
                .filter(|_| self.second_printer.kind.is_some()),
            event_id: self.event_id,
            user_id: None,
            username: None,
        })
    }

    /// Assemble one create payload per bulk configuration, refusing the
    /// batch when any rack lacks a laptop
    pub fn bulk_drafts(&self) -> Result<Vec<InstallationDraft>, WizardError> {
        if self.configs.is_empty() {
            return Err(WizardError::NoRacksSelected);
        }
        let unconfigured = self.unconfigured_racks();
        if !unconfigured.is_empty() {
            return Err(WizardError::UnconfiguredRacks(unconfigured));
        }
        Ok(self
            .configs
            .iter()
            .map(|config| InstallationDraft {
                rack: config.rack,
                laptop: config.laptop.expect("checked above"),
                printer_type: config.printer.kind.filter(|_| config.printer.number.is_some()),
                printer_number: config.printer.number.filter(|_| config.printer.kind.is_some()),
                second_printer_type: config
                    .second_printer
                    .kind
                    .filter(|_| config.second_printer.number.is_some()),
                second_printer_number: config
                    .second_printer
                    .number
                    .filter(|_| config.second_printer.kind.is_some()),
                event_id: self.event_id,
                user_id: None,
                username: None,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Installation;

    fn occupancy_with(installations: &[Installation]) -> Occupancy {
        Occupancy::from_installations(installations)
    }

    fn installation(rack: &str, laptop: u8) -> Installation {
        Installation {
            id: 1,
            rack: rack.parse().unwrap(),
            laptop,
            printer_type: None,
            printer_number: None,
            second_printer_type: None,
            second_printer_number: None,
            event_id: None,
            user_id: None,
            username: None,
            date: None,
        }
    }

    fn bulk_session_at_config(booths: &[u8]) -> WizardSession {
        let occ = Occupancy::default();
        let mut session = WizardSession::new();
        session.choose_mode(WizardMode::Bulk).unwrap();
        session.choose_event(None).unwrap();
        session.choose_zone(Zone::E).unwrap();
        for booth in booths {
            session.toggle_booth(*booth, &occ).unwrap();
        }
        session.begin_rack_configs().unwrap();
        session
    }

    #[test]
    fn single_flow_reaches_submission_without_printer() {
        let occ = Occupancy::default();
        let mut session = WizardSession::new();
        session.choose_mode(WizardMode::Single).unwrap();
        session.choose_event(None).unwrap();
        session.choose_zone(Zone::E).unwrap();
        session.choose_booth(15, &occ).unwrap();
        session.choose_laptop(3, &occ).unwrap();
        let advance = session.choose_printer_kind(None).unwrap();
        assert_eq!(advance, WizardAdvance::ReadyToSubmit);

        let draft = session.single_draft().unwrap();
        assert_eq!(draft.rack.to_string(), "E15");
        assert_eq!(draft.laptop, 3);
        assert_eq!(draft.printer_type, None);
        assert_eq!(draft.printer_number, None);
        assert_eq!(draft.second_printer_type, None);
        assert_eq!(draft.second_printer_number, None);
    }

    #[test]
    fn steps_are_gated_in_order() {
        let occ = Occupancy::default();
        let mut session = WizardSession::new();
        assert!(matches!(
            session.choose_zone(Zone::E),
            Err(WizardError::WrongStep { .. })
        ));
        session.choose_mode(WizardMode::Single).unwrap();
        assert!(matches!(
            session.choose_booth(15, &occ),
            Err(WizardError::WrongStep { .. })
        ));
    }

    #[test]
    fn zone_interval_bounds_are_enforced() {
        // Zone G runs 57-80
        let occ = Occupancy::default();
        let mut session = WizardSession::new();
        session.choose_mode(WizardMode::Single).unwrap();
        session.choose_event(None).unwrap();
        session.choose_zone(Zone::G).unwrap();

        let options = session.booth_options(&occ).unwrap();
        let numbers: Vec<u8> = options.iter().map(|o| o.number).collect();
        assert_eq!(numbers.first(), Some(&57));
        assert_eq!(numbers.last(), Some(&80));
        assert!(!numbers.contains(&56));
        assert!(!numbers.contains(&81));

        assert!(matches!(
            session.choose_booth(56, &occ),
            Err(WizardError::Rack(RackError::BoothOutOfRange { .. }))
        ));
        assert!(matches!(
            session.choose_booth(81, &occ),
            Err(WizardError::Rack(RackError::BoothOutOfRange { .. }))
        ));
        assert!(session.choose_booth(57, &occ).is_ok());
    }

    #[test]
    fn committed_racks_and_laptops_are_excluded() {
        let occ = occupancy_with(&[installation("E15", 3)]);
        let mut session = WizardSession::new();
        session.choose_mode(WizardMode::Single).unwrap();
        session.choose_event(None).unwrap();
        session.choose_zone(Zone::E).unwrap();

        let booths = session.booth_options(&occ).unwrap();
        assert!(booths.iter().find(|o| o.number == 15).unwrap().taken);
        assert!(matches!(
            session.choose_booth(15, &occ),
            Err(WizardError::RackOccupied(_))
        ));

        session.choose_booth(16, &occ).unwrap();
        let laptops = session.laptop_options(&occ);
        assert!(laptops.iter().find(|o| o.number == 3).unwrap().taken);
        assert!(matches!(
            session.choose_laptop(3, &occ),
            Err(WizardError::Unavailable { .. })
        ));
    }

    #[test]
    fn bulk_session_excludes_other_entries_but_not_own() {
        let occ = Occupancy::default();
        let mut session = bulk_session_at_config(&[12, 13]);

        session.set_config_laptop(7, &occ).unwrap();
        session.advance_config().unwrap();

        // Entry 1 must not see laptop 7
        let options = session.laptop_options(&occ);
        assert!(options.iter().find(|o| o.number == 7).unwrap().taken);
        assert!(matches!(
            session.set_config_laptop(7, &occ),
            Err(WizardError::Unavailable { .. })
        ));
        session.set_config_laptop(8, &occ).unwrap();

        // Back on entry 0, its own laptop stays selectable
        session.back();
        let options = session.laptop_options(&occ);
        assert!(!options.iter().find(|o| o.number == 7).unwrap().taken);
        // Revisiting and re-picking the same number is allowed
        session.set_config_laptop(7, &occ).unwrap();
    }

    #[test]
    fn bulk_printer_collision_covers_both_slots() {
        let occ = Occupancy::default();
        let mut session = bulk_session_at_config(&[12, 13]);

        session.set_config_laptop(1, &occ).unwrap();
        session
            .set_config_printer_kind(PrinterField::Primary, Some(PrinterKind::Brother))
            .unwrap();
        session
            .set_config_printer_number(PrinterField::Primary, 4, &occ)
            .unwrap();
        session
            .set_config_printer_kind(PrinterField::Secondary, Some(PrinterKind::Godex))
            .unwrap();
        session
            .set_config_printer_number(PrinterField::Secondary, 9, &occ)
            .unwrap();
        session.advance_config().unwrap();

        session.set_config_laptop(2, &occ).unwrap();
        session
            .set_config_printer_kind(PrinterField::Primary, Some(PrinterKind::Brother))
            .unwrap();
        assert!(matches!(
            session.set_config_printer_number(PrinterField::Primary, 4, &occ),
            Err(WizardError::Unavailable { .. })
        ));
        // Same number in the other family is fine
        session
            .set_config_printer_number(PrinterField::Primary, 9, &occ)
            .unwrap();
        // The other entry's secondary Godex is excluded here too
        session
            .set_config_printer_kind(PrinterField::Secondary, Some(PrinterKind::Godex))
            .unwrap();
        assert!(matches!(
            session.set_config_printer_number(PrinterField::Secondary, 9, &occ),
            Err(WizardError::Unavailable { .. })
        ));
    }

    #[test]
    fn changing_printer_family_forgets_the_number() {
        let occ = Occupancy::default();
        let mut session = bulk_session_at_config(&[12]);
        session.set_config_laptop(1, &occ).unwrap();
        session
            .set_config_printer_kind(PrinterField::Primary, Some(PrinterKind::Brother))
            .unwrap();
        session
            .set_config_printer_number(PrinterField::Primary, 25, &occ)
            .unwrap();
        session
            .set_config_printer_kind(PrinterField::Primary, Some(PrinterKind::Godex))
            .unwrap();
        assert_eq!(session.current_config().unwrap().printer.number, None);
    }

    #[test]
    fn bulk_back_walks_cursor_then_leaves_to_booths() {
        let mut session = bulk_session_at_config(&[12, 13, 14]);
        let occ = Occupancy::default();
        session.set_config_laptop(1, &occ).unwrap();
        session.advance_config().unwrap();
        session.set_config_laptop(2, &occ).unwrap();
        session.advance_config().unwrap();
        assert_eq!(session.cursor(), 2);

        session.back();
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.step(), WizardStep::BulkConfig);
        session.back();
        session.back();
        assert_eq!(session.step(), WizardStep::Booth);
    }

    #[test]
    fn advancing_past_last_config_requires_laptops_and_reaches_summary() {
        let occ = Occupancy::default();
        let mut session = bulk_session_at_config(&[12, 13]);
        assert!(matches!(
            session.advance_config(),
            Err(WizardError::ConfigIncomplete(_))
        ));
        session.set_config_laptop(1, &occ).unwrap();
        session.advance_config().unwrap();
        session.set_config_laptop(2, &occ).unwrap();
        session.advance_config().unwrap();
        assert_eq!(session.step(), WizardStep::BulkSummary);
    }

    #[test]
    fn removing_last_summary_entry_returns_to_booths() {
        let occ = Occupancy::default();
        let mut session = bulk_session_at_config(&[12]);
        session.set_config_laptop(1, &occ).unwrap();
        session.advance_config().unwrap();
        assert_eq!(session.step(), WizardStep::BulkSummary);

        session.remove_config(0).unwrap();
        assert_eq!(session.step(), WizardStep::Booth);
        assert!(session.selected_booths().is_empty());
        assert!(session.configs().is_empty());
    }

    #[test]
    fn bulk_refusal_names_unconfigured_racks() {
        let occ = Occupancy::default();
        let mut session = bulk_session_at_config(&[12, 13, 14]);
        session.set_config_laptop(1, &occ).unwrap();

        let err = session.bulk_drafts().unwrap_err();
        match err {
            WizardError::UnconfiguredRacks(ref racks) => {
                let names: Vec<String> = racks.iter().map(Rack::to_string).collect();
                assert_eq!(names, vec!["E13", "E14"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("E13, E14"));
    }

    #[test]
    fn event_zone_list_restricts_zone_choices() {
        let mut session = WizardSession::new();
        session.choose_mode(WizardMode::Single).unwrap();
        let event = Event {
            id: 5,
            name: "Expo".to_string(),
            start_date: None,
            end_date: None,
            location: None,
            description: None,
            status: shared::models::EventStatus::Active,
            zones: vec![Zone::E, Zone::G],
        };
        session.choose_event(Some(5)).unwrap();
        assert_eq!(session.selectable_zones(&[event.clone()]), vec![Zone::E, Zone::G]);

        // An event without a zone list opens the whole floor
        let mut open_event = event;
        open_event.zones.clear();
        assert_eq!(session.selectable_zones(&[open_event]).len(), ZONES.len());
    }
}

use crate::error::GenError;

pub const DEFAULT_NUM_ATTENDEES: usize = 800;
pub const DEFAULT_TOTAL_TICKETS: u32 = 1100;
pub const DEFAULT_NUM_VENDORS: usize = 20;
pub const DEFAULT_TICKET_TYPE: u32 = 10;
pub const DEFAULT_RESP_VENDOR: &str = "Generator";
pub const DEFAULT_SEED: u64 = 42;
/// Check-in time stamped on entered tickets unless overridden
pub const DEFAULT_ENTERED_AT: &str = "2022-05-14T18:00:00";

/// Knobs of a single roster generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// How many attendee names to request, i.e. how many tickets get a name
    pub num_attendees: usize,
    /// Size of the ticket pool, numbered `1..=total_tickets`
    pub total_tickets: u32,
    /// How many vendor names to request
    pub num_vendors: usize,
    /// Ticket type given to named tickets below
    /// [`TICKET_TYPE_CUTOFF`](crate::ticket::TICKET_TYPE_CUTOFF)
    pub ticket_type: u32,
    /// Tag written in the `resp_vendor` column of every record
    pub resp_vendor: String,
    /// Chance that a named ticket is marked as sold
    pub sold_probability: f64,
    /// Chance that a named ticket is marked as already checked in
    pub entered_probability: f64,
    /// Seed of the local PRNG driving the permutation and every per-record draw
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            num_attendees: DEFAULT_NUM_ATTENDEES,
            total_tickets: DEFAULT_TOTAL_TICKETS,
            num_vendors: DEFAULT_NUM_VENDORS,
            ticket_type: DEFAULT_TICKET_TYPE,
            resp_vendor: DEFAULT_RESP_VENDOR.to_string(),
            sold_probability: 0.85,
            entered_probability: 0.30,
            seed: DEFAULT_SEED,
        }
    }
}

impl GeneratorConfig {
    /// # Errors
    /// Errors when the ticket pool is empty, cannot hold every attendee, or when a
    /// probability falls outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.total_tickets == 0 {
            return Err(GenError::InvalidConfig(
                "total_tickets must be at least 1".to_string(),
            ));
        }
        if self.num_attendees > self.total_tickets as usize {
            return Err(GenError::InvalidConfig(format!(
                "num_attendees ({}) exceeds total_tickets ({})",
                self.num_attendees, self.total_tickets
            )));
        }
        for (name, p) in [
            ("sold_probability", self.sold_probability),
            ("entered_probability", self.entered_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(GenError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {p}"
                )));
            }
        }
        Ok(())
    }
}

use chrono::NaiveDateTime;
use rand::Rng;
use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::names::{capitalize, Name};

/// Tickets numbered at or above this always get ticket type 0.
pub const TICKET_TYPE_CUTOFF: u32 = 1000;

/// Written in place of any absent field.
pub const NULL_MARKER: &str = "null";

pub const ENTERED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Randomization knobs applied while building named tickets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TicketPolicy {
    pub ticket_type: u32,
    pub sold_probability: f64,
    pub entered_probability: f64,
    /// Check-in time stamped on every ticket drawn as entered
    pub entered_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRecord {
    pub ticket_num: u32,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub ticket_type: u32,
    pub sold: bool,
    pub vendor: Option<String>,
    pub resp_vendor: String,
    pub entered: Option<NaiveDateTime>,
}

/// `ticket_type` for ticket numbers below the cutoff, 0 from the cutoff on.
#[must_use]
pub fn effective_ticket_type(ticket_num: u32, ticket_type: u32) -> u32 {
    if ticket_num < TICKET_TYPE_CUTOFF {
        ticket_type
    } else {
        0
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(capitalize(s))
    }
}

impl TicketRecord {
    /// A ticket nobody holds: never sold, no vendor, never entered.
    #[must_use]
    pub fn unsold(ticket_num: u32, ticket_type: u32, resp_vendor: impl Into<String>) -> Self {
        TicketRecord {
            ticket_num,
            last_name: None,
            first_name: None,
            ticket_type: effective_ticket_type(ticket_num, ticket_type),
            sold: false,
            vendor: None,
            resp_vendor: resp_vendor.into(),
            entered: None,
        }
    }

    /// A named ticket. Draws `sold` then `entered` from `rng`, in that order.
    pub fn for_attendee(
        ticket_num: u32,
        name: &Name,
        vendor: impl Into<String>,
        resp_vendor: impl Into<String>,
        policy: &TicketPolicy,
        rng: &mut impl Rng,
    ) -> Self {
        let sold = rng.gen::<f64>() > 1.0 - policy.sold_probability;
        let entered = rng.gen::<f64>() > 1.0 - policy.entered_probability;
        TicketRecord {
            ticket_num,
            last_name: non_empty(&name.last),
            first_name: non_empty(&name.first),
            ticket_type: effective_ticket_type(ticket_num, policy.ticket_type),
            sold,
            vendor: Some(vendor.into()),
            resp_vendor: resp_vendor.into(),
            entered: entered.then_some(policy.entered_at),
        }
    }

    #[must_use]
    pub fn is_named(&self) -> bool {
        self.vendor.is_some()
    }
}

impl Serialize for TicketRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let or_null = |field: &Option<String>| field.as_deref().unwrap_or(NULL_MARKER).to_string();
        let entered = self.entered.map_or_else(
            || NULL_MARKER.to_string(),
            |at| at.format(ENTERED_FORMAT).to_string(),
        );

        let mut state = serializer.serialize_struct("TicketRecord", 8)?;
        state.serialize_field("ticket_num", &self.ticket_num)?;
        state.serialize_field("last_name", &or_null(&self.last_name))?;
        state.serialize_field("first_name", &or_null(&self.first_name))?;
        state.serialize_field("ticket_type", &self.ticket_type)?;
        state.serialize_field("sold", &u8::from(self.sold))?;
        state.serialize_field("vendor", &or_null(&self.vendor))?;
        state.serialize_field("resp_vendor", &self.resp_vendor)?;
        state.serialize_field("entered", &entered)?;
        state.end()
    }
}

use chrono::NaiveDateTime;
use log::{debug, info, warn};
use rand::Rng;

use crate::allocator::allocate;
use crate::config::GeneratorConfig;
use crate::error::GenError;
use crate::names::{Name, NameSource};
use crate::ticket::{TicketPolicy, TicketRecord};

/// Builds the full, sorted ticket roster.
///
/// Vendors are fetched first, then attendees. The attendees get the first
/// numbers of a permutation of the ticket pool, in the order the source
/// returned them; every remaining number becomes an unsold ticket.
///
/// `rng` drives the permutation and, per attendee, the vendor pick followed
/// by the sold and entered draws. `entered_at` is stamped on every ticket
/// drawn as checked in.
///
/// # Errors
/// Errors when the config is invalid, a source fails, the attendees do not fit
/// in the ticket pool, or there are attendees but no vendors.
pub fn generate_roster(
    config: &GeneratorConfig,
    vendor_source: &dyn NameSource,
    attendee_source: &dyn NameSource,
    rng: &mut impl Rng,
    entered_at: NaiveDateTime,
) -> Result<Vec<TicketRecord>, GenError> {
    config.validate()?;

    let vendors: Vec<String> = vendor_source
        .fetch(config.num_vendors)?
        .iter()
        .map(Name::display_name)
        .collect();
    if vendors.len() < config.num_vendors {
        warn!(
            "Asked for {} vendors, got {}",
            config.num_vendors,
            vendors.len()
        );
    }

    let attendees = attendee_source.fetch(config.num_attendees)?;
    if attendees.len() < config.num_attendees {
        warn!(
            "Asked for {} attendees, got {}",
            config.num_attendees,
            attendees.len()
        );
    }
    if !attendees.is_empty() && vendors.is_empty() {
        return Err(GenError::NoVendors);
    }
    info!(
        "Building {} tickets for {} attendees and {} vendors",
        config.total_tickets,
        attendees.len(),
        vendors.len()
    );

    let allocation = allocate(config.total_tickets, attendees.len(), rng)?;
    let policy = TicketPolicy {
        ticket_type: config.ticket_type,
        sold_probability: config.sold_probability,
        entered_probability: config.entered_probability,
        entered_at,
    };

    let mut tickets = Vec::with_capacity(config.total_tickets as usize);
    for (name, &ticket_num) in attendees.iter().zip(&allocation.assigned) {
        let vendor = &vendors[rng.gen_range(0..vendors.len())];
        tickets.push(TicketRecord::for_attendee(
            ticket_num,
            name,
            vendor.as_str(),
            config.resp_vendor.as_str(),
            &policy,
            rng,
        ));
    }
    tickets.extend(allocation.unassigned.iter().map(|&ticket_num| {
        TicketRecord::unsold(ticket_num, config.ticket_type, config.resp_vendor.as_str())
    }));
    tickets.sort_by_key(|ticket| ticket.ticket_num);

    debug!(
        "{} sold, {} entered",
        tickets.iter().filter(|t| t.sold).count(),
        tickets.iter().filter(|t| t.entered.is_some()).count()
    );
    Ok(tickets)
}

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::GenError;

/// Ticket numbers split into the ones handed to named attendees and the
/// ones left over as unsold placeholders.
#[derive(Debug, PartialEq, Eq)]
pub struct Allocation {
    pub assigned: Vec<u32>,
    pub unassigned: Vec<u32>,
}

/// A random permutation of `1..=total`.
pub fn permutation(total: u32, rng: &mut impl Rng) -> Vec<u32> {
    let mut numbers: Vec<u32> = (1..=total).collect();
    numbers.shuffle(rng);
    numbers
}

/// Draws a permutation of the whole pool and hands its first `assigned`
/// numbers out. Shuffling rather than drawing independently rules out
/// duplicates.
///
/// # Errors
/// Errors when more numbers are asked for than the pool holds.
pub fn allocate(total: u32, assigned: usize, rng: &mut impl Rng) -> Result<Allocation, GenError> {
    if assigned > total as usize {
        return Err(GenError::TooManyAttendees {
            attendees: assigned,
            total,
        });
    }
    let mut numbers = permutation(total, rng);
    let unassigned = numbers.split_off(assigned);
    Ok(Allocation {
        assigned: numbers,
        unassigned,
    })
}

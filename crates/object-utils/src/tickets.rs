//! Ticket queue simulation.
//!
//! A seller serves customers strictly in order. Each customer pays for one ticket
//! with a single bill and must get exact change from the bills the seller has
//! collected so far. The seller starts with an empty drawer.

use std::collections::BTreeMap;

use crate::error::{ObjectError, Result};

/// Ticket price and accepted bills.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoxOffice {
    pub price: u32,
    pub bills: Vec<u32>,
}

impl Default for BoxOffice {
    fn default() -> Self {
        Self {
            price: 25,
            bills: vec![25, 50, 100],
        }
    }
}

impl BoxOffice {
    pub fn new(price: u32, bills: Vec<u32>) -> Self {
        Self { price, bills }
    }

    /// Returns `true` if every customer in `queue` can be served.
    ///
    /// Change is paid greedily, largest bills first. Bills that are not accepted,
    /// or that are smaller than the price, are an error.
    pub fn sell(&self, queue: &[u32]) -> Result<bool> {
        let mut drawer: BTreeMap<u32, u32> = BTreeMap::new();

        for (position, &bill) in queue.iter().enumerate() {
            if bill < self.price || !self.bills.contains(&bill) {
                return Err(ObjectError::UnsupportedBill(bill));
            }

            if !give_change(&mut drawer, bill - self.price) {
                log::debug!("no change for customer {position} paying {bill}");
                return Ok(false);
            }
            *drawer.entry(bill).or_default() += 1;
        }

        Ok(true)
    }
}

fn give_change(drawer: &mut BTreeMap<u32, u32>, mut change: u32) -> bool {
    for (&bill, count) in drawer.iter_mut().rev() {
        while change >= bill && *count > 0 {
            change -= bill;
            *count -= 1;
        }
    }
    change == 0
}

/// Sells 25-priced tickets to a queue paying with 25, 50 or 100 bills.
///
/// ```
/// use object_utils::sell_tickets;
///
/// assert!(sell_tickets(&[25, 25, 50]).unwrap());
/// assert!(!sell_tickets(&[25, 100]).unwrap());
/// ```
pub fn sell_tickets(queue: &[u32]) -> Result<bool> {
    BoxOffice::default().sell(queue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifty_is_preferred_for_a_hundred() {
        // 25, 25, 50 leaves {25, 50}; the 100 takes both, the next 50 finds no 25.
        assert!(!sell_tickets(&[25, 25, 50, 100, 50]).unwrap());
        assert!(sell_tickets(&[25, 25, 50, 100, 25, 50]).unwrap());
    }

    #[test]
    fn three_quarters_when_no_fifty() {
        assert!(sell_tickets(&[25, 25, 25, 100]).unwrap());
        assert!(!sell_tickets(&[25, 25, 100]).unwrap());
    }

    #[test]
    fn change_must_come_from_the_drawer() {
        // The only 25 went out as change to the first 50.
        assert!(!sell_tickets(&[25, 50, 50]).unwrap());
    }

    #[test]
    fn custom_box_office() {
        let office = BoxOffice::new(10, vec![10, 20]);
        assert!(office.sell(&[10, 20, 20]).is_ok_and(|served| !served));
        assert!(office.sell(&[10, 10, 20, 20]).unwrap());
    }
}

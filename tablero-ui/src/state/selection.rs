//! Modal Selection
//!
//! Which indicator the detail overlay shows, and whether it is open.
//! Closing hides the overlay at once but keeps the target around until a
//! delayed clear, so the exit animation still has content to render. Each
//! selection bumps a generation counter; a delayed clear only applies if no
//! newer selection happened in between.

use super::indicator::EconomicIndicator;

/// Delay between closing the overlay and dropping its target
pub const CLEAR_DELAY_MS: u32 = 200;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    selected: Option<EconomicIndicator>,
    open: bool,
    generation: u64,
}

/// Token returned by [`Selection::close`], redeemed by [`Selection::clear`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClearTicket(u64);

impl Selection {
    /// Open the overlay on `indicator`, replacing any current target
    pub fn select(&mut self, indicator: EconomicIndicator) {
        self.selected = Some(indicator);
        self.open = true;
        self.generation += 1;
    }

    /// Hide the overlay; the target stays until `clear` is called with the ticket
    pub fn close(&mut self) -> ClearTicket {
        self.open = false;
        ClearTicket(self.generation)
    }

    /// Drop the target if nothing was selected since the matching `close`
    pub fn clear(&mut self, ticket: ClearTicket) {
        if !self.open && ticket.0 == self.generation {
            self.selected = None;
        }
    }

    pub fn selected(&self) -> Option<&EconomicIndicator> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

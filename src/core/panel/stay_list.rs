use std::sync::Arc;

use log::info;

use super::{Callback, StayCard};
use crate::core::action::Action;
use crate::core::resource::{AsyncResource, Phase, Settlement, Ticket};
use crate::remote::{RemoteError, Stay};

/// Root of the console: every stay the host owns, one card each.
///
/// This is the only owner of the stay list and the only place that can
/// reload it. Cards get a [`Callback`] that asks for that reload.
pub struct StayListPanel {
    stays: AsyncResource<Stay>,
    cards: Vec<StayCard>,
    on_remove_success: Callback,
}

impl Default for StayListPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl StayListPanel {
    pub fn new() -> Self {
        Self::with_refresh(Arc::new(|| Action::ReloadStays))
    }

    /// Builds a panel whose cards report successful removals through
    /// `on_remove_success` instead of the default reload action.
    pub fn with_refresh(on_remove_success: Callback) -> Self {
        Self {
            stays: AsyncResource::new(),
            cards: Vec::new(),
            on_remove_success,
        }
    }

    pub fn mount(&mut self) -> Ticket {
        self.stays.begin()
    }

    pub fn reload(&mut self) -> Ticket {
        info!("Reloading stay list");
        self.stays.reload()
    }

    pub fn phase(&self) -> Phase {
        self.stays.phase()
    }

    pub fn is_loading(&self) -> bool {
        self.stays.is_loading()
    }

    pub fn cards(&self) -> &[StayCard] {
        &self.cards
    }

    pub fn card(&self, stay_id: &str) -> Option<&StayCard> {
        self.cards.iter().find(|c| c.id() == stay_id)
    }

    pub fn card_mut(&mut self, stay_id: &str) -> Option<&mut StayCard> {
        self.cards.iter_mut().find(|c| c.id() == stay_id)
    }

    /// The card whose dialog is currently showing, if any.
    pub fn open_modal_card(&self) -> Option<&StayCard> {
        self.cards.iter().find(|c| c.has_open_modal())
    }

    pub fn settle(&mut self, ticket: Ticket, result: Result<Vec<Stay>, RemoteError>) -> Settlement {
        let settlement = self.stays.settle(ticket, result);
        match &settlement {
            Settlement::Applied => self.reconcile(),
            // No fresh data is coming; cards waiting on it become usable again.
            Settlement::Failed(_) => {
                for card in &mut self.cards {
                    card.remove.refreshed();
                }
            }
            Settlement::Discarded => {}
        }
        settlement
    }

    /// Rebuilds the card list from the fetched stays, in fetch order. Cards
    /// are matched by stay id so surviving cards keep their local state.
    fn reconcile(&mut self) {
        let mut previous = std::mem::take(&mut self.cards);
        self.cards = self
            .stays
            .value()
            .iter()
            .map(|stay| match previous.iter().position(|c| c.id() == stay.id) {
                Some(i) => {
                    let mut card = previous.swap_remove(i);
                    card.refresh(stay.clone());
                    card
                }
                None => StayCard::new(stay.clone(), self.on_remove_success.clone()),
            })
            .collect();
        info!(
            "Stay list now shows {} cards ({} dropped)",
            self.cards.len(),
            previous.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::stay;

    fn titles(panel: &StayListPanel) -> Vec<&str> {
        panel.cards().iter().map(|c| c.stay().name.as_str()).collect()
    }

    #[test]
    fn one_card_per_stay_in_fetch_order() {
        let mut panel = StayListPanel::new();
        let ticket = panel.mount();
        panel.settle(
            ticket,
            Ok(vec![
                stay("s2", "Cabin", &[]),
                stay("s1", "Loft", &["a.jpg"]),
                stay("s3", "Villa", &[]),
            ]),
        );
        assert_eq!(titles(&panel), vec!["Cabin", "Loft", "Villa"]);
    }

    #[test]
    fn empty_result_is_ready_with_no_cards() {
        let mut panel = StayListPanel::new();
        let ticket = panel.mount();
        panel.settle(ticket, Ok(vec![]));
        assert_eq!(panel.phase(), Phase::Ready);
        assert!(panel.cards().is_empty());
    }

    #[test]
    fn reload_twice_yields_same_cards() {
        let fetch = || vec![stay("s1", "Loft", &["a.jpg"]), stay("s2", "Cabin", &[])];
        let mut panel = StayListPanel::new();
        let ticket = panel.mount();
        panel.settle(ticket, Ok(fetch()));

        for _ in 0..2 {
            let ticket = panel.reload();
            panel.settle(ticket, Ok(fetch()));
        }
        assert_eq!(titles(&panel), vec!["Loft", "Cabin"]);
    }

    #[test]
    fn reconcile_keeps_local_state_of_surviving_cards() {
        let mut panel = StayListPanel::new();
        let ticket = panel.mount();
        panel.settle(
            ticket,
            Ok(vec![stay("s1", "Loft", &["a.jpg", "b.jpg"]), stay("s2", "Cabin", &[])]),
        );
        let card = panel.card_mut("s2").unwrap();
        card.details.open();

        let ticket = panel.reload();
        panel.settle(ticket, Ok(vec![stay("s2", "Cabin", &[])]));

        assert_eq!(titles(&panel), vec!["Cabin"]);
        assert!(panel.card("s2").unwrap().details.is_open());
        assert!(panel.card("s1").is_none());
    }

    #[test]
    fn failed_reload_keeps_cards() {
        let mut panel = StayListPanel::new();
        let ticket = panel.mount();
        panel.settle(ticket, Ok(vec![stay("s1", "Loft", &[])]));

        let ticket = panel.reload();
        let settlement = panel.settle(ticket, Err(RemoteError::Network("offline".into())));
        assert_eq!(settlement, Settlement::Failed("offline".to_string()));
        assert_eq!(panel.phase(), Phase::Failed);
        assert_eq!(titles(&panel), vec!["Loft"]);
    }
}

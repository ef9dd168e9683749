use super::{Callback, RemoveStayAction, ReservationsModal, StayDetailModal};
use crate::remote::Stay;

/// Manual image carousel. Wraps at both ends; no autoplay.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
}

impl Carousel {
    /// Index of the visible slide, or `None` when there are no slides.
    pub fn current(&self, slides: usize) -> Option<usize> {
        (slides > 0).then(|| self.index.min(slides - 1))
    }

    pub fn next(&mut self, slides: usize) {
        if slides > 0 {
            self.index = (self.index.min(slides - 1) + 1) % slides;
        }
    }

    pub fn prev(&mut self, slides: usize) {
        if slides > 0 {
            self.index = (self.index.min(slides - 1) + slides - 1) % slides;
        }
    }

    fn clamp(&mut self, slides: usize) {
        self.index = self.index.min(slides.saturating_sub(1));
    }
}

/// One stay in the list, with the local state of its controls.
pub struct StayCard {
    stay: Stay,
    pub details: StayDetailModal,
    pub reservations: ReservationsModal,
    pub carousel: Carousel,
    pub remove: RemoveStayAction,
}

impl StayCard {
    pub fn new(stay: Stay, on_remove_success: Callback) -> Self {
        Self {
            details: StayDetailModal::default(),
            reservations: ReservationsModal::new(stay.id.clone()),
            carousel: Carousel::default(),
            remove: RemoveStayAction::new(stay.id.clone(), on_remove_success),
            stay,
        }
    }

    pub fn id(&self) -> &str {
        &self.stay.id
    }

    pub fn stay(&self) -> &Stay {
        &self.stay
    }

    pub fn slide_count(&self) -> usize {
        self.stay.images.len()
    }

    pub fn has_open_modal(&self) -> bool {
        self.details.is_open() || self.reservations.is_open()
    }

    /// Takes the record from a fresh list fetch. Local control state is kept.
    pub(super) fn refresh(&mut self, stay: Stay) {
        self.stay = stay;
        self.carousel.clamp(self.stay.images.len());
        self.remove.refreshed();
    }
}

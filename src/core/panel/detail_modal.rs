/// Read-only details dialog for one stay.
///
/// Shows data the card already holds, so there is no fetch phase:
/// `Closed -> Open -> Closed`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StayDetailModal {
    open: bool,
}

impl StayDetailModal {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_toggles() {
        let mut modal = StayDetailModal::default();
        assert!(!modal.is_open());
        modal.open();
        assert!(modal.is_open());
        modal.close();
        assert!(!modal.is_open());
    }
}

// Per-domain selection state machines. Each dashboard domain (province on
// the map, report type, export format, expanded search row) owns one
// coordinator; nothing is shared between domains.

use tokio::sync::watch;

use crate::model::{ConstituencyId, ProvinceId, VoterId};
use crate::reports::{ExportFormat, ReportKind};

/// At most one entity of a domain is selected at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState<K> {
    Unselected,
    Selected(K),
}

impl<K: Eq> SelectionState<K> {
    pub fn selected(&self) -> Option<&K> {
        match self {
            SelectionState::Unselected => None,
            SelectionState::Selected(id) => Some(id),
        }
    }

    /// Whether `id` is the selected entity. Compares by id equality, never
    /// by reference identity.
    pub fn is_selected(&self, id: &K) -> bool {
        match self {
            SelectionState::Unselected => false,
            SelectionState::Selected(current) => current == id,
        }
    }
}

/// Toggle-style selection for one domain. Views subscribe and re-render
/// from the receiver; transitions apply in dispatch order.
#[derive(Debug)]
pub struct SelectionCoordinator<K> {
    tx: watch::Sender<SelectionState<K>>,
}

impl<K: Clone + Eq + std::fmt::Debug> SelectionCoordinator<K> {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SelectionState::Unselected);
        SelectionCoordinator { tx }
    }

    /// Select `id`, or deselect it if it is already the selection.
    /// Returns the state after the transition.
    pub fn select(&self, id: K) -> SelectionState<K> {
        let next = if self.tx.borrow().is_selected(&id) {
            SelectionState::Unselected
        } else {
            SelectionState::Selected(id)
        };
        tracing::trace!(state = ?next, "selection transition");
        self.tx.send_replace(next.clone());
        next
    }

    /// Drop any selection.
    pub fn clear(&self) {
        tracing::trace!("selection cleared");
        self.tx.send_replace(SelectionState::Unselected);
    }

    pub fn selected(&self) -> Option<K> {
        self.tx.borrow().selected().cloned()
    }

    pub fn is_selected(&self, id: &K) -> bool {
        self.tx.borrow().is_selected(id)
    }

    /// Subscribe to selection changes. A fresh receiver starts at the
    /// current state.
    pub fn subscribe(&self) -> watch::Receiver<SelectionState<K>> {
        self.tx.subscribe()
    }
}

impl<K: Clone + Eq + std::fmt::Debug> Default for SelectionCoordinator<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// One coordinator per dashboard domain. Constructing the bundle wires
/// nothing across domains; each field is fully independent.
#[derive(Debug, Default)]
pub struct PageSelections {
    pub province: SelectionCoordinator<ProvinceId>,
    pub constituency: SelectionCoordinator<ConstituencyId>,
    pub report: SelectionCoordinator<ReportKind>,
    pub export_format: SelectionCoordinator<ExportFormat>,
    pub voter_row: SelectionCoordinator<VoterId>,
}

impl PageSelections {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_twice_toggles_back_off() {
        let provinces = SelectionCoordinator::new();
        assert_eq!(
            provinces.select(ProvinceId(3)),
            SelectionState::Selected(ProvinceId(3))
        );
        assert!(provinces.is_selected(&ProvinceId(3)));
        assert_eq!(provinces.select(ProvinceId(3)), SelectionState::Unselected);
        assert_eq!(provinces.selected(), None);
    }

    #[test]
    fn selecting_another_id_switches() {
        let provinces = SelectionCoordinator::new();
        provinces.select(ProvinceId(3));
        assert_eq!(
            provinces.select(ProvinceId(5)),
            SelectionState::Selected(ProvinceId(5))
        );
        assert!(!provinces.is_selected(&ProvinceId(3)));
        assert!(provinces.is_selected(&ProvinceId(5)));
    }

    #[test]
    fn clear_is_unconditional() {
        let provinces = SelectionCoordinator::new();
        provinces.clear();
        assert_eq!(provinces.selected(), None);
        provinces.select(ProvinceId(1));
        provinces.clear();
        assert_eq!(provinces.selected(), None);
    }

    #[test]
    fn domains_are_independent() {
        let page = PageSelections::new();
        page.province.select(ProvinceId(3));
        page.report.select(ReportKind::Province);
        page.export_format.select(ExportFormat::Pdf);

        assert!(page.province.is_selected(&ProvinceId(3)));
        assert!(page.report.is_selected(&ReportKind::Province));

        page.province.clear();
        assert_eq!(page.province.selected(), None);
        assert!(page.report.is_selected(&ReportKind::Province));
        assert!(page.export_format.is_selected(&ExportFormat::Pdf));
    }

    #[tokio::test]
    async fn subscribers_see_each_applied_state() {
        let provinces = SelectionCoordinator::new();
        let mut view = provinces.subscribe();
        assert_eq!(*view.borrow(), SelectionState::Unselected);

        provinces.select(ProvinceId(2));
        assert!(view.has_changed().unwrap());
        assert_eq!(
            *view.borrow_and_update(),
            SelectionState::Selected(ProvinceId(2))
        );

        provinces.select(ProvinceId(2));
        assert!(view.has_changed().unwrap());
        assert_eq!(*view.borrow_and_update(), SelectionState::Unselected);
    }

    #[tokio::test]
    async fn late_subscribers_start_at_the_current_state() {
        let provinces = SelectionCoordinator::new();
        provinces.select(ProvinceId(7));
        let view = provinces.subscribe();
        assert_eq!(*view.borrow(), SelectionState::Selected(ProvinceId(7)));
    }
}

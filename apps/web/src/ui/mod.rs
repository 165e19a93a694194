//! Contracts against the page's rendering targets. The controller only
//! knows show/hide/populate operations; the DOM specifics live in [`dom`].

pub mod dom;

use crate::domain::{Candidate, Card};
use crate::error::SuggestError;
use crate::render::RenderPlan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// The surfaces the controller drives: card container, notification toast,
/// global loading indicator, manual-address fallback panel, geolocation
/// status indicator, and the two trigger controls.
pub trait SuggestUi {
    /// Immediate feedback while a request is in flight. Clears the card
    /// area first.
    fn render_skeleton(&self, count: usize);

    fn clear_cards(&self);

    /// Clears the card area, then draws the optional fallback banner
    /// followed by the cards.
    fn render_cards(&self, cards: &[Card], banner: Option<&str>);

    /// Appends the nearby-places section after the cards.
    fn render_candidates(&self, candidates: &[Candidate]);

    fn set_loading(&self, visible: bool);

    fn set_submit_enabled(&self, enabled: bool);

    fn set_locate_enabled(&self, enabled: bool);

    fn show_geo_status(&self, visible: bool);

    fn show_addr_fallback(&self, visible: bool);

    /// Transient auto-dismissed notification. A new one replaces any
    /// pending dismiss timer.
    fn notify(&self, message: &str, kind: NoticeKind);
}

/// Draws one render plan. Starts from a cleared card area every call, so
/// presenting the same plan twice ends in the same state.
pub fn present<U: SuggestUi>(ui: &U, plan: &RenderPlan) {
    ui.render_cards(&plan.cards, plan.banner.as_deref());
    if !plan.candidates.is_empty() {
        ui.render_candidates(&plan.candidates);
    }
    if plan.cards.is_empty() {
        ui.notify(&SuggestError::EmptyResult.to_string(), NoticeKind::Error);
    }
    if let Some(notice) = &plan.notice {
        ui.notify(notice, NoticeKind::Info);
    }
}

#[cfg(test)]
mod tests {
    use super::{present, NoticeKind, SuggestUi};
    use crate::domain::{Candidate, Card, SuggestionResponse};
    use crate::render::RenderPlan;
    use std::cell::RefCell;

    /// Records the final card-area content plus every notification, the way
    /// a DOM surface would end up after the calls.
    #[derive(Default)]
    struct RecordingUi {
        cards: RefCell<Vec<Card>>,
        candidate_names: RefCell<Vec<String>>,
        notices: RefCell<Vec<(String, NoticeKind)>>,
    }

    impl SuggestUi for RecordingUi {
        fn render_skeleton(&self, _count: usize) {}

        fn clear_cards(&self) {
            self.cards.borrow_mut().clear();
            self.candidate_names.borrow_mut().clear();
        }

        fn render_cards(&self, cards: &[Card], _banner: Option<&str>) {
            self.clear_cards();
            self.cards.borrow_mut().extend_from_slice(cards);
        }

        fn render_candidates(&self, candidates: &[Candidate]) {
            self.candidate_names
                .borrow_mut()
                .extend(candidates.iter().map(|c| c.name.clone()));
        }

        fn set_loading(&self, _visible: bool) {}
        fn set_submit_enabled(&self, _enabled: bool) {}
        fn set_locate_enabled(&self, _enabled: bool) {}
        fn show_geo_status(&self, _visible: bool) {}
        fn show_addr_fallback(&self, _visible: bool) {}

        fn notify(&self, message: &str, kind: NoticeKind) {
            self.notices.borrow_mut().push((message.to_string(), kind));
        }
    }

    fn plan(suggestions: &str) -> RenderPlan {
        RenderPlan::from_response(&SuggestionResponse {
            suggestions: suggestions.to_string(),
            ..SuggestionResponse::default()
        })
    }

    #[test]
    fn presenting_twice_does_not_accumulate_cards() {
        let ui = RecordingUi::default();
        let plan = plan("1. Go hiking\nBring water\n2. Visit museum");

        present(&ui, &plan);
        let first = ui.cards.borrow().clone();
        present(&ui, &plan);

        assert_eq!(*ui.cards.borrow(), first);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn empty_suggestions_render_no_cards_and_one_error_notice() {
        let ui = RecordingUi::default();
        present(&ui, &plan(""));

        assert!(ui.cards.borrow().is_empty());
        let notices = ui.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0], ("result is empty".to_string(), NoticeKind::Error));
    }

    #[test]
    fn fallback_notice_is_informational_not_error() {
        let ui = RecordingUi::default();
        present(
            &ui,
            &RenderPlan::from_response(&SuggestionResponse {
                suggestions: "1. a".to_string(),
                fallback: true,
                ..SuggestionResponse::default()
            }),
        );

        let notices = ui.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].1, NoticeKind::Info);
    }
}

//! The two user-triggered lifecycles: locating the device and submitting a
//! suggestion request. Both are generic over the UI contract and over the
//! pending platform future, which keeps them runnable under a plain test
//! executor.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::app::state::App;
use crate::domain::{Coordinates, SuggestionRequest, SuggestionResponse};
use crate::error::SuggestError;
use crate::geo::PositionFailure;
use crate::payload::{self, FormSnapshot};
use crate::render::RenderPlan;
use crate::ui::{present, NoticeKind, SuggestUi};

/// Placeholder cards drawn while a request is in flight.
pub const SKELETON_CARDS: usize = 3;

/// Re-enables the controls and hides the loading indicator on every exit
/// route of a submission, exactly once.
struct InFlight<'a, U: SuggestUi> {
    ui: &'a U,
}

impl<'a, U: SuggestUi> InFlight<'a, U> {
    fn begin(ui: &'a U) -> Self {
        ui.set_loading(true);
        ui.set_submit_enabled(false);
        ui.set_locate_enabled(false);
        Self { ui }
    }
}

impl<U: SuggestUi> Drop for InFlight<'_, U> {
    fn drop(&mut self) {
        self.ui.set_loading(false);
        self.ui.set_submit_enabled(true);
        self.ui.set_locate_enabled(true);
    }
}

/// The device has no geolocation capability: tell the user and reveal the
/// manual-address fallback. No attempt is started.
pub fn geolocation_unsupported<U: SuggestUi>(ui: &U) {
    ui.notify(
        &SuggestError::UnsupportedCapability.to_string(),
        NoticeKind::Error,
    );
    ui.show_addr_fallback(true);
}

/// Runs one acquisition attempt around a pending position future.
///
/// The trigger stays disabled and the status indicator visible for the full
/// duration; on failure the manual-address fallback is revealed with the
/// platform-supplied reason in the notification.
pub async fn run_locate<U, Fut>(app: Rc<RefCell<App>>, ui: Rc<U>, position: Fut)
where
    U: SuggestUi,
    Fut: Future<Output = Result<Coordinates, PositionFailure>>,
{
    if !app.borrow_mut().begin_acquisition() {
        return;
    }
    ui.show_addr_fallback(false);
    ui.show_geo_status(true);
    ui.set_locate_enabled(false);

    let outcome = position.await;

    ui.show_geo_status(false);
    ui.set_locate_enabled(true);
    match outcome {
        Ok(coords) => {
            app.borrow_mut().record_position(coords);
            ui.notify("location acquired", NoticeKind::Info);
        }
        Err(failure) => {
            app.borrow_mut().acquisition_failed();
            ui.show_addr_fallback(true);
            let error = SuggestError::AcquisitionFailed {
                reason: failure.message,
            };
            ui.notify(&error.to_string(), NoticeKind::Error);
        }
    }
}

/// Runs one submission: validate, skeletons, request, render.
///
/// Validation failures block the submission before anything is disabled.
/// Request failures clear the card area; the in-flight guard restores the
/// controls whichever branch ran.
pub async fn run_submit<U, S, Fut>(app: Rc<RefCell<App>>, ui: Rc<U>, form: FormSnapshot, send: S)
where
    U: SuggestUi,
    S: FnOnce(SuggestionRequest) -> Fut,
    Fut: Future<Output = Result<SuggestionResponse, SuggestError>>,
{
    let resolved = app.borrow().resolved_location();
    let request = match payload::validate(payload::collect(&form, resolved)) {
        Ok(request) => request,
        Err(error) => {
            ui.notify(&error.to_string(), NoticeKind::Error);
            return;
        }
    };

    ui.render_skeleton(SKELETON_CARDS);
    let _in_flight = InFlight::begin(ui.as_ref());

    match send(request).await {
        Ok(response) => present(ui.as_ref(), &RenderPlan::from_response(&response)),
        Err(error) => {
            ui.clear_cards();
            ui.notify(&format!("request failed: {error}"), NoticeKind::Error);
        }
    }
}

//! Bridges the browser's callback-style geolocation API into a single-shot
//! future.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Geolocation, Position, PositionError, PositionOptions};

use crate::domain::Coordinates;

/// Acquisition gives up after this long.
pub const ACQUIRE_TIMEOUT_MS: u32 = 6_000;
/// A cached platform position no older than this is acceptable.
pub const POSITION_MAX_AGE_MS: u32 = 120_000;

/// Platform-reported acquisition failure (denied, timeout, unavailable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionFailure {
    pub code: u16,
    pub message: String,
}

/// `None` when the device exposes no geolocation capability.
pub fn device_geolocation() -> Option<Geolocation> {
    web_sys::window()?.navigator().geolocation().ok()
}

/// One low-accuracy position request. Resolves with the platform's answer,
/// whichever callback fires first; a late second callback finds the channel
/// spent and does nothing.
pub async fn request_position(geolocation: &Geolocation) -> Result<Coordinates, PositionFailure> {
    let (sender, receiver) = oneshot::channel::<Result<Coordinates, PositionFailure>>();
    let sender = Rc::new(RefCell::new(Some(sender)));

    let on_success = {
        let sender = Rc::clone(&sender);
        Closure::once(move |position: Position| {
            if let Some(sender) = sender.borrow_mut().take() {
                let coords = position.coords();
                let _ = sender.send(Ok(Coordinates {
                    lat: coords.latitude(),
                    lon: coords.longitude(),
                }));
            }
        })
    };
    let on_error = {
        let sender = Rc::clone(&sender);
        Closure::once(move |error: PositionError| {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(Err(PositionFailure {
                    code: error.code(),
                    message: error.message(),
                }));
            }
        })
    };

    let options = PositionOptions::new();
    options.set_enable_high_accuracy(false);
    options.set_timeout(ACQUIRE_TIMEOUT_MS);
    options.set_maximum_age(POSITION_MAX_AGE_MS);

    geolocation
        .get_current_position_with_error_callback_and_options(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
            &options,
        )
        .map_err(|error| PositionFailure {
            code: 0,
            message: crate::net::js_error_message(&error),
        })?;

    // The closures must outlive the await; the platform holds only borrowed
    // function references.
    match receiver.await {
        Ok(outcome) => outcome,
        Err(_) => Err(PositionFailure {
            code: 0,
            message: "position request was dropped".to_string(),
        }),
    }
}

//! # VEIKK proprietary HID report decoder
//!
//! VEIKK pen tablets multiplex everything they can say - absolute pen
//! position and pressure, the stylus barrel buttons, the button row, the
//! wheel, the gesture pad - onto a single proprietary 9-byte HID report.
//! This crate turns those raw buffers into a normalized stream of
//! [`LogicalEvent`]s, doing the one genuinely stateful part for you: buttons
//! and pad reports are *deltas* (only the bits that changed hands), so the
//! full held-down set has to be remembered across deliveries.
//!
//! This crate is transport-agnostic. Reading from hidraw/libusb, registering
//! an output device, and hot-plug are yours; hand every inbound report to
//! [`Decoder::dispatch`] and forward the batches your [`EventSink`] receives.
//!
//! To get started, look up your device's product ID with [`Decoder::new`].
//!
//! ```
//! use veikk_hid::{Decoder, EventSink, LogicalEvent};
//!
//! struct Printer;
//! impl EventSink for Printer {
//!     fn emit(&mut self, event: LogicalEvent) {
//!         println!("{event:?}");
//!     }
//!     fn flush(&mut self) {
//!         println!("---");
//!     }
//! }
//!
//! let mut decoder = Decoder::new(0x0002)?; // VEIKK A30
//! // A gesture pad report: swipe-up and swipe-left pressed together.
//! decoder.dispatch(&[9, 0x43, 1, 0x05, 0, 0, 0, 0, 0], &mut Printer)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Hardware support
//! The S640, A30, A50, A15, A15 Pro, and VK1560 are in the
//! [model table](model::Model::all). Unknown product IDs are refused at
//! attach - there is no safe guess for axis ranges.
//!
//! **Note:** the proprietary interface stays silent until the staggered
//! [wake-up writes](wakeup) have been sent. That's the transport's job; the
//! decoder tolerates the quiet period just fine.

#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod events;
pub mod frame;
pub mod model;
pub mod state;
mod translate;
pub mod wakeup;

pub use events::{Channel, EventBatch, EventSink, Key, LogicalEvent};
pub use frame::FrameError;
pub use model::Model;
use frame::{ButtonsReport, Frame, PadReport, PenReport, ReportType};
use state::DeviceState;

/// The attach path asked for hardware we have no descriptor for.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no model descriptor for product id {0:#06x}")]
pub struct UnsupportedModel(pub u16);

/// One attached device: a resolved [`Model`] plus the persistent
/// button/wheel/pad state.
///
/// A constructed decoder is ready - resolving the model *is* the
/// initialization, so there's no half-built state to misuse. Dropping it is
/// detach. One decoder per physical device, and deliveries for a device must
/// be serialized: each [`dispatch`](Self::dispatch) is a full
/// decode-mutate-emit critical section over the owned state.
#[derive(Debug, PartialEq)]
pub struct Decoder {
    model: &'static Model,
    state: DeviceState,
}

impl Decoder {
    /// Resolve the capability descriptor for a product ID and start with
    /// everything released.
    ///
    /// # Errors
    /// [`UnsupportedModel`] for hardware not in the model table. Refuse the
    /// attach in that case.
    pub fn new(product_id: u16) -> Result<Self, UnsupportedModel> {
        let model = Model::lookup(product_id).ok_or(UnsupportedModel(product_id))?;
        Ok(Self {
            model,
            state: DeviceState::default(),
        })
    }

    /// The capability descriptor this decoder was attached with. The attach
    /// path wants this for axis ranges and for which
    /// [wake-up writes](crate::wakeup::sequence) to schedule.
    #[must_use]
    pub fn model(&self) -> &'static Model {
        self.model
    }

    /// The current held-down masks. Read-only; only reports mutate state.
    #[must_use]
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Process one raw report to completion: parse, translate against the
    /// persistent state, emit the batch, then flush once.
    ///
    /// Unknown report types and reports for features this model doesn't
    /// have produce zero events and no flush - the decoder just stays ready
    /// for the next report. Both are logged, nothing more.
    ///
    /// # Errors
    /// [`FrameError`] for deliveries that aren't proprietary frames at all
    /// (wrong length or report ID). The report is dropped, state and sink
    /// untouched.
    pub fn dispatch(
        &mut self,
        buffer: &[u8],
        sink: &mut impl EventSink,
    ) -> Result<(), FrameError> {
        let frame = Frame::parse(buffer).map_err(|err| {
            log::debug!("dropping malformed delivery: {err}");
            err
        })?;

        let batch = match frame.ty {
            ReportType::Pen => translate::pen(&PenReport::decode(frame.payload)),
            ReportType::Buttons => {
                if !self.model.has_button_pad {
                    log::trace!(
                        "{} has no button row, ignoring {} report",
                        self.model.name,
                        frame.ty.as_ref()
                    );
                    return Ok(());
                }
                translate::buttons(&ButtonsReport::decode(frame.payload), &mut self.state)
            }
            ReportType::Pad => {
                if !self.model.has_gesture_pad {
                    log::trace!(
                        "{} has no gesture pad, ignoring {} report",
                        self.model.name,
                        frame.ty.as_ref()
                    );
                    return Ok(());
                }
                translate::pad(&PadReport::decode(frame.payload), &mut self.state)
            }
            ReportType::Unknown(tag) => {
                // Forward compat: newer hardware may grow report families we
                // don't know. Not an error.
                log::debug!("unknown report type {tag:#04x}, ignoring");
                return Ok(());
            }
        };

        for event in &batch {
            sink.emit(*event);
        }
        sink.flush();
        Ok(())
    }
}

//! # Wake-up
//!
//! Out of the box the tablets speak only their generic HID interfaces. The
//! proprietary interface this crate decodes stays silent until a magic
//! output report is written per feature - and the hardware misses them if
//! they're written back to back, so the vendor driver staggers them roughly
//! 100 ms apart.
//!
//! The core never sleeps, so the stagger is expressed as data: a short
//! capability-gated sequence of [`Step`]s, each an output report plus the
//! delay (measured from device attach) after which the transport should
//! write it. Run them on whatever timer the host has - a tokio sleep, a
//! workqueue, a plain thread. Reports arriving before the sequence finishes
//! are harmless; families that aren't enabled yet simply don't report.

use std::time::Duration;

use crate::{frame::REPORT_LEN, model::Model};

/// Enables the proprietary pen reports.
pub const PEN_ENABLE: [u8; REPORT_LEN] = [0x09, 0x01, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
/// Enables the button row / wheel reports.
pub const BUTTONS_ENABLE: [u8; REPORT_LEN] = [0x09, 0x02, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
/// Enables the gesture pad reports.
pub const PAD_ENABLE: [u8; REPORT_LEN] = [0x09, 0x03, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];

/// One scheduled feature-enable write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// When to send, measured from attach. Offsets, not gaps between steps.
    pub delay: Duration,
    /// The 9-byte output report to write to the device.
    pub report: [u8; REPORT_LEN],
}

/// The feature-enable schedule for a model: the pen always, the button row
/// and gesture pad only where the hardware has them.
pub fn sequence(model: &Model) -> impl Iterator<Item = Step> {
    [
        Some(Step {
            delay: Duration::from_millis(100),
            report: PEN_ENABLE,
        }),
        model.has_button_pad.then_some(Step {
            delay: Duration::from_millis(200),
            report: BUTTONS_ENABLE,
        }),
        model.has_gesture_pad.then_some(Step {
            delay: Duration::from_millis(300),
            report: PAD_ENABLE,
        }),
    ]
    .into_iter()
    .flatten()
}

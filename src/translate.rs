//! # Translators
//!
//! One function per report family, from `(decoded payload, state)` to an
//! ordered batch of logical events. Emission order is part of the protocol
//! contract and is bit-exact to what the vendor driver produces: consumers
//! key off it (axes before keys for the pen, row keys in bit order for the
//! buttons).

use crate::{
    events::{Channel, EventBatch, Key, LogicalEvent},
    frame::{ButtonsReport, PadReport, PenReport},
    state::{ButtonMask, DeviceState, PadMask, WheelMask},
};

/// Row bitmap bits in emission order. The wheel's center button shares the
/// row bitmap as its topmost bit.
const ROW_KEYS: [(ButtonMask, Key); 13] = [
    (ButtonMask::BUTTON_1, Key::Button1),
    (ButtonMask::BUTTON_2, Key::Button2),
    (ButtonMask::BUTTON_3, Key::Button3),
    (ButtonMask::BUTTON_4, Key::Button4),
    (ButtonMask::BUTTON_5, Key::Button5),
    (ButtonMask::BUTTON_6, Key::Button6),
    (ButtonMask::BUTTON_7, Key::Button7),
    (ButtonMask::BUTTON_8, Key::Button8),
    (ButtonMask::BUTTON_9, Key::Button9),
    (ButtonMask::BUTTON_10, Key::Button10),
    (ButtonMask::EXTRA_A, Key::ExtraA),
    (ButtonMask::EXTRA_B, Key::ExtraB),
    (ButtonMask::WHEEL, Key::Wheel),
];

const PAD_KEYS: [(PadMask, Key); 5] = [
    (PadMask::SWIPE_UP, Key::SwipeUp),
    (PadMask::SWIPE_DOWN, Key::SwipeDown),
    (PadMask::SWIPE_LEFT, Key::SwipeLeft),
    (PadMask::SWIPE_RIGHT, Key::SwipeRight),
    (PadMask::DOUBLE_TAP, Key::DoubleTap),
];

/// Translate a pen sample. Stateless - the pen reports absolute values every
/// time, so there's nothing to remember between reports.
pub(crate) fn pen(report: &PenReport) -> EventBatch {
    let mut batch = EventBatch::new();
    batch.push(LogicalEvent::abs(Channel::AbsX, report.x));
    batch.push(LogicalEvent::abs(Channel::AbsY, report.y));
    batch.push(LogicalEvent::abs(Channel::AbsPressure, report.pressure));
    batch.push(LogicalEvent::key(Key::Touch, report.buttons & 0x01 != 0));
    batch.push(LogicalEvent::key(Key::Stylus, report.buttons & 0x02 != 0));
    batch.push(LogicalEvent::key(Key::Stylus2, report.buttons & 0x04 != 0));
    batch
}

/// Translate a buttons delta against the persistent state.
///
/// The row and gear bitmaps are independent: a row delta leaves the wheel
/// mask alone and vice versa. The *entire* updated state is then re-emitted,
/// not just the changed keys, so a dropped report can never wedge a consumer
/// into a stale held set for longer than one delivery.
pub(crate) fn buttons(report: &ButtonsReport, state: &mut DeviceState) -> EventBatch {
    if report.row {
        state.apply_row(report.pressed, report.bits);
    } else {
        state.apply_gear(report.pressed, report.bits);
    }

    let mut batch = EventBatch::new();
    for (bit, key) in ROW_KEYS {
        batch.push(LogicalEvent::key(key, state.buttons.contains(bit)));
    }
    batch.push(LogicalEvent::key(
        Key::GearDown,
        state.wheel.contains(WheelMask::GEAR_DOWN),
    ));
    batch.push(LogicalEvent::key(
        Key::GearUp,
        state.wheel.contains(WheelMask::GEAR_UP),
    ));
    batch
}

/// Translate a gesture pad delta. Same full-state re-emission as
/// [`buttons`].
pub(crate) fn pad(report: &PadReport, state: &mut DeviceState) -> EventBatch {
    state.apply_pad(report.pressed, report.bits);

    let mut batch = EventBatch::new();
    for (bit, key) in PAD_KEYS {
        batch.push(LogicalEvent::key(key, state.pad.contains(bit)));
    }
    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_of(batch: &EventBatch) -> Vec<(Key, i32)> {
        batch
            .iter()
            .filter_map(|ev| match ev.channel {
                Channel::Key(key) => Some((key, ev.value)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn pen_emits_axes_then_keys_in_fixed_order() {
        let report = PenReport {
            buttons: 0x05,
            x: 1234,
            y: 777,
            pressure: 4096,
        };
        let batch = pen(&report);
        assert_eq!(
            batch.as_slice(),
            &[
                LogicalEvent {
                    channel: Channel::AbsX,
                    value: 1234
                },
                LogicalEvent {
                    channel: Channel::AbsY,
                    value: 777
                },
                LogicalEvent {
                    channel: Channel::AbsPressure,
                    value: 4096
                },
                LogicalEvent {
                    channel: Channel::Key(Key::Touch),
                    value: 1
                },
                LogicalEvent {
                    channel: Channel::Key(Key::Stylus),
                    value: 0
                },
                LogicalEvent {
                    channel: Channel::Key(Key::Stylus2),
                    value: 1
                },
            ]
        );
        // Pure: same bytes, same batch.
        assert_eq!(batch, pen(&report));
    }

    #[test]
    fn buttons_reemits_the_full_row_every_time() {
        let mut state = DeviceState::default();
        let press = ButtonsReport {
            row: true,
            pressed: true,
            bits: 0x0003,
        };
        let batch = buttons(&press, &mut state);
        assert_eq!(batch.len(), 15);
        assert_eq!(
            keys_of(&batch)[..3],
            [(Key::Button1, 1), (Key::Button2, 1), (Key::Button3, 0)]
        );

        // Release only button 1; button 2 must survive at level 1.
        let release = ButtonsReport {
            row: true,
            pressed: false,
            bits: 0x0001,
        };
        let batch = buttons(&release, &mut state);
        assert_eq!(
            keys_of(&batch)[..2],
            [(Key::Button1, 0), (Key::Button2, 1)]
        );
        assert_eq!(state.buttons.bits(), 0x0002);
    }

    #[test]
    fn gear_deltas_leave_the_row_mask_alone() {
        let mut state = DeviceState::default();
        buttons(
            &ButtonsReport {
                row: true,
                pressed: true,
                bits: 0x0400,
            },
            &mut state,
        );
        let batch = buttons(
            &ButtonsReport {
                row: false,
                pressed: true,
                bits: 0x0001,
            },
            &mut state,
        );
        let keys = keys_of(&batch);
        assert!(keys.contains(&(Key::ExtraA, 1)));
        assert!(keys.contains(&(Key::GearDown, 1)));
        assert!(keys.contains(&(Key::GearUp, 0)));
        assert_eq!(state.buttons, ButtonMask::EXTRA_A);
    }

    #[test]
    fn wheel_center_rides_the_row_bitmap() {
        let mut state = DeviceState::default();
        let batch = buttons(
            &ButtonsReport {
                row: true,
                pressed: true,
                bits: 0x1000,
            },
            &mut state,
        );
        assert!(keys_of(&batch).contains(&(Key::Wheel, 1)));
    }

    #[test]
    fn pad_emits_all_five_gestures() {
        let mut state = DeviceState::default();
        let batch = pad(
            &PadReport {
                pressed: true,
                bits: 0x05,
            },
            &mut state,
        );
        assert_eq!(
            keys_of(&batch),
            [
                (Key::SwipeUp, 1),
                (Key::SwipeDown, 0),
                (Key::SwipeLeft, 1),
                (Key::SwipeRight, 0),
                (Key::DoubleTap, 0),
            ]
        );
        assert_eq!(state.pad.bits(), 0x05);
    }
}

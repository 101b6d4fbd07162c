//! # Logical events
//!
//! The normalized output of the decoder: a flat stream of `(channel, value)`
//! pairs, one batch per raw report. Axis channels carry the raw device range
//! (consult the [`Model`](crate::model::Model) for the maxima), key channels
//! carry a 0/1 level.
//!
//! Key events are *levels*, not edges. A buttons or pad delta re-emits the
//! full held-down set every time, so a consumer can treat each batch as the
//! absolute truth of what is currently pressed. A held modifier button must
//! not flicker off just because a sibling's bit cleared in the same window -
//! hence levels.

use smallvec::SmallVec;

/// Every key the protocol can report, across all three report families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumCount)]
pub enum Key {
    /// Pen tip contact.
    Touch,
    /// Lower barrel button on the stylus.
    Stylus,
    /// Upper barrel button on the stylus.
    Stylus2,
    /// The numbered buttons of the button row, bits `0x001..=0x200`.
    Button1,
    Button2,
    Button3,
    Button4,
    Button5,
    Button6,
    Button7,
    Button8,
    Button9,
    Button10,
    /// First extra row button past the numbered ten, bit `0x400`.
    ExtraA,
    /// Second extra row button, bit `0x800`.
    ExtraB,
    /// The wheel's center button, bit `0x1000` of the row bitmap.
    Wheel,
    /// Wheel turned one notch towards the user.
    GearDown,
    /// Wheel turned one notch away from the user.
    GearUp,
    SwipeUp,
    SwipeDown,
    SwipeLeft,
    SwipeRight,
    /// Two-finger tap on the gesture pad.
    DoubleTap,
}

/// What a [`LogicalEvent`]'s value describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Absolute X, `0..=x_max`.
    AbsX,
    /// Absolute Y, `0..=y_max`.
    AbsY,
    /// Absolute tip pressure, `0..=pressure_max`.
    AbsPressure,
    /// Key level, `0` released or `1` held.
    Key(Key),
}

/// One normalized input event. Produced, forwarded, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogicalEvent {
    pub channel: Channel,
    pub value: i32,
}

impl LogicalEvent {
    pub(crate) fn abs(channel: Channel, value: u16) -> Self {
        Self {
            channel,
            value: i32::from(value),
        }
    }
    pub(crate) fn key(key: Key, held: bool) -> Self {
        Self {
            channel: Channel::Key(key),
            value: i32::from(held),
        }
    }
}

/// The events decoded from a single raw report, in emission order.
///
/// A buttons report expands to the most events (13 row keys plus the two
/// gears), so the inline capacity covers every report family without
/// touching the heap.
pub type EventBatch = SmallVec<[LogicalEvent; 16]>;

/// Where decoded events go.
///
/// The decoder calls [`emit`](EventSink::emit) once per event and
/// [`flush`](EventSink::flush) exactly once after each fully translated
/// report. `flush` is the batch boundary: a consumer must never act on a
/// partial batch, so buffer until it arrives (for a Linux `uinput` sink this
/// is the `EV_SYN` barrier).
pub trait EventSink {
    fn emit(&mut self, event: LogicalEvent);
    fn flush(&mut self);
}

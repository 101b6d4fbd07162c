//! # Device state
//!
//! Buttons and pad reports are deltas - each one carries only the bits that
//! changed hands in that delivery. Whatever is *still* held has to be
//! remembered here, across arbitrarily many reports, or a held modifier
//! button would drop the moment any sibling was pressed or released.
//!
//! One [`DeviceState`] exists per attached device, owned exclusively by that
//! device's [`Decoder`](crate::Decoder). Mutation is strictly
//! read-modify-write per report: OR the delta in on press, AND it out on
//! release.

bitflags::bitflags! {
    /// Held-down set of the button row. One bit per physical button, plus
    /// the wheel's center button at `0x1000`.
    #[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
    pub struct ButtonMask: u16 {
        const BUTTON_1 = 1 << 0;
        const BUTTON_2 = 1 << 1;
        const BUTTON_3 = 1 << 2;
        const BUTTON_4 = 1 << 3;
        const BUTTON_5 = 1 << 4;
        const BUTTON_6 = 1 << 5;
        const BUTTON_7 = 1 << 6;
        const BUTTON_8 = 1 << 7;
        const BUTTON_9 = 1 << 8;
        const BUTTON_10 = 1 << 9;
        const EXTRA_A = 1 << 10;
        const EXTRA_B = 1 << 11;
        const WHEEL = 1 << 12;
    }

    /// Held-down set of the wheel gear directions.
    #[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
    pub struct WheelMask: u8 {
        const GEAR_DOWN = 1 << 0;
        const GEAR_UP = 1 << 1;
    }

    /// Held-down set of the gesture pad.
    #[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
    pub struct PadMask: u8 {
        const SWIPE_UP = 1 << 0;
        const SWIPE_DOWN = 1 << 1;
        const SWIPE_LEFT = 1 << 2;
        const SWIPE_RIGHT = 1 << 3;
        const DOUBLE_TAP = 1 << 4;
    }
}

/// The live bitmask state of one physical device.
///
/// Invariant: each mask's set bits are exactly the logical inputs currently
/// considered held down.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct DeviceState {
    pub buttons: ButtonMask,
    pub wheel: WheelMask,
    pub pad: PadMask,
}

impl DeviceState {
    /// Fold a button-row delta in. The wheel mask is untouched.
    ///
    /// Bits past the known buttons are retained as-is rather than dropped -
    /// they round-trip through press/release like any other and simply never
    /// map to a key.
    pub(crate) fn apply_row(&mut self, pressed: bool, bits: u16) {
        let bits = ButtonMask::from_bits_retain(bits);
        if pressed {
            self.buttons.insert(bits);
        } else {
            self.buttons.remove(bits);
        }
    }

    /// Fold a wheel-gear delta in. The row mask is untouched. The gear
    /// bitmap only ever uses the low byte.
    pub(crate) fn apply_gear(&mut self, pressed: bool, bits: u16) {
        #[allow(clippy::cast_possible_truncation)]
        let bits = WheelMask::from_bits_retain(bits as u8);
        if pressed {
            self.wheel.insert(bits);
        } else {
            self.wheel.remove(bits);
        }
    }

    /// Fold a gesture pad delta in.
    pub(crate) fn apply_pad(&mut self, pressed: bool, bits: u8) {
        let bits = PadMask::from_bits_retain(bits);
        if pressed {
            self.pad.insert(bits);
        } else {
            self.pad.remove(bits);
        }
    }
}

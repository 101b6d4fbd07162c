//! # Frames
//!
//! The proprietary VEIKK interface delivers everything - pen motion, the
//! button row, the gesture pad - as fixed nine-byte reports on a single HID
//! report ID. Byte 0 is that ID (always `9`), byte 1 selects one of three
//! payload shapes, and the remaining seven bytes are the payload itself.
//!
//! Parsing is a pure function of the buffer. Nothing here touches device
//! state; see [`crate::translate`] for the stateful half.

/// The report ID the proprietary interface multiplexes everything onto.
pub const REPORT_ID: u8 = 9;
/// Total frame length, ID byte included.
pub const REPORT_LEN: usize = 9;
/// Payload length, after the ID and type bytes.
pub const PAYLOAD_LEN: usize = 7;

const PEN_TAG: u8 = 0x41;
const BUTTONS_TAG: u8 = 0x42;
const PAD_TAG: u8 = 0x43;

/// A transport delivery that doesn't look like a proprietary frame at all.
///
/// These are dropped before any decoding happens and never disturb the
/// persistent button state.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// The buffer wasn't exactly [`REPORT_LEN`] bytes.
    #[error("expected a {REPORT_LEN} byte report, got {0} bytes")]
    BadLength(usize),
    /// Byte 0 wasn't [`REPORT_ID`].
    #[error("expected report id {REPORT_ID}, got {0}")]
    BadId(u8),
}

/// Which of the three payload shapes follows the type byte.
///
/// An unrecognized type byte is *not* an error - the hardware is free to grow
/// new report families, and we just shrug at them. (`Unknown` decodes to zero
/// events downstream.)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::AsRefStr)]
pub enum ReportType {
    /// Absolute position, pressure, and the stylus barrel buttons.
    Pen,
    /// A press/release delta for the button row or the wheel gears.
    Buttons,
    /// A press/release delta for the gesture pad.
    Pad,
    /// Anybody's guess. Carried around for logging.
    Unknown(u8),
}

impl ReportType {
    fn from_tag(tag: u8) -> Self {
        match tag {
            PEN_TAG => Self::Pen,
            BUTTONS_TAG => Self::Buttons,
            PAD_TAG => Self::Pad,
            other => Self::Unknown(other),
        }
    }
}

/// A validated view over one raw report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Payload shape, from the type byte.
    pub ty: ReportType,
    /// The seven payload bytes. Fixed size, so the field codec below can
    /// index with compile-time offsets and never bounds-check.
    pub payload: &'a [u8; PAYLOAD_LEN],
}

impl<'a> Frame<'a> {
    /// Validate a raw buffer against the fixed frame layout.
    ///
    /// # Errors
    /// [`FrameError::BadLength`] unless the buffer is exactly nine bytes,
    /// [`FrameError::BadId`] unless byte 0 is `9`.
    pub fn parse(buffer: &'a [u8]) -> Result<Self, FrameError> {
        let buffer: &[u8; REPORT_LEN] = buffer
            .try_into()
            .map_err(|_| FrameError::BadLength(buffer.len()))?;
        let [id, tag, payload @ ..] = buffer;
        if *id != REPORT_ID {
            return Err(FrameError::BadId(*id));
        }
        Ok(Self {
            ty: ReportType::from_tag(*tag),
            payload,
        })
    }
}

/// Read an unaligned little-endian `u16` out of a payload.
///
/// Offsets are compile-time constants per payload shape (0/2/4 for the pen
/// axes, 2 for the buttons bitmap), and the payload is statically seven
/// bytes, so this can't go out of bounds for any offset used in this crate.
pub(crate) fn read_u16_le(payload: &[u8; PAYLOAD_LEN], offset: usize) -> u16 {
    u16::from_le_bytes([payload[offset], payload[offset + 1]])
}

/// Decoded pen payload: `[btns][x_lo,x_hi][y_lo,y_hi][p_lo,p_hi]`.
///
/// Every byte pattern is a valid pen sample; there's nothing to reject here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PenReport {
    /// Stylus button bitmap: bit 0 = tip touch, bit 1/2 = barrel buttons.
    pub buttons: u8,
    pub x: u16,
    pub y: u16,
    pub pressure: u16,
}

impl PenReport {
    #[must_use]
    pub fn decode(payload: &[u8; PAYLOAD_LEN]) -> Self {
        Self {
            buttons: payload[0],
            x: read_u16_le(payload, 1),
            y: read_u16_le(payload, 3),
            pressure: read_u16_le(payload, 5),
        }
    }
}

/// Decoded buttons payload: `[subtype][pressed][bits_lo,bits_hi][unused x3]`.
///
/// This is a *delta*: `bits` names only the buttons whose state changed in
/// this delivery, with `pressed` saying which way they all went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonsReport {
    /// `true` for the button row, `false` for the wheel gears. (The hardware
    /// sends subtype 1 for the row and 3 for the wheel; anything that isn't
    /// 1 is treated as wheel.)
    pub row: bool,
    pub pressed: bool,
    /// Bitmap of the changed buttons. Up to 13 meaningful bits for the row,
    /// 2 for the wheel.
    pub bits: u16,
}

impl ButtonsReport {
    #[must_use]
    pub fn decode(payload: &[u8; PAYLOAD_LEN]) -> Self {
        Self {
            row: payload[0] == 1,
            pressed: payload[1] != 0,
            bits: read_u16_le(payload, 2),
        }
    }
}

/// Decoded gesture pad payload: `[pressed][bits][unused x5]`. Also a delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PadReport {
    pub pressed: bool,
    /// 5-bit gesture bitmap: swipe up/down/left/right, double-tap.
    pub bits: u8,
}

impl PadReport {
    #[must_use]
    pub fn decode(payload: &[u8; PAYLOAD_LEN]) -> Self {
        Self {
            pressed: payload[0] != 0,
            bits: payload[1],
        }
    }
}

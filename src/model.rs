//! # Models
//!
//! Static capability descriptors for the known VEIKK hardware. Looked up
//! once at attach time by USB product ID; shared read-only by every decoder
//! of that model afterwards.

/// VEIKK's USB vendor ID.
pub const VENDOR_ID: u16 = 0x2FEB;

/// Physical capabilities of one tablet model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Model {
    /// Marketing name, e.g. `"VEIKK A30"`.
    pub name: &'static str,
    /// USB product ID under [`VENDOR_ID`].
    pub product_id: u16,
    pub x_max: u32,
    pub y_max: u32,
    pub pressure_max: u32,
    /// Whether the model has the button row (and, on some, the wheel - the
    /// wheel shares the buttons report family, so it rides this flag).
    pub has_button_pad: bool,
    /// Whether the model has the touch gesture pad. Distinct from the
    /// wheel: the VK1560 has buttons and a wheel but no gesture pad.
    pub has_gesture_pad: bool,
}

static MODELS: [Model; 6] = [
    Model {
        name: "VEIKK S640",
        product_id: 0x0001,
        x_max: 30480,
        y_max: 20320,
        pressure_max: 8192,
        has_button_pad: false,
        has_gesture_pad: false,
    },
    Model {
        name: "VEIKK A30",
        product_id: 0x0002,
        x_max: 32768,
        y_max: 32768,
        pressure_max: 8192,
        has_button_pad: true,
        has_gesture_pad: true,
    },
    Model {
        name: "VEIKK A50",
        product_id: 0x0003,
        x_max: 50800,
        y_max: 30480,
        pressure_max: 8192,
        has_button_pad: true,
        has_gesture_pad: true,
    },
    Model {
        name: "VEIKK A15",
        product_id: 0x0004,
        x_max: 32768,
        y_max: 32768,
        pressure_max: 8192,
        has_button_pad: true,
        has_gesture_pad: true,
    },
    Model {
        name: "VEIKK A15 Pro",
        product_id: 0x0006,
        x_max: 32768,
        y_max: 32768,
        pressure_max: 8192,
        has_button_pad: true,
        has_gesture_pad: true,
    },
    Model {
        name: "VEIKK VK1560",
        product_id: 0x1001,
        x_max: 34420,
        y_max: 19360,
        pressure_max: 8192,
        has_button_pad: true,
        has_gesture_pad: false,
    },
];

impl Model {
    /// Find the descriptor for a product ID, if we know the hardware.
    ///
    /// `None` means the attach path must refuse to bring the device up -
    /// there is no safe guess for axis ranges.
    #[must_use]
    pub fn lookup(product_id: u16) -> Option<&'static Model> {
        MODELS.iter().find(|model| model.product_id == product_id)
    }

    /// All known models, for enumeration/matching tables.
    #[must_use]
    pub fn all() -> &'static [Model] {
        &MODELS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_resolve() {
        let a30 = Model::lookup(0x0002).unwrap();
        assert_eq!(a30.name, "VEIKK A30");
        assert!(a30.has_button_pad);
        assert!(a30.has_gesture_pad);
        assert_eq!(a30.pressure_max, 8192);

        // The S640 is the bare slate of the family.
        let s640 = Model::lookup(0x0001).unwrap();
        assert!(!s640.has_button_pad);
        assert!(!s640.has_gesture_pad);

        // The VK1560 has the row and wheel but no gesture pad.
        let vk1560 = Model::lookup(0x1001).unwrap();
        assert!(vk1560.has_button_pad);
        assert!(!vk1560.has_gesture_pad);
    }

    #[test]
    fn unknown_ids_do_not() {
        assert_eq!(Model::lookup(0xFFFF), None);
        assert_eq!(Model::lookup(0x0005), None);
    }

    #[test]
    fn product_ids_are_unique() {
        for (i, a) in Model::all().iter().enumerate() {
            for b in &Model::all()[i + 1..] {
                assert_ne!(a.product_id, b.product_id);
            }
        }
    }
}

//! Pointer tracking and device classification
//!
//! The device class is decided once per mount. Coarse (touch) devices have
//! no persistent hover position, so repulsion is disabled for them.

use tracing::debug;

/// Input characteristics of the host device
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceClass {
    /// Mouse or trackpad with a persistent hover position
    #[default]
    Fine,
    /// Touch or other coarse pointer
    Coarse,
}

/// User-agent fragments that mark a mobile/touch device
const MOBILE_UA_MARKERS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

impl DeviceClass {
    /// Classify from a media-query capability check.
    ///
    /// `no_hover` is the result of `(hover: none), (pointer: coarse)`.
    pub fn from_capability(no_hover: bool) -> Self {
        if no_hover {
            DeviceClass::Coarse
        } else {
            DeviceClass::Fine
        }
    }

    /// Heuristic fallback for hosts without media queries
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if MOBILE_UA_MARKERS.iter().any(|marker| ua.contains(marker)) {
            DeviceClass::Coarse
        } else {
            DeviceClass::Fine
        }
    }

    pub fn is_touch(self) -> bool {
        self == DeviceClass::Coarse
    }
}

/// Last known pointer position and whether it is over the viewport
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub active: bool,
    device: DeviceClass,
}

impl PointerState {
    pub fn new(device: DeviceClass) -> Self {
        debug!(?device, "Pointer tracker created");
        Self {
            x: 0.0,
            y: 0.0,
            active: false,
            device,
        }
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }

    /// Record a pointer move; the pointer becomes active
    pub fn on_move(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.active = true;
    }

    /// Pointer left the viewport; coordinates are kept but ignored
    pub fn on_leave(&mut self) {
        self.active = false;
    }

    /// Whether the pointer currently pushes particles away
    #[inline]
    pub fn repels(&self) -> bool {
        self.active && !self.device.is_touch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_classification() {
        let mobile = [
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15",
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36",
            "Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X)",
            "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)",
            "Mozilla/5.0 (compatible; MSIE 10.0; Windows Phone 8.0; IEMobile/10.0)",
        ];
        for ua in mobile {
            assert_eq!(DeviceClass::from_user_agent(ua), DeviceClass::Coarse, "{ua}");
        }

        let desktop = [
            "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) AppleWebKit/605.1.15 Safari/605.1.15",
            "",
        ];
        for ua in desktop {
            assert_eq!(DeviceClass::from_user_agent(ua), DeviceClass::Fine, "{ua}");
        }
    }

    #[test]
    fn test_capability_classification() {
        assert_eq!(DeviceClass::from_capability(true), DeviceClass::Coarse);
        assert_eq!(DeviceClass::from_capability(false), DeviceClass::Fine);
    }

    #[test]
    fn move_then_leave() {
        let mut pointer = PointerState::new(DeviceClass::Fine);
        assert!(!pointer.repels());

        pointer.on_move(12.0, 34.0);
        assert!(pointer.active);
        assert!(pointer.repels());
        assert_eq!((pointer.x, pointer.y), (12.0, 34.0));

        pointer.on_leave();
        assert!(!pointer.active);
        assert!(!pointer.repels());
        assert_eq!((pointer.x, pointer.y), (12.0, 34.0));
    }

    #[test]
    fn touch_never_repels() {
        let mut pointer = PointerState::new(DeviceClass::Coarse);
        pointer.on_move(10.0, 10.0);
        assert!(pointer.active);
        assert!(!pointer.repels());
    }
}

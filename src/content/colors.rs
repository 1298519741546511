//! Per-friend color tags used by the renderer for glows and markers.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorTag {
    Green,
    Orange,
    Red,
    LightBlue,
    Brown,
    Purple,
    SteelGray,
    ElectricBlue,
}

impl ColorTag {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Green => (0, 200, 0),
            Self::Orange => (255, 165, 0),
            Self::Red => (220, 20, 60),
            Self::LightBlue => (173, 216, 230),
            Self::Brown => (139, 69, 19),
            Self::Purple => (128, 0, 128),
            Self::SteelGray => (112, 128, 144),
            Self::ElectricBlue => (125, 249, 255),
        }
    }
}

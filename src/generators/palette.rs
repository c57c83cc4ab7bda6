//! Fixed colour palettes for the tile grid

use serde::{Deserialize, Serialize};

use crate::render::colors::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PaletteName {
    Shadowplay,
    Spectrum9,
    Binary,
    Greyscale,
    Rgb,
    Yell,
    Owinja,
    Folklore,
}

impl PaletteName {
    pub const ALL: [PaletteName; 8] = [
        PaletteName::Shadowplay,
        PaletteName::Spectrum9,
        PaletteName::Binary,
        PaletteName::Greyscale,
        PaletteName::Rgb,
        PaletteName::Yell,
        PaletteName::Owinja,
        PaletteName::Folklore,
    ];

    pub fn colors(self) -> &'static [Rgb] {
        match self {
            PaletteName::Shadowplay => SHADOWPLAY,
            PaletteName::Spectrum9 => SPECTRUM9,
            PaletteName::Binary => BINARY,
            PaletteName::Greyscale => GREYSCALE,
            PaletteName::Rgb => RGB,
            PaletteName::Yell => YELL,
            PaletteName::Owinja => OWINJA,
            PaletteName::Folklore => FOLKLORE,
        }
    }
}

// Bridget Riley, "Shadowplay"
const SHADOWPLAY: &[Rgb] = &[
    Rgb::new(61, 85, 119),
    Rgb::new(48, 102, 208),
    Rgb::new(0, 141, 184),
    Rgb::new(112, 179, 113),
    Rgb::new(232, 98, 131),
    Rgb::new(112, 169, 236),
    Rgb::new(162, 124, 171),
    Rgb::new(197, 141, 211),
    Rgb::new(255, 164, 82),
    Rgb::new(248, 221, 143),
    Rgb::new(255, 224, 230),
];

// Ellsworth Kelly, "Spectrum IX"
const SPECTRUM9: &[Rgb] = &[
    Rgb::new(238, 225, 58),
    Rgb::new(143, 220, 67),
    Rgb::new(104, 209, 120),
    Rgb::new(42, 176, 186),
    Rgb::new(48, 138, 214),
    Rgb::new(97, 114, 197),
    Rgb::new(116, 95, 166),
    Rgb::new(138, 102, 152),
    Rgb::new(206, 105, 120),
    Rgb::new(241, 103, 98),
    Rgb::new(250, 139, 0),
    Rgb::new(250, 196, 64),
];

const BINARY: &[Rgb] = &[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];

const GREYSCALE: &[Rgb] = &[
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0x11, 0x11, 0x11),
    Rgb::new(0x22, 0x22, 0x22),
    Rgb::new(0x33, 0x33, 0x33),
    Rgb::new(0x44, 0x44, 0x44),
    Rgb::new(0x55, 0x55, 0x55),
    Rgb::new(0x66, 0x66, 0x66),
    Rgb::new(0x77, 0x77, 0x77),
    Rgb::new(0x88, 0x88, 0x88),
    Rgb::new(0x99, 0x99, 0x99),
    Rgb::new(0xaa, 0xaa, 0xaa),
    Rgb::new(0xbb, 0xbb, 0xbb),
    Rgb::new(0xcc, 0xcc, 0xcc),
    Rgb::new(0xdd, 0xdd, 0xdd),
    Rgb::new(0xff, 0xff, 0xff),
];

const RGB: &[Rgb] = &[Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)];

// "Yell" (NHK asadora) marketing
const YELL: &[Rgb] = &[
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0x05, 0xae, 0xb0),
    Rgb::new(0xeb, 0x55, 0x75),
    Rgb::new(0xef, 0xba, 0x1f),
    Rgb::new(0xff, 0xff, 0xff),
];

// Carla Thompson, "Turquoise & Orange Star Quilt"
const OWINJA: &[Rgb] = &[
    Rgb::new(195, 216, 227),
    Rgb::new(148, 209, 225),
    Rgb::new(0, 141, 171),
    Rgb::new(162, 37, 23),
    Rgb::new(231, 105, 83),
    Rgb::new(252, 117, 21),
];

// Victor Vasarely, "Planetary Folklore Participations No. 1" (selection)
const FOLKLORE: &[Rgb] = &[
    Rgb::new(187, 248, 249),
    Rgb::new(252, 252, 4),
    Rgb::new(105, 222, 249),
    Rgb::new(252, 207, 10),
    Rgb::new(250, 126, 250),
    Rgb::new(35, 249, 66),
    Rgb::new(4, 159, 242),
    Rgb::new(251, 117, 13),
    Rgb::new(15, 114, 214),
    Rgb::new(6, 187, 82),
    Rgb::new(252, 62, 4),
    Rgb::new(36, 112, 178),
    Rgb::new(206, 76, 113),
    Rgb::new(105, 58, 162),
    Rgb::new(10, 131, 51),
    Rgb::new(135, 27, 65),
    Rgb::new(57, 34, 114),
    Rgb::new(17, 33, 13),
];

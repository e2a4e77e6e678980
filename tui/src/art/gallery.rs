//! Bundled Pictures
//!
//! Pixel-art stand-ins for the card's photos, keyed by image reference.

use std::collections::HashMap;

use ratatui::style::Color;

use card_core::ImageRef;

use super::sprites::{build_sprite, Sprite};
use crate::theme::{CARNATION, COCOA, CREAM, HEART, ROSE};

const GOLD: Color = Color::Rgb(0xF4, 0xC4, 0x5A);
const CRUST: Color = Color::Rgb(0xC9, 0x82, 0x3E);
const SKY: Color = Color::Rgb(0x7A, 0x4E, 0x9B);
const SUN: Color = Color::Rgb(0xFF, 0x9E, 0x5E);
const SEA: Color = Color::Rgb(0x3D, 0x5A, 0x80);
const LEAF: Color = Color::Rgb(0x6B, 0xA3, 0x6E);
const STONE: Color = Color::Rgb(0x8E, 0x8A, 0x9B);
const SNOW: Color = Color::Rgb(0xF2, 0xF2, 0xF7);
const FLAME: Color = Color::Rgb(0xFF, 0xD1, 0x66);
const LILAC: Color = Color::Rgb(0xC3, 0xA6, 0xE8);

/// The framed portrait on the splash, welcome and home screens
pub const PORTRAIT: &str = "portrait";

/// Small heart
pub const HEART_ICON: &str = "heart";

pub struct Gallery {
    sprites: HashMap<&'static str, Sprite>,
    placeholder: Sprite,
}

impl Gallery {
    pub fn new() -> Self {
        let mut sprites = HashMap::new();

        sprites.insert(
            "carousel/c1",
            build_sprite(
                &[
                    "RRRRRRRRRRRR",
                    "R w R w R wR",
                    "CCCCCCCCCCCC",
                    "C          C",
                    "C  gggggg  C",
                    "C ggGGGGgg C",
                    "C  gggggg  C",
                    "CCCCCCCCCCCC",
                ],
                &[
                    ('R', '█', ROSE),
                    ('w', '█', CREAM),
                    ('C', '█', COCOA),
                    ('g', '█', CRUST),
                    ('G', '█', GOLD),
                ],
            ),
        );

        sprites.insert(
            "carousel/c2",
            build_sprite(
                &[
                    "KKKKKKKKKKKK",
                    "KKKKKSSKKKKK",
                    "KKKKSSSSKKKK",
                    "PPPSSSSSSPPP",
                    "PPPPPPPPPPPP",
                    "~~~~~~~~~~~~",
                    "~ss~~~~~~ss~",
                    "~~~~~~~~~~~~",
                ],
                &[
                    ('K', '█', SKY),
                    ('S', '█', SUN),
                    ('P', '█', CARNATION),
                    ('~', '█', SEA),
                    ('s', '▀', SUN),
                ],
            ),
        );

        sprites.insert(
            "carousel/c3",
            build_sprite(
                &[
                    "   f  f  f  ",
                    "   |  |  |  ",
                    " WWWWWWWWWW ",
                    " WRRWWRRWWR ",
                    " PPPPPPPPPP ",
                    " P  PPPP  P ",
                    " PPPPPPPPPP ",
                    "CCCCCCCCCCCC",
                ],
                &[
                    ('f', '▲', FLAME),
                    ('|', '█', CREAM),
                    ('W', '█', SNOW),
                    ('R', '█', ROSE),
                    ('P', '█', CARNATION),
                    ('C', '▀', COCOA),
                ],
            ),
        );

        sprites.insert(
            "carousel/c4",
            build_sprite(
                &[
                    "LLLLLLLLLLLL",
                    "LLLLsLLLLLLL",
                    "LLLsSsLLLsLL",
                    "LLsSSSsLsSsL",
                    "LsSSSSSsSSSs",
                    "GGGGGyGGGGGG",
                    "GGGGyyyGGGGG",
                    "GGGyyyyyGGGG",
                ],
                &[
                    ('L', '█', LILAC),
                    ('s', '█', SNOW),
                    ('S', '█', STONE),
                    ('G', '█', LEAF),
                    ('y', '█', GOLD),
                ],
            ),
        );

        sprites.insert(
            "carousel/c5",
            build_sprite(
                &[
                    " RR    GG   ",
                    "RRRR  GGGG  ",
                    "RRRR  GGGG  ",
                    " RR PP GG   ",
                    "  |PPPP|    ",
                    "   |PP|     ",
                    "    ||      ",
                    "    ||      ",
                ],
                &[
                    ('R', '█', HEART),
                    ('G', '█', GOLD),
                    ('P', '█', CARNATION),
                    ('|', '│', CREAM),
                ],
            ),
        );

        sprites.insert(
            PORTRAIT,
            build_sprite(
                &[
                    " RRRRRRRRRR ",
                    "RCCCCCCCCCCR",
                    "RC  HH HH CR",
                    "RC HHHHHHHCR",
                    "RC  HHHHH CR",
                    "RC   HHH  CR",
                    "RCCCCCCCCCCR",
                    " RRRRRRRRRR ",
                ],
                &[('R', '█', ROSE), ('C', '█', CREAM), ('H', '█', HEART)],
            ),
        );

        sprites.insert(
            HEART_ICON,
            build_sprite(&["H H", "HHH", " H "], &[('H', '█', HEART)]),
        );

        let placeholder = build_sprite(
            &["RRRRRR", "R    R", "R ?? R", "R    R", "RRRRRR"],
            &[('R', '█', ROSE), ('?', '?', COCOA)],
        );

        Self {
            sprites,
            placeholder,
        }
    }

    /// Picture for a slide; unknown references get the placeholder
    pub fn image(&self, image: &ImageRef) -> &Sprite {
        self.named(image.as_str())
    }

    pub fn named(&self, name: &str) -> &Sprite {
        self.sprites.get(name).unwrap_or(&self.placeholder)
    }

    /// Shown for references with no picture
    pub fn placeholder(&self) -> &Sprite {
        &self.placeholder
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sprites.contains_key(name)
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

//! Built-in bitmap font
//!
//! Fixed 5x7 glyphs in a 6x10 cell, used when no scalable font can be loaded.
//! Each glyph row keeps its pixels in the low 5 bits, bit 4 being the
//! left-most column.

use image::{Rgb, RgbImage};

use super::font::blend_pixel;
use super::layout::TextBox;

pub const GLYPH_WIDTH: i32 = 5;
pub const GLYPH_HEIGHT: i32 = 7;
/// Horizontal advance per character (glyph plus one column of spacing)
pub const CELL_WIDTH: i32 = 6;
/// Blank rows between the cell top and the glyph
const TOP_PADDING: i32 = 2;

type Glyph = [u8; GLYPH_HEIGHT as usize];

const SPACE: Glyph = [0; 7];
/// Drawn for characters the font does not cover
const MISSING: Glyph = [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111];

const LETTERS: [Glyph; 26] = [
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // A
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110], // B
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110], // C
    [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100], // D
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111], // E
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000], // F
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111], // G
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // H
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // I
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100], // J
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001], // K
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111], // L
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001], // M
    [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001], // N
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // O
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000], // P
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101], // Q
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001], // R
    [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110], // S
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100], // T
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // U
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // V
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010], // W
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001], // X
    [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100], // Y
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111], // Z
];

const DIGITS: [Glyph; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

fn glyph(c: char) -> &'static Glyph {
    match c.to_ascii_uppercase() {
        ' ' => &SPACE,
        c @ 'A'..='Z' => &LETTERS[(c as u8 - b'A') as usize],
        c @ '0'..='9' => &DIGITS[(c as u8 - b'0') as usize],
        _ => &MISSING,
    }
}

fn is_set(glyph: &Glyph, col: i32, row: i32) -> bool {
    glyph[row as usize] & (1 << (GLYPH_WIDTH - 1 - col)) != 0
}

/// Tight ink box of a single glyph, relative to its cell origin
fn glyph_box(glyph: &Glyph) -> TextBox {
    let mut bbox = TextBox::default();
    for row in 0..GLYPH_HEIGHT {
        for col in 0..GLYPH_WIDTH {
            if is_set(glyph, col, row) {
                let y = TOP_PADDING + row;
                bbox = bbox.union(TextBox::new(col, y, col + 1, y + 1));
            }
        }
    }
    bbox
}

/// The fixed-size fallback font; ignores any requested pixel size
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapFont;

impl BitmapFont {
    pub fn measure(&self, text: &str) -> TextBox {
        text.chars()
            .enumerate()
            .map(|(i, c)| {
                let bbox = glyph_box(glyph(c));
                if bbox.is_empty() {
                    return bbox;
                }
                let pen = i as i32 * CELL_WIDTH;
                TextBox::new(bbox.left + pen, bbox.top, bbox.right + pen, bbox.bottom)
            })
            .fold(TextBox::default(), TextBox::union)
    }

    pub fn draw(&self, image: &mut RgbImage, origin: (i32, i32), text: &str, color: Rgb<u8>) {
        let (ox, oy) = origin;
        for (i, c) in text.chars().enumerate() {
            let g = glyph(c);
            let pen = ox + i as i32 * CELL_WIDTH;
            for row in 0..GLYPH_HEIGHT {
                for col in 0..GLYPH_WIDTH {
                    if is_set(g, col, row) {
                        blend_pixel(image, pen + col, oy + TOP_PADDING + row, color, u8::MAX);
                    }
                }
            }
        }
    }
}

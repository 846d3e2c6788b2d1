//! Attributes of one map cell and their 60-bit packed form.
//!
//! A packed cell is ten 6-bit digits `b0..b9`:
//!
//! | digit | bits |
//! |---|---|
//! | b0 | active(5) ground.number[10:9](4:3) layer1.number[13](2) layer2.number[13](1) line_of_sight(0) |
//! | b1 | ground.rotation(5:4) ground.level(3:0) |
//! | b2 | movement(5:3) ground.number[8:6](2:0) |
//! | b3 | ground.number[5:0] |
//! | b4 | ground.slope(5:2) ground.flip(1) layer1.number[12](0) |
//! | b5 | layer1.number[11:6] |
//! | b6 | layer1.number[5:0] |
//! | b7 | layer1.rotation(5:4) layer1.flip(3) layer2.flip(2) layer2.interactive(1) layer2.number[12](0) |
//! | b8 | layer2.number[11:6] |
//! | b9 | layer2.number[5:0] |

use serde::{Deserialize, Serialize};

/// Number of pseudo-Base64 chars describing one cell.
pub const CELL_BLOCK_LEN: usize = 10;

pub type PackedCell = [u8; CELL_BLOCK_LEN];

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CellMovement {
    #[default]
    NotWalkable = 0,
    NotWalkableInteractive = 1,
    Trigger = 2,
    LessWalkable = 3,
    Default = 4,
    Paddock = 5,
    Road = 6,
    MostWalkable = 7,
}

impl CellMovement {
    const ALL: [CellMovement; 8] = [
        CellMovement::NotWalkable,
        CellMovement::NotWalkableInteractive,
        CellMovement::Trigger,
        CellMovement::LessWalkable,
        CellMovement::Default,
        CellMovement::Paddock,
        CellMovement::Road,
        CellMovement::MostWalkable,
    ];

    /// Movement class from its 3-bit wire value; higher bits are ignored.
    #[inline]
    pub fn from_bits(value: u8) -> Self { Self::ALL[(value & 7) as usize] }

    #[inline]
    pub fn ordinal(self) -> u8 { self as u8 }

    #[inline]
    pub fn walkable(self) -> bool { self.ordinal() > 1 }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroundCellData {
    pub number: u16,
    pub rotation: u8,
    pub level: u8,
    pub slope: u8,
    pub flip: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellLayerData {
    pub number: u16,
    pub rotation: u8,
    pub flip: bool,
}

/// Second layer: holds the interactive object of the cell, never rotated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InteractiveObjectData {
    pub number: u16,
    pub flip: bool,
    pub interactive: bool,
}

impl GroundCellData {
    pub fn active(&self) -> bool { self.number != 0 }
}

impl CellLayerData {
    pub fn active(&self) -> bool { self.number != 0 }
}

impl InteractiveObjectData {
    pub fn active(&self) -> bool { self.number != 0 }
    pub fn rotation(&self) -> u8 { 0 }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellData {
    pub active: bool,
    /// True when the cell lets line of sight through.
    pub line_of_sight: bool,
    pub movement: CellMovement,
    pub ground: GroundCellData,
    pub layer1: CellLayerData,
    pub layer2: InteractiveObjectData,
}

impl CellData {
    #[inline]
    pub fn walkable(&self) -> bool { self.active && self.movement.walkable() }

    #[inline]
    pub fn sight_blocking(&self) -> bool { !self.line_of_sight }

    /// Unpack ten 6-bit digits. Bits above the sixth of each digit are ignored.
    pub fn unpack(b: &PackedCell) -> Self {
        let b = b.map(|d| (d & 63) as u16);
        CellData {
            active: (b[0] >> 5) & 1 == 1,
            line_of_sight: b[0] & 1 == 1,
            movement: CellMovement::from_bits(((b[2] >> 3) & 7) as u8),
            ground: GroundCellData {
                number: ((b[0] & 24) << 6) | ((b[2] & 7) << 6) | b[3],
                rotation: ((b[1] >> 4) & 3) as u8,
                level: (b[1] & 15) as u8,
                slope: ((b[4] >> 2) & 15) as u8,
                flip: (b[4] >> 1) & 1 == 1,
            },
            layer1: CellLayerData {
                number: ((b[0] & 4) << 11) | ((b[4] & 1) << 12) | (b[5] << 6) | b[6],
                rotation: ((b[7] >> 4) & 3) as u8,
                flip: (b[7] >> 3) & 1 == 1,
            },
            layer2: InteractiveObjectData {
                number: ((b[0] & 2) << 12) | ((b[7] & 1) << 12) | (b[8] << 6) | b[9],
                flip: (b[7] >> 2) & 1 == 1,
                interactive: (b[7] >> 1) & 1 == 1,
            },
        }
    }

    /// Exact inverse of [`CellData::unpack`]; out-of-range fields are masked to their wire width.
    pub fn pack(&self) -> PackedCell {
        let ground = self.ground.number;
        let layer1 = self.layer1.number;
        let layer2 = self.layer2.number;
        let bit = |flag: bool| flag as u16;

        let b = [
            (bit(self.active) << 5)
                | bit(self.line_of_sight)
                | ((ground & 1536) >> 6)
                | ((layer1 & 8192) >> 11)
                | ((layer2 & 8192) >> 12),
            ((self.ground.rotation as u16 & 3) << 4) | (self.ground.level as u16 & 15),
            ((self.movement.ordinal() as u16 & 7) << 3) | ((ground >> 6) & 7),
            ground & 63,
            ((self.ground.slope as u16 & 15) << 2) | (bit(self.ground.flip) << 1) | ((layer1 >> 12) & 1),
            (layer1 >> 6) & 63,
            layer1 & 63,
            ((self.layer1.rotation as u16 & 3) << 4)
                | (bit(self.layer1.flip) << 3)
                | (bit(self.layer2.flip) << 2)
                | (bit(self.layer2.interactive) << 1)
                | ((layer2 >> 12) & 1),
            (layer2 >> 6) & 63,
            layer2 & 63,
        ];
        b.map(|d| d as u8)
    }
}

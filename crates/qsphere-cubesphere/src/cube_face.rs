//! The six faces of the quad-sphere cube and their numbering.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::CubeSphereError;

/// The six faces of the cube circumscribing the unit sphere.
///
/// The discriminants are the quad-sphere face numbers. The order is fixed
/// (`+Z, +X, -Y, -X, +Y, -Z`) because face numbers are stored alongside
/// face coordinates and must stay stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum CubeFace {
    /// +Z face, the canonical face-local frame.
    PosZ = 0,
    /// +X face
    PosX = 1,
    /// −Y face
    NegY = 2,
    /// −X face
    NegX = 3,
    /// +Y face
    PosY = 4,
    /// −Z face
    NegZ = 5,
}

impl CubeFace {
    /// All six faces in face-number order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosZ,
        CubeFace::PosX,
        CubeFace::NegY,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegZ,
    ];

    /// The quad-sphere face number, `0..=5`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Face for a face number, or `None` if it is out of range.
    #[inline]
    #[must_use]
    pub const fn from_index(index: u8) -> Option<CubeFace> {
        match index {
            0 => Some(CubeFace::PosZ),
            1 => Some(CubeFace::PosX),
            2 => Some(CubeFace::NegY),
            3 => Some(CubeFace::NegX),
            4 => Some(CubeFace::PosY),
            5 => Some(CubeFace::NegZ),
            _ => None,
        }
    }

    /// The opposite face (e.g., `PosX` → `NegX`).
    #[must_use]
    pub fn opposite(self) -> CubeFace {
        match self {
            CubeFace::PosZ => CubeFace::NegZ,
            CubeFace::PosX => CubeFace::NegX,
            CubeFace::NegY => CubeFace::PosY,
            CubeFace::NegX => CubeFace::PosX,
            CubeFace::PosY => CubeFace::NegY,
            CubeFace::NegZ => CubeFace::PosZ,
        }
    }

    /// Outward-pointing unit normal for this face.
    #[must_use]
    pub fn normal(self) -> DVec3 {
        match self {
            CubeFace::PosZ => DVec3::Z,
            CubeFace::PosX => DVec3::X,
            CubeFace::NegY => DVec3::NEG_Y,
            CubeFace::NegX => DVec3::NEG_X,
            CubeFace::PosY => DVec3::Y,
            CubeFace::NegZ => DVec3::NEG_Z,
        }
    }
}

impl From<CubeFace> for u8 {
    fn from(face: CubeFace) -> u8 {
        face.index()
    }
}

impl TryFrom<u8> for CubeFace {
    type Error = CubeSphereError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        CubeFace::from_index(index).ok_or(CubeSphereError::InvalidFaceIndex(i64::from(index)))
    }
}

impl TryFrom<i64> for CubeFace {
    type Error = CubeSphereError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        u8::try_from(index)
            .ok()
            .and_then(CubeFace::from_index)
            .ok_or(CubeSphereError::InvalidFaceIndex(index))
    }
}

impl TryFrom<usize> for CubeFace {
    type Error = CubeSphereError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        u8::try_from(index)
            .ok()
            .and_then(CubeFace::from_index)
            .ok_or(CubeSphereError::InvalidFaceIndex(
                i64::try_from(index).unwrap_or(i64::MAX),
            ))
    }
}

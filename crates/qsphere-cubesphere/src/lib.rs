//! Quad-sphere geometry: cube-to-sphere warping, face-local frames, and
//! `(face, x, y)` encoding of unit directions.

mod codec;
mod cube_face;
mod error;
mod face_coord;
mod inverse;
mod permutation;
mod projection;

pub use codec::{decode, decode_index, encode, face_center};
pub use cube_face::CubeFace;
pub use error::CubeSphereError;
pub use face_coord::QuadSphereCoord;
pub use inverse::{face_index_of, face_of, sphere_to_cube_face0, sphere_to_cube_face0_in_place};
pub use permutation::{
    FROM_FACE0, SignedPermutation, TO_FACE0, from_face_local, permute_face, permute_face_inverse,
    to_face_local,
};
pub use projection::{cube_to_sphere, cube_to_sphere_in_place};

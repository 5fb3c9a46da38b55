//! **serpent-core** — grid geometry for the serpent snake game.
//!
//! This crate provides the coordinate types shared by the search engine and
//! the game driver: integer [`Point`]s (one per body-segment cell), the
//! half-open [`Range`] rectangle, the four movement [`Direction`]s and the
//! step-aligned [`Playfield`] that defines which cells are in bounds.

pub mod dir;
pub mod field;
pub mod geom;

pub use dir::Direction;
pub use field::Playfield;
pub use geom::{Point, Range};

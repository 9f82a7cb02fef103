//! Notes app component
//!
//! A single view bound to the four REST operations: list, create, update,
//! delete. All state lives in signals owned by [`view::NotesView`]; the list
//! is re-fetched in full after every mutation.

pub mod logic;
pub mod styles;
pub mod types;
pub mod view;

pub use view::NotesView;

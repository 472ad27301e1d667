//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//!
//! Layer detection reports its answer as one of these two types so the
//! resolver can pick an impl by type instead of by value.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
}

impl Bool for Absent {
    const VALUE: bool = false;
}

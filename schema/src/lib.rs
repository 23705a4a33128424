// Pokemon Skirmish Schema - Shared type definitions
// Static enums and lookup tables shared by the battle simulator and the data
// files it loads.

pub use element_types::*;

pub mod element_types;

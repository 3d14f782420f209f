//! Wire contracts between the Track In SPA and the inventory Gateway.
//!
//! Everything here mirrors the JSON the Gateway produces or accepts.
//! No I/O and no UI — just serde types and the pure helpers around them.

pub mod domain;
pub mod shared;
pub mod system;

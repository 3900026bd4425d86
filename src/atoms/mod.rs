// ── Simba Atoms Layer ──────────────────────────────────────────────────────
// Pure constants and data types — zero side effects, no I/O.
// Dependency rule: atoms may only depend on std, simba-core and external pure
// crates. Nothing here may import from engine/ or lib.rs.

pub mod constants;
pub mod types;

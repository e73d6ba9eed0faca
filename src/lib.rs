//! Public library API for auditing binary glTF (`.glb`) containers.

/// Container framing, scene document decoding, and bounds validation.
pub mod glb;

/// Bounds audit command.
pub mod check;
/// Container framing command.
pub mod info;
/// Shared rendering helpers.
pub(crate) mod util;

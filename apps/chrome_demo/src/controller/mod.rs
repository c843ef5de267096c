//! Controller layer: host input to chrome events, chrome commands to viewport commands.

pub mod events;
pub mod orchestration;

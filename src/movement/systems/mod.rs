//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod tick;

pub(crate) use input::read_input;
pub(crate) use tick::{sync_player_sprite, tick_player};

#[cfg(feature = "dev-tools")]
pub(crate) use tick::draw_player_debug;

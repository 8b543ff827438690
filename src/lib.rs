#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
pub mod bot;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod observer;
pub mod prelude;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod timer;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use observer::*;
#[cfg(feature = "std")]
pub use session::{GameSession, SessionConfig};
#[cfg(feature = "std")]
pub use timer::TaskHandle;

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod cell;
#[cfg(feature = "std")]
mod cli;
mod common;
mod config;
mod gunner;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod node;
mod placement;
pub mod protocol;
mod session;
mod ship;
#[cfg(feature = "std")]
pub mod transport;

pub use board::*;
pub use cell::*;
#[cfg(feature = "std")]
pub use cli::*;
pub use common::*;
pub use config::*;
pub use gunner::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use node::*;
pub use placement::*;
pub use session::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use transport::tcp::LineTransport;

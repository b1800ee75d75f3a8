//! raffle-state: Draw session, reveal sequencing, persistence
//!
//! A `DrawSession` is the single snapshot of a raffle in progress. The
//! `RaffleController` owns it together with a `SessionStore` and saves a full
//! snapshot after every mutation.

mod controller;
mod session;
mod store;

pub use controller::*;
pub use session::*;
pub use store::*;

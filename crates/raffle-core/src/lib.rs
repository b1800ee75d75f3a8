//! raffle-core: Weighted ticket pool and unique-winner draw
//!
//! ## Architecture
//!
//! ```text
//! Vec<Attendee>
//!     │  build_ticket_pool()
//!     v
//! TicketPool ──shuffle (ChaCha8Rng)──> stack
//!                                        │  draw_from_shuffled()
//!     Vec<PrizeTier> ──sort desc─────────┘
//!                                        v
//!                          Vec<WinnerRecord> (draw order)
//!                                        │  reveal_order()
//!                                        v
//!                          Vec<WinnerRecord> (lowest prize first)
//! ```

pub mod draw;
pub mod error;
pub mod model;
pub mod tickets;

pub use draw::*;
pub use error::*;
pub use model::*;
pub use tickets::*;

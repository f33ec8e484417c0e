//! # bistro-session: The Order-Taking State Machine
//!
//! Composes bistro-core (domain + checkout math) and bistro-db (durable
//! store) into the workflow the GUI shell drives:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Session State Machine                       │
//! │                                                                 │
//! │            start_new_order(customer)                            │
//! │   ┌──────┐ ───────────────────────► ┌────────┐                  │
//! │   │ Idle │                          │ Active │ ◄─┐ add_item     │
//! │   └──────┘ ◄─────────────────────── └────────┘ ──┘ remove_item  │
//! │            checkout() / cancel_order()                          │
//! │                                                                 │
//! │  checkout(): compute total → commit to store → append history   │
//! │              → Idle. A failed commit leaves the session Active  │
//! │              with the order untouched, so checkout is safely    │
//! │              retryable.                                         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`session`] - The `OrderSession` state machine and `Receipt`
//! - [`error`] - Session error types

pub mod error;
pub mod session;

pub use error::{SessionError, SessionResult};
pub use session::{OrderSession, Receipt};

//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the display backend and the domain types. It
//! implements the event-driven core of the popup.
//!
//! # Architecture
//!
//! ```text
//! Display Event → handle_event → State Mutation → Actions → execute_action → Display
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`event_loop`]: The dispatch loop and action executor
//! - [`handler`]: Event routing and state transitions
//! - [`modes`]: Dispatch and wait mode choices
//! - [`state`]: Window state carried across iterations

pub mod actions;
pub mod event_loop;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use event_loop::{execute_action, run_event_loop, Flow, LoopOptions};
pub use handler::handle_event;
pub use modes::{DispatchMode, WaitMode};
pub use state::{WindowState, CLICK_STEP};

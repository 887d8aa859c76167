//! Navigation state machine.
//!
//! ```text
//!            dead end (step > 0) / visited junction
//!   ┌─────────┐ ───────────────────────────────▶ ┌───────────┐
//!   │ Explore │                                  │ Backtrack │
//!   └─────────┘ ◀─────────────────────────────── └───────────┘
//!        ▲        junction with passage / passage ahead
//!        │
//!        │ no usable route memory
//!   ┌─────────┐
//!   │  Route  │ ◀── step 0 with run count > 0
//!   └─────────┘
//! ```

mod machine;
mod selector;
mod state;

pub use machine::NavigationController;
pub use selector::ExitSelector;
pub use state::{Mode, NavigationProgress, Steer, StepReport};

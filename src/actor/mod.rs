//! Actor Model: One thread per loop, coordinated by a session.
//!
//! - **Display Actor**: Writes tokens at the pace held in the playback state
//! - **Input Actor**: Reads keys and adjusts the playback state
//! - **Session**: Spawns both and returns when the first one completes
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐  Token   ┌────────────────┐  bytes  ┌──────────┐
//! │ WordWrapper │ ───────▶ │ Display Thread │ ──────▶ │ Terminal │
//! └─────────────┘          └────────────────┘         └──────────┘
//!                             │          ▲
//!                  Completion │          │ delay, finished
//!                             ▼          │
//!                       ┌─────────┐  ┌───────────────┐
//!                       │ Session │  │ PlaybackState │
//!                       └─────────┘  └───────────────┘
//!                             ▲          ▲
//!                  Completion │          │ Command
//!                             │          │
//! ┌─────────────┐   Key    ┌────────────────┐
//! │  KeySource  │ ───────▶ │  Input Thread  │
//! └─────────────┘          └────────────────┘
//! ```

mod display;
mod input;
mod messages;
mod session;

pub use display::DisplayActor;
pub use input::{InputActor, KeySource};
pub use messages::{Activity, Command, Completion, Key};
pub use session::{Session, SessionReport};

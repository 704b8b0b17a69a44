//=========================================================================
// Input System
//=========================================================================
//
// Engine input types and the listener dispatcher scenes subscribe to.
//
// Architecture:
//   Platform (Winit) → InputEvent → InputDispatcher → scene listeners
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod dispatcher;

//=== Public API ==========================================================

pub use dispatcher::{listener, InputDispatcher, InputListener, ListenMode, ListenerId};
pub use event::{InputEvent, InputEventKind, KeyCode, Modifiers, MouseButton};

//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use preload_stage::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::core::error::{AssetError, EngineError};

// Global systems and context
pub use crate::core::globals::{GlobalContext, GlobalSystems};

// Assets and rendering
pub use crate::core::assets::{AssetEvent, AssetKey};
pub use crate::core::render::Position;

// Input system
pub use crate::core::input::{listener, InputEvent, InputEventKind, KeyCode, Modifiers, MouseButton};

// Scene system
pub use crate::core::scene::{Scene, SceneControl, SceneHost, SceneKey, SceneTransition};

// Message bus
pub use crate::core::message_bus::MessageBus;

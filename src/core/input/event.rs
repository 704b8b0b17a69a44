//=========================================================================
// Input Event Types
//=========================================================================
//
// Engine-side representation of low-level input.
//
// The platform layer (Winit) translates OS events into `InputEvent`s;
// scenes never see Winit types. Listeners subscribe by event class
// (`InputEventKind`), which keeps the taxonomy in one place.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputDispatcher (per-class listeners)
//         ↓
//    Scene transition requests
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;
use std::hash::{Hash, Hasher};

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons, thumb buttons and anything
/// the platform reports that is not one of the three standard buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the produced character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Fallback for keys the platform layer does not map.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier key state (Shift, Ctrl, Alt).
///
/// Left and right variants are not distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };
}

//=== InputEventKind ======================================================

/// Event class a listener subscribes to.
///
/// The string names match the conventional DOM-style taxonomy
/// (`"pointerdown"`, `"keyup"`, ...), which is how scenes and logs
/// refer to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEventKind {
    KeyDown,
    KeyUp,
    PointerDown,
    PointerUp,
    PointerMove,
}

impl InputEventKind {
    /// Canonical string name of the event class.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::KeyDown => "keydown",
            Self::KeyUp => "keyup",
            Self::PointerDown => "pointerdown",
            Self::PointerUp => "pointerup",
            Self::PointerMove => "pointermove",
        }
    }
}

impl fmt::Display for InputEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Pointer coordinates are in window space (logical pixels, top-left
/// origin).
///
/// # Equality & Hashing Semantics
///
/// Events compare by class and key/button payload plus modifiers.
/// Coordinates never take part, so consecutive `PointerMoved` events
/// coalesce and duplicate presses at slightly different positions are
/// still recognised as duplicates by the platform buffer.
///
/// ```text
/// KeyDown{A, CTRL}         == KeyDown{A, CTRL}          ✓
/// KeyDown{A, CTRL}         == KeyDown{A, SHIFT}         ✗
/// PointerDown{Left, 1, 2}  == PointerDown{Left, 9, 9}   ✓
/// PointerMoved{...}        == PointerMoved{...}         ✓
/// ```
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown { key: KeyCode, modifiers: Modifiers },

    /// Key released.
    KeyUp { key: KeyCode, modifiers: Modifiers },

    /// Pointer button pressed at the given position.
    PointerDown {
        button: MouseButton,
        x: f32,
        y: f32,
        modifiers: Modifiers,
    },

    /// Pointer button released at the given position.
    PointerUp {
        button: MouseButton,
        x: f32,
        y: f32,
        modifiers: Modifiers,
    },

    /// Pointer moved to a new position.
    PointerMoved { x: f32, y: f32 },

    /// Unrecognized or unsupported event. Never dispatched.
    Unidentified,
}

impl InputEvent {
    /// Class of this event, or `None` for `Unidentified`.
    pub fn kind(&self) -> Option<InputEventKind> {
        match self {
            Self::KeyDown { .. } => Some(InputEventKind::KeyDown),
            Self::KeyUp { .. } => Some(InputEventKind::KeyUp),
            Self::PointerDown { .. } => Some(InputEventKind::PointerDown),
            Self::PointerUp { .. } => Some(InputEventKind::PointerUp),
            Self::PointerMoved { .. } => Some(InputEventKind::PointerMove),
            Self::Unidentified => None,
        }
    }

    /// Pointer position carried by the event, if any.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::PointerDown { x, y, .. }
            | Self::PointerUp { x, y, .. }
            | Self::PointerMoved { x, y } => Some((*x, *y)),
            _ => None,
        }
    }
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown { key: a, modifiers: ma }, KeyDown { key: b, modifiers: mb })
            | (KeyUp { key: a, modifiers: ma }, KeyUp { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            (
                PointerDown { button: a, modifiers: ma, .. },
                PointerDown { button: b, modifiers: mb, .. },
            )
            | (
                PointerUp { button: a, modifiers: ma, .. },
                PointerUp { button: b, modifiers: mb, .. },
            ) => a == b && ma == mb,
            (PointerMoved { .. }, PointerMoved { .. }) => true,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown { key, modifiers } | Self::KeyUp { key, modifiers } => {
                key.hash(state);
                modifiers.hash(state);
            }
            Self::PointerDown { button, modifiers, .. }
            | Self::PointerUp { button, modifiers, .. } => {
                button.hash(state);
                modifiers.hash(state);
            }
            // Coordinates are not hashed (consistent with equality)
            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

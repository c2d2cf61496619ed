//! The canonical key enumeration.
//!
//! Backend-independent key identifiers whose ordinal values mirror the
//! common Windows virtual-key codes (`VK_A = 0x41`, `VK_F1 = 0x70`, …).
//! The ordinals are stable: the per-backend tables are arrays indexed by
//! them, and callers may iterate ranges such as `A..=Z` by ordinal.
//!
//! The set is intentionally a superset of what any single device supports.
//! A key that a backend cannot address translates to the sentinel
//! [`NO_NATIVE_KEY`](super::NO_NATIVE_KEY).

use serde::{Deserialize, Serialize};

/// A backend-independent keyboard key.
///
/// The numeric value of each variant is its virtual-key ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum CanonicalKey {
    // Control keys
    Back = 8,
    Tab = 9,
    Enter = 13,
    Pause = 19,
    CapsLock = 20,
    Escape = 27,
    Space = 32,

    // Navigation
    PageUp = 33,
    PageDown = 34,
    End = 35,
    Home = 36,
    Left = 37,
    Up = 38,
    Right = 39,
    Down = 40,
    Select = 41,
    PrintScreen = 44,
    Insert = 45,
    Delete = 46,

    // Digit row
    D0 = 48,
    D1 = 49,
    D2 = 50,
    D3 = 51,
    D4 = 52,
    D5 = 53,
    D6 = 54,
    D7 = 55,
    D8 = 56,
    D9 = 57,

    // Letters
    A = 65,
    B = 66,
    C = 67,
    D = 68,
    E = 69,
    F = 70,
    G = 71,
    H = 72,
    I = 73,
    J = 74,
    K = 75,
    L = 76,
    M = 77,
    N = 78,
    O = 79,
    P = 80,
    Q = 81,
    R = 82,
    S = 83,
    T = 84,
    U = 85,
    V = 86,
    W = 87,
    X = 88,
    Y = 89,
    Z = 90,

    // System keys
    LWin = 91,
    RWin = 92,
    Apps = 93,

    // Numpad
    NumPad0 = 96,
    NumPad1 = 97,
    NumPad2 = 98,
    NumPad3 = 99,
    NumPad4 = 100,
    NumPad5 = 101,
    NumPad6 = 102,
    NumPad7 = 103,
    NumPad8 = 104,
    NumPad9 = 105,
    Multiply = 106,
    Add = 107,
    Subtract = 109,
    Decimal = 110,
    Divide = 111,

    // Function keys
    F1 = 112,
    F2 = 113,
    F3 = 114,
    F4 = 115,
    F5 = 116,
    F6 = 117,
    F7 = 118,
    F8 = 119,
    F9 = 120,
    F10 = 121,
    F11 = 122,
    F12 = 123,

    // Locks
    NumLock = 144,
    Scroll = 145,

    // Modifiers
    LShiftKey = 160,
    RShiftKey = 161,
    LControlKey = 162,
    RControlKey = 163,
    LMenu = 164,
    RMenu = 165,

    // OEM punctuation
    OemSemicolon = 186,
    OemPlus = 187,
    OemComma = 188,
    OemMinus = 189,
    OemPeriod = 190,
    OemQuestion = 191,
    OemTilde = 192,
    OemOpenBrackets = 219,
    OemCloseBrackets = 221,
    OemQuotes = 222,
    OemBackslash = 226,
}

impl CanonicalKey {
    /// Every canonical key in ascending ordinal order.
    pub const ALL: &'static [CanonicalKey] = &{
        use CanonicalKey::*;
        [
            Back, Tab, Enter, Pause, CapsLock, Escape, Space, PageUp, PageDown, End, Home,
            Left, Up, Right, Down, Select, PrintScreen, Insert, Delete, D0, D1, D2, D3, D4,
            D5, D6, D7, D8, D9, A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T,
            U, V, W, X, Y, Z, LWin, RWin, Apps, NumPad0, NumPad1, NumPad2, NumPad3, NumPad4,
            NumPad5, NumPad6, NumPad7, NumPad8, NumPad9, Multiply, Add, Subtract, Decimal,
            Divide, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, NumLock, Scroll,
            LShiftKey, RShiftKey, LControlKey, RControlKey, LMenu, RMenu, OemSemicolon,
            OemPlus, OemComma, OemMinus, OemPeriod, OemQuestion, OemTilde, OemOpenBrackets,
            OemCloseBrackets, OemQuotes, OemBackslash,
        ]
    };

    /// The stable ordinal of this key.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Looks a key up by ordinal.
    ///
    /// Returns `None` for ordinals that name no canonical key.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL
            .binary_search_by_key(&ordinal, |k| k.ordinal())
            .ok()
            .map(|i| Self::ALL[i])
    }
}

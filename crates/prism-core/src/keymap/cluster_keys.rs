//! Canonical key to cluster-engine LED identifier translation table.
//!
//! The cluster engine exposes every LED of a device under a fixed
//! identifier.  Keyboard key LEDs occupy `1..=120` in a roughly
//! row-by-row order; identifier `0` is the engine's own "invalid LED".

use super::{CanonicalKey, NativeKeyId, NO_NATIVE_KEY};

/// Translates a canonical key to the engine's LED identifier.
pub fn to_native(key: CanonicalKey) -> NativeKeyId {
    CLUSTER_LED_TABLE[usize::from(key.ordinal())]
}

const CLUSTER_LED_TABLE: [NativeKeyId; 256] = {
    let mut t = [NO_NATIVE_KEY; 256];

    // ── Escape and function keys ─────────────────────────────────────────────
    t[27] = 1; // Escape
    t[112] = 2; // F1
    t[113] = 3;
    t[114] = 4;
    t[115] = 5;
    t[116] = 6;
    t[117] = 7;
    t[118] = 8;
    t[119] = 9;
    t[120] = 10;
    t[121] = 11;
    t[122] = 12; // F11
    t[123] = 73; // F12

    // ── Digit row ────────────────────────────────────────────────────────────
    t[192] = 13; // OemTilde -> GraveAccentAndTilde
    t[49] = 14; // D1
    t[50] = 15;
    t[51] = 16;
    t[52] = 17;
    t[53] = 18;
    t[54] = 19;
    t[55] = 20;
    t[56] = 21;
    t[57] = 22; // D9
    t[48] = 23; // D0
    t[189] = 24; // OemMinus -> MinusAndUnderscore
    t[187] = 85; // OemPlus -> EqualsAndPlus
    t[8] = 87; // Back -> Backspace

    // ── Letters ──────────────────────────────────────────────────────────────
    t[9] = 25; // Tab
    t[81] = 26; // Q
    t[87] = 27; // W
    t[69] = 28; // E
    t[82] = 29; // R
    t[84] = 30; // T
    t[89] = 31; // Y
    t[85] = 32; // U
    t[73] = 33; // I
    t[79] = 34; // O
    t[80] = 35; // P
    t[219] = 36; // OemOpenBrackets -> BracketLeft
    t[20] = 37; // CapsLock
    t[65] = 38; // A
    t[83] = 39; // S
    t[68] = 40; // D
    t[70] = 41; // F
    t[71] = 42; // G
    t[72] = 43; // H
    t[74] = 44; // J
    t[75] = 45; // K
    t[76] = 46; // L
    t[186] = 47; // OemSemicolon -> SemicolonAndColon
    t[222] = 48; // OemQuotes -> ApostropheAndDoubleQuote
    t[160] = 49; // LShiftKey
    t[90] = 51; // Z
    t[88] = 52; // X
    t[67] = 53; // C
    t[86] = 54; // V
    t[66] = 55; // B
    t[78] = 56; // N
    t[77] = 57; // M
    t[188] = 58; // OemComma -> CommaAndLessThan
    t[190] = 59; // OemPeriod -> PeriodAndBiggerThan
    t[191] = 60; // OemQuestion -> SlashAndQuestionMark

    // ── Bottom row and modifiers ─────────────────────────────────────────────
    t[162] = 61; // LControlKey -> LeftCtrl
    // The Windows keys light their own key LEDs, not the headset logo LEDs.
    t[91] = 62; // LWin -> LeftGui
    t[164] = 63; // LMenu -> LeftAlt
    t[32] = 65; // Space
    t[165] = 68; // RMenu -> RightAlt
    t[92] = 69; // RWin -> RightGui
    t[93] = 70; // Apps -> Application
    t[161] = 91; // RShiftKey
    t[163] = 92; // RControlKey

    // ── Print/scroll/pause and navigation ────────────────────────────────────
    t[44] = 74; // PrintScreen
    t[145] = 75; // Scroll -> ScrollLock
    t[19] = 76; // Pause -> PauseBreak
    t[45] = 77; // Insert
    t[36] = 78; // Home
    t[33] = 79; // PageUp
    t[221] = 80; // OemCloseBrackets -> BracketRight
    t[226] = 81; // OemBackslash -> Backslash
    t[13] = 83; // Enter
    t[46] = 88; // Delete
    t[35] = 89; // End
    t[34] = 90; // PageDown
    t[38] = 93; // Up -> UpArrow
    t[37] = 94; // Left -> LeftArrow
    t[40] = 95; // Down -> DownArrow
    t[39] = 96; // Right -> RightArrow

    // ── Numpad ───────────────────────────────────────────────────────────────
    t[144] = 103; // NumLock
    t[111] = 104; // Divide -> KeypadSlash
    t[106] = 105; // Multiply -> KeypadAsterisk
    t[109] = 106; // Subtract -> KeypadMinus
    t[107] = 107; // Add -> KeypadPlus
    t[103] = 109; // NumPad7
    t[104] = 110; // NumPad8
    t[105] = 111; // NumPad9
    t[100] = 113; // NumPad4
    t[101] = 114; // NumPad5
    t[102] = 115; // NumPad6
    t[97] = 116; // NumPad1
    t[98] = 117; // NumPad2
    t[99] = 118; // NumPad3
    t[96] = 119; // NumPad0
    t[110] = 120; // Decimal -> KeypadPeriodAndDelete

    t
};

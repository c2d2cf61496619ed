//! Canonical key to bitmap-engine key name translation table.
//!
//! The bitmap engine names keys by their PC/AT set-1 scan code.  Extended
//! keys carry the `0xE0` prefix folded into bit 8 (`Insert = 0x152`), which
//! is why native ids are wider than a byte.
//!
//! `BITMAP_KEY_TABLE` is a compile-time array of 256 entries indexed by
//! [`CanonicalKey`] ordinal, so every lookup is a single index.  Ordinals
//! with no engine key hold [`NO_NATIVE_KEY`].

use super::{CanonicalKey, NativeKeyId, NO_NATIVE_KEY};

/// Translates a canonical key to the engine's scan-code key name.
pub fn to_native(key: CanonicalKey) -> NativeKeyId {
    BITMAP_KEY_TABLE[usize::from(key.ordinal())]
}

const BITMAP_KEY_TABLE: [NativeKeyId; 256] = {
    let mut t = [NO_NATIVE_KEY; 256];

    // ── Control keys ─────────────────────────────────────────────────────────
    t[8] = 0x0E; // Back -> Backspace
    t[9] = 0x0F; // Tab
    t[13] = 0x1C; // Enter
    t[19] = 0x145; // Pause -> PauseBreak
    t[20] = 0x3A; // CapsLock
    t[27] = 0x01; // Escape -> Esc
    t[32] = 0x39; // Space

    // ── Navigation ───────────────────────────────────────────────────────────
    t[33] = 0x149; // PageUp
    t[34] = 0x151; // PageDown
    t[35] = 0x14F; // End
    t[36] = 0x147; // Home
    t[37] = 0x14B; // Left -> ArrowLeft
    t[38] = 0x148; // Up -> ArrowUp
    t[39] = 0x14D; // Right -> ArrowRight
    t[40] = 0x150; // Down -> ArrowDown
    t[41] = 0x15D; // Select -> ApplicationSelect (shared with Apps)
    t[44] = 0x137; // PrintScreen
    t[45] = 0x152; // Insert
    t[46] = 0x153; // Delete

    // ── Digit row ────────────────────────────────────────────────────────────
    t[48] = 0x0B; // D0
    t[49] = 0x02;
    t[50] = 0x03;
    t[51] = 0x04;
    t[52] = 0x05;
    t[53] = 0x06;
    t[54] = 0x07;
    t[55] = 0x08;
    t[56] = 0x09;
    t[57] = 0x0A; // D9

    // ── Letters (scan codes follow the physical rows, not the alphabet) ──────
    t[65] = 0x1E; // A
    t[66] = 0x30; // B
    t[67] = 0x2E; // C
    t[68] = 0x20; // D
    t[69] = 0x12; // E
    t[70] = 0x21; // F
    t[71] = 0x22; // G
    t[72] = 0x23; // H
    t[73] = 0x17; // I
    t[74] = 0x24; // J
    t[75] = 0x25; // K
    t[76] = 0x26; // L
    t[77] = 0x32; // M
    t[78] = 0x31; // N
    t[79] = 0x18; // O
    t[80] = 0x19; // P
    t[81] = 0x10; // Q
    t[82] = 0x13; // R
    t[83] = 0x1F; // S
    t[84] = 0x14; // T
    t[85] = 0x16; // U
    t[86] = 0x2F; // V
    t[87] = 0x11; // W
    t[88] = 0x2D; // X
    t[89] = 0x15; // Y
    t[90] = 0x2C; // Z

    // ── System keys ──────────────────────────────────────────────────────────
    t[91] = 0x15B; // LWin -> LeftWindows
    t[92] = 0x15C; // RWin -> RightWindows
    t[93] = 0x15D; // Apps -> ApplicationSelect

    // ── Numpad ───────────────────────────────────────────────────────────────
    t[96] = 0x52; // NumPad0
    t[97] = 0x4F;
    t[98] = 0x50;
    t[99] = 0x51;
    t[100] = 0x4B;
    t[101] = 0x4C;
    t[102] = 0x4D;
    t[103] = 0x47;
    t[104] = 0x48;
    t[105] = 0x49; // NumPad9
    t[106] = 0x37; // Multiply -> NumAsterisk
    t[107] = 0x4E; // Add -> NumPlus
    t[109] = 0x4A; // Subtract -> NumMinus
    t[110] = 0x53; // Decimal -> NumPeriod
    t[111] = 0x135; // Divide -> NumSlash

    // ── Function keys ────────────────────────────────────────────────────────
    t[112] = 0x3B; // F1
    t[113] = 0x3C;
    t[114] = 0x3D;
    t[115] = 0x3E;
    t[116] = 0x3F;
    t[117] = 0x40;
    t[118] = 0x41;
    t[119] = 0x42;
    t[120] = 0x43;
    t[121] = 0x44; // F10
    t[122] = 0x57; // F11
    t[123] = 0x58; // F12

    // ── Locks ────────────────────────────────────────────────────────────────
    t[144] = 0x45; // NumLock
    t[145] = 0x46; // Scroll -> ScrollLock

    // ── Modifiers ────────────────────────────────────────────────────────────
    t[160] = 0x2A; // LShiftKey
    t[161] = 0x36; // RShiftKey
    t[162] = 0x1D; // LControlKey
    t[163] = 0x11D; // RControlKey
    t[164] = 0x38; // LMenu -> LeftAlt
    t[165] = 0x138; // RMenu -> RightAlt

    // ── OEM punctuation ──────────────────────────────────────────────────────
    t[186] = 0x27; // OemSemicolon
    t[187] = 0x0D; // OemPlus -> Equal
    t[188] = 0x33; // OemComma
    t[189] = 0x0C; // OemMinus
    t[190] = 0x34; // OemPeriod
    t[191] = 0x35; // OemQuestion -> ForwardSlash
    t[192] = 0x29; // OemTilde
    t[219] = 0x1A; // OemOpenBrackets
    t[221] = 0x1B; // OemCloseBrackets
    t[222] = 0x28; // OemQuotes -> Apostrophe
    t[226] = 0x2B; // OemBackslash

    t
};

//! Canonical key to zone-engine matrix key translation table.
//!
//! The zone engine has no X/Y addressing for colors, but it does accept a
//! single-key write.  Its key identifiers encode the key's slot in the
//! engine's internal 6×22 matrix as `(row << 8) | column`, so `Escape` is
//! `0x0001` (row 0, column 1) and `A` is `0x0302` (row 3, column 2).
//! Column 0 is reserved for macro keys, which keeps every real id non-zero.

use super::{CanonicalKey, NativeKeyId, NO_NATIVE_KEY};

/// Translates a canonical key to the engine's matrix key.
pub fn to_native(key: CanonicalKey) -> NativeKeyId {
    ZONE_KEY_TABLE[usize::from(key.ordinal())]
}

/// Builds a matrix key id from its row and column.
const fn rc(row: u32, column: u32) -> NativeKeyId {
    (row << 8) | column
}

const ZONE_KEY_TABLE: [NativeKeyId; 256] = {
    let mut t = [NO_NATIVE_KEY; 256];

    // ── Row 0: Escape, function keys, print/scroll/pause ─────────────────────
    t[27] = rc(0, 1); // Escape
    t[112] = rc(0, 3); // F1
    t[113] = rc(0, 4);
    t[114] = rc(0, 5);
    t[115] = rc(0, 6);
    t[116] = rc(0, 7);
    t[117] = rc(0, 8);
    t[118] = rc(0, 9);
    t[119] = rc(0, 10);
    t[120] = rc(0, 11);
    t[121] = rc(0, 12);
    t[122] = rc(0, 13);
    t[123] = rc(0, 14); // F12
    t[44] = rc(0, 15); // PrintScreen
    t[145] = rc(0, 16); // Scroll
    t[19] = rc(0, 17); // Pause

    // ── Row 1: digit row, nav cluster, numpad top ────────────────────────────
    t[192] = rc(1, 1); // OemTilde
    t[49] = rc(1, 2); // D1
    t[50] = rc(1, 3);
    t[51] = rc(1, 4);
    t[52] = rc(1, 5);
    t[53] = rc(1, 6);
    t[54] = rc(1, 7);
    t[55] = rc(1, 8);
    t[56] = rc(1, 9);
    t[57] = rc(1, 10); // D9
    t[48] = rc(1, 11); // D0
    t[189] = rc(1, 12); // OemMinus
    t[187] = rc(1, 13); // OemPlus -> OemEquals
    t[8] = rc(1, 14); // Back
    t[45] = rc(1, 15); // Insert
    t[36] = rc(1, 16); // Home
    t[33] = rc(1, 17); // PageUp
    t[144] = rc(1, 18); // NumLock
    t[111] = rc(1, 19); // Divide
    t[106] = rc(1, 20); // Multiply
    t[109] = rc(1, 21); // Subtract

    // ── Row 2: Tab row ───────────────────────────────────────────────────────
    t[9] = rc(2, 1); // Tab
    t[81] = rc(2, 2); // Q
    t[87] = rc(2, 3); // W
    t[69] = rc(2, 4); // E
    t[82] = rc(2, 5); // R
    t[84] = rc(2, 6); // T
    t[89] = rc(2, 7); // Y
    t[85] = rc(2, 8); // U
    t[73] = rc(2, 9); // I
    t[79] = rc(2, 10); // O
    t[80] = rc(2, 11); // P
    t[219] = rc(2, 12); // OemOpenBrackets
    t[221] = rc(2, 13); // OemCloseBrackets
    t[226] = rc(2, 14); // OemBackslash
    t[46] = rc(2, 15); // Delete
    t[35] = rc(2, 16); // End
    t[34] = rc(2, 17); // PageDown
    t[103] = rc(2, 18); // NumPad7
    t[104] = rc(2, 19); // NumPad8
    t[105] = rc(2, 20); // NumPad9
    t[107] = rc(2, 21); // Add

    // ── Row 3: home row ──────────────────────────────────────────────────────
    t[20] = rc(3, 1); // CapsLock
    t[65] = rc(3, 2); // A
    t[83] = rc(3, 3); // S
    t[68] = rc(3, 4); // D
    t[70] = rc(3, 5); // F
    t[71] = rc(3, 6); // G
    t[72] = rc(3, 7); // H
    t[74] = rc(3, 8); // J
    t[75] = rc(3, 9); // K
    t[76] = rc(3, 10); // L
    t[186] = rc(3, 11); // OemSemicolon
    t[222] = rc(3, 12); // OemQuotes
    t[13] = rc(3, 14); // Enter
    t[100] = rc(3, 18); // NumPad4
    t[101] = rc(3, 19); // NumPad5
    t[102] = rc(3, 20); // NumPad6

    // ── Row 4: shift row ─────────────────────────────────────────────────────
    t[160] = rc(4, 1); // LShiftKey
    t[90] = rc(4, 3); // Z
    t[88] = rc(4, 4); // X
    t[67] = rc(4, 5); // C
    t[86] = rc(4, 6); // V
    t[66] = rc(4, 7); // B
    t[78] = rc(4, 8); // N
    t[77] = rc(4, 9); // M
    t[188] = rc(4, 10); // OemComma
    t[190] = rc(4, 11); // OemPeriod
    t[191] = rc(4, 12); // OemQuestion
    t[161] = rc(4, 14); // RShiftKey
    t[38] = rc(4, 16); // Up
    t[97] = rc(4, 18); // NumPad1
    t[98] = rc(4, 19); // NumPad2
    t[99] = rc(4, 20); // NumPad3

    // ── Row 5: bottom row ────────────────────────────────────────────────────
    t[162] = rc(5, 1); // LControlKey
    t[91] = rc(5, 2); // LWin
    t[164] = rc(5, 3); // LMenu
    t[32] = rc(5, 7); // Space
    t[165] = rc(5, 11); // RMenu
    t[93] = rc(5, 13); // Apps -> context menu key
    t[163] = rc(5, 14); // RControlKey
    t[37] = rc(5, 15); // Left
    t[40] = rc(5, 16); // Down
    t[39] = rc(5, 17); // Right
    t[96] = rc(5, 19); // NumPad0
    t[110] = rc(5, 20); // Decimal

    t
};

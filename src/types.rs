//! Core types for paragraph-view.
//!
//! What item templates produce and what the renderer understands.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Special values: r=-1 means "terminal default", r=-2 marks an ANSI palette
/// index stored in `g`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Create an ANSI palette color (0-255).
    pub const fn ansi(index: u8) -> Self {
        Self {
            r: -2,
            g: index as i16,
            b: 0,
            a: 255,
        }
    }

    /// Create from a `0xRRGGBB` integer.
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xff) as u8,
            ((rgb >> 8) & 0xff) as u8,
            (rgb & 0xff) as u8,
        )
    }

    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    #[inline]
    pub const fn is_ansi(&self) -> bool {
        self.r == -2
    }

    /// Get ANSI palette index (only valid if is_ansi() returns true).
    #[inline]
    pub const fn ansi_index(&self) -> u8 {
        self.g as u8
    }
}

// =============================================================================
// Text Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 5;
        const STRIKETHROUGH = 1 << 7;
    }
}

// =============================================================================
// StyledLine - what a template renders one paragraph into
// =============================================================================

/// One line of styled output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    /// Text drawn before `text`, never wrapped away (bullets, indentation).
    pub prefix: String,
    pub text: String,
    pub fg: Rgba,
    pub attrs: Attr,
}

impl StyledLine {
    /// Unstyled line.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            prefix: String::new(),
            text: text.into(),
            fg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }

    /// Empty separator line.
    pub fn blank() -> Self {
        Self::plain("")
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_fg(mut self, fg: Rgba) -> Self {
        self.fg = fg;
        self
    }

    pub fn with_attrs(mut self, attrs: Attr) -> Self {
        self.attrs |= attrs;
        self
    }
}

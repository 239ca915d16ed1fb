use crossterm::style::Color;

/// Design tokens for the Arbor terminal UI.
///
/// All icons and borders must be sourced from this module.
pub mod colors {
    use super::Color;

    pub const ERROR: Color = Color::Red;
    /// Selected node
    pub const ACTIVE: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const CURSOR: &str = "›";
    pub const SEARCH: &str = "🔍";

    // Header decorator.
    pub const FOLDER: &str = "📁";
    pub const FILE: &str = "📄";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";
}

pub mod icons_ascii {
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const CURSOR: &str = ">";
    pub const SEARCH: &str = "[?]";

    pub const FOLDER: &str = "[D]";
    pub const FILE: &str = "[F]";

    pub const EXPAND: &str = "[-]";
    pub const COLLAPSE: &str = "[+]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "┌";
    pub const TOP_RIGHT: &str = "┐";
    pub const BOTTOM_LEFT: &str = "└";
    pub const BOTTOM_RIGHT: &str = "┘";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

/// Pick the unicode or ASCII variant of a token
pub fn pick(supports_unicode: bool, unicode: &'static str, ascii: &'static str) -> &'static str {
    if supports_unicode {
        unicode
    } else {
        ascii
    }
}

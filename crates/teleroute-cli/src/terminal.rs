//! Terminal styling for the grid map.
//!
//! Each map cell is drawn as a [`MapGlyph`]; a [`ColorPalette`] decides
//! whether that glyph is wrapped in ANSI escape codes.

use std::fmt::Write;

/// ANSI escape codes used by the map.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";

    // Bold reverse video so endpoints stand out as badges.
    /// Start cell.
    pub const TAG_START: &str = "\x1b[1;7;32m";
    /// End cell.
    pub const TAG_END: &str = "\x1b[1;7;35m";
    /// Teleport cell the route passes through.
    pub const TAG_TELEPORT: &str = "\x1b[1;7;33m";

    pub const CYAN: &str = "\x1b[36m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const GRAY: &str = "\x1b[90m";
}

/// What a single map cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapGlyph {
    Start,
    End,
    /// Free cell on the route.
    Route,
    /// Teleport cell on the route.
    RouteTeleport,
    Teleport,
    Wall,
    Free,
}

impl MapGlyph {
    /// Character drawn for the cell.
    pub fn symbol(self) -> char {
        match self {
            MapGlyph::Start => 'S',
            MapGlyph::End => 'E',
            MapGlyph::Route => '*',
            MapGlyph::RouteTeleport | MapGlyph::Teleport => 'T',
            MapGlyph::Wall => '#',
            MapGlyph::Free => '.',
        }
    }
}

/// Escape codes for each glyph, or empty strings when colour is off.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    reset: &'static str,
    start: &'static str,
    end: &'static str,
    route: &'static str,
    route_teleport: &'static str,
    teleport: &'static str,
    background: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            start: colors::TAG_START,
            end: colors::TAG_END,
            route: colors::CYAN,
            route_teleport: colors::TAG_TELEPORT,
            teleport: colors::YELLOW,
            background: colors::GRAY,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            start: "",
            end: "",
            route: "",
            route_teleport: "",
            teleport: "",
            background: "",
        }
    }

    /// Coloured palette unless the environment asks for plain output.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// `true` when this palette emits escape codes.
    pub fn is_colored(&self) -> bool {
        !self.reset.is_empty()
    }

    fn code(&self, glyph: MapGlyph) -> &'static str {
        match glyph {
            MapGlyph::Start => self.start,
            MapGlyph::End => self.end,
            MapGlyph::Route => self.route,
            MapGlyph::RouteTeleport => self.route_teleport,
            MapGlyph::Teleport => self.teleport,
            MapGlyph::Wall | MapGlyph::Free => self.background,
        }
    }

    /// Append `glyph` to `buffer`, wrapped in its colour when enabled.
    pub fn paint(&self, buffer: &mut String, glyph: MapGlyph) {
        if self.is_colored() {
            let _ = write!(buffer, "{}{}{}", self.code(glyph), glyph.symbol(), self.reset);
        } else {
            buffer.push(glyph.symbol());
        }
    }
}

/// Whether ANSI colour should be used, given the process environment.
///
/// Honours `NO_COLOR` (any value) and `TERM=dumb`.
#[must_use]
pub fn supports_color() -> bool {
    color_allowed(|key| std::env::var_os(key).map(|value| value.to_string_lossy().into_owned()))
}

fn color_allowed<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    if lookup("NO_COLOR").is_some() {
        return false;
    }
    !lookup("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"))
}

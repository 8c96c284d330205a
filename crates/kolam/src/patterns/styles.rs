//! Weave style rules.
//!
//! A style decides which quarter/half arcs are drawn in each grid cell. Every
//! rule is a pure function of the cell's column `i` and row `j` and returns
//! zero or more `(start, end)` angle pairs in degrees.
//!
//! The registry is a static table, looked up by name. Unknown names fall back
//! to [`WeaveStyle::Classic`].

use tracing::debug;

/// Start and end angle of one arc, counter-clockwise degrees.
pub type ArcSpan = (f64, f64);

type Rule = fn(u32, u32) -> Vec<ArcSpan>;

/// The sixteen named weave styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaveStyle {
    Classic,
    Checkerboard,
    Lines,
    Diagonal,
    Cross,
    Zigzag,
    Concentric,
    SpiralWeave,
    Horizontal,
    Vertical,
    Diamond,
    CircleGrid,
    Star,
    OffsetDiagonal,
    Wave,
    Petal,
}

const QUARTERS: [ArcSpan; 4] = [(0.0, 90.0), (90.0, 180.0), (180.0, 270.0), (270.0, 360.0)];

static REGISTRY: [(&str, WeaveStyle, Rule); 16] = [
    ("classic", WeaveStyle::Classic, classic),
    ("checkerboard", WeaveStyle::Checkerboard, checkerboard),
    ("lines", WeaveStyle::Lines, lines),
    ("diagonal", WeaveStyle::Diagonal, diagonal),
    ("cross", WeaveStyle::Cross, cross),
    ("zigzag", WeaveStyle::Zigzag, zigzag),
    ("concentric", WeaveStyle::Concentric, concentric),
    ("spiral-weave", WeaveStyle::SpiralWeave, spiral_weave),
    ("horizontal", WeaveStyle::Horizontal, horizontal),
    ("vertical", WeaveStyle::Vertical, vertical),
    ("diamond", WeaveStyle::Diamond, diamond),
    ("circle-grid", WeaveStyle::CircleGrid, circle_grid),
    ("star", WeaveStyle::Star, star),
    ("offset-diagonal", WeaveStyle::OffsetDiagonal, offset_diagonal),
    ("wave", WeaveStyle::Wave, wave),
    ("petal", WeaveStyle::Petal, petal),
];

/// Registered style names, in registry order.
pub fn weave_style_names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(name, _, _)| *name)
}

impl WeaveStyle {
    /// Exact lookup; None for unregistered names.
    pub fn from_name(name: &str) -> Option<WeaveStyle> {
        REGISTRY
            .iter()
            .find(|(registered, _, _)| *registered == name)
            .map(|(_, style, _)| *style)
    }

    /// Lookup with the documented fallback to "classic".
    pub fn resolve(name: &str) -> WeaveStyle {
        WeaveStyle::from_name(name).unwrap_or_else(|| {
            debug!(style = name, "unknown weave style, using classic");
            WeaveStyle::Classic
        })
    }

    pub fn name(&self) -> &'static str {
        self.entry().0
    }

    /// Arcs for the cell at column `i`, row `j`.
    pub fn arcs(&self, i: u32, j: u32) -> Vec<ArcSpan> {
        (self.entry().2)(i, j)
    }

    fn entry(&self) -> &'static (&'static str, WeaveStyle, Rule) {
        // Registry order matches declaration order.
        &REGISTRY[*self as usize]
    }
}

#[inline]
fn even(i: u32, j: u32) -> bool {
    (i + j) % 2 == 0
}

fn classic(i: u32, j: u32) -> Vec<ArcSpan> {
    if even(i, j) {
        vec![(180.0, 270.0), (0.0, 90.0)]
    } else {
        vec![(90.0, 180.0), (270.0, 360.0)]
    }
}

fn checkerboard(i: u32, j: u32) -> Vec<ArcSpan> {
    if even(i, j) {
        vec![(0.0, 90.0), (180.0, 270.0)]
    } else {
        vec![(90.0, 180.0), (270.0, 360.0)]
    }
}

fn lines(i: u32, j: u32) -> Vec<ArcSpan> {
    if even(i, j) { vec![(0.0, 180.0)] } else { vec![(180.0, 360.0)] }
}

fn diagonal(i: u32, j: u32) -> Vec<ArcSpan> {
    if even(i, j) { vec![(45.0, 135.0)] } else { vec![(225.0, 315.0)] }
}

fn cross(_i: u32, _j: u32) -> Vec<ArcSpan> {
    vec![(0.0, 180.0), (90.0, 270.0)]
}

fn zigzag(i: u32, _j: u32) -> Vec<ArcSpan> {
    if i % 2 == 0 {
        vec![(0.0, 90.0), (270.0, 360.0)]
    } else {
        vec![(90.0, 180.0), (180.0, 270.0)]
    }
}

fn concentric(i: u32, j: u32) -> Vec<ArcSpan> {
    if even(i, j) {
        vec![(0.0, 360.0)]
    } else {
        vec![(45.0, 135.0), (225.0, 315.0)]
    }
}

fn spiral_weave(i: u32, _j: u32) -> Vec<ArcSpan> {
    let offset = ((i as u64 * 30) % 360) as f64;
    vec![(offset, 180.0 + offset)]
}

fn horizontal(_i: u32, _j: u32) -> Vec<ArcSpan> {
    vec![(0.0, 180.0)]
}

fn vertical(_i: u32, _j: u32) -> Vec<ArcSpan> {
    vec![(90.0, 270.0)]
}

fn diamond(i: u32, j: u32) -> Vec<ArcSpan> {
    if even(i, j) {
        vec![(45.0, 135.0), (225.0, 315.0)]
    } else {
        vec![(135.0, 225.0), (315.0, 45.0)]
    }
}

fn circle_grid(i: u32, j: u32) -> Vec<ArcSpan> {
    if even(i, j) { vec![(0.0, 360.0)] } else { Vec::new() }
}

fn star(i: u32, j: u32) -> Vec<ArcSpan> {
    if even(i, j) { QUARTERS.to_vec() } else { Vec::new() }
}

fn offset_diagonal(i: u32, j: u32) -> Vec<ArcSpan> {
    if even(i, j) { vec![(30.0, 150.0)] } else { vec![(210.0, 330.0)] }
}

fn wave(i: u32, _j: u32) -> Vec<ArcSpan> {
    if i % 2 == 0 { vec![(0.0, 180.0)] } else { vec![(180.0, 360.0)] }
}

fn petal(_i: u32, _j: u32) -> Vec<ArcSpan> {
    QUARTERS.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_matches_declaration_order() {
        for (index, (name, style, _)) in REGISTRY.iter().enumerate() {
            assert_eq!(*style as usize, index);
            assert_eq!(style.name(), *name);
        }
        assert_eq!(weave_style_names().count(), 16);
    }

    #[test]
    fn unknown_style_falls_back_to_classic() {
        assert_eq!(WeaveStyle::from_name("paisley"), None);
        assert_eq!(WeaveStyle::resolve("paisley"), WeaveStyle::Classic);
        assert_eq!(WeaveStyle::resolve("paisley").arcs(0, 0), classic(0, 0));
    }

    #[test]
    fn registered_name_uses_its_own_rule() {
        let style = WeaveStyle::resolve("lines");
        assert_eq!(style, WeaveStyle::Lines);
        assert_eq!(style.arcs(0, 0), vec![(0.0, 180.0)]);
        assert_eq!(style.arcs(1, 0), vec![(180.0, 360.0)]);
    }

    #[test]
    fn parity_rules() {
        assert_eq!(WeaveStyle::Classic.arcs(1, 1), vec![(180.0, 270.0), (0.0, 90.0)]);
        assert_eq!(WeaveStyle::Classic.arcs(1, 2), vec![(90.0, 180.0), (270.0, 360.0)]);
        assert!(WeaveStyle::CircleGrid.arcs(0, 1).is_empty());
        assert_eq!(WeaveStyle::Star.arcs(2, 2).len(), 4);
        // zigzag and wave look at the column only
        assert_eq!(WeaveStyle::Zigzag.arcs(2, 1), WeaveStyle::Zigzag.arcs(2, 0));
        assert_eq!(WeaveStyle::Wave.arcs(1, 3), vec![(180.0, 360.0)]);
    }

    #[test]
    fn spiral_weave_rotates_per_column() {
        assert_eq!(WeaveStyle::SpiralWeave.arcs(0, 5), vec![(0.0, 180.0)]);
        assert_eq!(WeaveStyle::SpiralWeave.arcs(3, 0), vec![(90.0, 270.0)]);
        assert_eq!(WeaveStyle::SpiralWeave.arcs(13, 0), vec![(30.0, 210.0)]);
    }
}

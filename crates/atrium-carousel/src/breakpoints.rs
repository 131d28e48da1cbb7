//! Responsive breakpoints deciding how many cards a carousel shows at once.

/// Individual breakpoint with an inclusive minimum width and optional maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    /// Short name, matching the stylesheet's responsive prefixes.
    pub name: &'static str,
    /// Inclusive lower bound in CSS pixels.
    pub min_width: u32,
    /// Inclusive upper bound in CSS pixels.
    pub max_width: Option<u32>,
    /// Cards visible side by side.
    pub items_per_view: usize,
}

/// Phones.
pub const BASE: Breakpoint = Breakpoint {
    name: "base",
    min_width: 0,
    max_width: Some(639),
    items_per_view: 1,
};
/// Tablets.
pub const SM: Breakpoint = Breakpoint {
    name: "sm",
    min_width: 640,
    max_width: Some(1023),
    items_per_view: 2,
};
/// Desktops.
pub const LG: Breakpoint = Breakpoint {
    name: "lg",
    min_width: 1024,
    max_width: None,
    items_per_view: 3,
};

/// Ordered breakpoints.
pub const BREAKPOINTS: [Breakpoint; 3] = [BASE, SM, LG];

/// Find the breakpoint matching the supplied viewport width.
#[must_use]
pub fn for_width(width: u32) -> Breakpoint {
    BREAKPOINTS
        .iter()
        .copied()
        .find(|bp| width >= bp.min_width && bp.max_width.is_none_or(|max| width <= max))
        .unwrap_or(LG)
}

/// Cards per view for a viewport width.
#[must_use]
pub fn items_per_view(width: u32) -> usize {
    for_width(width).items_per_view
}

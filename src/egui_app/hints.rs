/// One tip shown in the startup overlay.
#[derive(Clone, Copy, Debug)]
pub struct HintItem {
    pub title: &'static str,
    pub body: &'static str,
}

/// Tips shown to first-time users.
pub const HINTS: &[HintItem] = &[
    HintItem {
        title: "Drop to stage",
        body: "Drag files from your file manager onto the dashed zone. Each drop replaces the staged set.",
    },
    HintItem {
        title: "Browse instead",
        body: "Click the zone or the Browse button to pick files with the system dialog.",
    },
    HintItem {
        title: "Nothing accumulates",
        body: "A new drop never appends to the selection. Clear it or drop again to change it.",
    },
];

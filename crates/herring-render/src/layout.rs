use herring_core::{CauseCategories, Category};

/// Fixed canvas size in CSS pixels. The geometry below is tuned so that a fully
/// loaded branch (8 ticks) keeps a 30 px margin to the canvas edge and never
/// crosses the spine.
pub const CANVAS_WIDTH: f64 = 900.0;
pub const CANVAS_HEIGHT: f64 = 660.0;

/// At most this many causes are drawn per branch; extra entries are silently
/// dropped. This is a rendering capacity limit, not an error.
pub const MAX_CAUSES_PER_BRANCH: usize = 8;

const SPINE_Y: f64 = 330.0;
const SPINE_X_START: f64 = 45.0;
// The spine stops short of the right edge to leave room for the effect label,
// which draws outward from the spine tip.
const SPINE_X_END: f64 = 790.0;
/// All branches converge toward this column above/below the spine midpoint.
const BRANCH_TIP_X: f64 = 450.0;
const BRANCH_RISE: f64 = 120.0;
const LABEL_CLEARANCE: f64 = 12.0;
const TICK_PITCH: f64 = 21.0;
const TICK_X_INSET: f64 = 18.0;
const TICK_LENGTH: f64 = 63.0;
const TICK_TEXT_GAP: f64 = 9.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Above,
    Below,
}

impl Side {
    /// -1 in SVG coordinates for branches above the spine (y grows downward).
    fn direction(self) -> f64 {
        match self {
            Side::Above => -1.0,
            Side::Below => 1.0,
        }
    }
}

struct BranchSpec {
    category: Category,
    anchor_x: f64,
    side: Side,
}

/// Category-to-slot mapping. Order and positions are fixed: the first three
/// categories sit above the spine, the last three below, and each top/bottom
/// pair shares an anchor column.
const BRANCHES: [BranchSpec; 6] = [
    BranchSpec { category: Category::Machine, anchor_x: 135.0, side: Side::Above },
    BranchSpec { category: Category::Method, anchor_x: 315.0, side: Side::Above },
    BranchSpec { category: Category::Material, anchor_x: 495.0, side: Side::Above },
    BranchSpec { category: Category::Manpower, anchor_x: 135.0, side: Side::Below },
    BranchSpec { category: Category::Measurement, anchor_x: 315.0, side: Side::Below },
    BranchSpec { category: Category::Environment, anchor_x: 495.0, side: Side::Below },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// One horizontal cause tick attached to a branch.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLayout {
    pub line: LineSegment,
    pub text_x: f64,
    pub text_y: f64,
    pub cause: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BranchLayout {
    pub category: Category,
    pub side: Side,
    pub line: LineSegment,
    pub label_x: f64,
    pub label_y: f64,
    pub ticks: Vec<TickLayout>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FishboneLayout {
    pub width: f64,
    pub height: f64,
    pub heading: String,
    pub title: String,
    pub title_x: f64,
    pub title_y: f64,
    pub spine: LineSegment,
    pub branches: Vec<BranchLayout>,
}

/// Computes the full fishbone geometry for the six fixed categories.
///
/// Pure layout arithmetic: no I/O, no failure paths. Categories with empty
/// cause lists still get their branch and label; only ticks are omitted.
pub fn layout_fishbone(categories: &CauseCategories, title: &str) -> FishboneLayout {
    let branches = BRANCHES
        .iter()
        .map(|spec| layout_branch(spec, categories.causes(spec.category)))
        .collect();

    FishboneLayout {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        heading: "Ishikawa (Fishbone) Diagram".to_string(),
        title: title.to_string(),
        title_x: SPINE_X_END + TICK_TEXT_GAP,
        title_y: SPINE_Y,
        spine: LineSegment {
            x1: SPINE_X_START,
            y1: SPINE_Y,
            x2: SPINE_X_END,
            y2: SPINE_Y,
        },
        branches,
    }
}

fn layout_branch(spec: &BranchSpec, causes: &[String]) -> BranchLayout {
    let dir = spec.side.direction();
    let tip_y = SPINE_Y + dir * BRANCH_RISE;
    let label_y = tip_y + dir * LABEL_CLEARANCE;

    let ticks = causes
        .iter()
        .take(MAX_CAUSES_PER_BRANCH)
        .enumerate()
        .map(|(j, cause)| {
            let y = label_y + dir * TICK_PITCH * (j as f64 + 1.0);
            let x1 = spec.anchor_x + TICK_X_INSET;
            let x2 = x1 + TICK_LENGTH;
            TickLayout {
                line: LineSegment { x1, y1: y, x2, y2: y },
                text_x: x2 + TICK_TEXT_GAP,
                text_y: y,
                cause: cause.clone(),
            }
        })
        .collect();

    BranchLayout {
        category: spec.category,
        side: spec.side,
        line: LineSegment {
            x1: spec.anchor_x,
            y1: SPINE_Y,
            x2: BRANCH_TIP_X,
            y2: tip_y,
        },
        label_x: spec.anchor_x - TICK_X_INSET,
        label_y,
        ticks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_cause(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("cause {i}")).collect()
    }

    #[test]
    fn six_branches_in_fixed_order_even_when_all_empty() {
        let layout = layout_fishbone(&CauseCategories::default(), "Problem");
        let cats: Vec<Category> = layout.branches.iter().map(|b| b.category).collect();
        assert_eq!(cats, Category::ALL);
        assert!(layout.branches.iter().all(|b| b.ticks.is_empty()));
    }

    #[test]
    fn top_and_bottom_pairs_share_anchor_columns() {
        let layout = layout_fishbone(&CauseCategories::default(), "Problem");
        let b = &layout.branches;
        assert_eq!(b[0].line.x1, b[3].line.x1); // Machine / Manpower
        assert_eq!(b[1].line.x1, b[4].line.x1); // Method / Measurement
        assert_eq!(b[2].line.x1, b[5].line.x1); // Material / Environment
        assert_eq!(b[0].side, Side::Above);
        assert_eq!(b[3].side, Side::Below);
    }

    #[test]
    fn causes_beyond_eight_are_dropped_in_input_order() {
        let mut cats = CauseCategories::default();
        cats.machine = one_cause(9);
        let layout = layout_fishbone(&cats, "Problem");
        let machine = &layout.branches[0];
        assert_eq!(machine.ticks.len(), 8);
        assert_eq!(machine.ticks[0].cause, "cause 0");
        assert_eq!(machine.ticks[7].cause, "cause 7");
        assert!(machine.ticks.iter().all(|t| t.cause != "cause 8"));
    }

    #[test]
    fn exactly_eight_causes_all_render_inside_the_canvas() {
        let mut cats = CauseCategories::default();
        for cat in Category::ALL {
            *cats.causes_mut(cat) = one_cause(8);
        }
        let layout = layout_fishbone(&cats, "Problem");
        for branch in &layout.branches {
            assert_eq!(branch.ticks.len(), 8);
            for tick in &branch.ticks {
                assert!(tick.text_y > 0.0 && tick.text_y < CANVAS_HEIGHT);
            }
        }
    }

    #[test]
    fn ticks_stack_outward_and_never_cross_the_spine() {
        let mut cats = CauseCategories::default();
        for cat in Category::ALL {
            *cats.causes_mut(cat) = one_cause(8);
        }
        let layout = layout_fishbone(&cats, "Problem");
        let spine_y = layout.spine.y1;
        for branch in &layout.branches {
            let mut prev: Option<f64> = None;
            for tick in &branch.ticks {
                match branch.side {
                    Side::Above => assert!(tick.text_y < spine_y),
                    Side::Below => assert!(tick.text_y > spine_y),
                }
                if let Some(p) = prev {
                    let gap = (tick.text_y - p).abs();
                    assert!(gap >= TICK_PITCH - 1e-9, "ticks too close: {gap}");
                }
                prev = Some(tick.text_y);
            }
        }
    }

    #[test]
    fn title_label_fits_inside_the_canvas() {
        let layout = layout_fishbone(&CauseCategories::default(), "Problem");
        // Generous per-glyph advance estimate for the 14px bold title.
        let estimated_width = layout.title.chars().count() as f64 * 10.0;
        assert!(layout.title_x + estimated_width <= CANVAS_WIDTH);
        assert!(layout.title_x > layout.spine.x2);
    }

    #[test]
    fn layout_is_deterministic() {
        let mut cats = CauseCategories::default();
        cats.method = vec!["calibration drift".to_string()];
        let a = layout_fishbone(&cats, "Problem");
        let b = layout_fishbone(&cats, "Problem");
        assert_eq!(a, b);
    }
}

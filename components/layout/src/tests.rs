//! Cross-cutting layout engine tests.
//!
//! Engine-specific behavior lives next to each engine; this module checks
//! the properties every engine must share: one rect per child in input
//! order, agreement between the sizing and placement phases, idempotence,
//! and containment of placements within the reported size.

use alloc::{vec, vec::Vec};

use crate::{
    FlowLayout, HorizontalAlignment, Layout, MasonryLayout, Point, ProposalSize, RadialLayout,
    Rect, Size, SubView,
};

// ============================================================================
// Test infrastructure
// ============================================================================

/// A rigid child that reports the same size for every proposal, like an icon
/// or a fixed-size image.
struct FixedSizeView {
    size: Size,
}

impl SubView for FixedSizeView {
    fn size_that_fits(&self, _proposal: ProposalSize) -> Size {
        self.size
    }
}

/// A text-like child: constrained below its intrinsic width it wraps,
/// trading width for height one whole line at a time.
struct FlexibleTextView {
    intrinsic: Size,
}

impl FlexibleTextView {
    const fn new(text_width: f32, line_height: f32) -> Self {
        Self {
            intrinsic: Size::new(text_width, line_height),
        }
    }
}

impl SubView for FlexibleTextView {
    fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        match proposal.width {
            Some(max_width) if max_width < self.intrinsic.width && max_width > 0.0 => {
                let lines = (self.intrinsic.width / max_width).ceil();
                Size::new(max_width, lines * self.intrinsic.height)
            }
            _ => self.intrinsic,
        }
    }
}

fn fixed(width: f32, height: f32) -> FixedSizeView {
    FixedSizeView {
        size: Size::new(width, height),
    }
}

fn assert_rect_within(rect: &Rect, bounds: &Rect, label: &str) {
    assert!(
        rect.min_x() >= bounds.min_x() - 0.001,
        "{}: rect.min_x ({}) < bounds.min_x ({})",
        label,
        rect.min_x(),
        bounds.min_x()
    );
    assert!(
        rect.min_y() >= bounds.min_y() - 0.001,
        "{}: rect.min_y ({}) < bounds.min_y ({})",
        label,
        rect.min_y(),
        bounds.min_y()
    );
    assert!(
        rect.max_x() <= bounds.max_x() + 0.001,
        "{}: rect.max_x ({}) > bounds.max_x ({})",
        label,
        rect.max_x(),
        bounds.max_x()
    );
    assert!(
        rect.max_y() <= bounds.max_y() + 0.001,
        "{}: rect.max_y ({}) > bounds.max_y ({})",
        label,
        rect.max_y(),
        bounds.max_y()
    );
}

// ============================================================================
// Completeness: one rect per child, in input order
// ============================================================================

#[test]
fn every_engine_places_each_child_exactly_once() {
    let items: Vec<FixedSizeView> = (1..=7)
        .map(|i| fixed(10.0 * i as f32, 10.0 * i as f32))
        .collect();
    let children: Vec<&dyn SubView> = items.iter().map(|c| c as &dyn SubView).collect();
    let bounds = Rect::new(Point::zero(), Size::new(150.0, 400.0));

    let engines: Vec<(&str, alloc::boxed::Box<dyn Layout>)> = vec![
        (
            "flow",
            alloc::boxed::Box::new(FlowLayout::new(4.0, HorizontalAlignment::Leading)),
        ),
        ("radial", alloc::boxed::Box::new(RadialLayout::new(70.0))),
        (
            "masonry",
            alloc::boxed::Box::new(MasonryLayout::new(3).spacing(4.0)),
        ),
    ];

    for (name, engine) in &engines {
        let rects = engine.place(bounds, &children);
        assert_eq!(rects.len(), children.len(), "{name}: rect count");
    }
}

#[test]
fn flow_preserves_input_order_left_to_right() {
    // Distinguishable widths let us recover which rect belongs to which child.
    let a = fixed(10.0, 10.0);
    let b = fixed(20.0, 10.0);
    let c = fixed(30.0, 10.0);
    let children: Vec<&dyn SubView> = vec![&a, &b, &c];

    let layout = FlowLayout::new(0.0, HorizontalAlignment::Leading);
    let rects = layout.place(Rect::from_size(Size::new(100.0, 10.0)), &children);

    assert_eq!(rects[0].width(), 10.0);
    assert_eq!(rects[1].width(), 20.0);
    assert_eq!(rects[2].width(), 30.0);
    assert!(rects[0].x() < rects[1].x());
    assert!(rects[1].x() < rects[2].x());
}

// ============================================================================
// Phase agreement
// ============================================================================

#[test]
fn flow_placements_fit_inside_the_reported_size() {
    let items = [
        fixed(50.0, 20.0),
        fixed(80.0, 35.0),
        fixed(30.0, 10.0),
        fixed(110.0, 25.0),
        fixed(60.0, 40.0),
    ];
    let children: Vec<&dyn SubView> = items.iter().map(|c| c as &dyn SubView).collect();

    let layout = FlowLayout::new(10.0, HorizontalAlignment::Center);
    let proposal = ProposalSize::new(Some(120.0), None);

    let size = layout.size_that_fits(proposal, &children);
    let bounds = Rect::new(Point::zero(), size);
    let rects = layout.place(bounds, &children);

    for (i, rect) in rects.iter().enumerate() {
        assert_rect_within(rect, &bounds, &alloc::format!("flow child {i}"));
    }
}

#[test]
fn masonry_placements_fit_inside_the_reported_size() {
    let items = [
        FlexibleTextView::new(300.0, 20.0),
        FlexibleTextView::new(120.0, 20.0),
        FlexibleTextView::new(500.0, 20.0),
        FlexibleTextView::new(80.0, 20.0),
    ];
    let children: Vec<&dyn SubView> = items.iter().map(|c| c as &dyn SubView).collect();

    let layout = MasonryLayout::new(2).spacing(12.0);
    let proposal = ProposalSize::new(Some(212.0), None);

    let size = layout.size_that_fits(proposal, &children);
    let bounds = Rect::new(Point::zero(), size);
    let rects = layout.place(bounds, &children);

    for (i, rect) in rects.iter().enumerate() {
        assert_rect_within(rect, &bounds, &alloc::format!("masonry child {i}"));
    }
}

#[test]
fn masonry_phases_agree_on_column_assignment() {
    // The sizing pass reports the tallest column; placement must produce a
    // rect whose bottom edge reaches exactly that height.
    let items = [fixed(0.0, 100.0), fixed(0.0, 50.0), fixed(0.0, 50.0), fixed(0.0, 50.0)];
    let children: Vec<&dyn SubView> = items.iter().map(|c| c as &dyn SubView).collect();

    let layout = MasonryLayout::new(3).spacing(0.0);
    let proposal = ProposalSize::new(Some(300.0), None);

    let size = layout.size_that_fits(proposal, &children);
    let rects = layout.place(Rect::new(Point::zero(), size), &children);

    let bottom = rects.iter().map(Rect::max_y).fold(0.0, f32::max);
    assert!((bottom - size.height).abs() < 0.001);
}

#[test]
fn flow_phases_agree_on_row_assignment() {
    let items = [fixed(50.0, 20.0), fixed(50.0, 30.0), fixed(50.0, 20.0)];
    let children: Vec<&dyn SubView> = items.iter().map(|c| c as &dyn SubView).collect();

    let layout = FlowLayout::new(10.0, HorizontalAlignment::Leading);
    let proposal = ProposalSize::new(Some(120.0), None);

    let size = layout.size_that_fits(proposal, &children);
    let rects = layout.place(Rect::new(Point::zero(), size), &children);

    let bottom = rects.iter().map(Rect::max_y).fold(0.0, f32::max);
    assert!((bottom - size.height).abs() < 0.001);
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn repeated_sizing_returns_identical_results() {
    let items = [fixed(50.0, 20.0), fixed(70.0, 25.0), fixed(40.0, 15.0)];
    let children: Vec<&dyn SubView> = items.iter().map(|c| c as &dyn SubView).collect();
    let proposal = ProposalSize::new(Some(130.0), None);

    let flow = FlowLayout::new(6.0, HorizontalAlignment::Leading);
    assert_eq!(
        flow.size_that_fits(proposal, &children),
        flow.size_that_fits(proposal, &children)
    );

    let radial = RadialLayout::new(90.0).start_angle(45.0);
    assert_eq!(
        radial.size_that_fits(proposal, &children),
        radial.size_that_fits(proposal, &children)
    );

    let masonry = MasonryLayout::new(2).spacing(6.0);
    assert_eq!(
        masonry.size_that_fits(proposal, &children),
        masonry.size_that_fits(proposal, &children)
    );
}

#[test]
fn repeated_placement_returns_identical_results() {
    let items = [fixed(50.0, 20.0), fixed(70.0, 25.0), fixed(40.0, 15.0)];
    let children: Vec<&dyn SubView> = items.iter().map(|c| c as &dyn SubView).collect();
    let bounds = Rect::new(Point::new(10.0, 10.0), Size::new(130.0, 200.0));

    let flow = FlowLayout::new(6.0, HorizontalAlignment::Trailing);
    assert_eq!(flow.place(bounds, &children), flow.place(bounds, &children));

    let radial = RadialLayout::new(90.0);
    assert_eq!(
        radial.place(bounds, &children),
        radial.place(bounds, &children)
    );

    let masonry = MasonryLayout::new(2);
    assert_eq!(
        masonry.place(bounds, &children),
        masonry.place(bounds, &children)
    );
}

// ============================================================================
// Reflowing children
// ============================================================================

#[test]
fn masonry_constrains_text_to_the_column_width() {
    // A 300pt-wide single line in a 100pt column wraps to three lines.
    let text = FlexibleTextView::new(300.0, 20.0);
    let children: Vec<&dyn SubView> = vec![&text];

    let layout = MasonryLayout::new(2).spacing(0.0);
    let bounds = Rect::new(Point::zero(), Size::new(200.0, 400.0));
    let rects = layout.place(bounds, &children);

    assert_eq!(rects[0].width(), 100.0);
    assert_eq!(rects[0].height(), 60.0);
}

// Controller behaviour against recording host fakes

mod common;

use common::*;
use masonry_gallery_wasm::animation::Property;
use masonry_gallery_wasm::controller::{GalleryEvent, ImageOutcome, TimerKind};
use masonry_gallery_wasm::{AnimateFrom, GalleryError, GalleryItem, GalleryPhase, MasonryConfig};

#[test]
fn test_nothing_renders_until_every_image_settles() {
    let mut gallery = production_controller();
    gallery.preload_images();
    assert_eq!(gallery.surface().loads.len(), 7);

    for index in 0..6 {
        gallery.handle(GalleryEvent::ImageSettled { index, outcome: ImageOutcome::Loaded });
    }
    assert_eq!(gallery.layout_passes(), 0);
    assert_eq!(gallery.phase(), GalleryPhase::Loading);
    assert!(gallery.surface().mounted.is_empty());

    gallery.handle(GalleryEvent::ImageSettled { index: 6, outcome: ImageOutcome::Loaded });
    assert_eq!(gallery.layout_passes(), 1);
    assert_eq!(gallery.phase(), GalleryPhase::ReadyHidden);
}

#[test]
fn test_production_gallery_layout() {
    let gallery = ready(production_controller());
    let grid = gallery.grid();

    assert_eq!(grid.columns, 2);
    let columns: Vec<usize> = grid.items.iter().map(|p| p.column).collect();
    assert_eq!(columns, vec![0, 1, 1, 0, 0, 1, 1]);
    assert_eq!(grid.column_heights, vec![1200.0, 1530.0]);
    assert_eq!(gallery.surface().container_height, Some(1530.0));
    assert_eq!(gallery.surface().mounted.len(), 7);
}

#[test]
fn test_failed_images_still_count_as_ready() {
    let mut gallery = production_controller();
    gallery.preload_images();
    for index in 0..7 {
        let outcome = if index == 3 { ImageOutcome::Failed } else { ImageOutcome::Loaded };
        gallery.handle(GalleryEvent::ImageSettled { index, outcome });
    }
    assert!(gallery.flags().images_ready());
    assert_eq!(gallery.layout_passes(), 1);
}

#[test]
fn test_duplicate_image_reports_do_not_complete_the_batch() {
    let mut gallery = production_controller();
    gallery.preload_images();
    for _ in 0..7 {
        gallery.handle(GalleryEvent::ImageSettled { index: 0, outcome: ImageOutcome::Loaded });
    }
    assert!(!gallery.flags().images_ready());
}

#[test]
fn test_empty_gallery_is_ready_immediately() {
    let mut gallery = controller(Vec::new(), MasonryConfig::default(), FakeSurface::with_width(1200.0, 800.0));
    gallery.preload_images();
    assert!(gallery.flags().images_ready());
    assert!(gallery.grid().is_empty());
    // Zero height is never written
    assert_eq!(gallery.surface().container_height, None);
}

#[test]
fn test_items_park_in_hidden_pose_before_visible() {
    let gallery = ready(production_controller());
    let node = wrapper(&gallery, "2");
    let engine = gallery.animator();

    assert_eq!(engine.value(&node, Property::Opacity), Some(0.0));
    assert_eq!(engine.value(&node, Property::X), Some(600.0));
    // Below the viewport (800 + 200) plus the hidden drop
    assert_eq!(engine.value(&node, Property::Y), Some(1100.0));
    assert_eq!(engine.value(&node, Property::Blur), Some(10.0));
    assert!(!engine.is_animating());
}

#[test]
fn test_entrance_plays_and_settles() {
    let mut gallery = ready(production_controller());
    gallery.handle(GalleryEvent::Visibility(true));

    assert_eq!(gallery.phase(), GalleryPhase::Entering);
    assert!(gallery.flags().has_animated());
    let settle = gallery.scheduler().of_kind(TimerKind::EntranceSettle);
    assert_eq!(settle.len(), 1);
    assert_eq!(settle[0].0, 1800);

    gallery.animator_mut().advance(2.0);
    for placed in gallery.grid().items.clone() {
        let node = wrapper(&gallery, placed.id());
        let engine = gallery.animator();
        assert_eq!(engine.value(&node, Property::Opacity), Some(1.0));
        assert_eq!(engine.value(&node, Property::X), Some(placed.x));
        assert_eq!(engine.value(&node, Property::Y), Some(placed.y));
        assert_eq!(engine.value(&node, Property::Blur), Some(0.0));
    }
    assert!(!gallery.animator().is_animating());

    fire_latest(&mut gallery, TimerKind::EntranceSettle);
    assert_eq!(gallery.phase(), GalleryPhase::Settled);
}

#[test]
fn test_entrance_is_staggered() {
    let mut gallery = ready(production_controller());
    gallery.handle(GalleryEvent::Visibility(true));

    // Item 7 starts 0.3s late and is still fully hidden at 0.2s
    gallery.animator_mut().advance(0.2);
    let first = wrapper(&gallery, "1");
    let last = wrapper(&gallery, "7");
    let first_opacity = gallery.animator().value(&first, Property::Opacity).unwrap_or_default();
    assert!(first_opacity > 0.0);
    assert_eq!(gallery.animator().value(&last, Property::Opacity), Some(0.0));
}

#[test]
fn test_visible_before_ready_plays_entrance_after_first_layout() {
    let mut gallery = production_controller();
    gallery.preload_images();
    gallery.handle(GalleryEvent::Visibility(true));
    assert_eq!(gallery.phase(), GalleryPhase::Loading);

    load_all(&mut gallery);
    assert_eq!(gallery.phase(), GalleryPhase::Entering);
    assert!(gallery.flags().has_animated());
}

#[test]
fn test_restarting_entrance_leaves_one_timeline_per_item() {
    let mut gallery = ready(production_controller());
    gallery.handle(GalleryEvent::Visibility(true));
    let node = wrapper(&gallery, "4");
    let tweens = gallery.animator().tween_count(&node);
    assert!(tweens > 0);

    gallery.animator_mut().advance(0.4);
    gallery.handle(GalleryEvent::Visibility(true));
    assert_eq!(gallery.animator().tween_count(&node), tweens);

    gallery.animator_mut().advance(2.0);
    let placed = gallery.placement("4").cloned().expect("placed");
    assert_eq!(gallery.animator().value(&node, Property::Y), Some(placed.y));
    assert_eq!(gallery.animator().value(&node, Property::Opacity), Some(1.0));
}

#[test]
fn test_exit_and_reenter_replays_entrance() {
    let mut gallery = ready(production_controller());
    gallery.handle(GalleryEvent::Visibility(true));
    gallery.animator_mut().advance(2.0);
    let first_settle = gallery.scheduler().of_kind(TimerKind::EntranceSettle)[0].1;

    gallery.handle(GalleryEvent::Visibility(false));
    assert_eq!(gallery.phase(), GalleryPhase::ReadyHidden);
    assert!(!gallery.flags().has_animated());
    let node = wrapper(&gallery, "1");
    assert_eq!(gallery.animator().value(&node, Property::Opacity), Some(0.0));
    assert_eq!(gallery.animator().tween_count(&node), 0);

    gallery.handle(GalleryEvent::Visibility(true));
    assert_eq!(gallery.phase(), GalleryPhase::Entering);

    // The first run's settle timer is stale
    gallery.handle(GalleryEvent::Timer(first_settle));
    assert_eq!(gallery.phase(), GalleryPhase::Entering);

    fire_latest(&mut gallery, TimerKind::EntranceSettle);
    assert_eq!(gallery.phase(), GalleryPhase::Settled);
}

#[test]
fn test_exit_during_entrance_snaps_back_to_hidden() {
    let mut gallery = ready(production_controller());
    gallery.handle(GalleryEvent::Visibility(true));
    gallery.animator_mut().advance(0.5);

    gallery.handle(GalleryEvent::Visibility(false));
    gallery.animator_mut().advance(5.0);

    assert_eq!(gallery.phase(), GalleryPhase::ReadyHidden);
    for placed in gallery.grid().items.clone() {
        let node = wrapper(&gallery, placed.id());
        assert_eq!(gallery.animator().value(&node, Property::Opacity), Some(0.0), "item {}", placed.id());
        assert_eq!(gallery.animator().tween_count(&node), 0, "item {}", placed.id());
    }
    assert!(!gallery.animator().is_animating());
}

#[test]
fn test_resize_is_debounced() {
    let mut gallery = ready(production_controller());
    gallery.handle(GalleryEvent::Resize);
    gallery.handle(GalleryEvent::Resize);

    let timers = gallery.scheduler().of_kind(TimerKind::ResizeDebounce);
    assert_eq!(timers.len(), 2);
    assert!(timers.iter().all(|(delay, _)| *delay == 250));

    for (_, token) in timers {
        gallery.handle(GalleryEvent::Timer(token));
    }
    assert_eq!(gallery.layout_passes(), 2);
}

#[test]
fn test_resize_after_entrance_glides_to_new_layout() {
    let mut gallery = ready(production_controller());
    gallery.handle(GalleryEvent::Visibility(true));
    gallery.animator_mut().advance(2.0);

    let surface = gallery.surface_mut();
    surface.viewport.width = 500.0;
    surface.container_width = Some(500.0);
    gallery.handle(GalleryEvent::Resize);
    fire_latest(&mut gallery, TimerKind::ResizeDebounce);

    assert_eq!(gallery.grid().columns, 1);
    assert_eq!(gallery.phase(), GalleryPhase::Settled);
    assert_eq!(gallery.surface().container_height, Some(2730.0));

    // Fresh node starts where the old tile rested
    let node = wrapper(&gallery, "2");
    assert_eq!(gallery.animator().value(&node, Property::X), Some(600.0));
    assert_eq!(gallery.animator().value(&node, Property::Opacity), Some(1.0));

    gallery.animator_mut().advance(0.6);
    assert_eq!(gallery.animator().value(&node, Property::X), Some(0.0));
    assert_eq!(gallery.animator().value(&node, Property::Y), Some(400.0));
    assert_eq!(gallery.animator().value(&node, Property::Width), Some(500.0));
}

#[test]
fn test_resize_while_hidden_stays_hidden() {
    let mut gallery = ready(production_controller());
    gallery.surface_mut().viewport.width = 500.0;
    gallery.handle(GalleryEvent::Resize);
    fire_latest(&mut gallery, TimerKind::ResizeDebounce);

    assert_eq!(gallery.phase(), GalleryPhase::ReadyHidden);
    let node = wrapper(&gallery, "1");
    assert_eq!(gallery.animator().value(&node, Property::Opacity), Some(0.0));
}

#[test]
fn test_degenerate_width_retries_later() {
    let mut surface = FakeSurface::with_width(0.0, 0.0);
    surface.container_width = Some(0.0);
    surface.parent_width = Some(0.0);
    let mut gallery = ready(controller(production_items(), MasonryConfig::default(), surface));

    assert_eq!(gallery.layout_passes(), 0);
    let retries = gallery.scheduler().of_kind(TimerKind::LayoutRetry);
    assert_eq!(retries.len(), 1);
    assert_eq!(retries[0].0, 100);

    let surface = gallery.surface_mut();
    surface.viewport.width = 900.0;
    surface.container_width = Some(900.0);
    fire_latest(&mut gallery, TimerKind::LayoutRetry);
    assert_eq!(gallery.layout_passes(), 1);
    assert_eq!(gallery.grid().container_width, 900.0);
}

#[test]
fn test_parent_width_used_when_container_collapsed() {
    let mut surface = FakeSurface::with_width(1200.0, 800.0);
    surface.container_width = Some(0.0);
    surface.parent_width = Some(800.0);
    let gallery = ready(controller(production_items(), MasonryConfig::default(), surface));

    assert_eq!(gallery.grid().container_width, 800.0);
    assert_eq!(gallery.grid().column_width(), 400.0);
}

#[test]
fn test_missing_element_skips_only_that_item() {
    let mut surface = FakeSurface::with_width(1200.0, 800.0);
    surface.missing.insert("3".to_string());
    let mut gallery = ready(controller(production_items(), MasonryConfig::default(), surface));

    assert!(gallery.nodes_of("3").is_none());
    assert!(gallery.nodes_of("2").is_some());
    assert_eq!(gallery.surface().mounted.len(), 6);
    // Placement still accounts for the skipped tile
    assert_eq!(gallery.placement("4").map(|p| p.y), Some(400.0));

    gallery.handle(GalleryEvent::Visibility(true));
    assert_eq!(gallery.phase(), GalleryPhase::Entering);
    gallery.handle(GalleryEvent::HoverStart("3".to_string()));
    assert!(!gallery.is_hovered("3"));
}

#[test]
fn test_hover_touches_only_the_hovered_item() {
    let items: Vec<GalleryItem> = production_items()
        .into_iter()
        .map(|item| item.with_description("caption"))
        .collect();
    let mut gallery = ready(controller(items, MasonryConfig::default(), FakeSurface::with_width(1200.0, 800.0)));
    gallery.handle(GalleryEvent::Visibility(true));
    gallery.animator_mut().advance(2.0);

    gallery.handle(GalleryEvent::HoverStart("2".to_string()));
    assert!(gallery.is_hovered("2"));
    let hovered = gallery.nodes_of("2").cloned().expect("rendered");
    let other = gallery.nodes_of("1").cloned().expect("rendered");
    assert_eq!(gallery.animator().tween_count(&other.wrapper), 0);

    gallery.animator_mut().advance(0.4);
    let engine = gallery.animator();
    assert_eq!(engine.value(&hovered.wrapper, Property::Scale), Some(0.95));
    let description = hovered.description.expect("description node");
    assert_eq!(engine.value(&description, Property::Opacity), Some(1.0));
    assert_eq!(engine.value(&other.wrapper, Property::Scale), None);
    // Position from the entrance is untouched
    assert_eq!(engine.value(&hovered.wrapper, Property::X), Some(600.0));

    gallery.handle(GalleryEvent::HoverEnd("2".to_string()));
    gallery.animator_mut().advance(0.3);
    assert!(!gallery.is_hovered("2"));
    assert_eq!(gallery.animator().value(&hovered.wrapper, Property::Scale), Some(1.0));
    assert_eq!(gallery.animator().value(&description, Property::Opacity), Some(0.0));
}

#[test]
fn test_hover_during_entrance_keeps_entrance_running() {
    let mut gallery = ready(production_controller());
    gallery.handle(GalleryEvent::Visibility(true));
    gallery.animator_mut().advance(0.5);
    gallery.handle(GalleryEvent::HoverStart("1".to_string()));

    gallery.animator_mut().advance(1.5);
    let node = wrapper(&gallery, "1");
    assert_eq!(gallery.animator().value(&node, Property::Opacity), Some(1.0));
    assert_eq!(gallery.animator().value(&node, Property::Scale), Some(0.95));
}

#[test]
fn test_color_shift_adds_overlay() {
    let config = MasonryConfig {
        color_shift_on_hover: true,
        ..MasonryConfig::default()
    };
    let mut gallery = ready(controller(production_items(), config, FakeSurface::with_width(1200.0, 800.0)));
    let overlay = gallery.nodes_of("5").and_then(|n| n.overlay).expect("overlay node");

    gallery.handle(GalleryEvent::HoverStart("5".to_string()));
    gallery.animator_mut().advance(0.3);
    assert_eq!(gallery.animator().value(&overlay, Property::Opacity), Some(0.3));
}

#[test]
fn test_random_direction_uses_picker() {
    let config = MasonryConfig {
        animate_from: AnimateFrom::Random,
        ..MasonryConfig::default()
    };
    let mut gallery = controller(production_items(), config, FakeSurface::with_width(1200.0, 800.0));
    // Index 2 is `left`
    gallery.set_direction_picker(|_| 2);
    let gallery = ready(gallery);

    let node = wrapper(&gallery, "2");
    assert_eq!(gallery.animator().value(&node, Property::X), Some(-200.0));
    assert_eq!(gallery.animator().value(&node, Property::Y), Some(100.0));
}

#[test]
fn test_teardown_clears_everything() {
    let mut gallery = ready(production_controller());
    gallery.handle(GalleryEvent::Visibility(true));
    let clears = gallery.surface().clears;

    gallery.teardown();
    assert_eq!(gallery.surface().clears, clears + 1);
    assert!(gallery.grid().is_empty());
    assert!(!gallery.animator().is_animating());

    assert_eq!(gallery.phase(), GalleryPhase::Loading);

    // The settle timer from before teardown is stale
    fire_latest(&mut gallery, TimerKind::EntranceSettle);
    assert_eq!(gallery.phase(), GalleryPhase::Loading);
}

#[test]
fn test_relayout_drops_state_of_replaced_nodes() {
    let mut gallery = ready(production_controller());
    gallery.handle(GalleryEvent::Visibility(true));
    gallery.animator_mut().advance(2.0);

    let mut replaced = Vec::new();
    for pass in 0..50 {
        replaced.extend(
            gallery
                .grid()
                .items
                .iter()
                .filter_map(|placed| gallery.nodes_of(placed.id()))
                .flat_map(|nodes| nodes.iter().copied().collect::<Vec<_>>()),
        );
        let width = if pass % 2 == 0 { 500.0 } else { 1200.0 };
        let surface = gallery.surface_mut();
        surface.viewport.width = width;
        surface.container_width = Some(width);
        gallery.handle(GalleryEvent::Resize);
        fire_latest(&mut gallery, TimerKind::ResizeDebounce);
        gallery.animator_mut().advance(0.6);
    }

    assert_eq!(gallery.layout_passes(), 51);
    assert!(replaced.len() >= 350);
    let holding_state = replaced
        .iter()
        .filter(|node| gallery.animator().values_of(*node).is_some())
        .count();
    assert_eq!(holding_state, 0);

    // Live nodes still carry their placement
    let node = wrapper(&gallery, "2");
    assert_eq!(gallery.animator().value(&node, Property::X), Some(600.0));
}

#[test]
fn test_invalid_items_are_rejected() {
    let mut items = production_items();
    items[4].id = "1".to_string();
    let result = masonry_gallery_wasm::MasonryController::new(
        items,
        MasonryConfig::default(),
        FakeSurface::default(),
        masonry_gallery_wasm::animation::TweenEngine::<u32>::new(),
        RecordingScheduler::default(),
    );
    assert!(matches!(result, Err(GalleryError::InvalidItem { .. })));
}

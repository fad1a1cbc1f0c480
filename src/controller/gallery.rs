//! The masonry gallery state machine
//!
//! Phases: `Loading` until every image settles, `ReadyHidden` once items
//! are rendered in their pre-entrance pose, `Entering` while the staggered
//! entrance runs, `Settled` afterwards. Leaving the viewport snaps back to
//! `ReadyHidden` and clears `has_animated`, so the next entry replays.
//!
//! Every node's tweens are killed before a new timeline starts on it. That
//! is the only locking this single-threaded controller needs.

use crate::animation::poses::{
    hidden_pose, layout_pose, random_index, resolve_direction, resting_pose, start_position,
};
use crate::animation::{Animator, Motion};
use crate::error::GalleryError;
use crate::layout::{columns_for_width, compute_grid, resolve_container_width};
use crate::models::{
    validate_items, AnimationLifecycleFlags, GalleryItem, GalleryPhase, GridState, MasonryConfig,
    PlacedItem,
};

use super::host::{ImageOutcome, ItemNodes, RenderOptions, Scheduler, Surface};
use super::hover::{hover_in, hover_out};
use super::preload::PreloadBatch;
use super::timers::{TimerGenerations, TimerKind, TimerToken};
use super::GalleryEvent;

type DirectionPicker = Box<dyn FnMut(usize) -> usize>;

pub struct MasonryController<S, A, T>
where
    S: Surface,
    A: Animator<Target = S::Node>,
    T: Scheduler,
{
    items: Vec<GalleryItem>,
    config: MasonryConfig,
    flags: AnimationLifecycleFlags,
    phase: GalleryPhase,
    grid: GridState,
    /// Parallel to `grid.items`; `None` where the item could not be rendered
    nodes: Vec<Option<ItemNodes<S::Node>>>,
    hovered: Vec<bool>,
    preload: PreloadBatch,
    timers: TimerGenerations,
    in_view: bool,
    layout_passes: usize,
    pick_direction: DirectionPicker,
    surface: S,
    animator: A,
    scheduler: T,
}

impl<S, A, T> MasonryController<S, A, T>
where
    S: Surface,
    A: Animator<Target = S::Node>,
    T: Scheduler,
{
    /// Create a controller for a fixed item list
    ///
    /// Nothing is loaded or rendered until [`preload_images`](Self::preload_images).
    pub fn new(
        items: Vec<GalleryItem>,
        config: MasonryConfig,
        surface: S,
        animator: A,
        scheduler: T,
    ) -> Result<Self, GalleryError> {
        validate_items(&items)?;
        config.validate()?;

        let sources = items.iter().map(|item| item.img.clone()).collect();
        log::info!("Masonry gallery created with {} item(s)", items.len());

        Ok(Self {
            items,
            config,
            flags: AnimationLifecycleFlags::new(),
            phase: GalleryPhase::Loading,
            grid: GridState::default(),
            nodes: Vec::new(),
            hovered: Vec::new(),
            preload: PreloadBatch::new(sources),
            timers: TimerGenerations::new(),
            in_view: false,
            layout_passes: 0,
            pick_direction: Box::new(random_index),
            surface,
            animator,
            scheduler,
        })
    }

    /// Replace the RNG behind `AnimateFrom::Random`
    pub fn set_direction_picker(&mut self, pick: impl FnMut(usize) -> usize + 'static) {
        self.pick_direction = Box::new(pick);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn config(&self) -> &MasonryConfig {
        &self.config
    }

    pub fn flags(&self) -> AnimationLifecycleFlags {
        self.flags
    }

    pub fn phase(&self) -> GalleryPhase {
        self.phase
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn is_in_view(&self) -> bool {
        self.in_view
    }

    /// Completed layout passes (a pass that hit a degenerate width does not count)
    pub fn layout_passes(&self) -> usize {
        self.layout_passes
    }

    pub fn nodes_of(&self, id: &str) -> Option<&ItemNodes<S::Node>> {
        let index = self.grid.position_of(id)?;
        self.nodes.get(index).and_then(Option::as_ref)
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.grid
            .position_of(id)
            .and_then(|index| self.hovered.get(index).copied())
            .unwrap_or(false)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }

    // ------------------------------------------------------------------
    // Event dispatch
    // ------------------------------------------------------------------

    pub fn handle(&mut self, event: GalleryEvent) {
        match event {
            GalleryEvent::ImageSettled { index, outcome } => self.on_image_settled(index, outcome),
            GalleryEvent::Visibility(true) => self.on_visibility_enter(),
            GalleryEvent::Visibility(false) => self.on_visibility_exit(),
            GalleryEvent::Resize => self.on_resize(),
            GalleryEvent::HoverStart(id) => self.on_hover(&id),
            GalleryEvent::HoverEnd(id) => self.on_hover_end(&id),
            GalleryEvent::Timer(token) => self.on_timer(token),
        }
    }

    // ------------------------------------------------------------------
    // Preloading
    // ------------------------------------------------------------------

    /// Ask the host to load every image
    ///
    /// The gallery becomes ready once all of them have loaded or failed.
    pub fn preload_images(&mut self) {
        if self.preload.is_complete() {
            self.on_images_ready();
            return;
        }
        for (index, src) in self.preload.sources().iter().enumerate() {
            self.surface.load_image(index, src);
        }
    }

    pub fn on_image_settled(&mut self, index: usize, outcome: ImageOutcome) {
        if outcome == ImageOutcome::Failed {
            let src = self.preload.source(index).unwrap_or_default().to_string();
            log::warn!("{}; treating it as loaded", GalleryError::ResourceLoadFailure(src));
        }
        if self.preload.settle(index, outcome) {
            self.on_images_ready();
        }
    }

    fn on_images_ready(&mut self) {
        if self.flags.images_ready() {
            return;
        }
        log::debug!(
            "All {} image(s) settled ({} failed)",
            self.preload.sources().len(),
            self.preload.failures()
        );
        self.flags.mark_images_ready();
        self.update_layout();
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Recompute columns and grid, re-render and animate for the current phase
    ///
    /// No-op until images are ready. If no width source is usable the pass
    /// is retried after `layout_retry_ms`.
    pub fn update_layout(&mut self) {
        if !self.flags.images_ready() {
            log::debug!("Layout skipped: images not ready");
            return;
        }

        let viewport = self.surface.viewport_size();
        let resolved = match resolve_container_width(
            self.surface.container_width(),
            self.surface.parent_width(),
            viewport.width,
        ) {
            Ok(resolved) => resolved,
            Err(e) => {
                log::debug!("{}; retrying in {} ms", e, self.config.layout_retry_ms);
                let token = self.timers.next(TimerKind::LayoutRetry);
                self.scheduler.schedule(self.config.layout_retry_ms, token);
                return;
            }
        };

        let columns = columns_for_width(viewport.width);
        let previous = std::mem::replace(
            &mut self.grid,
            compute_grid(&self.items, columns, resolved.width),
        );
        self.layout_passes += 1;
        log::debug!(
            "Layout pass {}: {} column(s), width {} ({:?}), height {}",
            self.layout_passes,
            columns,
            resolved.width,
            resolved.source,
            self.grid.max_height
        );

        if self.grid.max_height > 0.0 {
            self.surface.set_container_height(self.grid.max_height);
        }
        if self.grid.is_empty() {
            return;
        }

        self.render();
        self.animate(&previous);
    }

    /// Rebuild every item node from the current grid
    fn render(&mut self) {
        self.release_nodes();
        self.surface.clear();

        let options = RenderOptions {
            color_overlay: self.config.color_shift_on_hover,
        };
        let mut nodes = Vec::with_capacity(self.grid.len());
        for (index, placed) in self.grid.items.iter().enumerate() {
            match self.surface.mount_item(index, placed, &options) {
                Ok(item_nodes) => nodes.push(Some(item_nodes)),
                Err(e) => {
                    log::debug!("Skipping item {}: {}", placed.id(), e);
                    nodes.push(None);
                }
            }
        }
        self.hovered = vec![false; nodes.len()];
        self.nodes = nodes;
        self.flags.mark_mounted();
    }

    /// Stop the current nodes' tweens and let the animator drop them
    fn release_nodes(&mut self) {
        for item_nodes in self.nodes.drain(..).flatten() {
            for node in item_nodes.iter() {
                self.animator.release(node);
            }
        }
        self.hovered.clear();
    }

    fn animate(&mut self, previous: &GridState) {
        if !self.flags.has_animated() {
            if self.in_view {
                // Became visible while images were still loading
                self.play_entrance();
            } else {
                self.park_hidden();
                self.phase = GalleryPhase::ReadyHidden;
            }
            return;
        }

        // Already shown: glide from the old placement to the new one
        let motion = Motion::new(self.config.duration, self.config.ease);
        for (placed, item_nodes) in self.grid.items.iter().zip(&self.nodes) {
            let Some(item_nodes) = item_nodes else {
                continue;
            };
            let origin = previous.find(placed.id()).unwrap_or(placed);
            let from = resting_pose(origin, self.config.blur_to_focus);
            self.animator.kill_tweens_of(&item_nodes.wrapper);
            self.animator.set(&item_nodes.wrapper, &from);
            self.animator.to(&item_nodes.wrapper, &layout_pose(placed), &motion);
        }
        self.timers.invalidate(TimerKind::EntranceSettle);
        self.phase = GalleryPhase::Settled;
    }

    /// Set every rendered item to its hidden pose without a transition
    fn park_hidden(&mut self) {
        let viewport = self.surface.viewport_size();
        let container = self.surface.container_rect();
        for (placed, item_nodes) in self.grid.items.iter().zip(&self.nodes) {
            let Some(item_nodes) = item_nodes else {
                continue;
            };
            let direction = resolve_direction(self.config.animate_from, &mut *self.pick_direction);
            let start = start_position(placed, direction, container, viewport);
            self.animator.kill_tweens_of(&item_nodes.wrapper);
            self.animator
                .set(&item_nodes.wrapper, &hidden_pose(placed, start, self.config.blur_to_focus));
        }
    }

    /// (Re)start the staggered entrance for every item
    fn play_entrance(&mut self) {
        // Last request wins: nothing from an earlier run may survive
        for item_nodes in self.nodes.iter().flatten() {
            self.animator.kill_tweens_of(&item_nodes.wrapper);
        }

        let viewport = self.surface.viewport_size();
        let container = self.surface.container_rect();
        let blur = self.config.blur_to_focus;
        for (index, (placed, item_nodes)) in self.grid.items.iter().zip(&self.nodes).enumerate() {
            let Some(item_nodes) = item_nodes else {
                continue;
            };
            let direction = resolve_direction(self.config.animate_from, &mut *self.pick_direction);
            let start = start_position(placed, direction, container, viewport);
            let motion = Motion::new(self.config.entrance_duration, self.config.ease)
                .delayed(index as f64 * self.config.stagger);

            self.animator.set(&item_nodes.wrapper, &hidden_pose(placed, start, blur));
            self.animator.to(&item_nodes.wrapper, &resting_pose(placed, blur), &motion);
        }

        self.flags.mark_mounted();
        self.flags.mark_animated();
        self.phase = GalleryPhase::Entering;

        let token = self.timers.next(TimerKind::EntranceSettle);
        self.scheduler
            .schedule(self.config.entrance_total_ms(self.grid.len()), token);
        log::debug!("Entrance started for {} item(s)", self.grid.len());
    }

    // ------------------------------------------------------------------
    // Visibility
    // ------------------------------------------------------------------

    /// The container entered the viewport
    ///
    /// Before images are ready this only remembers visibility; the entrance
    /// then plays right after the first layout pass.
    pub fn on_visibility_enter(&mut self) {
        self.in_view = true;
        if !self.flags.images_ready() || self.grid.is_empty() {
            log::debug!("Entrance deferred until the first layout");
            return;
        }
        self.play_entrance();
    }

    /// The container left the viewport: snap back to hidden, arm a replay
    pub fn on_visibility_exit(&mut self) {
        self.in_view = false;
        if self.grid.is_empty() {
            return;
        }
        self.park_hidden();
        self.flags.reset_animation();
        self.timers.invalidate(TimerKind::EntranceSettle);
        self.phase = GalleryPhase::ReadyHidden;
    }

    // ------------------------------------------------------------------
    // Resize & timers
    // ------------------------------------------------------------------

    /// Debounced relayout
    pub fn on_resize(&mut self) {
        let token = self.timers.next(TimerKind::ResizeDebounce);
        self.scheduler.schedule(self.config.resize_debounce_ms, token);
    }

    pub fn on_timer(&mut self, token: TimerToken) {
        if !self.timers.is_current(token) {
            log::trace!("Ignoring stale timer {:?}", token);
            return;
        }
        match token.kind {
            TimerKind::ResizeDebounce | TimerKind::LayoutRetry => self.update_layout(),
            TimerKind::EntranceSettle => {
                if self.phase == GalleryPhase::Entering {
                    self.phase = GalleryPhase::Settled;
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Hover
    // ------------------------------------------------------------------

    pub fn on_hover(&mut self, id: &str) {
        if let Some(index) = self.rendered_index(id) {
            if let Some(Some(item_nodes)) = self.nodes.get(index) {
                hover_in(&mut self.animator, item_nodes, &self.config);
                self.hovered[index] = true;
            }
        }
    }

    pub fn on_hover_end(&mut self, id: &str) {
        if let Some(index) = self.rendered_index(id) {
            if let Some(Some(item_nodes)) = self.nodes.get(index) {
                hover_out(&mut self.animator, item_nodes, &self.config);
                self.hovered[index] = false;
            }
        }
    }

    fn rendered_index(&self, id: &str) -> Option<usize> {
        let index = self.grid.position_of(id);
        if index.is_none() {
            log::debug!("Hover on unknown item {}", id);
        }
        index
    }

    /// Current placement of an item
    pub fn placement(&self, id: &str) -> Option<&PlacedItem> {
        self.grid.find(id)
    }

    /// Stop everything and remove the rendered nodes
    pub fn teardown(&mut self) {
        self.release_nodes();
        self.surface.clear();
        for kind in [TimerKind::ResizeDebounce, TimerKind::LayoutRetry, TimerKind::EntranceSettle] {
            self.timers.invalidate(kind);
        }
        self.grid = GridState::default();
        self.flags.reset_animation();
        self.phase = GalleryPhase::Loading;
        log::debug!("Masonry gallery torn down");
    }
}

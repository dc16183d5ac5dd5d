//! View session: keeps the graph view and the panel view in sync.
//!
//! The session owns the only mutable view state (filter and selection).
//! Every event recomputes the whole view from the snapshot it is given and
//! hands the result to registered listeners.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use sk_config::{LayoutSettings, SkConfig};
use sk_core::enums::EntityKind;
use sk_core::identity::{EntityId, EntityRef};
use sk_core::snapshot::Snapshot;

use crate::builder::{TopologyGraph, build_resolved};
use crate::filter::TopologyFilter;
use crate::highlight::highlight;
use crate::layout::{Point, layered_positions};
use crate::placement::{GridSpec, PlacedDevice, place_panel};

/// Input events from either view or from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    Select(EntityRef),
    ClearSelection,
    SetOnlyUncertain(bool),
    /// Entities changed; rebuild from the new snapshot.
    DataChanged,
}

/// Everything both views need after one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewUpdate {
    pub selection: Option<EntityRef>,
    pub filter: TopologyFilter,
    /// Set when the device scope restricts the graph.
    pub allowed_mcb_ids: Option<BTreeSet<EntityId>>,
    pub graph: TopologyGraph,
    pub positions: BTreeMap<String, Point>,
    pub graph_highlight: BTreeSet<String>,
    /// Panel shown in the spatial view, if any.
    pub panel_id: Option<EntityId>,
    pub panel: Vec<PlacedDevice>,
    pub panel_highlight: BTreeSet<String>,
}

type Listener = Box<dyn FnMut(&ViewUpdate)>;

pub struct TopologySession {
    filter: TopologyFilter,
    selection: Option<EntityRef>,
    layout: LayoutSettings,
    grid: GridSpec,
    listeners: Vec<Listener>,
}

impl Default for TopologySession {
    fn default() -> Self {
        Self::new(LayoutSettings::default(), GridSpec::default())
    }
}

impl std::fmt::Debug for TopologySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TopologySession")
            .field("filter", &self.filter)
            .field("selection", &self.selection)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl TopologySession {
    #[must_use]
    pub const fn new(layout: LayoutSettings, grid: GridSpec) -> Self {
        Self {
            filter: TopologyFilter::new(false, None),
            selection: None,
            layout,
            grid,
            listeners: Vec::new(),
        }
    }

    /// Session using the configured gaps, cell size and initial filter.
    #[must_use]
    pub fn from_config(config: &SkConfig) -> Self {
        let mut session = Self::new(config.layout, GridSpec::from(&config.panel));
        session.filter.only_uncertain = config.general.only_uncertain;
        session
    }

    #[must_use]
    pub const fn filter(&self) -> TopologyFilter {
        self.filter
    }

    #[must_use]
    pub const fn selection(&self) -> Option<EntityRef> {
        self.selection
    }

    /// Register a callback invoked with every recomputed view.
    pub fn subscribe(&mut self, listener: impl FnMut(&ViewUpdate) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Select an entity from either view.
    ///
    /// A device selection becomes the graph's device scope; any other kind
    /// clears it.
    pub fn on_select(&mut self, snapshot: &Snapshot, entity: EntityRef) -> ViewUpdate {
        self.selection = Some(entity);
        self.filter.scope_device_id = match entity.kind {
            EntityKind::Device => Some(entity.id),
            EntityKind::Circuit | EntityKind::Room | EntityKind::Endpoint => None,
        };
        self.rebuild(snapshot)
    }

    pub fn clear_selection(&mut self, snapshot: &Snapshot) -> ViewUpdate {
        self.selection = None;
        self.filter.scope_device_id = None;
        self.rebuild(snapshot)
    }

    pub fn set_only_uncertain(&mut self, snapshot: &Snapshot, only_uncertain: bool) -> ViewUpdate {
        self.filter.only_uncertain = only_uncertain;
        self.rebuild(snapshot)
    }

    pub fn handle(&mut self, snapshot: &Snapshot, event: ViewEvent) -> ViewUpdate {
        tracing::debug!(?event, "view event");
        match event {
            ViewEvent::Select(entity) => self.on_select(snapshot, entity),
            ViewEvent::ClearSelection => self.clear_selection(snapshot),
            ViewEvent::SetOnlyUncertain(on) => self.set_only_uncertain(snapshot, on),
            ViewEvent::DataChanged => self.rebuild(snapshot),
        }
    }

    /// Recompute both views from `snapshot` and notify listeners.
    pub fn rebuild(&mut self, snapshot: &Snapshot) -> ViewUpdate {
        let update = self.compute(snapshot);
        for listener in &mut self.listeners {
            listener(&update);
        }
        update
    }

    fn compute(&self, snapshot: &Snapshot) -> ViewUpdate {
        let resolved = self.filter.resolve(snapshot);
        let graph = build_resolved(snapshot, &resolved);
        let positions = layered_positions(&graph.nodes, &self.layout);
        let graph_highlight = highlight(snapshot, self.selection, &graph.keys());

        let panel_id = snapshot.first_panel().map(|p| p.id);
        let panel = panel_id.map_or_else(Vec::new, |id| place_panel(snapshot, id, &self.grid));
        let panel_keys: BTreeSet<String> = panel.iter().map(|p| p.key.clone()).collect();
        let panel_highlight = highlight(snapshot, self.selection, &panel_keys);

        ViewUpdate {
            selection: self.selection,
            filter: self.filter,
            allowed_mcb_ids: resolved.allowed_mcb_ids,
            graph,
            positions,
            graph_highlight,
            panel_id,
            panel,
            panel_highlight,
        }
    }
}

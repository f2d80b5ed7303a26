//! Drop surfaces: resolving where a drop actually landed.
//!
//! A pointer rarely releases exactly over a slot cell: it usually hits
//! a job card inside the cell, or the card's title text. Resolution walks
//! up the containment hierarchy until it meets a node that is a drop
//! target. Any presentation toolkit can take part by implementing
//! [`DropSurface`]; [`BoardLayout`] is the tree matching a rendered
//! [`BoardView`].

use std::collections::HashMap;

use craftgrid_state::JobId;

use crate::engine::DropTarget;
use crate::planner::BoardView;
use crate::slot::SlotKey;

/// A containment hierarchy with some nodes acting as drop targets.
///
/// Parent chains must end at a root.
pub trait DropSurface {
    type Node: Copy;

    /// The drop target this node stands for, if it is one.
    fn target(&self, node: Self::Node) -> Option<DropTarget>;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;
}

/// Find the nearest drop target at or above `node`.
pub fn resolve_target<S: DropSurface + ?Sized>(surface: &S, node: S::Node) -> Option<DropTarget> {
    let mut current = Some(node);
    while let Some(n) = current {
        if let Some(target) = surface.target(n) {
            return Some(target);
        }
        current = surface.parent(n);
    }
    None
}

/// Handle to a node of a [`BoardLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// What a layout node is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Board,
    Pool,
    /// The pool's "no open orders" placeholder.
    PoolMessage,
    Calendar,
    /// Row header showing the hour.
    TimeLabel(SlotKey),
    Cell(SlotKey),
    Card(JobId),
    /// Title/customer text inside a card.
    CardText(JobId),
}

#[derive(Debug, Clone)]
struct LayoutNode {
    kind: NodeKind,
    parent: Option<NodeId>,
}

/// Containment tree of a rendered board.
#[derive(Debug, Clone)]
pub struct BoardLayout {
    nodes: Vec<LayoutNode>,
    cells: HashMap<SlotKey, NodeId>,
    cards: HashMap<JobId, NodeId>,
}

impl BoardLayout {
    /// Lay out a board: the pool and the calendar under one root, cells
    /// under the calendar, cards under their cell or the pool, and each
    /// card's text under its card.
    pub fn from_board(board: &BoardView) -> Self {
        let mut layout = Self {
            nodes: Vec::new(),
            cells: HashMap::new(),
            cards: HashMap::new(),
        };
        let root = layout.push(NodeKind::Board, None);

        let pool = layout.push(NodeKind::Pool, Some(root));
        if board.pool.is_empty() {
            layout.push(NodeKind::PoolMessage, Some(pool));
        }
        for card in board.pool.jobs() {
            layout.push_card(&card.id, pool);
        }

        let calendar = layout.push(NodeKind::Calendar, Some(root));
        for row in &board.grid.rows {
            if let Some(first) = row.cells.first() {
                layout.push(NodeKind::TimeLabel(first.slot), Some(calendar));
            }
            for cell in &row.cells {
                let node = layout.push(NodeKind::Cell(cell.slot), Some(calendar));
                layout.cells.insert(cell.slot, node);
                for card in &cell.jobs {
                    layout.push_card(&card.id, node);
                }
            }
        }
        layout
    }

    fn push(&mut self, kind: NodeKind, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(LayoutNode { kind, parent });
        id
    }

    fn push_card(&mut self, job_id: &JobId, parent: NodeId) {
        let card = self.push(NodeKind::Card(job_id.clone()), Some(parent));
        self.push(NodeKind::CardText(job_id.clone()), Some(card));
        self.cards.insert(job_id.clone(), card);
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn pool(&self) -> NodeId {
        NodeId(1)
    }

    pub fn cell(&self, slot: &SlotKey) -> Option<NodeId> {
        self.cells.get(slot).copied()
    }

    pub fn card(&self, job_id: &str) -> Option<NodeId> {
        self.cards.get(job_id).copied()
    }

    /// The text node inside a job's card.
    pub fn card_text(&self, job_id: &str) -> Option<NodeId> {
        let card = self.card(job_id)?;
        self.nodes
            .iter()
            .position(|n| n.parent == Some(card) && matches!(n.kind, NodeKind::CardText(_)))
            .map(NodeId)
    }

    pub fn time_label(&self, hour: u32) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| matches!(n.kind, NodeKind::TimeLabel(slot) if slot.hour() == hour))
            .map(NodeId)
    }

    pub fn kind(&self, node: NodeId) -> Option<&NodeKind> {
        self.nodes.get(node.0).map(|n| &n.kind)
    }
}

impl DropSurface for BoardLayout {
    type Node = NodeId;

    fn target(&self, node: NodeId) -> Option<DropTarget> {
        match self.kind(node)? {
            NodeKind::Pool => Some(DropTarget::Pool),
            NodeKind::Cell(slot) => Some(DropTarget::Slot(*slot)),
            _ => None,
        }
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0)?.parent
    }
}

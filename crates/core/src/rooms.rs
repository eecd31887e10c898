//! Room arena and link graph.
//!
//! Rooms are interned once per point in a [`SlotMap`]; links are [`RoomId`]s into the
//! same arena, so a link and the graph entry for its target are always the same room.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use slotmap::SlotMap;

use crate::blueprint::RoomBlueprint;
use crate::grid::is_neighbour;
use crate::types::{Bounds, GridPoint, RoomId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoomError {
    /// A declared link does not point at a grid neighbour.
    InvalidLink { room: GridPoint, link: GridPoint },
    /// Two blueprints declare the same point.
    DuplicateRoom { point: GridPoint },
    /// A link names a neighbour that is not itself a room.
    UnknownLinkTarget { room: GridPoint, link: GridPoint },
}

impl fmt::Display for RoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLink { room, link } => {
                write!(f, "invalid link: {link} is not connected to {room}")
            }
            Self::DuplicateRoom { point } => write!(f, "room {point} is declared more than once"),
            Self::UnknownLinkTarget { room, link } => {
                write!(f, "room {room} links to {link}, which is not a room")
            }
        }
    }
}

impl Error for RoomError {}

#[derive(Clone, Debug)]
pub struct Room {
    point: GridPoint,
    links: Vec<RoomId>,
}

impl Room {
    pub fn point(&self) -> GridPoint {
        self.point
    }

    pub fn links(&self) -> &[RoomId] {
        &self.links
    }

    pub fn links_to(&self, id: RoomId) -> bool {
        self.links.contains(&id)
    }
}

impl RoomBlueprint {
    /// Checks that every declared link is one grid step away.
    pub fn validate(&self) -> Result<(), RoomError> {
        for &link in &self.links {
            if !is_neighbour(self.point, link) {
                return Err(RoomError::InvalidLink { room: self.point, link });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct RoomGraph {
    rooms: SlotMap<RoomId, Room>,
    by_point: BTreeMap<GridPoint, RoomId>,
}

impl RoomGraph {
    pub fn build(blueprints: &[RoomBlueprint]) -> Result<Self, RoomError> {
        let mut graph = Self::default();

        for blueprint in blueprints {
            blueprint.validate()?;
            if graph.by_point.contains_key(&blueprint.point) {
                return Err(RoomError::DuplicateRoom { point: blueprint.point });
            }
            let id = graph.rooms.insert(Room { point: blueprint.point, links: Vec::new() });
            graph.by_point.insert(blueprint.point, id);
        }

        // Second pass: every room exists, so forward references resolve.
        for blueprint in blueprints {
            let mut links = Vec::with_capacity(blueprint.links.len());
            for &link in &blueprint.links {
                let Some(&target) = graph.by_point.get(&link) else {
                    return Err(RoomError::UnknownLinkTarget { room: blueprint.point, link });
                };
                if !links.contains(&target) {
                    links.push(target);
                }
            }
            let id = graph.by_point[&blueprint.point];
            graph.rooms[id].links = links;
        }

        Ok(graph)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn contains(&self, point: GridPoint) -> bool {
        self.by_point.contains_key(&point)
    }

    pub fn id_of(&self, point: GridPoint) -> Option<RoomId> {
        self.by_point.get(&point).copied()
    }

    pub fn room(&self, point: GridPoint) -> Option<&Room> {
        self.id_of(point).map(|id| &self.rooms[id])
    }

    pub fn room_by_id(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Points the room at `point` links to, in declaration order.
    pub fn links(&self, point: GridPoint) -> Vec<GridPoint> {
        self.room(point)
            .map(|room| room.links.iter().map(|&id| self.rooms[id].point).collect())
            .unwrap_or_default()
    }

    /// True when the room at `from` declares a link to `to`.
    pub fn is_linked(&self, from: GridPoint, to: GridPoint) -> bool {
        match (self.room(from), self.id_of(to)) {
            (Some(room), Some(target)) => room.links_to(target),
            _ => false,
        }
    }

    /// Rooms in point order.
    pub fn iter(&self) -> impl Iterator<Item = &Room> + '_ {
        self.by_point.values().map(|&id| &self.rooms[id])
    }

    pub fn points(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.by_point.keys().copied()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let mut points = self.points();
        let first = points.next()?;
        let mut bounds = Bounds { min_x: first.x, max_x: first.x, min_y: first.y, max_y: first.y };
        for point in points {
            bounds.min_x = bounds.min_x.min(point.x);
            bounds.max_x = bounds.max_x.max(point.x);
            bounds.min_y = bounds.min_y.min(point.y);
            bounds.max_y = bounds.max_y.max(point.y);
        }
        Some(bounds)
    }

    pub fn to_blueprints(&self) -> Vec<RoomBlueprint> {
        self.iter()
            .map(|room| RoomBlueprint { point: room.point, links: self.links(room.point) })
            .collect()
    }

    /// Links whose reverse is not declared. Allowed, but worth a diagnostic.
    pub fn one_way_links(&self) -> Vec<(GridPoint, GridPoint)> {
        let mut one_way = Vec::new();
        for room in self.iter() {
            for target in self.links(room.point) {
                if !self.is_linked(target, room.point) {
                    one_way.push((room.point, target));
                }
            }
        }
        one_way
    }
}

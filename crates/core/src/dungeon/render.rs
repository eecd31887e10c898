//! Text map of the dungeon's bounding rectangle.

use super::*;
use crate::types::Direction;

pub const ROOM_GLYPH: char = 'o';
const HORIZONTAL_LINK: &str = " - ";
const NO_HORIZONTAL_LINK: &str = "   ";
const VERTICAL_LINK: char = '|';

impl Dungeon {
    /// Renders the map. Rows alternate between rooms (with `-` connectors to the right)
    /// and connector rows (with `|` under rooms that link downward).
    pub fn draw(&self) -> String {
        let bounds = self.bounds;
        let mut layout = String::new();

        for y in bounds.min_y..=bounds.max_y {
            for x in bounds.min_x..=bounds.max_x {
                let point = GridPoint::new(x, y);
                layout.push(self.glyph_at(point));
                if self.links_toward(point, Direction::Right) {
                    layout.push_str(HORIZONTAL_LINK);
                } else {
                    layout.push_str(NO_HORIZONTAL_LINK);
                }
            }

            if y < bounds.max_y {
                layout.push('\n');
                for x in bounds.min_x..=bounds.max_x {
                    let point = GridPoint::new(x, y);
                    if self.links_toward(point, Direction::Down) {
                        layout.push(VERTICAL_LINK);
                    } else {
                        layout.push(' ');
                    }
                    if x < bounds.max_x {
                        layout.push_str(NO_HORIZONTAL_LINK);
                    }
                }
                layout.push('\n');
            }
        }

        layout
    }

    fn links_toward(&self, point: GridPoint, direction: Direction) -> bool {
        point.step(direction).is_some_and(|next| self.rooms.is_linked(point, next))
    }

    fn glyph_at(&self, point: GridPoint) -> char {
        if !self.rooms.contains(point) {
            ' '
        } else if self.troll.point == point {
            self.troll.symbol
        } else if self.adventurer.point == point {
            self.adventurer.symbol
        } else if self.treasure.point == point {
            self.treasure.symbol
        } else {
            ROOM_GLYPH
        }
    }
}

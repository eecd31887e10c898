//! Externally directed movement.
//!
//! Legal moves are every neighbouring cell that is a room, whether or not the current
//! room declares a link to it. Random agents follow links; interactive agents do not.

use log::debug;

use super::{Agent, InputClosed, InputProvider};
use crate::rooms::RoomGraph;
use crate::types::{Direction, GridPoint};

/// Moves an interactive agent may pick from its current position, in prompt order.
pub fn legal_moves(agent: &Agent, rooms: &RoomGraph) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| match direction {
            Direction::Nowhere => agent.allow_wait,
            step => agent.point.step(step).is_some_and(|next| rooms.contains(next)),
        })
        .collect()
}

pub(super) fn prompt(
    agent: &Agent,
    rooms: &RoomGraph,
    input: &mut dyn InputProvider,
) -> Result<Option<GridPoint>, InputClosed> {
    let moves = legal_moves(agent, rooms);
    if moves.is_empty() {
        return Ok(None);
    }
    let labels: Vec<&str> = moves.iter().map(|direction| direction.choice_label()).collect();
    let question = format!("Where will {} move \n[{}]? ", agent.name, labels.join(", "));

    loop {
        let answer = input.request(&question, &labels)?;
        let answer = answer.trim();
        if let Some(next) = moves
            .iter()
            .find(|direction| direction.choice_label() == answer)
            .and_then(|&direction| agent.point.step(direction))
        {
            return Ok(Some(next));
        }
        debug!("{} rejected answer {answer:?}", agent.name);
    }
}

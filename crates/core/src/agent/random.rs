//! Uniform random movement along declared links.

use log::trace;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use super::Agent;
use crate::rooms::RoomGraph;
use crate::types::GridPoint;

pub(super) fn choose(agent: &Agent, rooms: &RoomGraph, rng: &mut ChaCha8Rng) -> Option<GridPoint> {
    let mut options = rooms.links(agent.point);
    if options.is_empty() {
        return None;
    }
    if agent.allow_wait {
        options.push(agent.point);
    }
    let pick = (rng.next_u64() % options.len() as u64) as usize;
    trace!("{} picks option {pick} of {}", agent.name, options.len());
    Some(options[pick])
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand_chacha::rand_core::SeedableRng;

    use super::*;
    use crate::agent::{Movement, MovementPolicy, Unattended};
    use crate::test_support::{corridor_rooms, room};

    fn wanderer(point: (i32, i32), allow_wait: bool) -> Agent {
        Agent::new("wanderer", 'W', point.into(), allow_wait, MovementPolicy::Random)
    }

    #[test]
    fn unlinked_agent_never_moves_even_when_waiting_is_disabled() {
        let rooms = RoomGraph::build(&[room((0, 0), &[]), room((1, 0), &[])]).unwrap();
        let mut agent = wanderer((0, 0), false);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let movement = agent.take_turn(&rooms, &mut rng, &mut Unattended).unwrap();
            assert_eq!(movement, Movement::Trapped);
            assert_eq!(agent.point, GridPoint::new(0, 0));
        }
    }

    #[test]
    fn single_link_without_waiting_is_forced() {
        let rooms = RoomGraph::build(&[room((0, 0), &[(1, 0)]), room((1, 0), &[])]).unwrap();
        let agent = wanderer((0, 0), false);
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            assert_eq!(choose(&agent, &rooms, &mut rng), Some(GridPoint::new(1, 0)));
        }
    }

    #[test]
    fn choices_cover_links_and_waiting() {
        let rooms = RoomGraph::build(&corridor_rooms(3)).unwrap();
        let agent = wanderer((1, 0), true);
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let seen: BTreeSet<GridPoint> =
            (0..200).filter_map(|_| choose(&agent, &rooms, &mut rng)).collect();
        let expected: BTreeSet<GridPoint> =
            [(0, 0), (1, 0), (2, 0)].into_iter().map(GridPoint::from).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn random_moves_ignore_unlinked_neighbours() {
        // (0, 0) -> (1, 0) is declared, (0, 0) -> (0, 1) is not.
        let rooms =
            RoomGraph::build(&[room((0, 0), &[(1, 0)]), room((1, 0), &[]), room((0, 1), &[])])
                .unwrap();
        let agent = wanderer((0, 0), true);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            assert_ne!(choose(&agent, &rooms, &mut rng), Some(GridPoint::new(0, 1)));
        }
    }
}

use super::*;
use crate::agent::ScriptedInput;
use crate::test_support::{lone_troll_blueprint, plus_rooms, unreachable_treasure_blueprint};
use crate::types::{AgentRole, GridPoint};

#[derive(Default)]
struct Recorder {
    started: bool,
    turns: Vec<u32>,
    events: Vec<LogEvent>,
    finished: Option<RunReport>,
}

impl RunObserver for Recorder {
    fn on_start(&mut self, _dungeon: &Dungeon) {
        self.started = true;
    }

    fn on_turn(&mut self, turn: u32, _dungeon: &Dungeon) {
        self.turns.push(turn);
    }

    fn on_update(&mut self, _dungeon: &Dungeon, events: &[LogEvent]) {
        self.events.extend_from_slice(events);
    }

    fn on_finish(&mut self, _dungeon: &Dungeon, report: &RunReport) {
        self.finished = Some(*report);
    }
}

fn simulation(blueprint: crate::blueprint::DungeonBlueprint) -> Simulation {
    Simulation::new(blueprint.build(0).unwrap())
}

#[test]
fn forced_single_move_wins_on_the_first_turn() {
    let sim = simulation(lone_troll_blueprint());
    let mut recorder = Recorder::default();

    let report = sim.run_observed(10, 1, &mut Unattended, &mut recorder).unwrap();

    assert_eq!(report.outcome, Outcome::AdventurerWins);
    assert_eq!(report.turns, 1);
    assert!(recorder.started);
    assert_eq!(recorder.turns, vec![1]);
    assert_eq!(
        recorder.events[1],
        LogEvent::Trapped { role: AgentRole::Troll, at: GridPoint::new(2, 0) }
    );
    assert_eq!(recorder.finished, Some(report));
}

#[test]
fn unreachable_treasure_exhausts_the_budget_as_a_stalemate() {
    let sim = simulation(unreachable_treasure_blueprint());
    for seed in 0..10 {
        let report = sim.run_once(37, seed, &mut Unattended).unwrap();
        assert_eq!(report.outcome, Outcome::Ongoing);
        assert_eq!(report.turns, 37);
    }
}

#[test]
fn zero_budget_reports_ongoing_without_moving() {
    let sim = simulation(lone_troll_blueprint());
    let report = sim.run_once(0, 0, &mut Unattended).unwrap();
    assert_eq!(report.outcome, Outcome::Ongoing);
    assert_eq!(report.turns, 0);
}

#[test]
fn terminal_start_stops_before_any_update() {
    let mut blueprint = lone_troll_blueprint();
    blueprint.troll.point = blueprint.adventurer.point;
    let report = simulation(blueprint).run_once(5, 0, &mut Unattended).unwrap();
    assert_eq!(report.outcome, Outcome::TrollWins);
    assert_eq!(report.turns, 0);
}

#[test]
fn runs_never_mutate_the_template_dungeon() {
    let sim = simulation(unreachable_treasure_blueprint());
    let before = sim.dungeon().snapshot_hash();
    sim.run_once(50, 3, &mut Unattended).unwrap();
    sim.run_once(50, 4, &mut Unattended).unwrap();
    assert_eq!(sim.dungeon().snapshot_hash(), before);
    assert_eq!(sim.dungeon().turn(), 0);
}

#[test]
fn observers_receive_events_unless_silent() {
    let sim = simulation(lone_troll_blueprint());
    let mut recorder = Recorder::default();
    sim.run_observed(10, 1, &mut Unattended, &mut recorder).unwrap();
    assert!(!recorder.events.is_empty());

    // Silent opts out of log collection, which is what run_once uses.
    assert!(!Silent.wants_log());
}

#[test]
fn interactive_runs_take_answers_from_the_provider() {
    let mut blueprint = lone_troll_blueprint();
    blueprint.adventurer.policy = "human".to_string();
    let sim = simulation(blueprint);
    let mut input = ScriptedInput::new(["up", "right"]);
    let report = sim.run_once(10, 0, &mut input).unwrap();
    assert_eq!(report.outcome, Outcome::AdventurerWins);
    assert_eq!(input.prompts().len(), 2);
}

#[test]
fn deterministic_win_estimates_certainty() {
    let sim = simulation(lone_troll_blueprint());
    let estimate = sim.estimate_probabilities(500, 10, 9).unwrap();
    assert_eq!(estimate.trials, 500);
    assert_eq!(estimate.tally.adventurer_wins, 500);
    assert_eq!(estimate.probability(Outcome::AdventurerWins), 1.0);
    assert_eq!(estimate.probability(Outcome::TrollWins), 0.0);
    assert_eq!(estimate.probability(Outcome::Ongoing), 0.0);
}

#[test]
fn estimates_are_reproducible_for_a_seed() {
    let blueprint = crate::blueprint::DungeonBlueprint {
        rooms: plus_rooms(),
        treasure: crate::blueprint::TreasureBlueprint {
            point: GridPoint::new(1, 2),
            symbol: "$".to_string(),
        },
        adventurer: crate::test_support::agent("random", (0, 1), "A", "adventurer", true),
        troll: crate::test_support::agent("random", (2, 1), "T", "troll", true),
    };
    let sim = simulation(blueprint);
    let first = sim.estimate_probabilities(2_000, 20, 77).unwrap();
    let second = sim.estimate_probabilities(2_000, 20, 77).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.tally.total(), 2_000);
    let sum: f64 = Outcome::ALL.iter().map(|&outcome| first.probability(outcome)).sum();
    assert!((sum - 1.0).abs() < 1e-9);
    assert!(first.tally.adventurer_wins > 0 && first.tally.troll_wins > 0);
}

#[test]
fn estimation_rejects_zero_trials_and_interactive_agents() {
    let sim = simulation(lone_troll_blueprint());
    assert_eq!(sim.estimate_probabilities(0, 10, 0), Err(SimulationError::NoTrials));

    let mut blueprint = lone_troll_blueprint();
    blueprint.troll.policy = "human".to_string();
    assert_eq!(
        simulation(blueprint).estimate_probabilities(10, 10, 0),
        Err(SimulationError::RequiresInput { agent: "troll".to_string() })
    );
}

#[test]
fn tally_records_and_merges() {
    let mut left = OutcomeTally::default();
    left.record(Outcome::AdventurerWins);
    left.record(Outcome::Ongoing);
    let mut right = OutcomeTally::default();
    right.record(Outcome::TrollWins);
    let merged = left.merge(right);
    assert_eq!(merged.total(), 3);
    for outcome in Outcome::ALL {
        assert_eq!(merged.count(outcome), 1);
    }
}

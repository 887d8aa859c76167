//! Controller behaviour on hand-placed readings.

use marga::CellKind::{BeenBefore, Passage, Wall};
use marga::{
    CellClass, Coordinate, Heading, JunctionMemory, MargaError, Mode, NavigationController,
    NavigatorConfig, RelativeDirection, StepReport,
};

use crate::{PortCommand, ScriptedPort, init_logging};

fn controller() -> NavigationController {
    NavigationController::new(NavigatorConfig::seeded(11))
}

#[test]
fn dead_end_at_start_faces_only_opening() {
    init_logging();
    let mut nav = controller();
    let mut port = ScriptedPort::new(Coordinate::new(0, 0), Heading::North);
    port.sees(Wall, Wall, Wall, Passage);

    let report = nav.on_step(&mut port).unwrap();

    assert_eq!(report.class, CellClass::DeadEnd);
    assert_eq!(port.commands, vec![PortCommand::Face(RelativeDirection::Left)]);
    assert_eq!(report.heading, Heading::West);
    assert_eq!(nav.mode(), Mode::Explore);
}

#[test]
fn corridor_mid_run_keeps_going_ahead() {
    init_logging();
    let mut nav = controller();
    let mut port = ScriptedPort::new(Coordinate::new(0, 0), Heading::East);
    port.sees(Wall, Passage, Wall, Wall);
    nav.on_step(&mut port).unwrap();

    for x in 1..=5 {
        port.place(Coordinate::new(x, 0), Heading::East)
            .sees(Wall, Passage, Wall, BeenBefore);
        let report = nav.on_step(&mut port).unwrap();
        assert_eq!(report.step, x as usize);
        assert_eq!(report.class, CellClass::Corridor);
        assert_eq!(port.last_command(), Some(PortCommand::Face(RelativeDirection::Ahead)));
    }

    assert_eq!(port.commands.len(), 6);
    assert_eq!(nav.mode(), Mode::Explore);
    assert_eq!(nav.step_counter(), 6);
}

/// First run: start dead end at (3, 0), then a first visit to the
/// junction at (3, 4) whose only untrodden exit is EAST.
fn first_visit(nav: &mut NavigationController, port: &mut ScriptedPort) -> StepReport {
    port.place(Coordinate::new(3, 0), Heading::South)
        .sees(Wall, Wall, Passage, Wall);
    nav.on_step(port).unwrap();

    port.place(Coordinate::new(3, 4), Heading::South)
        .sees(BeenBefore, Passage, Wall, BeenBefore);
    let report = nav.on_step(port).unwrap();
    assert_eq!(report.class, CellClass::Junction);
    report
}

#[test]
fn first_junction_visit_takes_the_passage() {
    init_logging();
    let mut nav = controller();
    let mut port = ScriptedPort::new(Coordinate::new(3, 0), Heading::South);
    let report = first_visit(&mut nav, &mut port);

    assert_eq!(port.last_command(), Some(PortCommand::Face(RelativeDirection::Left)));
    assert_eq!(report.heading, Heading::East);

    let record = nav.memory().find(Coordinate::new(3, 4)).unwrap();
    assert!(record.visited);
    assert_eq!(record.arrival_heading, Some(Heading::South));
    assert_eq!(record.exit_heading, Some(Heading::East));
    assert_eq!(nav.mode(), Mode::Explore);
}

#[test]
fn second_run_replays_recorded_exit() {
    init_logging();
    let mut nav = controller();
    let mut port = ScriptedPort::new(Coordinate::new(3, 0), Heading::South);
    first_visit(&mut nav, &mut port);

    nav.on_reset();
    port.set_runs(1);
    port.place(Coordinate::new(3, 0), Heading::South)
        .sees(Wall, Wall, Passage, Wall);
    let report = nav.on_step(&mut port).unwrap();
    assert_eq!(report.mode_before, Mode::Route);

    port.place(Coordinate::new(3, 4), Heading::South)
        .sees(BeenBefore, Passage, Wall, Passage);
    let report = nav.on_step(&mut port).unwrap();

    assert_eq!(port.last_command(), Some(PortCommand::SetHeading(Heading::East)));
    assert_eq!(report.heading, Heading::East);
    assert_eq!(nav.mode(), Mode::Route);
}

#[test]
fn route_without_record_falls_back_to_explore() {
    init_logging();
    let mut nav = controller();
    let mut port = ScriptedPort::new(Coordinate::new(3, 0), Heading::South);
    first_visit(&mut nav, &mut port);

    nav.on_reset();
    port.set_runs(1);
    port.place(Coordinate::new(3, 0), Heading::South)
        .sees(Wall, Wall, Passage, Wall);
    nav.on_step(&mut port).unwrap();
    assert_eq!(nav.mode(), Mode::Route);

    port.place(Coordinate::new(6, 6), Heading::East)
        .sees(Passage, Wall, Passage, BeenBefore);
    let report = nav.on_step(&mut port).unwrap();

    assert_eq!(report.mode_before, Mode::Route);
    assert_eq!(nav.mode(), Mode::Explore);
    assert!(matches!(report.heading, Heading::North | Heading::South));

    let record = nav.memory().find(Coordinate::new(6, 6)).unwrap();
    assert_eq!(record.arrival_heading, Some(Heading::East));
    assert_eq!(record.exit_heading, Some(report.heading));
    assert_eq!(nav.progress().route_fallbacks, 1);
}

#[test]
fn route_exit_that_reverses_falls_back_to_explore() {
    init_logging();
    let mut nav = controller();
    let mut port = ScriptedPort::new(Coordinate::new(3, 0), Heading::South);
    first_visit(&mut nav, &mut port);
    assert_eq!(nav.memory().exit_heading(Coordinate::new(3, 4)), Some(Heading::East));

    nav.on_reset();
    port.set_runs(1);
    port.place(Coordinate::new(3, 0), Heading::South)
        .sees(Wall, Wall, Passage, Wall);
    nav.on_step(&mut port).unwrap();
    assert_eq!(nav.mode(), Mode::Route);

    // Arrive along the remembered exit: replaying it would turn straight back.
    port.place(Coordinate::new(3, 4), Heading::West)
        .sees(BeenBefore, BeenBefore, Passage, Wall);
    let report = nav.on_step(&mut port).unwrap();

    assert_eq!(report.step, 1);
    assert_eq!(report.mode_before, Mode::Route);
    assert_eq!(report.mode_after, Mode::Explore);
    assert_eq!(port.last_command(), Some(PortCommand::Face(RelativeDirection::Left)));
    assert_eq!(report.heading, Heading::South);

    let record = nav.memory().find(Coordinate::new(3, 4)).unwrap();
    assert_eq!(record.exit_heading, Some(Heading::South));
    assert_eq!(record.arrival_heading, Some(Heading::South));
    assert!(record.visited);
    assert_eq!(nav.progress().route_fallbacks, 1);
}

#[test]
fn backtrack_into_unrecorded_junction_adopts_it() {
    init_logging();
    let mut nav = controller();
    let mut port = ScriptedPort::new(Coordinate::new(3, 0), Heading::South);
    first_visit(&mut nav, &mut port);

    port.place(Coordinate::new(5, 4), Heading::East)
        .sees(Wall, Wall, Wall, BeenBefore);
    nav.on_step(&mut port).unwrap();
    assert_eq!(nav.mode(), Mode::Backtrack);

    let unrecorded = Coordinate::new(7, 7);
    assert!(nav.memory().find(unrecorded).is_none());
    let commands_before = port.commands.len();

    port.place(unrecorded, Heading::West)
        .sees(BeenBefore, BeenBefore, BeenBefore, Wall);
    let report = nav.on_step(&mut port).unwrap();

    assert_eq!(report.class, CellClass::Junction);
    assert_eq!(report.mode_before, Mode::Backtrack);
    assert_eq!(report.mode_after, Mode::Explore);
    assert_eq!(port.commands.len(), commands_before + 1);
    assert!(matches!(port.last_command(), Some(PortCommand::Face(_))));
    assert_ne!(report.heading, Heading::West);

    let record = nav.memory().find(unrecorded).unwrap();
    assert!(record.visited);
    assert_eq!(record.arrival_heading, Some(Heading::West));
    assert_eq!(record.exit_heading, Some(report.heading));
}

#[test]
fn every_step_issues_exactly_one_command() {
    init_logging();
    let mut nav = controller();
    let mut port = ScriptedPort::new(Coordinate::new(3, 0), Heading::South);
    first_visit(&mut nav, &mut port);
    assert_eq!(port.commands.len(), 2);

    // Dead end mid-run: turn round and start backtracking.
    port.place(Coordinate::new(5, 4), Heading::East)
        .sees(Wall, Wall, Wall, BeenBefore);
    nav.on_step(&mut port).unwrap();
    assert_eq!(port.commands.len(), 3);
    assert_eq!(port.last_command(), Some(PortCommand::Face(RelativeDirection::Behind)));
    assert_eq!(nav.mode(), Mode::Backtrack);
}

#[test]
fn sealed_start_is_fatal_and_silent() {
    init_logging();
    let mut nav = controller();
    let mut port = ScriptedPort::new(Coordinate::new(0, 0), Heading::North);

    let err = nav.on_step(&mut port).unwrap_err();

    assert!(matches!(err, MargaError::NoCandidateExits { .. }));
    assert!(err.is_fatal());
    assert!(port.commands.is_empty());
    assert_eq!(nav.step_counter(), 0);
}

#[test]
fn record_or_get_keeps_first_arrival() {
    let mut memory = JunctionMemory::new();
    let at = Coordinate::new(2, 2);

    let first = memory.record_or_get(at, Some(Heading::North));
    let second = memory.record_or_get(at, Some(Heading::West));

    assert_eq!(first, second);
    assert_eq!(memory.arrival_heading(at), Some(Heading::North));
    assert_eq!(memory.len(), 1);
}

#[test]
fn opposite_is_an_involution() {
    for heading in Heading::ALL {
        assert_eq!(heading.opposite().opposite(), heading);
        assert_ne!(heading.opposite(), heading);
    }
    assert_eq!(Heading::North.opposite(), Heading::South);
    assert_eq!(Heading::East.opposite(), Heading::West);
}

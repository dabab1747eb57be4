use maze_agent::{Agent, DecisionSource, Direction, LayerRole, Maze, Position, ThreatId};

fn maze(text: &str) -> Maze {
    text.parse().expect("test maze should parse")
}

#[test]
fn agent_clears_a_corridor() {
    let mut maze = maze("#########\n#@ . . o#\n#########");
    let agent = Agent::new();

    for _ in 0..20 {
        if maze.is_cleared() {
            break;
        }
        let report = maze.step(agent.decide_move(&maze, None));
        assert!(report.moved, "agent stalled at {:?}", maze.agent());
    }

    assert!(maze.is_cleared());
    assert_eq!(maze.agent(), Position::new(7, 1));

    let decision = agent.decide(&maze, None);
    assert_eq!(decision.direction, Direction::Neutral);
    assert_eq!(decision.source, DecisionSource::Fallback);
}

#[test]
fn agent_backs_away_from_a_nearby_ghost() {
    let maze = maze("#######\n#. @ S#\n#######");

    let decision = Agent::new().decide(&maze, None);
    assert_eq!(decision.direction, Direction::Left);
    assert_eq!(decision.source, DecisionSource::Layer(LayerRole::Evade));
}

#[test]
fn agent_ignores_a_ghost_sealed_in_its_lair() {
    let maze = maze("#######\n#. @ ##\n######S");

    let decision = Agent::new().decide(&maze, None);
    assert_eq!(decision.source, DecisionSource::Layer(LayerRole::Gather));
    assert_eq!(decision.direction, Direction::Left);
}

#[test]
fn agent_chases_and_eats_a_vulnerable_ghost() {
    let mut maze = maze("#########\n#@     b#\n#########");
    let agent = Agent::new();

    let mut eaten = None;
    for _ in 0..10 {
        let report = maze.step(agent.decide_move(&maze, None));
        if report.ate_ghost.is_some() {
            eaten = report.ate_ghost;
            break;
        }
    }

    assert_eq!(eaten, Some(ThreatId::Blinky));
    assert!(maze.ghosts().is_empty());
}

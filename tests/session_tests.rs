use std::io::Cursor;

use boxes::{Command, GameConfig, GameEngine, Outcome, PlayerId, Session};

const TIE_GAME: &str = "\
1 0 h
1 1 h
0 1 v
1 1 v
0 0 v
2 0 h
1 2 v
1 0 h
0 0 h
2 1 h
0 1 h
1 0 v
0 2 v
";

fn run(engine: GameEngine, input: &str) -> (Outcome, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = {
        let mut session = Session::new(engine, Cursor::new(input.as_bytes()), &mut out, &mut err);
        session.run().unwrap()
    };
    (
        outcome,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn fresh() -> GameEngine {
    GameEngine::new(&GameConfig::new(2, 2, 2).unwrap()).unwrap()
}

#[test]
fn test_parse_commands() {
    assert_eq!(
        Command::parse("1 2 h\n"),
        Some(Command::Draw {
            row: 1,
            col: 2,
            token: 'h'
        })
    );
    assert_eq!(
        Command::parse("  -1   +3 v trailing\n"),
        Some(Command::Draw {
            row: -1,
            col: 3,
            token: 'v'
        })
    );
    assert_eq!(
        Command::parse("0 0x"),
        Some(Command::Draw {
            row: 0,
            col: 0,
            token: 'x'
        })
    );
    assert_eq!(
        Command::parse("w saves/game one.txt\n"),
        Some(Command::Save("saves/game one.txt".to_string()))
    );
    assert_eq!(Command::parse("1 2\n"), None);
    assert_eq!(Command::parse("h 1 2\n"), None);
    assert_eq!(Command::parse("w\n"), None);
    assert_eq!(Command::parse("\n"), None);
}

#[test]
fn test_end_of_input() {
    let (outcome, out, _) = run(fresh(), "0 0 h\n");
    assert_eq!(outcome, Outcome::InputExhausted);
    let expected_first = "+ + +\n     \n+ + +\n     \n+ + +\nA> ";
    assert!(out.starts_with(expected_first), "{out:?}");
    assert!(out.ends_with("+-+ +\n     \n+ + +\n     \n+ + +\nB> "), "{out:?}");
}

#[test]
fn test_invalid_lines_do_not_redraw() {
    let (outcome, out, _) = run(fresh(), "hello\n9 9 h\n0 0 q\n\n");
    assert_eq!(outcome, Outcome::InputExhausted);
    // one initial grid, then five prompts for A and no redraws
    assert_eq!(out.matches("+ + +").count(), 3);
    assert_eq!(out.matches("A> ").count(), 5);
}

#[test]
fn test_overlong_line_is_ignored() {
    let long = format!("0 0 h{}\n", " ".repeat(boxes::MAX_LINE_LEN));
    let (outcome, out, _) = run(fresh(), &long);
    assert_eq!(outcome, Outcome::InputExhausted);
    assert!(!out.contains('-'));
}

#[test]
fn test_move_after_very_long_line_is_applied() {
    let input = format!(
        "0 0 h{}\n0 1 v\n",
        "x".repeat(5 * boxes::MAX_LINE_LEN)
    );
    let (outcome, out, _) = run(fresh(), &input);
    assert_eq!(outcome, Outcome::InputExhausted);
    assert!(!out.contains('-'), "{out:?}");
    assert!(out.contains("\n  |  \n"), "{out:?}");
    assert_eq!(out.matches("A> ").count(), 2);
    assert!(out.ends_with("B> "));
}

#[test]
fn test_tied_game_transcript() {
    let (outcome, out, _) = run(fresh(), TIE_GAME);
    let a = PlayerId::FIRST;
    let b = PlayerId::from_index(1).unwrap();
    assert_eq!(
        outcome,
        Outcome::Finished {
            winners: vec![a, b]
        }
    );
    assert!(out.ends_with("+-+-+\n|A|B|\n+-+-+\n|B|A|\n+-+-+\nWinner(s): A, B\n"), "{out:?}");
}

#[test]
fn test_input_after_finish_is_not_read() {
    let input = format!("{TIE_GAME}0 0 h\n");
    let (outcome, out, _) = run(fresh(), &input);
    assert!(matches!(outcome, Outcome::Finished { .. }));
    assert_eq!(out.matches("> ").count(), 13);
}

#[test]
fn test_save_command() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("saved.txt");
    let input = format!("0 0 h\nw {}\n", path.display());
    let (outcome, _, err) = run(fresh(), &input);
    assert_eq!(outcome, Outcome::InputExhausted);
    assert_eq!(err, "Save complete\n");
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "2\n10\n000\n00\n000\n00\n0,0\n0,0\n"
    );
}

#[test]
fn test_failed_save_continues() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("saved.txt");
    let input = format!("w {}\n0 0 h\n", path.display());
    let (outcome, out, err) = run(fresh(), &input);
    assert_eq!(outcome, Outcome::InputExhausted);
    assert_eq!(err, "Can not open file for write\n");
    assert!(out.contains("+-+ +"));
}

#[test]
fn test_loaded_finished_game_ends_immediately() {
    let mut engine = fresh();
    for line in TIE_GAME.lines() {
        if let Some(Command::Draw { row, col, token }) = Command::parse(line) {
            engine.play(row, col, token);
        }
    }
    let restored = GameEngine::from_state(engine.state()).unwrap();
    let (outcome, out, _) = run(restored, "");
    assert!(matches!(outcome, Outcome::Finished { .. }));
    assert!(!out.contains("> "));
    assert!(out.ends_with("Winner(s): A, B\n"));
}

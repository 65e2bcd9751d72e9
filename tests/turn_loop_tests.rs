//! End-to-end turn loop tests against a scripted judge

use std::io::Cursor;

use codevs_client::adapter::{
    read_turn, ClientOptions, ProtocolError, RandomPolicy, TokenReader, TurnLoop,
};
use codevs_client::types::GameConfig;

/// Judge input: `max_turn` packs then the given turns
struct Script {
    config: GameConfig,
    text: String,
}

impl Script {
    fn new(config: GameConfig) -> Self {
        let mut text = String::new();
        for i in 0..config.max_turn {
            let a = i % 9 + 1;
            text.push_str(&format!("{} 0\n{} {}\nEND\n", a, a, 10 - a));
        }
        Self { config, text }
    }

    fn side(&mut self, obstacle_count: u32, score: u32) {
        self.text
            .push_str(&format!("180000 {} 0 {}\n", obstacle_count, score));
        for _ in 0..self.config.height {
            let row = vec!["0"; self.config.width].join(" ");
            self.text.push_str(&row);
            self.text.push('\n');
        }
        self.text.push_str("END\n");
    }

    fn turn(mut self, turn: usize) -> Self {
        self.text.push_str(&format!("{}\n", turn));
        self.side(0, turn as u32);
        self.side(self.config.width as u32, 0);
        self
    }
}

fn small_config() -> GameConfig {
    GameConfig {
        max_turn: 5,
        ..GameConfig::default()
    }
}

fn play(script: Script, seed: u32) -> (Result<usize, ProtocolError>, String, String) {
    let mut driver = TurnLoop::new(
        script.config,
        RandomPolicy::with_seed(seed),
        ClientOptions {
            name: "sample".to_string(),
            diagnostics: true,
        },
    );
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let result = driver
        .run(Cursor::new(script.text), &mut out, &mut diag)
        .map(|s| s.turns_played);
    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(diag).unwrap(),
    )
}

#[test]
fn test_plays_every_turn_until_eof() {
    let config = small_config();
    let script = Script::new(config).turn(0).turn(1).turn(2);
    let (result, out, diag) = play(script, 123456);

    assert_eq!(result.unwrap(), 3);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "sample");
    assert_eq!(lines.len(), 4);
    for line in &lines[1..] {
        let parts: Vec<usize> = line
            .split_whitespace()
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(parts.len(), 2);
        assert!(parts[0] <= config.max_column());
        assert!(parts[1] < 4);
    }
    assert!(diag.contains("turn: 2"));
}

#[test]
fn test_same_seed_replays_identically() {
    let config = small_config();
    let (_, a, _) = play(Script::new(config).turn(0).turn(3), 77);
    let (_, b, _) = play(Script::new(config).turn(0).turn(3), 77);
    assert_eq!(a, b);
}

#[test]
fn test_name_is_sent_before_reading() {
    let (result, out, _) = play(
        Script {
            config: small_config(),
            text: String::new(),
        },
        1,
    );
    assert!(matches!(result, Err(ProtocolError::UnexpectedEof { .. })));
    assert_eq!(out, "sample\n");
}

#[test]
fn test_garbage_token_is_fatal() {
    let mut script = Script::new(small_config()).turn(0);
    script.text.push_str("1\n180000 x 0 0\n");
    let (result, out, _) = play(script, 1);
    assert!(matches!(
        result,
        Err(ProtocolError::InvalidToken { ref token, .. }) if token == "x"
    ));
    // The complete turn before the bad one was still answered.
    assert_eq!(out.lines().count(), 2);
}

#[test]
fn test_missing_end_is_fatal() {
    let config = small_config();
    let mut script = Script::new(config);
    script.text = script.text.replacen("END", "FIN", 1);
    let (result, _, _) = play(script, 1);
    assert!(matches!(
        result,
        Err(ProtocolError::MissingTerminator { ref found }) if found == "FIN"
    ));
}

#[test]
fn test_read_turn_resolves_both_sides() {
    let config = small_config();
    let script = Script::new(config).turn(4);
    let mut sc = TokenReader::new(Cursor::new(script.text));
    codevs_client::adapter::read_packs(&mut sc, &config).unwrap();

    let turn = read_turn(&mut sc, &config).unwrap().unwrap();
    assert_eq!(turn.turn, 4);
    assert_eq!(turn.player.score, 4);
    assert_eq!(turn.player.field.count(config.obstacle_block()), 0);
    // Opponent had `width` pending obstacles: one lands on each column's floor.
    let bottom = config.simulation_height() - 1;
    for x in 0..config.width {
        assert_eq!(turn.enemy.field.get(x, bottom), Some(config.obstacle_block()));
    }
    assert!(read_turn(&mut sc, &config).unwrap().is_none());
}

#[test]
fn test_decide_rotates_announced_pack() {
    let config = small_config();
    let script = Script::new(config).turn(0);
    let mut sc = TokenReader::new(Cursor::new(script.text));
    let packs = codevs_client::adapter::read_packs(&mut sc, &config).unwrap();
    let turn = read_turn(&mut sc, &config).unwrap().unwrap();

    let mut driver = TurnLoop::new(config, RandomPolicy::with_seed(5), ClientOptions::default());
    let outcome = driver.decide(&turn, &packs).unwrap();
    let expected = packs.get(0).unwrap().rotated(outcome.mv.rotation);
    assert_eq!(outcome.rotated, expected);
    assert!(outcome.placement.fits());
    assert_eq!(
        outcome.rotated.rotated(outcome.mv.rotation.inverse()),
        *packs.get(0).unwrap()
    );
}

use rand::Rng;
use serde_json::{json, Value};

use crate::caller_engine::{
    board::Board, engine::CallerEngine, error::Result, models::letter_of, BingoError,
    EngineState, HistoryEntry,
};

/// Caller display text before the first call.
const NUMBER_PLACEHOLDER: &str = "?";

/// Caller display text once the game is over and the last ball has moved on.
const NUMBER_DONE: &str = "DONE!";

/// Build the caller-display block: letter, number text, and colour column.
fn caller_display(current: Option<u8>, state: EngineState, has_called: bool) -> Value {
    match current {
        Some(n) => {
            let letter = letter_of(n);
            json!({
                "letter": letter.as_str(),
                "number": n.to_string(),
                "column": format!("col-{letter}"),
                "has_call": true,
                "game_over": false
            })
        }
        None => {
            let game_over = state == EngineState::Finished && has_called;
            let number = if game_over { NUMBER_DONE } else { NUMBER_PLACEHOLDER };
            json!({
                "letter": "",
                "number": number,
                "column": null,
                "has_call": false,
                "game_over": game_over
            })
        }
    }
}

/// One history chip.
fn history_chip(h: &HistoryEntry) -> Value {
    json!({ "letter": h.letter.as_str(), "number": h.number })
}

/// Board rows with a header letter and 15 cells each.
fn board_rows(board: &Board) -> Value {
    Value::Array(
        board
            .rows
            .iter()
            .map(|row| {
                json!({
                    "header": row.letter.as_str(),
                    "cells": row.cells.iter().map(|c| json!({
                        "number": c.number,
                        "called": c.called,
                        "current": c.current
                    })).collect::<Vec<_>>()
                })
            })
            .collect(),
    )
}

/// Everything a front end needs to draw the caller screen.
pub fn display_state<R: Rng>(engine: &CallerEngine<R>) -> Value {
    let progress = engine.progress();
    let state = engine.state();
    json!({
        "state": state.to_string(),
        "caller": caller_display(engine.current(), state, progress.called_count > 0),
        "called_count": progress.called_count,
        "called_percent": progress.percent,
        "history": engine.history().iter().map(history_chip).collect::<Vec<_>>(),
        "board": board_rows(&engine.board()),
        "call_enabled": state == EngineState::Ready,
        "audio": {
            "available": engine.has_announcer(),
            "enabled": engine.announcements_enabled()
        }
    })
}

/// [`display_state`] as pretty-printed JSON text.
pub fn display_state_json<R: Rng>(engine: &CallerEngine<R>) -> Result<String> {
    serde_json::to_string_pretty(&display_state(engine)).map_err(BingoError::Render)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caller_engine::LogAnnouncer;

    #[test]
    fn fresh_game_shows_placeholder() {
        let engine = CallerEngine::with_seed(1);
        let v = display_state(&engine);
        assert_eq!(v["caller"]["number"], "?");
        assert_eq!(v["caller"]["game_over"], false);
        assert_eq!(v["called_count"], 0);
        assert_eq!(v["call_enabled"], true);
        assert_eq!(v["history"].as_array().unwrap().len(), 0);
        assert_eq!(v["board"].as_array().unwrap().len(), 5);
        assert_eq!(v["audio"]["available"], false);
    }

    #[test]
    fn in_progress_game_shows_current_ball() {
        let mut engine = CallerEngine::with_seed(2).with_announcer(Box::new(LogAnnouncer));
        engine.call().unwrap();
        let r = engine.call().unwrap();
        let v = display_state(&engine);
        assert_eq!(v["caller"]["number"], r.number.to_string());
        assert_eq!(v["caller"]["letter"], r.letter.as_str());
        assert_eq!(v["caller"]["column"], format!("col-{}", r.letter));
        assert_eq!(v["called_count"], 2);
        assert_eq!(v["called_percent"], 3);
        assert_eq!(v["history"].as_array().unwrap().len(), 1);
        assert_eq!(v["audio"]["available"], true);
        assert_eq!(v["audio"]["enabled"], false);
    }

    #[test]
    fn finished_game_shows_done_after_retire() {
        let mut engine = CallerEngine::with_seed(3);
        while engine.call().is_ok() {}

        let v = display_state(&engine);
        assert_eq!(v["state"], "Finished");
        assert_eq!(v["call_enabled"], false);
        assert_ne!(v["caller"]["number"], "DONE!");

        engine.retire_current();
        let v = display_state(&engine);
        assert_eq!(v["caller"]["number"], "DONE!");
        assert_eq!(v["caller"]["game_over"], true);
        assert_eq!(v["called_percent"], 100);
        assert_eq!(v["history"].as_array().unwrap().len(), 75);
    }

    #[test]
    fn json_text_round_trips_to_the_same_state() {
        let mut engine = CallerEngine::with_seed(4);
        engine.call().unwrap();
        let text = display_state_json(&engine).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, display_state(&engine));
        assert!(text.contains('\n'), "expected pretty-printed output");
    }
}

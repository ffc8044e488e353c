//! Textual form of an automaton.
//!
//! The payload is a JSON object `{state: {key: target}}` with string ids,
//! sorted keys and four-space indentation, wrapped as `var dawg = ...;` so a
//! web page can load it with a plain script tag. An accepting state carries
//! the `"$": "0"` entry.

use super::types::{is_letter, Dawg, DawgState, StateId, START_STATE, TERMINAL_KEY};
use crate::error::DawgError;
use serde::Serialize;
use std::collections::BTreeMap;

/// Serializable mapping from state id to its transitions
pub type Mapping = BTreeMap<String, BTreeMap<String, String>>;

/// Assignment prefix of the page payload
pub const JS_PREFIX: &str = "var dawg =";

/// Convert an automaton to its external mapping
pub fn to_mapping(dawg: &Dawg) -> Mapping {
    dawg.states()
        .iter()
        .enumerate()
        .map(|(id, state)| {
            let mut branches = BTreeMap::new();
            if state.accepting {
                branches.insert(TERMINAL_KEY.to_string(), START_STATE.to_string());
            }
            for &(letter, target) in &state.edges {
                branches.insert((letter as char).to_string(), target.to_string());
            }
            (id.to_string(), branches)
        })
        .collect()
}

/// Rebuild an automaton from its external mapping.
///
/// State ids must be exactly `0..N`, every target must name one of them and
/// the graph must be acyclic.
pub fn from_mapping(mapping: &Mapping) -> Result<Dawg, DawgError> {
    let len = mapping.len();
    if !mapping.contains_key("0") {
        return Err(DawgError::Malformed("missing start state \"0\"".to_string()));
    }

    let mut states = vec![DawgState::default(); len];
    for (key, branches) in mapping {
        let id = parse_id(key, len)?;
        let state = &mut states[id as usize];
        for (label, target) in branches {
            let target_id = parse_id(target, len)?;
            if label == TERMINAL_KEY {
                if target_id != START_STATE {
                    return Err(DawgError::Malformed(format!(
                        "state {}: terminal marker must point at \"0\", found {:?}",
                        key, target
                    )));
                }
                state.accepting = true;
                continue;
            }
            match label.as_bytes() {
                &[letter] if is_letter(letter) => state.edges.push((letter, target_id)),
                _ => {
                    return Err(DawgError::Malformed(format!(
                        "state {}: invalid transition label {:?}",
                        key, label
                    )));
                }
            }
        }
        // BTreeMap order already sorts single-letter labels
        debug_assert!(state.edges.windows(2).all(|w| w[0].0 < w[1].0));
    }

    if let Some(id) = find_cycle(&states) {
        return Err(DawgError::Malformed(format!("state {} is on a cycle", id)));
    }

    Ok(Dawg::from_states(states))
}

/// Iterative three-color DFS over every state; returns a state on a cycle
fn find_cycle(states: &[DawgState]) -> Option<StateId> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        New,
        Open,
        Done,
    }

    let mut marks = vec![Mark::New; states.len()];
    // (state, next edge to follow)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for start in 0..states.len() {
        if marks[start] != Mark::New {
            continue;
        }
        marks[start] = Mark::Open;
        stack.push((start, 0));

        while let Some((id, edge)) = stack.last_mut() {
            let Some(&(_, target)) = states[*id].edges.get(*edge) else {
                marks[*id] = Mark::Done;
                stack.pop();
                continue;
            };
            *edge += 1;
            let target = target as usize;
            match marks[target] {
                Mark::Open => return Some(target as StateId),
                Mark::New => {
                    marks[target] = Mark::Open;
                    stack.push((target, 0));
                }
                Mark::Done => {}
            }
        }
    }
    None
}

fn parse_id(text: &str, len: usize) -> Result<StateId, DawgError> {
    let id: StateId = text
        .parse()
        .map_err(|_| DawgError::Malformed(format!("invalid state id {:?}", text)))?;
    if id.to_string() != text || id as usize >= len {
        return Err(DawgError::Malformed(format!(
            "state id {:?} out of range (states: {})",
            text, len
        )));
    }
    Ok(id)
}

/// Pretty JSON with sorted keys and four-space indentation
pub fn to_json(mapping: &Mapping) -> Result<String, DawgError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    mapping.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| DawgError::Malformed(e.to_string()))
}

/// Render the full page payload: `var dawg = {...};\n`
pub fn to_js(dawg: &Dawg) -> Result<String, DawgError> {
    let json = to_json(&to_mapping(dawg))?;
    Ok(format!("{} {};\n", JS_PREFIX, json))
}

/// Parse a payload, with or without the `var dawg =` wrapper
pub fn parse_js(text: &str) -> Result<Mapping, DawgError> {
    let text = text.trim();
    let payload = match text.strip_prefix(JS_PREFIX) {
        Some(rest) => {
            let rest = rest.trim();
            rest.strip_suffix(';').unwrap_or(rest).trim()
        }
        None => text,
    };
    Ok(serde_json::from_str(payload)?)
}

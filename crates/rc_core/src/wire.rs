//! JSON boundary between a transport and the agent core
//!
//! ## Snapshot
//!
//! ```json
//! {"status": "PLAYING", "role": "STRIKER",
//!  "sensors": {"ball": {"dist": 3.2, "angle": -10.0},
//!              "goal": {"dist": 40.0, "angle": 5.0},
//!              "teammates": [{"id": 7, "dist": 12.0, "angle": 30.0}],
//!              "flags": [{"name": "f c", "dist": 20.0, "angle": 45.0}]},
//!  "stamina": 7800.0, "speed": 0.4}
//! ```
//!
//! A present `ball`/`goal` object means visible. Unknown tokens decode to
//! defaults, never to errors; only malformed JSON fails.
//!
//! ## Action
//!
//! ```json
//! {"action": "kick", "params": [100.0, 0.0]}
//! ```

use serde::{Deserialize, Serialize};

use crate::action::{ActionKind, AgentAction};
use crate::error::{CoreError, Result};
use crate::perception::{
    AbsolutePose, GameStatus, LandmarkObservation, PerceptionSnapshot, RelativeObservation, Role,
    TeammateObservation, MAX_FLAGS, MAX_TEAMMATES,
};

/// Ball farther than this at send time turns a kick into a dash
pub const STALE_KICK_RANGE_M: f32 = 0.8;
/// Dash power used in place of a stale kick
pub const STALE_KICK_DASH_POWER: f32 = 80.0;

static STATUS_TOKENS: &[(&str, GameStatus)] = &[
    ("PLAYING", GameStatus::Playing),
    ("play_on", GameStatus::Playing),
    ("BEFORE_KICK_OFF", GameStatus::BeforeKickoff),
    ("before_kick_off", GameStatus::BeforeKickoff),
    ("kick_off_l", GameStatus::BeforeKickoff),
    ("kick_off_r", GameStatus::BeforeKickoff),
    ("FINISHED", GameStatus::Finished),
];

/// Most specific first: `STRIKER_GK_SIM` contains `STRIKER`
static ROLE_TOKENS: &[(&str, Role)] = &[
    ("STRIKER_GK_SIM", Role::StrikerGkVariant),
    ("STRIKER", Role::Striker),
    ("GOALKEEPER", Role::Goalkeeper),
    ("DRIBBLER", Role::Dribbler),
    ("DEFENDER", Role::Defender),
    ("PASSER", Role::Passer),
    ("RECEIVER", Role::Receiver),
];

/// Game phase from a status token; unknown tokens are `Idle`
pub fn decode_status(token: &str) -> GameStatus {
    let token = token.trim();
    STATUS_TOKENS
        .iter()
        .find(|(t, _)| *t == token)
        .map(|(_, status)| *status)
        .unwrap_or(GameStatus::Idle)
}

/// Role from a role token; unknown tokens are `Striker`
pub fn decode_role(token: &str) -> Role {
    ROLE_TOKENS
        .iter()
        .find(|(t, _)| token.contains(t))
        .map(|(_, role)| *role)
        .unwrap_or_default()
}

pub fn status_token(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Idle => "IDLE",
        GameStatus::BeforeKickoff => "BEFORE_KICK_OFF",
        GameStatus::Playing => "PLAYING",
        GameStatus::Finished => "FINISHED",
    }
}

pub fn role_token(role: Role) -> &'static str {
    match role {
        Role::Striker => "STRIKER",
        Role::Dribbler => "DRIBBLER",
        Role::Passer => "PASSER",
        Role::Receiver => "RECEIVER",
        Role::Goalkeeper => "GOALKEEPER",
        Role::Defender => "DEFENDER",
        Role::StrikerGkVariant => "STRIKER_GK_SIM",
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ObservationMessage {
    dist: f32,
    angle: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct TeammateMessage {
    id: u8,
    dist: f32,
    angle: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FlagMessage {
    name: String,
    dist: f32,
    angle: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SensorsMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ball: Option<ObservationMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    goal: Option<ObservationMessage>,
    #[serde(default)]
    teammates: Vec<TeammateMessage>,
    #[serde(default)]
    flags: Vec<FlagMessage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SnapshotMessage {
    #[serde(default)]
    status: String,
    #[serde(default)]
    role: String,
    #[serde(default)]
    sensors: SensorsMessage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stamina: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    speed: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ActionMessage {
    action: ActionKind,
    params: [f32; 2],
}

fn observation(msg: Option<ObservationMessage>) -> RelativeObservation {
    msg.map(|m| RelativeObservation::seen(m.dist, m.angle)).unwrap_or_default()
}

fn observation_message(obs: &RelativeObservation) -> Option<ObservationMessage> {
    obs.visible.then_some(ObservationMessage { dist: obs.distance, angle: obs.bearing })
}

/// Decode one snapshot message.
///
/// The pose is left invalid; localization attaches it.
pub fn decode_snapshot(json: &str) -> Result<PerceptionSnapshot> {
    let msg: SnapshotMessage = serde_json::from_str(json)?;
    let defaults = PerceptionSnapshot::default();

    let teammates = msg
        .sensors
        .teammates
        .iter()
        .take(MAX_TEAMMATES)
        .map(|t| TeammateObservation {
            id: t.id,
            observation: RelativeObservation::seen(t.dist, t.angle),
        })
        .collect();

    let flags = msg
        .sensors
        .flags
        .into_iter()
        .take(MAX_FLAGS)
        .map(|f| LandmarkObservation::seen(f.name, f.dist, f.angle))
        .collect();

    Ok(PerceptionSnapshot {
        game_status: decode_status(&msg.status),
        role: decode_role(&msg.role),
        ball: observation(msg.sensors.ball),
        goal: observation(msg.sensors.goal),
        teammates,
        flags,
        pose: AbsolutePose::invalid(),
        stamina: msg.stamina.unwrap_or(defaults.stamina),
        speed: msg.speed.unwrap_or(defaults.speed),
    })
}

/// Encode a snapshot in the message format `decode_snapshot` reads.
///
/// Hidden teammates and flags are dropped; the pose is not sent.
pub fn encode_snapshot(snapshot: &PerceptionSnapshot) -> Result<String> {
    let msg = SnapshotMessage {
        status: status_token(snapshot.game_status).to_string(),
        role: role_token(snapshot.role).to_string(),
        sensors: SensorsMessage {
            ball: observation_message(&snapshot.ball),
            goal: observation_message(&snapshot.goal),
            teammates: snapshot
                .teammates
                .iter()
                .filter(|t| t.observation.visible)
                .map(|t| TeammateMessage {
                    id: t.id,
                    dist: t.observation.distance,
                    angle: t.observation.bearing,
                })
                .collect(),
            flags: snapshot
                .flags
                .iter()
                .filter(|f| f.observation.visible)
                .map(|f| FlagMessage {
                    name: f.name.clone(),
                    dist: f.observation.distance,
                    angle: f.observation.bearing,
                })
                .collect(),
        },
        stamina: Some(snapshot.stamina),
        speed: Some(snapshot.speed),
    };
    serde_json::to_string(&msg).map_err(|e| CoreError::Encode(e.to_string()))
}

pub fn encode_action(action: &AgentAction) -> Result<String> {
    let msg = ActionMessage { action: action.kind, params: [action.param0, action.param1] };
    serde_json::to_string(&msg).map_err(|e| CoreError::Encode(e.to_string()))
}

pub fn decode_action(json: &str) -> Result<AgentAction> {
    let msg: ActionMessage = serde_json::from_str(json)?;
    Ok(AgentAction { kind: msg.action, param0: msg.params[0], param1: msg.params[1] })
}

/// Downgrade a kick the ball is no longer in range for.
///
/// The decision may have been taken on a snapshot older than the ball
/// observation at send time; kicking air is replaced by a dash at the ball.
pub fn guard_stale_kick(action: AgentAction, ball: &RelativeObservation) -> AgentAction {
    if action.kind != ActionKind::Kick || ball.within(STALE_KICK_RANGE_M) {
        return action;
    }
    let direction = if ball.visible { ball.bearing } else { 0.0 };
    log::debug!("stale kick downgraded to dash ({:.1})", direction);
    AgentAction::dash(STALE_KICK_DASH_POWER, direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tokens() {
        assert_eq!(decode_status("PLAYING"), GameStatus::Playing);
        assert_eq!(decode_status("play_on"), GameStatus::Playing);
        assert_eq!(decode_status("BEFORE_KICK_OFF"), GameStatus::BeforeKickoff);
        assert_eq!(decode_status("before_kick_off"), GameStatus::BeforeKickoff);
        assert_eq!(decode_status("kick_off_l"), GameStatus::BeforeKickoff);
        assert_eq!(decode_status("kick_off_r"), GameStatus::BeforeKickoff);
        assert_eq!(decode_status("FINISHED"), GameStatus::Finished);
        assert_eq!(decode_status("half_time"), GameStatus::Idle);
        assert_eq!(decode_status(""), GameStatus::Idle);
    }

    #[test]
    fn test_role_tokens_most_specific_first() {
        assert_eq!(decode_role("STRIKER_GK_SIM"), Role::StrikerGkVariant);
        assert_eq!(decode_role("STRIKER"), Role::Striker);
        assert_eq!(decode_role("GOALKEEPER"), Role::Goalkeeper);
        assert_eq!(decode_role("DRIBBLER"), Role::Dribbler);
        assert_eq!(decode_role("DEFENDER"), Role::Defender);
        assert_eq!(decode_role("PASSER"), Role::Passer);
        assert_eq!(decode_role("RECEIVER"), Role::Receiver);
        assert_eq!(decode_role("COACH"), Role::Striker);
    }

    #[test]
    fn test_tokens_round_trip_through_decoders() {
        for role in [
            Role::Striker,
            Role::Dribbler,
            Role::Passer,
            Role::Receiver,
            Role::Goalkeeper,
            Role::Defender,
            Role::StrikerGkVariant,
        ] {
            assert_eq!(decode_role(role_token(role)), role);
        }
    }

    #[test]
    fn test_decode_snapshot() {
        let json = r#"{
            "status": "play_on",
            "role": "PASSER",
            "sensors": {
                "ball": {"dist": 0.5, "angle": -3.0},
                "teammates": [{"id": 7, "dist": 12.0, "angle": 30.0}],
                "flags": [{"name": "f c", "dist": 20.0, "angle": 45.0},
                          {"name": "g r", "dist": 40.0, "angle": -5.0}]
            },
            "stamina": 7500.0
        }"#;
        let snapshot = decode_snapshot(json).unwrap();
        assert_eq!(snapshot.game_status, GameStatus::Playing);
        assert_eq!(snapshot.role, Role::Passer);
        assert_eq!(snapshot.ball, RelativeObservation::seen(0.5, -3.0));
        assert!(!snapshot.goal.visible);
        assert_eq!(snapshot.teammates.len(), 1);
        assert_eq!(snapshot.teammates[0].id, 7);
        assert_eq!(snapshot.flags.len(), 2);
        assert_eq!(snapshot.flags[1].name, "g r");
        assert!(!snapshot.pose.valid);
        assert_eq!(snapshot.stamina, 7500.0);
        assert_eq!(snapshot.speed, 0.0);
    }

    #[test]
    fn test_decode_snapshot_truncates_lists() {
        let teammates: Vec<String> = (0..15)
            .map(|i| format!(r#"{{"id": {}, "dist": 5.0, "angle": 0.0}}"#, i))
            .collect();
        let flags: Vec<String> =
            (0..25).map(|_| r#"{"name": "f c", "dist": 5.0, "angle": 0.0}"#.to_string()).collect();
        let json = format!(
            r#"{{"status": "PLAYING", "role": "STRIKER", "sensors": {{"teammates": [{}], "flags": [{}]}}}}"#,
            teammates.join(","),
            flags.join(",")
        );
        let snapshot = decode_snapshot(&json).unwrap();
        assert_eq!(snapshot.teammates.len(), MAX_TEAMMATES);
        assert_eq!(snapshot.flags.len(), MAX_FLAGS);
    }

    #[test]
    fn test_decode_snapshot_tolerates_missing_fields() {
        let snapshot = decode_snapshot(r#"{"sensors": {"ball": null}}"#).unwrap();
        assert_eq!(snapshot.game_status, GameStatus::Idle);
        assert_eq!(snapshot.role, Role::Striker);
        assert!(!snapshot.ball.visible);
    }

    #[test]
    fn test_malformed_snapshot_is_decode_error() {
        assert!(matches!(decode_snapshot("{\"status\": "), Err(CoreError::Decode(_))));
        assert!(matches!(
            decode_snapshot(r#"{"sensors": {"ball": {"dist": "far"}}}"#),
            Err(CoreError::Decode(_))
        ));
    }

    #[test]
    fn test_encode_snapshot_is_readable() {
        let snapshot = PerceptionSnapshot::new(GameStatus::BeforeKickoff, Role::StrikerGkVariant)
            .with_ball(4.0, 12.0)
            .with_flag("f t l 20", 30.0, -40.0);
        let decoded = decode_snapshot(&encode_snapshot(&snapshot).unwrap()).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_encode_action() {
        let json = encode_action(&AgentAction::kick(100.0, -15.5)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["action"], "kick");
        assert_eq!(value["params"][0], 100.0);
        assert_eq!(value["params"][1], -15.5);

        let json = encode_action(&AgentAction::none()).unwrap();
        assert!(json.contains("\"none\""));
        assert_eq!(decode_action(&json).unwrap(), AgentAction::none());
    }

    #[test]
    fn test_decode_move_action() {
        // never decided by the engine, but part of the command vocabulary
        let action = decode_action(r#"{"action": "move", "params": [-10.0, 5.0]}"#).unwrap();
        assert_eq!(action.kind, ActionKind::Move);
        assert_eq!((action.param0, action.param1), (-10.0, 5.0));
        assert_eq!(encode_action(&action).unwrap(), r#"{"action":"move","params":[-10.0,5.0]}"#);
    }

    #[test]
    fn test_decode_unknown_action_fails() {
        assert!(decode_action(r#"{"action": "tackle", "params": [1.0, 2.0]}"#).is_err());
    }

    #[test]
    fn test_stale_kick_guard() {
        let kick = AgentAction::kick(100.0, 10.0);

        let close = RelativeObservation::seen(0.75, 5.0);
        assert_eq!(guard_stale_kick(kick, &close), kick);

        let far = RelativeObservation::seen(1.5, -20.0);
        assert_eq!(guard_stale_kick(kick, &far), AgentAction::dash(80.0, -20.0));

        let unseen = RelativeObservation::default();
        assert_eq!(guard_stale_kick(kick, &unseen), AgentAction::dash(80.0, 0.0));

        let turn = AgentAction::turn(30.0);
        assert_eq!(guard_stale_kick(turn, &unseen), turn);
    }
}

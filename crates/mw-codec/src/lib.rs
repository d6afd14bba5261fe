//! mw-codec
//!
//! Entity codec boundary: entity records in, opaque binary blobs out.
//! The store never touches serialization details, so swapping the wire
//! format is contained to this crate. Current format: canonical JSON bytes.

use mw_schemas::{League, Match, Team};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    /// Decoding an empty buffer is always a caller bug, never a default.
    #[error("cannot decode an empty payload")]
    EmptyPayload,
    #[error("encode failed: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("decode failed: {0}")]
    Decode(#[source] serde_json::Error),
}

pub fn encode_team(team: &Team) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(team).map_err(CodecError::Encode)
}

pub fn decode_team(buf: &[u8]) -> Result<Team, CodecError> {
    non_empty(buf)?;
    serde_json::from_slice(buf).map_err(CodecError::Decode)
}

pub fn encode_match(record: &Match) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(record).map_err(CodecError::Encode)
}

pub fn decode_match(buf: &[u8]) -> Result<Match, CodecError> {
    non_empty(buf)?;
    serde_json::from_slice(buf).map_err(CodecError::Decode)
}

/// Persisted leagues never retain their match list; matches are stored
/// under their own keys.
pub fn encode_league(league: &League) -> Result<Vec<u8>, CodecError> {
    let mut flat = league.clone();
    flat.matches.clear();
    serde_json::to_vec(&flat).map_err(CodecError::Encode)
}

pub fn decode_league(buf: &[u8]) -> Result<League, CodecError> {
    non_empty(buf)?;
    serde_json::from_slice(buf).map_err(CodecError::Decode)
}

fn non_empty(buf: &[u8]) -> Result<(), CodecError> {
    if buf.is_empty() {
        return Err(CodecError::EmptyPayload);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_is_a_decode_error() {
        assert!(matches!(decode_team(b""), Err(CodecError::EmptyPayload)));
        assert!(matches!(decode_match(b""), Err(CodecError::EmptyPayload)));
        assert!(matches!(decode_league(b""), Err(CodecError::EmptyPayload)));
    }

    #[test]
    fn garbage_is_a_decode_error_not_a_panic() {
        let err = decode_match(b"not json").unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }

    #[test]
    fn league_encoding_strips_the_match_list() {
        let league = League {
            id: 47,
            name: "Premier League".to_string(),
            matches: vec![Match {
                id: 1001,
                league_id: 47,
                ..Match::default()
            }],
            ..League::default()
        };

        let buf = encode_league(&league).unwrap();
        let back = decode_league(&buf).unwrap();
        assert!(back.matches.is_empty());
        assert_eq!(back.id, 47);
        assert_eq!(back.name, "Premier League");
    }

    #[test]
    fn match_record_round_trips_with_optional_fields() {
        let mut record = Match::default();
        record.id = 1001;
        record.home = Team::new(1, 2, "Arsenal", "Arsenal FC");
        record.away = Team::new(2, 0, "Chelsea", "Chelsea FC");
        record.eliminated_team_id = Some(2);

        let back = decode_match(&encode_match(&record).unwrap()).unwrap();
        assert_eq!(back, record);
    }
}

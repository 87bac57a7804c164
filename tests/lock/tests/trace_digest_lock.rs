//! Trace digest wire-format lock.
//!
//! Proves:
//! 1. The digest domain is null-terminated and follows `LODESTAR::*::V1\0`
//! 2. The empty-trace digest is pinned (any change to the canonical form or
//!    domain breaks this test)
//! 3. The digest is SHA-256 over domain || canonical JSON, hex-encoded

use lodestar_harness::worlds::romania::{sld, Romania};
use lodestar_search::trace::{DOMAIN_SEARCH_TRACE, TRACE_SCHEMA_VERSION};
use lodestar_search::{graph_search_observed, AStar, HeuristicFn, Priority, TraceRecorder};
use sha2::{Digest, Sha256};

// ---------------------------------------------------------------------------
// 1. Domain shape
// ---------------------------------------------------------------------------

/// ACCEPTANCE: TRACE-DIGEST-LOCK
#[test]
fn domain_is_null_terminated_and_versioned() {
    assert!(DOMAIN_SEARCH_TRACE.ends_with(&[0]));
    let text = std::str::from_utf8(&DOMAIN_SEARCH_TRACE[..DOMAIN_SEARCH_TRACE.len() - 1]).unwrap();
    assert!(text.starts_with("LODESTAR::"), "{text}");
    assert!(text.ends_with("::V1"), "{text}");
    assert_eq!(TRACE_SCHEMA_VERSION, "search_trace.v1");
}

// ---------------------------------------------------------------------------
// 2. Pinned empty digest
// ---------------------------------------------------------------------------

/// ACCEPTANCE: TRACE-DIGEST-LOCK
#[test]
fn empty_trace_digest_is_pinned() {
    let empty = TraceRecorder::new();
    assert_eq!(
        empty.to_canonical_json_bytes().unwrap(),
        br#"{"events":[],"schema_version":"search_trace.v1"}"#.to_vec()
    );
    assert_eq!(
        empty.digest().unwrap(),
        "sha256:9ba7dd201cc5b8cff3cf8b15996588ef5847779ae09240486821f30ded01ec12"
    );
}

// ---------------------------------------------------------------------------
// 3. Recomputation from bytes
// ---------------------------------------------------------------------------

/// ACCEPTANCE: TRACE-DIGEST-LOCK
#[test]
fn digest_recomputes_from_canonical_bytes() {
    let mut trace = TraceRecorder::new();
    let mut path = Vec::new();
    graph_search_observed(
        &Romania::arad_to_bucharest(),
        &Priority::new(AStar::new(HeuristicFn(sld))),
        &mut path,
        &mut trace,
    )
    .unwrap();
    assert!(!trace.is_empty());

    let bytes = trace.to_canonical_json_bytes().unwrap();
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_SEARCH_TRACE);
    hasher.update(&bytes);
    let expected = format!("sha256:{}", hex::encode(hasher.finalize()));
    assert_eq!(trace.digest().unwrap(), expected);

    // canonical bytes parse back to the same value
    let reparsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(reparsed, trace.to_json_value());
}

//! Search trace recording.
//!
//! [`TraceRecorder`] is a [`SearchObserver`] that keeps every event in order,
//! with states rendered through `Debug`. A finished trace can be rendered as
//! readable text, serialized to canonical JSON, or reduced to a
//! domain-separated SHA-256 digest for determinism checks:
//!
//! ```text
//! digest = "sha256:" || hex(sha256(DOMAIN_SEARCH_TRACE || canonical_json_bytes))
//! ```
//!
//! Canonical JSON here means compact `serde_json` output of a
//! `serde_json::Value` whose object keys are sorted (the default map type).

use std::fmt::{self, Debug};

use sha2::{Digest, Sha256};

use crate::cost::PathCost;
use crate::node::Node;
use crate::observer::{RbfsOutcome, SearchObserver};

/// Domain prefix for trace digests.
pub const DOMAIN_SEARCH_TRACE: &[u8] = b"LODESTAR::SEARCH_TRACE::V1\0";

/// Schema tag embedded in the canonical JSON.
pub const TRACE_SCHEMA_VERSION: &str = "search_trace.v1";

/// One recorded event. States and costs are pre-rendered strings; an
/// infinite cost renders as `"inf"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    Push { state: String, f: String },
    Pop { state: String, f: String },
    Replace { state: String, previous: String, cost: String },
    Discard { state: String, kept: String, discarded: String },
    Expand { state: String },
    Goal { state: String, cost: String },
    RbfsEnter { state: String, f: String, stored: String, bound: String },
    RbfsExit { state: String, outcome: String, bound: String },
}

impl TraceEvent {
    /// Short tag used as the JSON `kind` field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Push { .. } => "push",
            Self::Pop { .. } => "pop",
            Self::Replace { .. } => "replace",
            Self::Discard { .. } => "discard",
            Self::Expand { .. } => "expand",
            Self::Goal { .. } => "goal",
            Self::RbfsEnter { .. } => "rbfs_enter",
            Self::RbfsExit { .. } => "rbfs_exit",
        }
    }

    fn to_json_value(&self) -> serde_json::Value {
        let kind = self.kind();
        match self {
            Self::Push { state, f } | Self::Pop { state, f } => {
                serde_json::json!({ "f": f, "kind": kind, "state": state })
            }
            Self::Replace {
                state,
                previous,
                cost,
            } => serde_json::json!({
                "cost": cost,
                "kind": kind,
                "previous": previous,
                "state": state,
            }),
            Self::Discard {
                state,
                kept,
                discarded,
            } => serde_json::json!({
                "discarded": discarded,
                "kept": kept,
                "kind": kind,
                "state": state,
            }),
            Self::Expand { state } => serde_json::json!({ "kind": kind, "state": state }),
            Self::Goal { state, cost } => {
                serde_json::json!({ "cost": cost, "kind": kind, "state": state })
            }
            Self::RbfsEnter {
                state,
                f,
                stored,
                bound,
            } => serde_json::json!({
                "bound": bound,
                "f": f,
                "kind": kind,
                "state": state,
                "stored": stored,
            }),
            Self::RbfsExit {
                state,
                outcome,
                bound,
            } => serde_json::json!({
                "bound": bound,
                "kind": kind,
                "outcome": outcome,
                "state": state,
            }),
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push { state, f: key } => write!(f, "frontier <= {state} (f={key})"),
            Self::Pop { state, f: key } => write!(f, "{state} <= frontier (f={key})"),
            Self::Replace {
                state,
                previous,
                cost,
            } => write!(f, "{state}: replace {previous} with {cost}."),
            Self::Discard {
                state,
                kept,
                discarded,
            } => write!(f, "{state}: keep {kept} and throw away {discarded}."),
            Self::Expand { state } => write!(f, "expand {state}"),
            Self::Goal { state, cost } => write!(f, "goal {state} (g={cost})"),
            Self::RbfsEnter {
                state,
                f: key,
                stored,
                bound,
            } => write!(f, ">>> rbfs({state}, F={stored}, B={bound}) f={key}"),
            Self::RbfsExit {
                state,
                outcome,
                bound,
            } => write!(f, "<<< rbfs({state}, B={bound}) -> {outcome}"),
        }
    }
}

fn render_cost<C: PathCost>(cost: C) -> String {
    if cost.is_finite() {
        format!("{cost:?}")
    } else {
        "inf".to_string()
    }
}

fn render_state<S: Debug>(state: &S) -> String {
    format!("{state:?}")
}

/// Records every search event in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceRecorder {
    events: Vec<TraceEvent>,
}

impl TraceRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// One line per event.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for event in &self.events {
            out.push_str(&event.to_string());
            out.push('\n');
        }
        out
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "events": self.events.iter().map(TraceEvent::to_json_value).collect::<Vec<_>>(),
            "schema_version": TRACE_SCHEMA_VERSION,
        })
    }

    /// Compact JSON with sorted keys.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the value cannot be written.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_json_value())
    }

    /// `"sha256:<hex>"` over the domain prefix and the canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Same as [`TraceRecorder::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        let bytes = self.to_canonical_json_bytes()?;
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_SEARCH_TRACE);
        hasher.update(&bytes);
        Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
    }
}

impl<S: Debug, A, C: PathCost> SearchObserver<S, A, C> for TraceRecorder {
    fn on_push(&mut self, node: &Node<S, A, C>, f: C) {
        self.events.push(TraceEvent::Push {
            state: render_state(node.state()),
            f: render_cost(f),
        });
    }

    fn on_pop(&mut self, node: &Node<S, A, C>, f: C) {
        self.events.push(TraceEvent::Pop {
            state: render_state(node.state()),
            f: render_cost(f),
        });
    }

    fn on_replace(&mut self, previous: &Node<S, A, C>, node: &Node<S, A, C>) {
        self.events.push(TraceEvent::Replace {
            state: render_state(node.state()),
            previous: render_cost(previous.path_cost()),
            cost: render_cost(node.path_cost()),
        });
    }

    fn on_discard(&mut self, kept: &Node<S, A, C>, discarded: &Node<S, A, C>) {
        self.events.push(TraceEvent::Discard {
            state: render_state(discarded.state()),
            kept: render_cost(kept.path_cost()),
            discarded: render_cost(discarded.path_cost()),
        });
    }

    fn on_expand(&mut self, node: &Node<S, A, C>) {
        self.events.push(TraceEvent::Expand {
            state: render_state(node.state()),
        });
    }

    fn on_goal(&mut self, node: &Node<S, A, C>) {
        self.events.push(TraceEvent::Goal {
            state: render_state(node.state()),
            cost: render_cost(node.path_cost()),
        });
    }

    fn on_rbfs_enter(&mut self, node: &Node<S, A, C>, f: C, stored: C, bound: C) {
        self.events.push(TraceEvent::RbfsEnter {
            state: render_state(node.state()),
            f: render_cost(f),
            stored: render_cost(stored),
            bound: render_cost(bound),
        });
    }

    fn on_rbfs_exit(&mut self, node: &Node<S, A, C>, outcome: RbfsOutcome<C>, bound: C) {
        let outcome = match outcome {
            RbfsOutcome::Goal => "goal".to_string(),
            RbfsOutcome::Cutoff(cost) => format!("cutoff {}", render_cost(cost)),
        };
        self.events.push(TraceEvent::RbfsExit {
            state: render_state(node.state()),
            outcome,
            bound: render_cost(bound),
        });
    }
}

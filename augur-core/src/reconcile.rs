//! Plausibility screening and deterministic resolution of metric candidates.
//!
//! The pure half of reconciliation: screening decides which candidates are
//! worth considering at all, and resolution decides whether a value can be
//! selected without consulting the oracle. Oracle-dependent arbitration lives
//! with the orchestrator.

use crate::types::MetricCandidate;
use augur_types::MetricSpec;

/// Relative tolerance under which two plausible candidates count as agreeing.
pub const AGREEMENT_EPS: f64 = 1e-9;

/// Whether a candidate survives the plausibility screen.
///
/// Implausible means: no value, a non-finite value, or a value outside the
/// metric's sanity bound.
#[must_use]
pub fn is_plausible(spec: &MetricSpec, candidate: &MetricCandidate) -> bool {
    match candidate.value {
        Some(v) => v.is_finite() && v >= spec.min && v <= spec.max,
        None => false,
    }
}

/// The candidates that pass the plausibility screen, provenance retained,
/// input order preserved.
#[must_use]
pub fn filter_plausible<'a>(
    spec: &MetricSpec,
    candidates: &'a [MetricCandidate],
) -> Vec<&'a MetricCandidate> {
    candidates
        .iter()
        .filter(|c| is_plausible(spec, c))
        .collect()
}

/// Outcome of the deterministic resolution step.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    /// Exactly one candidate is plausible; select it verbatim.
    Single(&'a MetricCandidate),
    /// Two or more plausible candidates agree within tolerance; the
    /// highest-priority one is selected and `agreeing` counts them all.
    Agreement {
        /// The selected candidate.
        selected: &'a MetricCandidate,
        /// Number of plausible candidates in agreement.
        agreeing: usize,
    },
    /// Two or more plausible candidates disagree; the oracle must decide.
    Contested,
    /// No candidate is plausible; the oracle must decide.
    NonePlausible,
}

/// Resolve a candidate set deterministically where possible.
///
/// Only `Contested` and `NonePlausible` require an oracle call.
#[must_use]
pub fn resolve<'a>(spec: &MetricSpec, candidates: &'a [MetricCandidate]) -> Resolution<'a> {
    let plausible = filter_plausible(spec, candidates);
    match plausible.len() {
        0 => Resolution::NonePlausible,
        1 => Resolution::Single(plausible[0]),
        n => {
            let first = plausible[0];
            let reference = first.value.unwrap_or_default();
            if plausible[1..]
                .iter()
                .all(|c| values_agree(reference, c.value.unwrap_or_default()))
            {
                Resolution::Agreement {
                    selected: first,
                    agreeing: n,
                }
            } else {
                Resolution::Contested
            }
        }
    }
}

fn values_agree(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= AGREEMENT_EPS * scale
}

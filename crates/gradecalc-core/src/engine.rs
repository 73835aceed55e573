//! Weighted-average engine.
//!
//! `average = Σ(credits × points) / Σ credits`, with credits as the weight.
//! Course rows get their points from a [`PointsResolver`]; semester rows carry
//! their own GPA. A list with no positive total weight has no average.

use serde::Serialize;
use tracing::{debug, trace};

use crate::entry::Entry;
use crate::scale::PointsResolver;

/// Running sums over a sequence of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    /// Σ credits × points.
    pub total_points: f64,
    /// Σ credits.
    pub total_credits: f64,
    /// Number of entries folded in.
    pub entries: usize,
}

impl Totals {
    /// Fold one entry into the sums.
    #[must_use]
    pub fn push<R: PointsResolver + ?Sized>(self, entry: &Entry, resolver: &R) -> Self {
        let credits = entry.credits();
        let points = entry.points(resolver);
        trace!(kind = entry.kind(), credits, points, "aggregating entry");
        Self {
            total_points: self.total_points + credits * points,
            total_credits: self.total_credits + credits,
            entries: self.entries + 1,
        }
    }

    /// The weighted average, or `None` when the total weight is not positive.
    ///
    /// Sums that overflow to a non-finite quotient also yield `None`.
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        if self.total_credits > 0.0 {
            Some(self.total_points / self.total_credits).filter(|v| v.is_finite())
        } else {
            None
        }
    }
}

/// Sum credits and weighted points over `entries`, in order.
pub fn accumulate<'a, I, R>(entries: I, resolver: &R) -> Totals
where
    I: IntoIterator<Item = &'a Entry>,
    R: PointsResolver + ?Sized,
{
    entries
        .into_iter()
        .fold(Totals::default(), |acc, entry| acc.push(entry, resolver))
}

/// Weighted average of `entries`; `None` means "no result".
///
/// No rounding is applied.
pub fn weighted_average<'a, I, R>(entries: I, resolver: &R) -> Option<f64>
where
    I: IntoIterator<Item = &'a Entry>,
    R: PointsResolver + ?Sized,
{
    let totals = accumulate(entries, resolver);
    let average = totals.average();
    debug!(
        entries = totals.entries,
        total_credits = totals.total_credits,
        ?average,
        "weighted average computed"
    );
    average
}

//! Status bucket counts for the dashboard.

use crate::model::{ProjectRecord, Status};
use serde::Serialize;
use tracing::debug;

/// Per-bucket counts over a snapshot.
///
/// `total` includes records with an unknown status, so the four buckets may
/// sum to less than `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub submitted: usize,
    pub confirmed: usize,
}

/// One progress-bar row of the status overview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BucketShare {
    pub status: Status,
    pub count: usize,
    pub percent: f64,
}

/// Count records per named status bucket.
#[must_use]
pub fn aggregate(records: &[ProjectRecord]) -> StatusCounts {
    let mut counts = StatusCounts {
        total: records.len(),
        ..StatusCounts::default()
    };

    for record in records {
        match record.status_bucket() {
            Some(Status::Pending) => counts.pending += 1,
            Some(Status::AdminApproved) => counts.approved += 1,
            Some(Status::DesignSubmitted) => counts.submitted += 1,
            Some(Status::ProjectConfirmed) => counts.confirmed += 1,
            None => {}
        }
    }

    debug!(
        total = counts.total,
        unknown = counts.unknown(),
        "aggregated status counts"
    );
    counts
}

impl StatusCounts {
    /// Count for a single bucket.
    #[must_use]
    pub const fn get(&self, status: Status) -> usize {
        match status {
            Status::Pending => self.pending,
            Status::AdminApproved => self.approved,
            Status::DesignSubmitted => self.submitted,
            Status::ProjectConfirmed => self.confirmed,
        }
    }

    /// Projects still in flight: pending plus admin-approved.
    #[must_use]
    pub const fn ongoing(&self) -> usize {
        self.pending + self.approved
    }

    /// Records whose status matched no bucket.
    #[must_use]
    pub const fn unknown(&self) -> usize {
        self.total
            .saturating_sub(self.pending + self.approved + self.submitted + self.confirmed)
    }

    /// Share of `status` in `[0, 1]`; 0 when there are no records.
    #[must_use]
    pub fn ratio(&self, status: Status) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = self.get(status) as f64;
        #[allow(clippy::cast_precision_loss)]
        let total = self.total as f64;
        count / total
    }

    /// [`ratio`](Self::ratio) scaled to a percentage.
    #[must_use]
    pub fn percent(&self, status: Status) -> f64 {
        self.ratio(status) * 100.0
    }

    /// Bucket rows in dashboard order.
    #[must_use]
    pub fn breakdown(&self) -> Vec<BucketShare> {
        Status::ALL
            .into_iter()
            .map(|status| BucketShare {
                status,
                count: self.get(status),
                percent: self.percent(status),
            })
            .collect()
    }
}

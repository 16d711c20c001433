use serde::Serialize;

use crate::status::RegistrationStatus;

/// Registration counts per status.
///
/// Values are only produced by folding statuses, so
/// `total == confirmed + pending + rejected` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct RegistrationStats {
    #[schema(example = 12)]
    pub total: u64,
    #[schema(example = 7)]
    pub confirmed: u64,
    #[schema(example = 4)]
    pub pending: u64,
    #[schema(example = 1)]
    pub rejected: u64,
}

impl RegistrationStats {
    /// Count one registration in the given status.
    pub fn record(&mut self, status: RegistrationStatus) {
        self.record_many(status, 1);
    }

    /// Count `n` registrations in the given status, e.g. from a grouped query.
    pub fn record_many(&mut self, status: RegistrationStatus, n: u64) {
        self.total += n;
        match status {
            RegistrationStatus::Pending => self.pending += n,
            RegistrationStatus::Confirmed => self.confirmed += n,
            RegistrationStatus::Rejected => self.rejected += n,
        }
    }
}

impl FromIterator<RegistrationStatus> for RegistrationStats {
    fn from_iter<I: IntoIterator<Item = RegistrationStatus>>(iter: I) -> Self {
        let mut stats = Self::default();
        for status in iter {
            stats.record(status);
        }
        stats
    }
}

use crate::error::TripError;
use crate::model::trip::{TripDraft, TripRecord};
use crate::repository::TripRepository;
use crate::validate::{validate, ValidationPolicy};
use anyhow::Result;
use tracing::{info, warn};

pub struct TripService<R: TripRepository> {
    repo: R,
    policy: ValidationPolicy,
}

impl<R: TripRepository> TripService<R> {
    pub fn new(repo: R, policy: ValidationPolicy) -> Self {
        Self { repo, policy }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Validates the draft, stamps it with `owner_id` and appends it.
    /// A rejected draft never reaches the repository.
    pub fn add_trip(&self, owner_id: &str, draft: TripDraft) -> Result<TripRecord, TripError> {
        if let Err(reason) = validate(&draft, &self.policy) {
            warn!(%reason, "trip rejected");
            return Err(reason.into());
        }

        let created = self.repo.create(draft.into_record(owner_id))?;
        info!(id = %created.id, date = %created.date, "trip added");
        Ok(created)
    }

    pub fn list_trips(&self, owner_id: &str) -> Result<Vec<TripRecord>> {
        self.repo.list_by_owner(owner_id)
    }
}

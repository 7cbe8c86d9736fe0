use crate::model::trip::TripRecord;
use anyhow::Result;

pub trait TripRepository {
    fn create(&self, record: TripRecord) -> Result<TripRecord>;
    fn list(&self) -> Result<Vec<TripRecord>>;

    /// Records of one owner, in insertion order.
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<TripRecord>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|r| r.owner_id() == owner_id)
            .collect())
    }
}

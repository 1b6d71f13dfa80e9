use super::{RecordId, Resource};

/// One step applied to the cached record list after a successful request.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheUpdate<R> {
    /// Whole collection fetched from the server
    Replace(Vec<R>),
    /// Record created, appended at the end
    Append(R),
    /// Record with `id` replaced in place by the server's version
    Update { id: RecordId, record: R },
    Remove(RecordId),
}

impl<R: Resource> CacheUpdate<R> {
    pub fn apply(self, records: &mut Vec<R>) {
        match self {
            CacheUpdate::Replace(fresh) => *records = fresh,
            CacheUpdate::Append(record) => records.push(record),
            CacheUpdate::Update { id, record } => {
                // Record gone in the meantime: nothing to replace
                if let Some(slot) = records.iter_mut().find(|r| r.id() == &id) {
                    *slot = record;
                }
            }
            CacheUpdate::Remove(id) => records.retain(|r| r.id() != &id),
        }
    }
}

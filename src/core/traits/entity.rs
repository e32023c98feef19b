/// A persisted record addressed by an integer identity.
///
/// An id of zero marks a transient entity that the backend has not yet stored.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable entity name used in errors and logs
    const NAME: &'static str;

    fn id(&self) -> i32;

    /// Return the same entity carrying a backend-assigned id
    fn with_id(self, id: i32) -> Self;

    fn is_new(&self) -> bool {
        self.id() == 0
    }

    /// Describe the first value the storage schema would reject, if any.
    ///
    /// Backends without their own schema (the in-memory store) consult this
    /// so that oversized values fail at persistence time as they would in SQL.
    fn schema_violation(&self) -> Option<String> {
        None
    }
}

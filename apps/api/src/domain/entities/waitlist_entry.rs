use uuid::Uuid;

/// A recorded interest signal. `id` and `created_at` are assigned by the database.
#[derive(Debug, Clone)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub email: String,
    pub created_at: Option<chrono::NaiveDateTime>,
}

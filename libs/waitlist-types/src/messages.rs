/// Route of the signup endpoint, relative to the API origin.
pub const WAITLIST_PATH: &str = "/api/waitlist";

/// Body message of a successful signup.
pub const ADDED_TO_WAITLIST: &str = "Added to waitlist";

/// Error returned when the payload carries no usable email.
pub const INVALID_EMAIL: &str = "Invalid email";

/// Generic error returned when the entry could not be stored.
pub const SERVER_ERROR: &str = "Server error";

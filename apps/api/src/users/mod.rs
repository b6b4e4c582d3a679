// User and onboarding records. The Google OAuth handshake lives in the
// surrounding auth service; this module owns the rows it reads and writes.

pub mod handlers;
pub mod store;

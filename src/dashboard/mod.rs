//! Headless dashboard client: everything the terminal UI needs to show and
//! mutate an owner's medication schedule. The session carries identity, the
//! client talks to the API, the state applies optimistic updates, and the
//! schedule module does the grouping and statistics math.

pub mod client;
pub mod schedule;
pub mod session;
pub mod state;

pub use client::{AddMedicine, ClientError, MedicineClient};
pub use schedule::{group_by_time, stats, Stats, TimeGroup};
pub use session::{Session, SessionError, TokenStore};
pub use state::{DashboardState, SyncState};

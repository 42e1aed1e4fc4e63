//! Wire models shared between the server and its clients.
//!
//! Each entity follows the same triple: the stored record, a `*Create`
//! payload for POST bodies and a sparse `*Update` payload for PUT bodies.
//! All of them serialize with camelCase keys.

pub mod attendance;
pub mod feedback;
pub mod member;
pub mod payment;
pub mod progress;
pub mod serde_helpers;
pub mod trainer;
pub mod user;
pub mod workout;

pub use attendance::{Attendance, AttendanceMark, AttendanceStats, AttendanceStatus};
pub use feedback::{Feedback, FeedbackCreate};
pub use member::{Member, MemberCreate, MemberUpdate};
pub use payment::{Payment, PaymentCreate, PaymentUpdate};
pub use progress::{ProgressEntry, ProgressEntryCreate, ProgressEntryUpdate};
pub use trainer::{Trainer, TrainerCreate, TrainerUpdate};
pub use user::{IssuedCredentials, Role, User, UserCreate};
pub use workout::{WorkoutPlan, WorkoutPlanCreate, WorkoutPlanUpdate};

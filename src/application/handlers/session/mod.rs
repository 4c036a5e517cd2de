//! Session lifecycle handlers.

mod cancel_session;
mod complete_session;
mod conflicts;
mod queries;
mod reschedule_session;
mod schedule_session;
mod update_logistics;

pub use cancel_session::{CancelSessionCommand, CancelSessionHandler};
pub use complete_session::{CompleteSessionCommand, CompleteSessionHandler};
pub use queries::{
    GetSessionHandler, GetSessionQuery, ListAllSessionsHandler, ListStudentSessionsHandler,
    ListStudentSessionsQuery, ListTutorSessionsHandler, ListTutorSessionsQuery,
};
pub use reschedule_session::{RescheduleSessionCommand, RescheduleSessionHandler};
pub use schedule_session::{ScheduleSessionCommand, ScheduleSessionHandler};
pub use update_logistics::{UpdateLogisticsCommand, UpdateLogisticsHandler};

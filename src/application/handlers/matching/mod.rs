//! Matching handlers.

mod create_request;
mod decide_request;
mod list_requests;

pub use create_request::{CreateMatchingRequestCommand, CreateMatchingRequestHandler};
pub use decide_request::{DecideMatchingRequestCommand, DecideMatchingRequestHandler, MatchDecision};
pub use list_requests::{
    ListStudentRequestsHandler, ListStudentRequestsQuery, ListTutorRequestsHandler,
    ListTutorRequestsQuery,
};

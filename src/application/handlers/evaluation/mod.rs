//! Evaluation ledger handlers.

mod queries;
mod submit_evaluation;

pub use queries::{
    GetEvaluationHandler, GetEvaluationQuery, ListSessionEvaluationsHandler,
    ListSessionEvaluationsQuery, ListStudentEvaluationsHandler, ListStudentEvaluationsQuery,
};
pub use submit_evaluation::{SubmitEvaluationCommand, SubmitEvaluationHandler};

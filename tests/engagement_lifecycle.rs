//! Integration tests for the engagement lifecycle engine.
//!
//! Drives the full matching -> scheduling -> evaluation flow through
//! the application handlers, wired against the in-memory adapters and
//! a pinned clock.

use std::sync::Arc;

use tutorlink::adapters::memory::{
    InMemoryEvaluationRepository, InMemoryMatchingRequestRepository, InMemorySessionRepository,
};
use tutorlink::application::handlers::matching::{
    CreateMatchingRequestCommand, CreateMatchingRequestHandler, DecideMatchingRequestCommand,
    DecideMatchingRequestHandler, MatchDecision,
};
use tutorlink::application::handlers::evaluation::{
    ListSessionEvaluationsHandler, ListSessionEvaluationsQuery, SubmitEvaluationCommand,
    SubmitEvaluationHandler,
};
use tutorlink::application::handlers::session::{
    CancelSessionCommand, CancelSessionHandler, RescheduleSessionCommand,
    RescheduleSessionHandler, ScheduleSessionCommand, ScheduleSessionHandler,
};
use tutorlink::application::locks::KeyedLocks;
use tutorlink::domain::foundation::{
    MatchingStatus, SessionStatus, StudentId, Timestamp, TutorId,
};
use tutorlink::domain::matching::MatchingError;
use tutorlink::domain::session::{SessionError, SessionMode};
use tutorlink::ports::{FixedClock, SessionRepository};

fn ts(s: &str) -> Timestamp {
    Timestamp::parse_rfc3339(s).unwrap()
}

fn student(id: &str) -> StudentId {
    StudentId::new(id).unwrap()
}

fn tutor(id: &str) -> TutorId {
    TutorId::new(id).unwrap()
}

struct Engine {
    sessions: Arc<InMemorySessionRepository>,
    schedule: ScheduleSessionHandler,
    reschedule: RescheduleSessionHandler,
    cancel: CancelSessionHandler,
    submit_evaluation: SubmitEvaluationHandler,
    list_session_evaluations: ListSessionEvaluationsHandler,
    create_request: CreateMatchingRequestHandler,
    decide_request: DecideMatchingRequestHandler,
}

fn engine() -> Engine {
    let sessions = Arc::new(InMemorySessionRepository::new());
    let matching = Arc::new(InMemoryMatchingRequestRepository::new());
    let evaluations = Arc::new(InMemoryEvaluationRepository::new());
    let locks = Arc::new(KeyedLocks::new());
    let clock = Arc::new(FixedClock(ts("2024-03-01T08:00:00Z")));

    Engine {
        sessions: sessions.clone(),
        schedule: ScheduleSessionHandler::new(sessions.clone(), locks.clone()),
        reschedule: RescheduleSessionHandler::new(sessions.clone(), locks.clone()),
        cancel: CancelSessionHandler::new(sessions.clone()),
        submit_evaluation: SubmitEvaluationHandler::new(
            evaluations.clone(),
            sessions,
            clock.clone(),
            locks.clone(),
        ),
        list_session_evaluations: ListSessionEvaluationsHandler::new(evaluations),
        create_request: CreateMatchingRequestHandler::new(matching.clone(), clock),
        decide_request: DecideMatchingRequestHandler::new(matching, locks),
    }
}

fn schedule_cmd(tutor_id: &str, student_id: &str, start: &str, end: &str) -> ScheduleSessionCommand {
    let start = ts(start);
    let end = ts(end);
    ScheduleSessionCommand {
        student_id: student(student_id),
        tutor_id: tutor(tutor_id),
        topic: "calculus".to_string(),
        start_time: start,
        end_time: end,
        duration_minutes: end.minutes_since(&start),
        mode: SessionMode::Online,
        meeting_link: None,
        location: None,
    }
}

// Scenario from the scheduling lifecycle: schedule, reschedule into a
// new window, collide with it, free it by cancellation, retry.
#[tokio::test]
async fn reschedule_then_conflict_then_cancel_frees_the_window() {
    let engine = engine();

    // Schedule A for T1/S1 at [10:00, 11:00).
    let session_a = engine
        .schedule
        .handle(schedule_cmd("T1", "S1", "2024-03-01T10:00:00Z", "2024-03-01T11:00:00Z"))
        .await
        .unwrap();
    assert_eq!(session_a.status(), SessionStatus::Scheduled);

    // Reschedule A to [11:00, 12:00).
    let session_a = engine
        .reschedule
        .handle(RescheduleSessionCommand {
            session_id: *session_a.id(),
            new_start_time: ts("2024-03-01T11:00:00Z"),
            new_end_time: ts("2024-03-01T12:00:00Z"),
        })
        .await
        .unwrap();
    assert_eq!(session_a.status(), SessionStatus::Rescheduled);
    assert_eq!(session_a.window().start(), ts("2024-03-01T11:00:00Z"));

    // B for the same tutor at [11:30, 12:30) overlaps A's new window.
    let b_cmd = schedule_cmd("T1", "S2", "2024-03-01T11:30:00Z", "2024-03-01T12:30:00Z");
    let result = engine.schedule.handle(b_cmd.clone()).await;
    match result {
        Err(SessionError::Conflict {
            conflicting_session,
        }) => assert_eq!(conflicting_session, *session_a.id()),
        other => panic!("expected conflict, got {:?}", other),
    }

    // Cancel A; its window no longer blocks anyone.
    engine
        .cancel
        .handle(CancelSessionCommand {
            session_id: *session_a.id(),
        })
        .await
        .unwrap();

    let session_b = engine.schedule.handle(b_cmd).await.unwrap();
    assert_eq!(session_b.status(), SessionStatus::Scheduled);

    // Tutor invariant: active sessions never overlap pairwise.
    let active = engine
        .sessions
        .find_active_by_tutor(&tutor("T1"))
        .await
        .unwrap();
    for (i, a) in active.iter().enumerate() {
        for b in active.iter().skip(i + 1) {
            assert!(!a.window().overlaps(b.window()));
        }
    }
}

#[tokio::test]
async fn matching_request_is_decided_exactly_once() {
    let engine = engine();

    let request = engine
        .create_request
        .handle(CreateMatchingRequestCommand {
            student_id: student("S1"),
            tutor_id: tutor("T1"),
            subject: "statistics".to_string(),
            preferred_time_slots: vec![ts("2024-03-04T15:00:00Z"), ts("2024-03-05T15:00:00Z")],
        })
        .await
        .unwrap();
    assert_eq!(request.status(), MatchingStatus::Pending);

    let approved = engine
        .decide_request
        .handle(DecideMatchingRequestCommand {
            request_id: *request.id(),
            decision: MatchDecision::Approve,
        })
        .await
        .unwrap();
    assert_eq!(approved.status(), MatchingStatus::Accepted);

    // A second approval is an invalid transition, not a lost update.
    let again = engine
        .decide_request
        .handle(DecideMatchingRequestCommand {
            request_id: *request.id(),
            decision: MatchDecision::Approve,
        })
        .await;
    assert!(matches!(again, Err(MatchingError::AlreadyDecided { .. })));
}

#[tokio::test]
async fn approval_does_not_create_a_session() {
    let engine = engine();

    let request = engine
        .create_request
        .handle(CreateMatchingRequestCommand {
            student_id: student("S1"),
            tutor_id: tutor("T1"),
            subject: "statistics".to_string(),
            preferred_time_slots: Vec::new(),
        })
        .await
        .unwrap();

    engine
        .decide_request
        .handle(DecideMatchingRequestCommand {
            request_id: *request.id(),
            decision: MatchDecision::Approve,
        })
        .await
        .unwrap();

    // Scheduling remains a separate, explicit command.
    assert!(engine.sessions.find_all().await.unwrap().is_empty());

    let session = engine
        .schedule
        .handle(schedule_cmd("T1", "S1", "2024-03-04T15:00:00Z", "2024-03-04T16:00:00Z"))
        .await
        .unwrap();
    assert_eq!(session.tutor_id(), &tutor("T1"));
}

#[tokio::test]
async fn double_submission_keeps_one_evaluation_with_latest_content() {
    let engine = engine();

    let session = engine
        .schedule
        .handle(schedule_cmd("T1", "S1", "2024-03-01T10:00:00Z", "2024-03-01T11:00:00Z"))
        .await
        .unwrap();

    engine
        .submit_evaluation
        .handle(SubmitEvaluationCommand {
            session_id: *session.id(),
            student_id: student("S1"),
            rating_quality: 3,
            satisfaction_level: 4,
            comment: "ok".to_string(),
        })
        .await
        .unwrap();

    engine
        .submit_evaluation
        .handle(SubmitEvaluationCommand {
            session_id: *session.id(),
            student_id: student("S1"),
            rating_quality: 5,
            satisfaction_level: 5,
            comment: "great".to_string(),
        })
        .await
        .unwrap();

    let evaluations = engine
        .list_session_evaluations
        .handle(ListSessionEvaluationsQuery {
            session_id: *session.id(),
        })
        .await
        .unwrap();

    assert_eq!(evaluations.len(), 1);
    assert_eq!(evaluations[0].rating_quality().value(), 5);
    assert_eq!(evaluations[0].satisfaction_level().value(), 5);
    assert_eq!(evaluations[0].comment(), "great");
}

#[tokio::test]
async fn student_side_double_booking_is_rejected_across_tutors() {
    let engine = engine();

    engine
        .schedule
        .handle(schedule_cmd("T1", "S1", "2024-03-01T10:00:00Z", "2024-03-01T11:00:00Z"))
        .await
        .unwrap();

    // S1 is busy at 10:30 even though T2 is free.
    let result = engine
        .schedule
        .handle(schedule_cmd("T2", "S1", "2024-03-01T10:30:00Z", "2024-03-01T11:30:00Z"))
        .await;
    assert!(matches!(result, Err(SessionError::Conflict { .. })));

    // A disjoint window for the same pair is fine.
    let ok = engine
        .schedule
        .handle(schedule_cmd("T2", "S1", "2024-03-01T12:00:00Z", "2024-03-01T13:00:00Z"))
        .await;
    assert!(ok.is_ok());
}

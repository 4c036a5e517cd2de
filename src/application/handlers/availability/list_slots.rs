//! ListTutorSlotsHandler - lists a tutor's published availability.

use std::sync::Arc;

use crate::domain::availability::{AvailabilityError, AvailabilitySlot};
use crate::domain::foundation::TutorId;
use crate::ports::AvailabilityRepository;

/// Query for a tutor's slots.
#[derive(Debug, Clone)]
pub struct ListTutorSlotsQuery {
    pub tutor_id: TutorId,
}

/// Handler for slot listings.
pub struct ListTutorSlotsHandler {
    repository: Arc<dyn AvailabilityRepository>,
}

impl ListTutorSlotsHandler {
    pub fn new(repository: Arc<dyn AvailabilityRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListTutorSlotsQuery,
    ) -> Result<Vec<AvailabilitySlot>, AvailabilityError> {
        Ok(self.repository.find_by_tutor(&query.tutor_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAvailabilityRepository;
    use crate::domain::foundation::{SlotId, TimeRange, Timestamp};

    #[tokio::test]
    async fn lists_only_requested_tutor() {
        let repo = Arc::new(InMemoryAvailabilityRepository::new());
        let window = TimeRange::new(
            Timestamp::parse_rfc3339("2024-03-01T10:00:00Z").unwrap(),
            Timestamp::parse_rfc3339("2024-03-01T12:00:00Z").unwrap(),
        )
        .unwrap();
        for tutor in ["tutor-1", "tutor-2", "tutor-1"] {
            let slot = AvailabilitySlot::new(
                SlotId::new(),
                TutorId::new(tutor).unwrap(),
                window,
                false,
            );
            repo.save(&slot).await.unwrap();
        }

        let handler = ListTutorSlotsHandler::new(repo);
        let listed = handler
            .handle(ListTutorSlotsQuery {
                tutor_id: TutorId::new("tutor-1").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|s| s.tutor_id().as_str() == "tutor-1"));
    }

    #[tokio::test]
    async fn unknown_tutor_lists_empty() {
        let handler = ListTutorSlotsHandler::new(Arc::new(InMemoryAvailabilityRepository::new()));
        let listed = handler
            .handle(ListTutorSlotsQuery {
                tutor_id: TutorId::new("tutor-x").unwrap(),
            })
            .await
            .unwrap();
        assert!(listed.is_empty());
    }
}

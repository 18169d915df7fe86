use crate::entities::DocumentStatus;

const TRANSITIONS: &[(DocumentStatus, &[DocumentStatus])] = &[
    (DocumentStatus::Draft, &[DocumentStatus::InReview]),
    (
        DocumentStatus::InReview,
        &[DocumentStatus::Draft, DocumentStatus::Confirmed],
    ),
    (DocumentStatus::Confirmed, &[DocumentStatus::InReview]),
];

/// Statuses a document may move to from `from`.
pub fn next_statuses(from: DocumentStatus) -> &'static [DocumentStatus] {
    TRANSITIONS
        .iter()
        .find(|(state, _)| *state == from)
        .map(|(_, next)| *next)
        .unwrap_or(&[])
}

pub fn can_transition(from: DocumentStatus, to: DocumentStatus) -> bool {
    next_statuses(from).contains(&to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use DocumentStatus::*;

    #[test]
    fn test_allowed_transitions() {
        assert!(can_transition(Draft, InReview));
        assert!(can_transition(InReview, Draft));
        assert!(can_transition(InReview, Confirmed));
        assert!(can_transition(Confirmed, InReview));
    }

    #[test]
    fn test_forbidden_transitions() {
        assert!(!can_transition(Draft, Confirmed));
        assert!(!can_transition(Confirmed, Draft));
        assert!(!can_transition(Draft, Draft));
        assert!(!can_transition(Confirmed, Confirmed));
    }
}

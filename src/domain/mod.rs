pub mod animation;
pub mod chart;
pub mod complexity;
pub mod errors;
pub mod logging;

/// Domain Events infrastructure
pub mod events {
    use crate::domain::complexity::InputSize;
    use std::fmt::Debug;

    /// Base trait for all domain events
    pub trait DomainEvent: Debug + Clone {
        fn event_type(&self) -> &'static str;
    }

    /// Events emitted over the lifetime of one animation run
    #[derive(Debug, Clone)]
    pub enum AnimationEvent {
        Started,
        PointAppended { n: InputSize },
        Completed { point_count: usize },
        Restarted,
    }

    impl DomainEvent for AnimationEvent {
        fn event_type(&self) -> &'static str {
            match self {
                AnimationEvent::Started => "Started",
                AnimationEvent::PointAppended { .. } => "PointAppended",
                AnimationEvent::Completed { .. } => "Completed",
                AnimationEvent::Restarted => "Restarted",
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn event_types_are_stable() {
            assert_eq!(AnimationEvent::Started.event_type(), "Started");
            assert_eq!(
                AnimationEvent::PointAppended { n: InputSize::from(3) }.event_type(),
                "PointAppended"
            );
            assert_eq!(AnimationEvent::Completed { point_count: 50 }.event_type(), "Completed");
            assert_eq!(AnimationEvent::Restarted.event_type(), "Restarted");
        }
    }
}

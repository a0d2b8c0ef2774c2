//! # Fan-Out Lifetime and Failure Tests
//!
//! The subject holds non-owning handles only; these tests exercise what
//! happens when sink owners release their sinks mid-session, when the same
//! sink subscribes twice, and when a sink fails during delivery.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bulk_bus::Subscribe;
    use bulk_handler::{BulkHandler, HandlerError};
    use bulk_sinks::{FileSink, ManualClock};

    use crate::support::{FailingSink, RecordingSink};

    #[test]
    fn dropped_sink_skipped_at_next_flush() {
        let mut handler = BulkHandler::new();
        {
            let transient = RecordingSink::new();
            transient.subscribe(handler.subject_mut());
        }
        let survivor = RecordingSink::new();
        survivor.subscribe(handler.subject_mut());

        handler.set_size(1).unwrap();
        handler.add_command("cmd1").unwrap();
        handler.stop().unwrap();

        assert_eq!(survivor.seen(), vec!["bulk: cmd1"]);
        assert_eq!(handler.subject_mut().sink_count(), 1);
    }

    #[test]
    fn dropped_file_sink_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let clock = Arc::new(ManualClock::at(2_000));
        let mut handler = BulkHandler::new();
        {
            let file = Arc::new(FileSink::with_dir(clock.clone(), 1, dir.path()));
            file.subscribe(handler.subject_mut());
        }
        let console = RecordingSink::new();
        console.subscribe(handler.subject_mut());

        handler.set_size(1).unwrap();
        handler.add_command("cmd1").unwrap();

        assert_eq!(console.seen(), vec!["bulk: cmd1"]);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn sink_dropped_between_flushes_receives_only_earlier_bulks() {
        let mut handler = BulkHandler::new();
        let stable = RecordingSink::new();
        stable.subscribe(handler.subject_mut());

        let transient = RecordingSink::new();
        transient.subscribe(handler.subject_mut());

        handler.set_size(1).unwrap();
        handler.add_command("first").unwrap();
        assert_eq!(transient.seen(), vec!["bulk: first"]);

        drop(transient);
        handler.add_command("second").unwrap();

        assert_eq!(stable.seen(), vec!["bulk: first", "bulk: second"]);
    }

    #[test]
    fn duplicate_subscription_delivers_each_bulk_twice() {
        let mut handler = BulkHandler::new();
        let sink = RecordingSink::new();
        sink.subscribe(handler.subject_mut());
        sink.subscribe(handler.subject_mut());

        handler.set_size(1).unwrap();
        handler.add_command("cmd1").unwrap();

        assert_eq!(sink.seen(), vec!["bulk: cmd1", "bulk: cmd1"]);
    }

    #[test]
    fn failing_sink_propagates_to_add_command() {
        let mut handler = BulkHandler::new();
        let failing = Arc::new(FailingSink);
        let after = RecordingSink::new();
        failing.subscribe(handler.subject_mut());
        after.subscribe(handler.subject_mut());

        handler.set_size(1).unwrap();
        let err = handler.add_command("cmd1").unwrap_err();

        assert!(matches!(err, HandlerError::Delivery(_)));
        // Sinks after the failing one were skipped for that bulk
        assert!(after.seen().is_empty());
    }

    #[test]
    fn failing_sink_propagates_to_stop() {
        let mut handler = BulkHandler::new();
        let failing = Arc::new(FailingSink);
        failing.subscribe(handler.subject_mut());

        handler.set_size(5).unwrap();
        handler.add_command("cmd1").unwrap();
        let err = handler.stop().unwrap_err();

        assert!(matches!(err, HandlerError::Delivery(_)));
    }

    #[test]
    fn subscription_after_first_flush_sees_later_bulks_only() {
        let mut handler = BulkHandler::new();
        let early = RecordingSink::new();
        early.subscribe(handler.subject_mut());
        handler.set_size(1).unwrap();

        handler.add_command("first").unwrap();

        let late = RecordingSink::new();
        late.subscribe(handler.subject_mut());
        handler.add_command("second").unwrap();

        assert_eq!(early.seen(), vec!["bulk: first", "bulk: second"]);
        assert_eq!(late.seen(), vec!["bulk: second"]);
    }
}

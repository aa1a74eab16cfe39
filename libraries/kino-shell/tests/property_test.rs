//! Property-based tests for the update coordinator
//!
//! For any interleaving of tab switches and update requests issued from a
//! single context, every request runs exactly one pipeline against the tab
//! current at request time, and the guard always ends released.

use std::sync::Arc;

use parking_lot::Mutex;
use proptest::prelude::*;

use kino_shell::{TabId, TabRenderer, TabUpdateCoordinator};

type EventLog = Arc<Mutex<Vec<String>>>;

struct RecordingRenderer {
    log: EventLog,
}

impl TabRenderer for RecordingRenderer {
    fn hide_all(&mut self) {}

    fn show_tab(&mut self, _tab: TabId) {}

    fn refresh(&mut self, tab: TabId, action: &str) {
        self.log.lock().push(format!("refresh({tab},{action})"));
    }

    fn repaint(&mut self) {}
}

#[derive(Debug, Clone)]
enum Op {
    Switch(TabId),
    Update(String),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Switch(TabId::TabA)),
        Just(Op::Switch(TabId::TabB)),
        prop_oneof![
            Just("default".to_string()),
            Just("data-refresh".to_string()),
            Just("list-update".to_string()),
            "[a-z]{1,8}",
        ]
        .prop_map(Op::Update),
    ]
}

proptest! {
    #[test]
    fn every_sequential_request_runs_one_pipeline(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let log: EventLog = Arc::default();
        let mut coordinator = TabUpdateCoordinator::new(Box::new(RecordingRenderer {
            log: Arc::clone(&log),
        }));

        let mut expected = Vec::new();
        let mut current = TabId::TabA;
        for op in &ops {
            match op {
                Op::Switch(tab) => {
                    coordinator.switch_tab(*tab);
                    current = *tab;
                }
                Op::Update(action) => {
                    coordinator.request_update(action);
                    expected.push(format!("refresh({current},{action})"));
                }
            }
            // The guard is never left set between operations.
            prop_assert!(!coordinator.is_updating());
        }

        prop_assert_eq!(&*log.lock(), &expected);
    }
}

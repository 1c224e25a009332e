use crate::algorithms::dominance::dominates;
use crate::models::{ObjectiveVector, SolutionSet};
use crate::reports::NamedSolutionSet;
use crate::utils::{Float, InfoLogger};
use std::sync::{Arc, Mutex};

pub fn create_vector(values: [Float; 4]) -> ObjectiveVector {
    ObjectiveVector::new(values)
}

pub fn create_solutions(values: &[[Float; 4]]) -> SolutionSet {
    values.iter().map(|values| ObjectiveVector::new(*values)).collect()
}

pub fn create_named_set(name: &str, values: &[[Float; 4]]) -> NamedSolutionSet {
    NamedSolutionSet::new(name, create_solutions(values))
}

/// Returns a logger which collects messages together with access to them.
pub fn create_test_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };

    (logger, messages)
}

pub fn has_message(messages: &Arc<Mutex<Vec<String>>>, pattern: &str) -> bool {
    messages.lock().unwrap().iter().any(|msg| msg.contains(pattern))
}

/// Returns true if no member of `solutions` dominates another one.
pub fn is_non_dominated_set<T>(solutions: &[T]) -> bool
where
    T: AsRef<[Float]>,
{
    solutions.iter().enumerate().all(|(p_idx, p)| {
        solutions.iter().enumerate().filter(|(q_idx, _)| *q_idx != p_idx).all(|(_, q)| !dominates(p, q))
    })
}

/// Time-in-state samples for one workflow state, in observation order.
#[derive(Debug, Clone, PartialEq)]
pub struct StateTimes {
    pub state: String,
    pub times: Vec<f32>,
}

/// Time-in-state samples grouped per workflow state. States keep the order in
/// which they first appeared in the historical data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowTimes {
    states: Vec<StateTimes>,
}

impl WorkflowTimes {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    pub fn push(&mut self, state: &str, time_spent: f32) {
        if let Some(entry) = self.states.iter_mut().find(|entry| entry.state == state) {
            entry.times.push(time_spent);
        } else {
            self.states.push(StateTimes {
                state: state.to_string(),
                times: vec![time_spent],
            });
        }
    }

    pub fn states(&self) -> &[StateTimes] {
        &self.states
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Sum over every observation of every state.
    pub fn total_time(&self) -> f32 {
        self.states
            .iter()
            .map(|entry| entry.times.iter().sum::<f32>())
            .sum()
    }
}

use serde::Deserialize;

/// Sprint status document shared by the velocity and burndown commands.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusFile {
    #[serde(default = "default_project")]
    pub project: String,
    pub current_sprint: Option<u32>,
    #[serde(default)]
    pub velocity_history: Vec<VelocityEntry>,
    #[serde(default)]
    pub sprints: Vec<Sprint>,
}

fn default_project() -> String {
    "Unknown Project".to_string()
}

impl StatusFile {
    pub fn sprint(&self, number: u32) -> Option<&Sprint> {
        self.sprints
            .iter()
            .find(|sprint| sprint.number == Some(number))
    }

    pub fn current(&self) -> Option<&Sprint> {
        self.current_sprint.and_then(|number| self.sprint(number))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VelocityEntry {
    pub sprint: Option<u32>,
    #[serde(default)]
    pub planned: u32,
    #[serde(default)]
    pub completed: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprint {
    pub number: Option<u32>,
    pub sprint_goal: Option<String>,
    pub capacity: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
    pub metrics: Option<SprintMetrics>,
    #[serde(default)]
    pub burndown: Vec<Snapshot>,
}

impl Sprint {
    pub fn goal(&self) -> &str {
        self.sprint_goal.as_deref().unwrap_or("N/A")
    }

    pub fn completed_points(&self) -> f64 {
        self.metrics
            .as_ref()
            .map(|metrics| metrics.completed_points)
            .unwrap_or(0.0)
    }

    /// Capacity, or the metrics total when capacity is absent or zero.
    pub fn total_points(&self) -> f64 {
        match self.capacity {
            Some(capacity) if capacity != 0.0 => capacity,
            _ => self
                .metrics
                .as_ref()
                .map(|metrics| metrics.total_points)
                .unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SprintMetrics {
    #[serde(default)]
    pub completed_points: f64,
    #[serde(default)]
    pub total_points: f64,
}

/// Daily burndown entry as recorded in the status file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    pub date: Option<String>,
    #[serde(default)]
    pub remaining_points: f64,
    #[serde(default)]
    pub completed_points: f64,
}

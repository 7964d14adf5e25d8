use serde::Deserialize;

/// Parameters for listing tasks of a single owner.
#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct TasksListParams {
    /// Id of the chat user whose tasks are listed.
    pub owner: i64,
}

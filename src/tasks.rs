mod api_ext;
mod database_ext;
mod task;
mod task_create_params;
mod task_postpone_params;
mod task_status;
mod task_locks;
mod task_store;
mod tasks_list_params;

pub use self::{
    task::Task, task_create_params::TaskCreateParams, task_locks::TaskLocks,
    task_postpone_params::TaskPostponeParams, task_status::TaskStatus, task_store::TaskStore,
    tasks_list_params::TasksListParams,
};

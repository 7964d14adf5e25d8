pub mod status_get;
pub mod tasks_complete;
pub mod tasks_create;
pub mod tasks_get;
pub mod tasks_list;
pub mod tasks_nearest;
pub mod tasks_postpone;

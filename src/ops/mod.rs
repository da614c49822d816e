pub mod line_buffer;
pub mod row_editor;
pub mod task_ops;

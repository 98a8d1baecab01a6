pub mod friend_row;
pub mod persona_status;
pub mod timestamp_formatter;

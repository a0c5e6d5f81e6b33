pub mod choice;
pub mod create_room;
pub mod home;
pub mod join_room;
pub mod not_found;

pub mod alarms_controller;
pub mod home_controller;

//! BROFESSOR: кампусный чат-ассистент с локальным режимом на случай,
//! когда сервер недоступен.

pub mod ai;
pub mod config;
pub mod core;
pub mod logger;
pub mod services;
pub mod ui;

pub mod calculation_service;
pub mod profit_model;

pub mod profit_controller;

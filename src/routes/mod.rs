pub mod profit_routes;

pub mod marker_routes;
pub mod route_routes;
pub mod briefing_routes;

pub mod chart_service;
pub mod market_data_service;
pub mod ping_service;
pub mod report_service;
pub mod validation_service;

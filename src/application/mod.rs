// Application layer - Chart pipelines and refresh scheduling
pub mod chart_producers;
pub mod dashboard_service;
pub mod error;
pub mod figure_assembler;
pub mod figure_board;
pub mod refresh_controller;
pub mod security_repository;
pub mod series_builder;

//! Business logic services

pub mod report_service;

pub use report_service::ReportService;

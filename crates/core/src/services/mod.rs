pub mod conversion_service;
pub mod extrema_service;
pub mod report_store;
pub mod resample_service;
